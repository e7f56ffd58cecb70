// Tab selection state.

/// Panel shown in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Code,
    Mods,
    Logs,
}

impl Tab {
    /// All tabs, in tab bar order.
    pub const ALL: [Tab; 3] = [Tab::Code, Tab::Mods, Tab::Logs];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Code => "Code",
            Tab::Mods => "Mods",
            Tab::Logs => "Logs",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Code => Tab::Mods,
            Tab::Mods => Tab::Logs,
            Tab::Logs => Tab::Code,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Code => Tab::Logs,
            Tab::Mods => Tab::Code,
            Tab::Logs => Tab::Mods,
        }
    }
}

/// Which tab is active. Exactly one is active at any time.
#[derive(Debug, Default)]
pub struct ViewState {
    tab: Tab,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.tab == tab
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_code() {
        let view = ViewState::new();
        assert_eq!(view.current_tab(), Tab::Code);
        assert!(view.is_active(Tab::Code));
    }

    #[test]
    fn test_last_set_tab_wins() {
        let mut view = ViewState::new();
        let sequence = [Tab::Logs, Tab::Mods, Tab::Mods, Tab::Code, Tab::Logs];

        for tab in sequence {
            view.set_tab(tab);
            assert_eq!(view.current_tab(), tab);

            let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| view.is_active(*t)).collect();
            assert_eq!(active, vec![tab]);
        }
    }

    #[test]
    fn test_tab_cycling() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(Tab::Logs.next(), Tab::Code);
        assert_eq!(Tab::Code.prev(), Tab::Logs);
    }
}
