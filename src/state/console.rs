// Combined debug console state.
// Owns the tab selection and the three panels and routes fetch completions.

use crate::fetch::{Completion, FetchRequest};

use super::logs::LogBrowser;
use super::mods::ModsPanel;
use super::search::SearchPanel;
use super::view::{Tab, ViewState};

/// All state behind the debug console screen.
#[derive(Debug, Default)]
pub struct DebugConsole {
    pub view: ViewState,
    pub mods: ModsPanel,
    pub search: SearchPanel,
    pub logs: LogBrowser,
}

impl DebugConsole {
    /// Create the console along with the fetches it needs on startup.
    pub fn new() -> (Self, Vec<FetchRequest>) {
        let console = Self::default();
        let initial = vec![
            console.mods.refresh_mods(false),
            console.logs.refresh_log_inventory(),
        ];
        (console, initial)
    }

    /// Select a log area and switch to the logs tab.
    pub fn select_area(&mut self, area: &str) -> bool {
        if !self.logs.select_area(area) {
            return false;
        }
        self.view.set_tab(Tab::Logs);
        true
    }

    /// Select a log file and switch to the logs tab.
    pub fn select_file(&mut self, file: &str) {
        self.logs.select_file(file);
        self.view.set_tab(Tab::Logs);
    }

    /// Apply a finished fetch to the panel that asked for it.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Mods(outcome) => self.mods.apply_mods(outcome),
            Completion::CodeSearch(outcome) => self.search.apply_search(outcome),
            Completion::LogInventory(outcome) => self.logs.apply_inventory(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LogInventory;
    use crate::error::ConsoleError;
    use serde_json::json;

    fn inventory(value: serde_json::Value) -> LogInventory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_startup_fetches() {
        let (console, initial) = DebugConsole::new();
        assert_eq!(
            initial,
            vec![FetchRequest::Mods { reload: false }, FetchRequest::LogInventory]
        );
        assert_eq!(console.view.current_tab(), Tab::Code);
        assert!(console.mods.modules().is_empty());
        assert!(console.logs.areas().is_empty());
    }

    #[test]
    fn test_select_area_switches_to_logs() {
        let (mut console, _) = DebugConsole::new();
        console.apply(Completion::LogInventory(Ok(inventory(
            json!({"A": ["x", "y"]}),
        ))));

        assert!(console.select_area("A"));

        assert_eq!(console.view.current_tab(), Tab::Logs);
        assert_eq!(console.logs.selection().file.as_deref(), Some("y"));
        assert!(console.logs.entries().is_empty());
    }

    #[test]
    fn test_unknown_area_keeps_tab() {
        let (mut console, _) = DebugConsole::new();
        console.view.set_tab(Tab::Mods);

        assert!(!console.select_area("A"));
        assert_eq!(console.view.current_tab(), Tab::Mods);
    }

    #[test]
    fn test_select_file_switches_to_logs() {
        let (mut console, _) = DebugConsole::new();
        console.apply(Completion::LogInventory(Ok(inventory(
            json!({"A": ["x", "y"]}),
        ))));
        console.select_area("A");
        console.view.set_tab(Tab::Code);

        console.select_file("x");

        assert_eq!(console.view.current_tab(), Tab::Logs);
        assert_eq!(console.logs.selection().file.as_deref(), Some("x"));
    }

    #[test]
    fn test_overlapping_mods_refreshes_apply_in_arrival_order() {
        let (mut console, _) = DebugConsole::new();
        let first = console.mods.refresh_mods(false);
        let second = console.mods.refresh_mods(true);
        assert_ne!(first, second);

        // The second request's response lands first, the first one's last.
        console.apply(Completion::Mods(Ok(vec![json!("reloaded")])));
        console.apply(Completion::Mods(Ok(vec![json!("stale")])));

        assert_eq!(console.mods.modules(), [json!("stale")].as_slice());
    }

    #[test]
    fn test_overlapping_searches_apply_in_arrival_order() {
        let (mut console, _) = DebugConsole::new();
        console.search.push_char('a');
        console.search.submit_search();
        console.search.push_char('b');
        console.search.submit_search();
        assert_eq!(console.search.last_query(), "b");

        console.apply(Completion::CodeSearch(Ok(serde_json::from_value(
            json!(["b", "code for b"]),
        )
        .unwrap())));
        console.apply(Completion::CodeSearch(Err(ConsoleError::Other(
            "late failure for a".to_string(),
        ))));

        assert_eq!(console.search.result().text(), "");
    }

    #[test]
    fn test_completions_leave_other_panels_alone() {
        let (mut console, _) = DebugConsole::new();
        console.apply(Completion::LogInventory(Ok(inventory(
            json!({"A": ["x", "y"]}),
        ))));
        console.select_area("A");
        let selection = console.logs.selection().clone();

        console.apply(Completion::Mods(Ok(vec![json!("m")])));
        console.apply(Completion::CodeSearch(Err(ConsoleError::Other(
            "down".to_string(),
        ))));
        console.apply(Completion::Mods(Err(ConsoleError::Other("down".to_string()))));

        assert_eq!(console.logs.selection(), &selection);
        assert_eq!(console.view.current_tab(), Tab::Logs);
    }
}
