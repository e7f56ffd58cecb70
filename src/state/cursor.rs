// List cursor helpers shared by the mods list and the log columns.

use ratatui::widgets::ListState;

/// Move the highlight down one row, stopping at the last row.
pub fn step_down(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => len - 1,
        None => 0,
    };
    state.select(Some(i));
}

/// Move the highlight up one row, stopping at the first row.
pub fn step_up(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) => i.saturating_sub(1).min(len - 1),
        None => 0,
    };
    state.select(Some(i));
}

/// Keep the highlight inside a list that may have shrunk or grown.
pub fn clamp(state: &mut ListState, len: usize) {
    let i = match (state.selected(), len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => Some(0),
    };
    state.select(i);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stay_in_bounds() {
        let mut state = ListState::default();

        step_up(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
        step_up(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        step_down(&mut state, 3);
        step_down(&mut state, 3);
        step_down(&mut state, 3);
        assert_eq!(state.selected(), Some(2));

        step_down(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp() {
        let mut state = ListState::default();
        clamp(&mut state, 2);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(5));
        clamp(&mut state, 2);
        assert_eq!(state.selected(), Some(1));

        clamp(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
