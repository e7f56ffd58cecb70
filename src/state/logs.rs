// Logs tab state.
// Holds the log area inventory, the selected area and file, and reconciles
// the selection whenever a new inventory arrives.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

use crate::api::LogInventory;
use crate::fetch::{FetchOutcome, FetchRequest};

use super::cursor;

/// Selected log area and file. `None` means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSelection {
    pub area: Option<String>,
    pub file: Option<String>,
}

/// Which column of the logs tab has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogsFocus {
    #[default]
    Areas,
    Files,
}

/// Highlighted rows in the area and file columns.
///
/// Moving the cursor never changes the selection; only `select_area` and
/// `select_file` do.
#[derive(Debug, Default)]
pub struct LogsCursor {
    pub focus: LogsFocus,
    pub areas: ListState,
    pub files: ListState,
}

/// Log area and file browser.
#[derive(Debug, Default)]
pub struct LogBrowser {
    inventory: LogInventory,
    selection: LogSelection,
    entries: Vec<String>,
    last_refreshed: Option<DateTime<Utc>>,
    pub cursor: LogsCursor,
}

impl LogBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fresh log inventory.
    pub fn refresh_log_inventory(&self) -> FetchRequest {
        FetchRequest::LogInventory
    }

    /// Apply a finished inventory fetch.
    ///
    /// On success the inventory is replaced and stale selections are dropped.
    /// Nothing is ever selected in their place. Failures keep everything.
    pub fn apply_inventory(&mut self, outcome: FetchOutcome<LogInventory>) {
        match outcome {
            Ok(inventory) => {
                tracing::debug!(areas = inventory.len(), "log inventory refreshed");
                let highlighted_area = self.highlighted_area().map(str::to_string);
                let highlighted_file = self.highlighted_file().map(str::to_string);

                self.inventory = inventory;
                self.last_refreshed = Some(Utc::now());
                self.reconcile();
                self.seek_cursor(highlighted_area.as_deref(), highlighted_file.as_deref());
            }
            Err(e) => {
                tracing::warn!(error = %e, "log inventory fetch failed, keeping previous inventory");
            }
        }
    }

    fn reconcile(&mut self) {
        // The file check runs against the area as reconciled here.
        let stale_area = self
            .selection
            .area
            .as_deref()
            .is_some_and(|area| !self.has_area(area));
        if stale_area {
            tracing::debug!(area = ?self.selection.area, "selected log area is gone");
            self.selection.area = None;
        }

        let stale_file = self
            .selection
            .file
            .as_deref()
            .is_some_and(|file| !self.has_file(file));
        if stale_file {
            tracing::debug!(file = ?self.selection.file, "selected log file is gone");
            self.selection.file = None;
        }

        if stale_area || stale_file {
            self.show_selected_log();
        }
    }

    /// Select a log area and its most recent file (the last one listed).
    ///
    /// An area with no files is selected with no file. Returns false, and
    /// changes nothing, if the area is not in the inventory.
    pub fn select_area(&mut self, area: &str) -> bool {
        let Some(files) = self.inventory.get(area) else {
            tracing::warn!(area, "ignoring selection of unknown log area");
            return false;
        };

        self.selection = LogSelection {
            area: Some(area.to_string()),
            file: files.last().cloned(),
        };
        tracing::debug!(area, file = ?self.selection.file, "log area selected");

        self.cursor.files.select(files.len().checked_sub(1));
        self.show_selected_log();
        true
    }

    /// Select a log file. The caller guarantees it belongs to the selected
    /// area.
    pub fn select_file(&mut self, file: &str) {
        self.selection.file = Some(file.to_string());
        tracing::debug!(file, "log file selected");
        self.show_selected_log();
    }

    /// Refresh the displayed entries for the current selection.
    ///
    /// Entries are not retrieved yet, so this only clears them.
    pub fn show_selected_log(&mut self) {
        self.entries.clear();
        if !self.is_selection_valid() {
            return;
        }
        if let (Some(area), Some(file)) = (&self.selection.area, &self.selection.file) {
            tracing::debug!(area, file, "log entry retrieval is not available");
        }
    }

    pub fn has_area(&self, area: &str) -> bool {
        self.inventory.contains_key(area)
    }

    /// Whether `file` belongs to the selected area. Always false when no area
    /// is selected.
    pub fn has_file(&self, file: &str) -> bool {
        self.selection
            .area
            .as_deref()
            .and_then(|area| self.inventory.get(area))
            .is_some_and(|files| files.iter().any(|f| f == file))
    }

    fn is_selection_valid(&self) -> bool {
        let area_ok = self
            .selection
            .area
            .as_deref()
            .is_some_and(|area| self.has_area(area));
        area_ok
            && self
                .selection
                .file
                .as_deref()
                .is_some_and(|file| self.has_file(file))
    }

    /// Log area names, in inventory order.
    pub fn areas(&self) -> Vec<&str> {
        self.inventory.keys().map(String::as_str).collect()
    }

    /// Files of the selected area; empty when no area is selected.
    pub fn files(&self) -> &[String] {
        self.selection
            .area
            .as_deref()
            .and_then(|area| self.inventory.get(area))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn selection(&self) -> &LogSelection {
        &self.selection
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last_refreshed(&self) -> Option<&DateTime<Utc>> {
        self.last_refreshed.as_ref()
    }

    /// Area name under the cursor.
    pub fn highlighted_area(&self) -> Option<&str> {
        let index = self.cursor.areas.selected()?;
        self.inventory.keys().nth(index).map(String::as_str)
    }

    /// File name under the cursor.
    pub fn highlighted_file(&self) -> Option<&str> {
        let index = self.cursor.files.selected()?;
        self.files().get(index).map(String::as_str)
    }

    pub fn cursor_down(&mut self) {
        match self.cursor.focus {
            LogsFocus::Areas => cursor::step_down(&mut self.cursor.areas, self.inventory.len()),
            LogsFocus::Files => {
                let len = self.files().len();
                cursor::step_down(&mut self.cursor.files, len);
            }
        }
    }

    pub fn cursor_up(&mut self) {
        match self.cursor.focus {
            LogsFocus::Areas => cursor::step_up(&mut self.cursor.areas, self.inventory.len()),
            LogsFocus::Files => {
                let len = self.files().len();
                cursor::step_up(&mut self.cursor.files, len);
            }
        }
    }

    pub fn focus(&mut self, focus: LogsFocus) {
        self.cursor.focus = focus;
    }

    /// Put the cursor back on the rows it highlighted before a refresh,
    /// by name, falling back to the selection and then to a clamped index.
    fn seek_cursor(&mut self, area: Option<&str>, file: Option<&str>) {
        let area_index = area
            .into_iter()
            .chain(self.selection.area.as_deref())
            .find_map(|name| self.inventory.keys().position(|a| a == name));
        match area_index {
            Some(i) => self.cursor.areas.select(Some(i)),
            None => cursor::clamp(&mut self.cursor.areas, self.inventory.len()),
        }

        let files = self.files();
        let file_index = file
            .into_iter()
            .chain(self.selection.file.as_deref())
            .find_map(|name| files.iter().position(|f| f == name));
        let files_len = files.len();
        match file_index {
            Some(i) => self.cursor.files.select(Some(i)),
            None => cursor::clamp(&mut self.cursor.files, files_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;

    fn inventory(areas: &[(&str, &[&str])]) -> LogInventory {
        areas
            .iter()
            .map(|(area, files)| {
                (
                    area.to_string(),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    fn browser_with(areas: &[(&str, &[&str])]) -> LogBrowser {
        let mut browser = LogBrowser::new();
        browser.apply_inventory(Ok(inventory(areas)));
        browser
    }

    #[test]
    fn test_refresh_request() {
        assert_eq!(
            LogBrowser::new().refresh_log_inventory(),
            FetchRequest::LogInventory
        );
    }

    #[test]
    fn test_select_area_picks_last_file() {
        let mut browser = browser_with(&[("A", &["x", "y"])]);

        assert!(browser.select_area("A"));

        assert_eq!(browser.selection().area.as_deref(), Some("A"));
        assert_eq!(browser.selection().file.as_deref(), Some("y"));
        assert!(browser.entries().is_empty());
        assert_eq!(browser.cursor.files.selected(), Some(1));
    }

    #[test]
    fn test_select_area_with_no_files() {
        let mut browser = browser_with(&[("A", &["x"]), ("empty", &[])]);
        browser.select_area("A");

        assert!(browser.select_area("empty"));

        assert_eq!(browser.selection().area.as_deref(), Some("empty"));
        assert_eq!(browser.selection().file, None);
        assert!(browser.files().is_empty());
        assert_eq!(browser.cursor.files.selected(), None);
    }

    #[test]
    fn test_select_unknown_area_is_noop() {
        let mut browser = browser_with(&[("A", &["x", "y"])]);
        browser.select_area("A");

        assert!(!browser.select_area("nope"));

        assert_eq!(browser.selection().area.as_deref(), Some("A"));
        assert_eq!(browser.selection().file.as_deref(), Some("y"));
    }

    #[test]
    fn test_select_file_does_not_cross_check() {
        let mut browser = browser_with(&[("A", &["x", "y"]), ("B", &["z"])]);
        browser.select_area("A");

        browser.select_file("x");
        assert_eq!(browser.selection().file.as_deref(), Some("x"));

        browser.select_file("z");
        assert_eq!(browser.selection().file.as_deref(), Some("z"));
        assert!(!browser.has_file("z"));
    }

    #[test]
    fn test_reconcile_drops_missing_area_and_file() {
        let mut browser = browser_with(&[("C", &["c1"])]);
        browser.select_area("C");

        browser.apply_inventory(Ok(inventory(&[("A", &["x", "y"]), ("B", &["z"])])));

        assert_eq!(browser.selection(), &LogSelection::default());
    }

    #[test]
    fn test_reconcile_drops_only_missing_file() {
        let mut browser = browser_with(&[("A", &["x", "y"])]);
        browser.select_area("A");

        browser.apply_inventory(Ok(inventory(&[("A", &["x"])])));

        assert_eq!(browser.selection().area.as_deref(), Some("A"));
        assert_eq!(browser.selection().file, None);
    }

    #[test]
    fn test_reconcile_never_auto_selects() {
        let mut browser = LogBrowser::new();
        browser.apply_inventory(Ok(inventory(&[("A", &["x"])])));
        assert_eq!(browser.selection(), &LogSelection::default());

        let mut browser = browser_with(&[("A", &["x", "y"])]);
        browser.select_area("A");
        browser.apply_inventory(Ok(inventory(&[("A", &["w", "y", "z"])])));
        assert_eq!(browser.selection().file.as_deref(), Some("y"));
    }

    #[test]
    fn test_failed_fetch_keeps_inventory_and_selection() {
        let mut browser = browser_with(&[("A", &["x", "y"])]);
        browser.select_area("A");

        browser.apply_inventory(Err(ConsoleError::Other("boom".to_string())));

        assert_eq!(browser.areas(), vec!["A"]);
        assert_eq!(browser.selection().area.as_deref(), Some("A"));
        assert_eq!(browser.selection().file.as_deref(), Some("y"));
    }

    #[test]
    fn test_has_file_requires_selected_area() {
        let browser = browser_with(&[("A", &["x", "y"])]);
        assert!(browser.has_area("A"));
        assert!(!browser.has_area("B"));
        assert!(!browser.has_file("x"));
        assert!(browser.files().is_empty());
    }

    #[test]
    fn test_cursor_moves_without_selecting() {
        let mut browser = browser_with(&[("A", &["x"]), ("B", &["y", "z"])]);
        assert_eq!(browser.highlighted_area(), Some("A"));

        browser.cursor_down();
        assert_eq!(browser.highlighted_area(), Some("B"));
        assert_eq!(browser.selection(), &LogSelection::default());

        browser.select_area("B");
        browser.focus(LogsFocus::Files);
        assert_eq!(browser.highlighted_file(), Some("z"));
        browser.cursor_up();
        assert_eq!(browser.highlighted_file(), Some("y"));
        assert_eq!(browser.selection().file.as_deref(), Some("z"));
    }

    #[test]
    fn test_reconcile_clears_entries() {
        let mut browser = browser_with(&[("A", &["x", "y"])]);
        browser.select_area("A");
        browser.entries = vec!["stale line".to_string()];

        browser.apply_inventory(Ok(inventory(&[("A", &["x"])])));

        assert_eq!(browser.selection().file, None);
        assert!(browser.entries().is_empty());
    }

    #[test]
    fn test_cursor_follows_names_across_refresh() {
        let mut browser = browser_with(&[("B", &["b1", "b2"]), ("C", &["c1"])]);
        browser.cursor_down();
        assert_eq!(browser.highlighted_area(), Some("C"));

        browser.apply_inventory(Ok(inventory(&[("A", &["a1"]), ("B", &["b1"]), ("C", &["c1"])])));
        assert_eq!(browser.highlighted_area(), Some("C"));

        browser.select_area("B");
        browser.focus(LogsFocus::Files);
        assert_eq!(browser.highlighted_file(), Some("b1"));

        browser.apply_inventory(Ok(inventory(&[("B", &["b0", "b1", "b2"])])));
        assert_eq!(browser.highlighted_area(), Some("B"));
        assert_eq!(browser.highlighted_file(), Some("b1"));
    }
}
