// Mods tab state.
// Holds the last fetched module list and the list cursor used to scroll it.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;
use serde_json::Value;

use crate::api::ModuleList;
use crate::fetch::{FetchOutcome, FetchRequest};

use super::cursor;

/// Loaded module list panel.
#[derive(Debug, Default)]
pub struct ModsPanel {
    modules: ModuleList,
    last_refreshed: Option<DateTime<Utc>>,
    /// Highlighted row, for scrolling only.
    pub list_state: ListState,
}

impl ModsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fresh module list, asking the server to reload its mods
    /// first when `force_reload` is set.
    pub fn refresh_mods(&self, force_reload: bool) -> FetchRequest {
        FetchRequest::Mods {
            reload: force_reload,
        }
    }

    /// Apply a finished mods fetch. Failures keep the current list.
    pub fn apply_mods(&mut self, outcome: FetchOutcome<ModuleList>) {
        match outcome {
            Ok(modules) => {
                tracing::debug!(count = modules.len(), "module list refreshed");
                self.modules = modules;
                self.last_refreshed = Some(Utc::now());
                cursor::clamp(&mut self.list_state, self.modules.len());
            }
            Err(e) => {
                tracing::warn!(error = %e, "mods fetch failed, keeping previous list");
            }
        }
    }

    pub fn modules(&self) -> &[Value] {
        &self.modules
    }

    pub fn last_refreshed(&self) -> Option<&DateTime<Utc>> {
        self.last_refreshed.as_ref()
    }

    pub fn select_next(&mut self) {
        cursor::step_down(&mut self.list_state, self.modules.len());
    }

    pub fn select_prev(&mut self) {
        cursor::step_up(&mut self.list_state, self.modules.len());
    }
}
