// Code search tab state.
// Tracks the input line, the last submitted query, and the last result.

use crate::api::CodeSearchResponse;
use crate::fetch::{FetchOutcome, FetchRequest};

/// Shown when the server found nothing for the query.
pub const NO_MATCH_MESSAGE: &str = "No matching code found.";

/// Result of the last code search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResult {
    /// Nothing searched yet.
    #[default]
    Empty,
    Found(String),
    NoMatch,
    /// The request failed. Displays like `Empty`.
    Failed,
}

impl SearchResult {
    /// Text shown in the result pane.
    pub fn text(&self) -> &str {
        match self {
            SearchResult::Empty | SearchResult::Failed => "",
            SearchResult::Found(code) => code,
            SearchResult::NoMatch => NO_MATCH_MESSAGE,
        }
    }
}

/// Code search panel.
#[derive(Debug, Default)]
pub struct SearchPanel {
    input: String,
    last_query: String,
    result: SearchResult,
    /// Vertical scroll offset of the result pane.
    pub scroll: u16,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the input line as a query.
    ///
    /// The input is moved into the last query right away so the line is
    /// ready for the next query while this one is in flight.
    pub fn submit_search(&mut self) -> FetchRequest {
        self.last_query = std::mem::take(&mut self.input);
        tracing::debug!(query = %self.last_query, "code search submitted");
        FetchRequest::CodeSearch {
            cmdline: self.last_query.clone(),
        }
    }

    /// Apply a finished code search.
    pub fn apply_search(&mut self, outcome: FetchOutcome<CodeSearchResponse>) {
        self.result = match outcome {
            Ok(response) => match response.code() {
                Some(code) if !code.is_empty() => SearchResult::Found(code.to_string()),
                _ => SearchResult::NoMatch,
            },
            Err(e) => {
                tracing::warn!(error = %e, query = %self.last_query, "code search failed");
                SearchResult::Failed
            }
        };
        self.scroll = 0;
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let last_line = self.result.text().lines().count().saturating_sub(1);
        let max = u16::try_from(last_line).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
