// State management module.
// Holds the tab selection and the mods, code search, and logs panel state.

#![allow(dead_code)]

pub mod console;
pub mod cursor;
pub mod logs;
pub mod mods;
pub mod search;
pub mod view;

pub use console::DebugConsole;
pub use logs::{LogBrowser, LogsFocus};
pub use mods::ModsPanel;
pub use search::SearchResult;
pub use view::Tab;
