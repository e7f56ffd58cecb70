// Debug API response types.
// Module descriptors are passed through opaque; only the code search and log
// inventory shapes are interpreted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loaded module descriptors, in the order the server returned them.
pub type ModuleList = Vec<Value>;

/// Log file names keyed by log area.
pub type LogInventory = BTreeMap<String, Vec<String>>;

/// Code search reply: a two-element array whose second element is the
/// matched code text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeSearchResponse(pub Vec<Value>);

impl CodeSearchResponse {
    /// The matched code text, if the reply carries one.
    pub fn code(&self) -> Option<&str> {
        self.0.get(1).and_then(Value::as_str)
    }
}
