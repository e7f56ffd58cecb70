// Debug API endpoint functions.
// Builds the mods, code search, and log inventory requests and decodes replies.

use reqwest::Request;

use crate::error::Result;

use super::client::DebugClient;
use super::types::{CodeSearchResponse, LogInventory, ModuleList};

const MODS_ENDPOINT: &str = "debug/mods.json";
const CODE_ENDPOINT: &str = "debug/code.json";
const LOGS_ENDPOINT: &str = "debug/logs.json";

impl DebugClient {
    /// Request for the loaded module list, optionally asking the server to
    /// reload its mods first.
    pub fn mods_request(&self, reload: bool) -> Result<Request> {
        let mut builder = self.get(MODS_ENDPOINT)?;
        if reload {
            builder = builder.query(&[("op", "reload")]);
        }
        Ok(builder.build()?)
    }

    /// Request for a code search.
    pub fn code_search_request(&self, cmdline: &str) -> Result<Request> {
        Ok(self
            .get(CODE_ENDPOINT)?
            .query(&[("cmdline", cmdline)])
            .build()?)
    }

    /// Request for the log area inventory.
    pub fn log_inventory_request(&self) -> Result<Request> {
        Ok(self.get(LOGS_ENDPOINT)?.build()?)
    }

    /// Get the loaded module list.
    pub async fn get_mods(&self, reload: bool) -> Result<ModuleList> {
        self.fetch_json(self.mods_request(reload)?).await
    }

    /// Search for the code matching a command line.
    pub async fn search_code(&self, cmdline: &str) -> Result<CodeSearchResponse> {
        self.fetch_json(self.code_search_request(cmdline)?).await
    }

    /// Get the log files available in each log area.
    pub async fn get_log_inventory(&self) -> Result<LogInventory> {
        self.fetch_json(self.log_inventory_request()?).await
    }
}
