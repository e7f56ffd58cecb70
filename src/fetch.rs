// Background fetching for the debug console.
// Runs debug API requests on the tokio runtime and hands their outcomes back
// to the UI thread over a channel, in the order they finish.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{CodeSearchResponse, DebugClient, LogInventory, ModuleList};
use crate::error::Result;

/// Outcome of a single fetch.
pub type FetchOutcome<T> = Result<T>;

/// A fetch the state wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Mods { reload: bool },
    CodeSearch { cmdline: String },
    LogInventory,
}

impl FetchRequest {
    /// Perform the request and wrap the outcome for the matching panel.
    pub async fn perform(self, client: &DebugClient) -> Completion {
        match self {
            FetchRequest::Mods { reload } => Completion::Mods(client.get_mods(reload).await),
            FetchRequest::CodeSearch { cmdline } => {
                Completion::CodeSearch(client.search_code(&cmdline).await)
            }
            FetchRequest::LogInventory => {
                Completion::LogInventory(client.get_log_inventory().await)
            }
        }
    }
}

/// A finished fetch, ready to be applied to the console state.
#[derive(Debug)]
pub enum Completion {
    Mods(FetchOutcome<ModuleList>),
    CodeSearch(FetchOutcome<CodeSearchResponse>),
    LogInventory(FetchOutcome<LogInventory>),
}

/// Spawns fetches and collects their completions.
///
/// There is no de-duplication and no cancellation: every dispatched request
/// produces exactly one completion, and completions come out in arrival order.
pub struct Fetcher {
    client: DebugClient,
    runtime: Handle,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Fetcher {
    pub fn new(client: DebugClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            runtime,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Spawn a request in the background.
    pub fn dispatch(&mut self, request: FetchRequest) {
        tracing::debug!(?request, "dispatching fetch");
        self.in_flight += 1;

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let completion = request.perform(&client).await;
            // Receiver is gone only during shutdown.
            let _ = tx.send(completion);
        });
    }

    /// Take the next finished fetch without blocking.
    pub fn try_next(&mut self) -> Option<Completion> {
        let completion = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    /// Number of dispatched requests whose completion has not been taken yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
