use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use directory_core::{FeedParams, RequestToken};
use directory_logging::{directory_debug, directory_error};

use crate::client::{ClientSettings, DirectoryApi, ReqwestApi};
use crate::{ApiError, EngineEvent};

enum EngineCommand {
    Search { token: RequestToken, query: String },
    Company { name: String },
    Articles { token: RequestToken, params: FeedParams },
}

/// Runs backend calls on a background tokio runtime.
///
/// Calls are never aborted; every command eventually produces exactly one
/// `EngineEvent` carrying the token it was issued with.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let api = ReqwestApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn DirectoryApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    directory_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            directory_debug!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, token: RequestToken, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            token,
            query: query.into(),
        });
    }

    pub fn company(&self, name: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Company { name: name.into() });
    }

    pub fn articles(&self, token: RequestToken, params: FeedParams) {
        let _ = self.cmd_tx.send(EngineCommand::Articles { token, params });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn DirectoryApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Search { token, query } => EngineEvent::SearchCompleted {
            token,
            result: api.search(&query).await,
        },
        EngineCommand::Company { name } => {
            let result = api.company(&name).await;
            EngineEvent::CompanyCompleted { name, result }
        }
        EngineCommand::Articles { token, params } => EngineEvent::ArticlesCompleted {
            token,
            result: api.articles(&params).await,
        },
    };
    let _ = event_tx.send(event);
}
