use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use search_logging::{search_debug, search_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{
    decode_search_response, EngineEvent, FailureKind, FetchError, RequestId, SearchResponse,
};

enum EngineCommand {
    Search { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime. Every enqueued search is
/// spawned immediately; nothing is ever aborted, so completions may arrive in
/// any order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("hn_search_engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                search_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request_id: RequestId, url: impl Into<String>) {
        let command = EngineCommand::Search {
            request_id,
            url: url.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            search_warn!("Engine thread gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, url } => {
            let result = run_search(fetcher, request_id, &url).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}

async fn run_search(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    url: &str,
) -> Result<SearchResponse, FetchError> {
    let output = fetcher.fetch(request_id, url).await?;
    let meta = &output.metadata;
    if meta.redirect_count > 0 {
        search_debug!(
            "Request {} redirected {} time(s): {} -> {}",
            request_id,
            meta.redirect_count,
            meta.original_url,
            meta.final_url
        );
    }
    search_debug!(
        "Request {} received {} bytes ({})",
        request_id,
        meta.byte_len,
        meta.content_type.as_deref().unwrap_or("no content type")
    );
    decode_search_response(&output.bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}
