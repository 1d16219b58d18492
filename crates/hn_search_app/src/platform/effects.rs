use std::io;

use hn_search_core::{Effect, FetchFailure, Item, Msg, SearchResult};
use hn_search_engine::{EngineEvent, EngineHandle, FetchSettings, SearchResponse};
use search_logging::{search_info, search_warn};

/// Bridges core effects to the engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { request_id, url } => {
                    search_info!("Fetch request_id={} url={}", request_id, url);
                    self.engine.enqueue(request_id, url);
                }
            }
        }
    }

    /// Collects every completion the engine has delivered so far.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::FetchCompleted {
            request_id,
            result: match result {
                Ok(response) => Ok(map_response(response)),
                Err(err) => {
                    search_warn!("Search {} failed: {}", request_id, err);
                    Err(FetchFailure::new(err.to_string()))
                }
            },
        },
    }
}

fn map_response(response: SearchResponse) -> SearchResult {
    SearchResult::new(
        response
            .hits
            .into_iter()
            .map(|hit| Item {
                id: hit.object_id,
                title: hit.title.unwrap_or_default(),
                url: hit.url.unwrap_or_default(),
            })
            .collect(),
    )
}
