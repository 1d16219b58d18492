//! hn_search engine: HTTP fetching and response decoding for search effects.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_search_response, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId, SearchHit,
    SearchResponse,
};
