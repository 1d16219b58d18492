use crate::SearchResponse;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is empty")]
    Empty,
    #[error("response is not a search result: {message}")]
    Json { message: String },
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a search API body. A leading UTF-8 BOM is tolerated; anything that
/// is not a JSON object with a `hits` array is rejected.
pub fn decode_search_response(bytes: &[u8]) -> Result<SearchResponse, DecodeError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }
    serde_json::from_slice(body).map_err(|err| DecodeError::Json {
        message: err.to_string(),
    })
}
