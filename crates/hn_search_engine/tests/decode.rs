use hn_search_engine::{decode_search_response, DecodeError, SearchHit};
use pretty_assertions::assert_eq;

#[test]
fn decodes_hits_and_ignores_unknown_fields() {
    let body = br#"{
        "hits": [
            {"objectID": "101", "title": "Show HN", "url": "https://a.example", "points": 12},
            {"objectID": "102", "title": null, "url": null},
            {"objectID": "103"}
        ],
        "nbHits": 3,
        "page": 0
    }"#;

    let response = decode_search_response(body).expect("decode ok");
    assert_eq!(
        response.hits,
        vec![
            SearchHit {
                object_id: "101".to_string(),
                title: Some("Show HN".to_string()),
                url: Some("https://a.example".to_string()),
            },
            SearchHit {
                object_id: "102".to_string(),
                title: None,
                url: None,
            },
            SearchHit {
                object_id: "103".to_string(),
                title: None,
                url: None,
            },
        ]
    );
}

#[test]
fn tolerates_utf8_bom() {
    let body = b"\xEF\xBB\xBF{\"hits\":[]}";

    let response = decode_search_response(body).expect("decode ok");
    assert!(response.hits.is_empty());
}

#[test]
fn rejects_missing_hits_field() {
    let err = decode_search_response(br#"{"results":[]}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Json { .. }));
}

#[test]
fn rejects_empty_body() {
    assert_eq!(decode_search_response(b"  \n").unwrap_err(), DecodeError::Empty);
}

#[test]
fn rejects_truncated_json() {
    let err = decode_search_response(br#"{"hits":[{"objectID":"1""#).unwrap_err();
    assert!(matches!(err, DecodeError::Json { .. }));
}
