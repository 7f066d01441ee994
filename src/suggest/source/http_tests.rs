//! Tests for the HTTP place source

use super::*;

const TWO_PLACES: &str = r#"[
    {"city":"Paris","region":"Île-de-France","country":"France","latitude":48.8566,"longitude":2.3522,"timezone":"Europe/Paris"},
    {"city":"Paris (TX)","region":"Texas","country":"United States","latitude":33.6609,"longitude":-95.5555,"timezone":"America/Chicago"}
]"#;

#[test]
fn test_classify_ok_preserves_order() {
    let result = classify_response(StatusCode::OK, TWO_PLACES.as_bytes());
    match result {
        Ok(LookupOutcome::Places(places)) => {
            assert_eq!(places.len(), 2);
            assert_eq!(places[0].city, "Paris");
            assert_eq!(places[1].city, "Paris (TX)");
        }
        other => panic!("Expected places, got {:?}", other),
    }
}

#[test]
fn test_classify_ok_empty_array() {
    let result = classify_response(StatusCode::OK, b"[]");
    assert_eq!(result, Ok(LookupOutcome::Places(Vec::new())));
}

#[test]
fn test_classify_bad_request_is_malformed() {
    let result = classify_response(StatusCode::BAD_REQUEST, b"{\"error\":\"too short\"}");
    assert_eq!(result, Ok(LookupOutcome::Malformed));
}

#[test]
fn test_classify_not_found_is_not_an_error() {
    let result = classify_response(StatusCode::NOT_FOUND, b"");
    assert_eq!(result, Ok(LookupOutcome::NotFound));
}

#[test]
fn test_classify_server_error_is_upstream() {
    let result = classify_response(StatusCode::BAD_GATEWAY, b"upstream down");
    assert_eq!(result, Err(LookupError::Upstream { status: 502 }));
}

#[test]
fn test_classify_too_many_requests_is_upstream() {
    let result = classify_response(StatusCode::TOO_MANY_REQUESTS, b"");
    assert_eq!(result, Err(LookupError::Upstream { status: 429 }));
}

#[test]
fn test_classify_ok_with_invalid_body_is_decode_error() {
    let result = classify_response(StatusCode::OK, b"{\"city\":\"Paris\"}");
    assert!(matches!(result, Err(LookupError::Decode(_))));
}

#[test]
fn test_build_request_encodes_query_and_count() {
    let source = HttpPlaceSource::new("http://localhost:3000/api/geocode", None).unwrap();
    let request = source.build_request("Par", 5).unwrap();

    assert_eq!(request.method(), reqwest::Method::GET);
    assert_eq!(request.url().path(), "/api/geocode");
    assert_eq!(request.url().query(), Some("q=Par&count=5"));
}

#[test]
fn test_build_request_percent_encodes_query() {
    let source = HttpPlaceSource::new("http://localhost:3000/api/geocode", None).unwrap();
    let request = source.build_request("São Paulo", 3).unwrap();

    let pairs: Vec<(String, String)> = request
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), "São Paulo".to_string()),
            ("count".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn test_build_request_rejects_invalid_endpoint() {
    let source = HttpPlaceSource::new("not a url", None).unwrap();
    assert!(source.build_request("Par", 5).is_err());
}

#[tokio::test]
async fn test_lookup_unreachable_endpoint_is_transport_error() {
    // Port 1 on loopback refuses connections
    let source =
        HttpPlaceSource::new("http://127.0.0.1:1/geocode", Some(Duration::from_secs(2))).unwrap();
    let result = source.lookup("Paris", 5).await;
    assert!(
        matches!(result, Err(LookupError::Transport(_))),
        "Expected transport error, got {:?}",
        result
    );
}
