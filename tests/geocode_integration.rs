use city_distance::{ClientConfig, Coordinate, GeoClient, GeoError, Lookup};

use test_utils::shared::{found, refused_endpoint, zero_results, Reply, StubGeocoder};

#[tokio::test]
async fn test_resolve_returns_first_candidate() {
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "Portland, OR, USA",
                "geometry": { "location": { "lat": 45.5152, "lng": -122.6784 } }
            },
            {
                "formatted_address": "Portland, ME, USA",
                "geometry": { "location": { "lat": 43.6591, "lng": -70.2568 } }
            }
        ]
    })
    .to_string();
    let stub = StubGeocoder::start(vec![("Portland", Reply::Body(body))]).await;

    let lookup = stub.client().resolve("Portland").await;
    let location = match lookup {
        Ok(Lookup::Found(location)) => location,
        other => panic!("Expected a match for Portland, got {:?}", other),
    };
    assert_eq!(location.formatted_address, "Portland, OR, USA");
    assert_eq!(
        location.coordinate,
        Coordinate {
            lat: 45.5152,
            lng: -122.6784
        }
    );
    assert_eq!(stub.hits(), 1, "exactly one request per lookup");
}

#[tokio::test]
async fn test_resolve_escapes_query() {
    let stub = StubGeocoder::start(vec![(
        "Saint-Étienne & Co",
        found("Saint-Étienne, France", 45.4397, 4.3872),
    )])
    .await;

    let lookup = stub
        .client()
        .resolve("Saint-Étienne & Co")
        .await
        .expect("lookup should succeed");
    assert!(matches!(lookup, Lookup::Found(_)), "got {:?}", lookup);
}

#[tokio::test]
async fn test_resolve_empty_results_is_not_found() {
    let stub = StubGeocoder::start(vec![("Atlantis", zero_results())]).await;

    let lookup = stub.client().resolve("Atlantis").await;
    assert!(
        matches!(lookup, Ok(Lookup::NotFound)),
        "Empty results should be a normal NotFound outcome, got {:?}",
        lookup
    );
}

#[tokio::test]
async fn test_resolve_malformed_body_is_decode_error() {
    let stub = StubGeocoder::start(vec![(
        "Paris",
        Reply::Body(r#"{"status":"OK","results":[{"formatted_addr"#.to_string()),
    )])
    .await;

    let err = stub.client().resolve("Paris").await.unwrap_err();
    assert!(err.is_decode(), "Expected Decode, got {:?}", err);
}

#[tokio::test]
async fn test_resolve_body_cut_short_is_decode_error() {
    let stub = StubGeocoder::start(vec![(
        "Paris",
        Reply::Truncated(r#"{"status":"OK","results":[{"formatted_addr"#.to_string()),
    )])
    .await;

    let err = stub.client().resolve("Paris").await.unwrap_err();
    assert!(
        err.is_decode(),
        "A body shorter than its Content-Length should be Decode, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_resolve_http_failure_is_transport_error() {
    let stub = StubGeocoder::start(vec![("Paris", Reply::Status(500))]).await;

    let err = stub.client().resolve("Paris").await.unwrap_err();
    assert!(err.is_transport(), "Expected Transport, got {:?}", err);
    assert_eq!(stub.hits(), 1, "failures are not retried");
}

#[tokio::test]
async fn test_resolve_connection_refused_is_transport_error() {
    let endpoint = refused_endpoint().await;
    let client = GeoClient::from_config(ClientConfig::default().with_endpoint(endpoint))
        .expect("client");

    let err = client.resolve("Paris").await.unwrap_err();
    assert!(err.is_transport(), "Expected Transport, got {:?}", err);
}

#[tokio::test]
async fn test_resolve_rejects_empty_query_without_request() {
    let stub = StubGeocoder::start(vec![]).await;

    let err = stub.client().resolve("   ").await.unwrap_err();
    assert!(matches!(err, GeoError::InvalidInput(_)), "got {:?}", err);
    assert_eq!(stub.hits(), 0);
}

#[tokio::test]
async fn test_api_key_sent_only_when_non_empty() {
    let stub =
        StubGeocoder::start(vec![("Oslo", found("Oslo, Norway", 59.9139, 10.7522))]).await;

    stub.client_with(ClientConfig::default().with_api_key(Some("k-123".to_string())))
        .resolve("Oslo")
        .await
        .expect("keyed lookup");
    stub.client_with(ClientConfig::default().with_api_key(Some(String::new())))
        .resolve("Oslo")
        .await
        .expect("unkeyed lookup");

    assert_eq!(stub.keys(), vec![Some("k-123".to_string()), None]);
}

#[tokio::test]
async fn test_invalid_endpoint_is_rejected() {
    let err =
        GeoClient::from_config(ClientConfig::default().with_endpoint("not a url")).unwrap_err();
    assert!(matches!(err, GeoError::UrlParse(_)), "got {:?}", err);

    let err = GeoClient::from_config(
        ClientConfig::default().with_endpoint("mailto:geo@example.com"),
    )
    .unwrap_err();
    assert!(matches!(err, GeoError::InvalidInput(_)), "got {:?}", err);
}
