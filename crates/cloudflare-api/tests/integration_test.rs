use cloudflare_api::{ApiError, CloudflareClient, Error, ErrorKind, ResponseInfo, TokenStatus};
use cloudflare_test_utils::fixtures::{TEST_RAY_ID, TEST_TOKEN, TEST_ZONE_ID};
use cloudflare_test_utils::mock_server::{mount_error, setup_mock_cloudflare};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CloudflareClient {
    CloudflareClient::new(
        server.uri(),
        vec![("Authorization".to_string(), format!("Bearer {}", TEST_TOKEN))],
    )
}

#[tokio::test]
async fn test_client_integration() {
    let mock_server = setup_mock_cloudflare().await;
    let client = client_for(&mock_server);

    let token = client.verify_token().await.unwrap();
    assert_eq!(token.status, TokenStatus::Active);

    let zone = client.zone_details(TEST_ZONE_ID).await.unwrap();
    assert_eq!(zone.name, "example.com");
    assert_eq!(zone.name_servers.len(), 2);
}

#[tokio::test]
async fn test_wrong_token_is_unmatched() {
    let mock_server = setup_mock_cloudflare().await;
    let client = CloudflareClient::new(
        mock_server.uri(),
        vec![("Authorization".to_string(), "Bearer wrong".to_string())],
    );

    // wiremock answers unmatched requests with an empty 404
    let err = client.verify_token().await.unwrap_err();
    let api_err = err.api_error().expect("classified error");
    assert_eq!(api_err.kind(), ErrorKind::NotFound);
    assert!(api_err.errors().is_empty());
}

#[tokio::test]
async fn test_error_propagation() {
    let mock_server = MockServer::start().await;
    mount_error(
        &mock_server,
        "/zones/limited",
        429,
        &[ResponseInfo::new("rate limit exceeded", 10013)],
    )
    .await;

    let client = client_for(&mock_server);
    let err = client.zone_details("limited").await.unwrap_err();

    assert_eq!(err.to_string(), "rate limit exceeded (10013)");
    match err {
        Error::Api(ApiError::Ratelimit(e)) => {
            assert!(e.is_client_rate_limited());
            assert!(e.is_client_error());
            assert!(!e.is_service_error());
            assert!(e.internal_error_code_is(10013));
            assert!(e.error_message_contains("rate limit"));
            assert_eq!(e.ray_id(), TEST_RAY_ID);
        }
        other => panic!("Expected Ratelimit error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_error_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.account_details("down").await.unwrap_err();

    match err {
        Error::Api(api_err @ ApiError::Service(_)) => {
            assert!(api_err.is_service_error());
            assert_eq!(api_err.to_string(), "");
            assert!(api_err.error_messages().is_empty());
        }
        other => panic!("Expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_multiple_sub_errors() {
    let mock_server = MockServer::start().await;
    mount_error(
        &mock_server,
        "/zones/bad",
        400,
        &[
            ResponseInfo::new("Invalid request headers", 6003),
            ResponseInfo::new("Invalid format for X-Auth-Key header", 6103),
        ],
    )
    .await;

    let client = client_for(&mock_server);
    let err = client.zone_details("bad").await.unwrap_err();
    let api_err = err.api_error().expect("classified error");

    assert_eq!(api_err.kind(), ErrorKind::Request);
    assert_eq!(
        api_err.to_string(),
        "Invalid request headers (6003), Invalid format for X-Auth-Key header (6103)"
    );
    assert_eq!(api_err.internal_error_codes(), vec![6003, 6103]);
    assert_eq!(api_err.error_codes(), &[6003, 6103]);
}
