use crate::fixtures::*;
use cloudflare_api::ResponseInfo;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a server answering token verification and zone details for the
/// test fixtures. Anything else falls through to wiremock's 404.
pub async fn setup_mock_cloudflare() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("cf-ray", TEST_RAY_ID)
                .set_body_json(success_envelope(token_result())),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/zones/{}", TEST_ZONE_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("cf-ray", TEST_RAY_ID)
                .set_body_json(success_envelope(zone_result())),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

/// Mounts a failing `GET route` answering with `status` and the given errors.
pub async fn mount_error(
    mock_server: &MockServer,
    route: &str,
    status: u16,
    errors: &[ResponseInfo],
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("cf-ray", TEST_RAY_ID)
                .set_body_json(error_envelope(errors)),
        )
        .mount(mock_server)
        .await;
}
