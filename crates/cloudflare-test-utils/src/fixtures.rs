use cloudflare_api::ResponseInfo;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_RAY_ID: &str = "7d1c2a3b4c5d6e7f-SJC";
pub const TEST_ZONE_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";
pub const TEST_ACCOUNT_ID: &str = "01a7362d577a6c3019a474fd6f485823";

pub fn success_envelope(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

pub fn error_envelope(errors: &[ResponseInfo]) -> Value {
    json!({
        "success": false,
        "errors": errors,
        "messages": [],
        "result": null
    })
}

pub fn token_result() -> Value {
    json!({
        "id": "ed17574386854bf78a67040be0a770b0",
        "status": "active",
        "not_before": "2024-01-01T00:00:00Z",
        "expires_on": "2030-01-01T00:00:00Z"
    })
}

pub fn zone_result() -> Value {
    json!({
        "id": TEST_ZONE_ID,
        "name": "example.com",
        "status": "active",
        "paused": false,
        "name_servers": ["bob.ns.cloudflare.com", "lola.ns.cloudflare.com"]
    })
}
