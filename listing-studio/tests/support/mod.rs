#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use listing_studio::Client;

pub const IMAGE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";
pub const TEXT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn parts_response(parts: Value) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": parts}, "finishReason": "STOP"}
        ]
    })
}

pub async fn last_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().expect("no request received");
    serde_json::from_slice(&request.body).unwrap()
}
