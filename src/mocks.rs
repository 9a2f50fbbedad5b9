//! Canned responses for the three endpoints a form host talks to.
//!
//! Nothing in the builder calls these; they exist for test harnesses that need
//! a stand-in backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROUTES: [(&str, &str); 3] = [
    ("POST", "/api/forms"),
    ("POST", "/api/uploads"),
    ("POST", "/api/auth/login"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateFormResponse {
    pub id: String,
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub filename: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_id: String,
    pub url: String,
    pub metadata: UploadMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockUser {
    pub id: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: MockUser,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub body: Value,
}

fn ok<T: Serialize>(body: T) -> Option<MockResponse> {
    serde_json::to_value(body)
        .ok()
        .map(|body| MockResponse { status: 200, body })
}

/// Response for `method path`, `None` for unknown routes
pub fn handle(method: &str, path: &str) -> Option<MockResponse> {
    if !method.eq_ignore_ascii_case("POST") {
        return None;
    }
    match path {
        "/api/forms" => ok(CreateFormResponse {
            id: "123".to_string(),
            success: true,
        }),
        "/api/uploads" => ok(UploadResponse {
            file_id: "456".to_string(),
            url: "https://example.com/file.pdf".to_string(),
            metadata: UploadMetadata {
                filename: "test.pdf".to_string(),
                size: 1024,
                mime: "application/pdf".to_string(),
            },
        }),
        "/api/auth/login" => ok(LoginResponse {
            token: "test-token".to_string(),
            user: MockUser {
                id: "user-123".to_string(),
                email: "test@example.com".to_string(),
            },
        }),
        _ => None,
    }
}
