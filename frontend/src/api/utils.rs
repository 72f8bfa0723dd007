use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;

/// LocalStorage key holding the bearer token issued at login
pub const TOKEN_KEY: &str = "auth_token";

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub fn stored_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok().filter(|token| !token.is_empty())
}

fn with_token(mut req: RequestBuilder) -> RequestBuilder {
    if let Some(token) = stored_token() {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }
    req
}

/// Creates a GET request with the stored bearer token, if any
pub fn authenticated_get(url: &str) -> RequestBuilder {
    with_token(Request::get(url))
}

/// Creates a POST request with the stored bearer token, if any
pub fn authenticated_post(url: &str) -> RequestBuilder {
    with_token(Request::post(url))
}

/// Creates a PUT request with the stored bearer token, if any
pub fn authenticated_put(url: &str) -> RequestBuilder {
    with_token(Request::put(url))
}

/// Message carried by a failed response, falling back to the status line
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("Request failed ({} {})", status, status_text),
    }
}
