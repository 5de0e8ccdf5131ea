//! Clinic API Wrappers
//!
//! Frontend bindings to the clinic REST API, organized by resource.
//! Every call is a single request: no retries and no timeouts.

mod admins;
mod appointments;
mod auth;
mod feedback;
mod patients;
mod reminders;
mod services;
mod staff;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

// Re-export all public items
pub use admins::*;
pub use appointments::*;
pub use auth::*;
pub use feedback::*;
pub use patients::*;
pub use reminders::*;
pub use services::*;
pub use staff::*;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with the body's `error` field when present
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user: the server's own message when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    ApiError::Server { status, message }
}

// ========================
// Request Helpers
// ========================

fn request(method: Method, path: &str) -> RequestBuilder {
    reqwest::Client::new().request(method, config::endpoint(path))
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder.send().await.map_err(|e| {
        log::error!("request failed: {}", e);
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let err = server_error(status.as_u16(), &body);
    log::warn!("{} -> {}", url, err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    decode(send(request(Method::GET, path)).await?).await
}

/// A 404 on a collection means "nothing yet"
fn not_found_as_empty<T>(result: ApiResult<Vec<T>>) -> ApiResult<Vec<T>> {
    match result {
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

async fn get_list_or_empty<T: DeserializeOwned>(path: &str) -> ApiResult<Vec<T>> {
    not_found_as_empty(get_json(path).await)
}

async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    decode(send(request(Method::POST, path).json(body)).await?).await
}

/// Send a JSON body and ignore the response body
async fn send_json<B: Serialize + ?Sized>(method: Method, path: &str, body: &B) -> ApiResult<()> {
    send(request(method, path).json(body)).await.map(|_| ())
}

/// Send a request without a body and ignore the response body
async fn send_empty(method: Method, path: &str) -> ApiResult<()> {
    send(request(method, path)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_error_message_is_verbatim() {
        let err = server_error(409, r#"{"error":"Email already registered"}"#);
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_server_error_without_body_uses_fallback() {
        let err = server_error(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Failed to cancel appointment"), "Failed to cancel appointment");
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("ignored"), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_not_found() {
        assert!(server_error(404, "").is_not_found());
        assert!(!server_error(400, "").is_not_found());
        assert!(!ApiError::Decode("x".into()).is_not_found());
    }

    #[test]
    fn test_missing_collection_reads_as_empty() {
        let missing: ApiResult<Vec<u32>> = Err(server_error(404, r#"{"error":"No feedback found"}"#));
        assert_eq!(not_found_as_empty(missing), Ok(Vec::new()));
        assert_eq!(not_found_as_empty(Ok(vec![1, 2])), Ok(vec![1, 2]));
    }

    #[test]
    fn test_other_collection_errors_pass_through() {
        let failed: ApiResult<Vec<u32>> = Err(server_error(500, ""));
        assert_eq!(
            not_found_as_empty(failed),
            Err(ApiError::Server {
                status: 500,
                message: None
            })
        );
        let offline: ApiResult<Vec<u32>> = Err(ApiError::Network("offline".into()));
        assert_eq!(not_found_as_empty(offline), Err(ApiError::Network("offline".into())));
    }
}
