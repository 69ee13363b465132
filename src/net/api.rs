//! REST gateway to the matcher backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>` so callers can tell a
//! backend rejection (with its message) apart from a transport failure or a
//! malformed body, instead of probing response objects field by field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthSession, ChatReply, ChatRequest, InternshipsList, JobsList, MatchRequest, MatchResponse,
    MessageReply, OverviewStats, ProfileUpdate, UpdateAck, UserProfile, UserStatistics,
};
#[cfg(feature = "hydrate")]
use super::types::{ResumeUpload, UserEnvelope};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use thiserror::Error;

/// Backend origin baked in at compile time; empty means same-origin.
const API_BASE: &str = match option_env!("MATCHBOARD_API_BASE") {
    Some(origin) => origin,
    None => "",
};

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status and a message.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never completed (offline, refused, or running on the
    /// server where no browser fetch exists).
    #[error("Network error. Check your connection and try again.")]
    Network,
    /// The backend answered with success but the body did not decode.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE}/api{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_path(user_id: &str) -> String {
    api_url(&format!("/users/{user_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn resume_upload_path(user_id: &str) -> String {
    api_url(&format!("/auth/upload-resume/{user_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_stats_path(user_id: &str) -> String {
    api_url(&format!("/statistics/user/{user_id}"))
}

/// Error body shapes the backend emits: `{detail}` from the API framework,
/// `{error}` from older handlers. Structured validation details do not fit
/// either and fall through to the generic message.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail.or(body.error))
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::Server { status, message }
}

#[cfg(feature = "hydrate")]
fn authorize(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &bearer(token))
}

#[cfg(feature = "hydrate")]
async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(server_error(status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let resp = authorize(gloo_net::http::Request::get(url), token)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    parse_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T, B>(url: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        builder = authorize(builder, token);
    }
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    parse_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T, B>(url: &str, token: &str, body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let resp = authorize(gloo_net::http::Request::put(url), token)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    parse_response(resp).await
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError::Server`] carries the backend's rejection message (401 on bad
/// credentials); [`ApiError::Network`] means the request never completed.
pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json(&api_url("/auth/login"), None, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// [`ApiError::Server`] with status 400 when the email is already taken.
pub async fn register(
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "full_name": full_name,
            "email": email,
            "password": password,
        });
        post_json(&api_url("/auth/register"), None, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, email, password);
        Err(ApiError::Network)
    }
}

/// Request a password reset via `POST /api/auth/forgot-password`.
///
/// The backend answers with the same message whether or not the account
/// exists.
///
/// # Errors
///
/// Returns an error only on transport or decode failure.
pub async fn forgot_password(email: &str) -> Result<MessageReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        post_json(&api_url("/auth/forgot-password"), None, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network)
    }
}

/// Fetch a full profile via `GET /api/users/{id}`.
///
/// # Errors
///
/// [`ApiError::Server`] with status 404 when the user does not exist.
pub async fn fetch_user(token: &str, user_id: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: UserEnvelope = get_json(&user_path(user_id), token).await?;
        Ok(envelope.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Network)
    }
}

/// Apply a partial profile update via `PUT /api/users/{id}`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn update_user(
    token: &str,
    user_id: &str,
    update: &ProfileUpdate,
) -> Result<UpdateAck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&user_path(user_id), token, update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id, update);
        Err(ApiError::Network)
    }
}

/// Upload a resume PDF via `POST /api/auth/upload-resume/{id}`.
///
/// Sends the file as multipart form data; the browser supplies the content
/// type and boundary, so no JSON header is set here.
///
/// # Errors
///
/// [`ApiError::Server`] with status 400 when the backend rejects the file
/// type; [`ApiError::Network`] on transport failure.
#[cfg(feature = "hydrate")]
pub async fn upload_resume(
    token: &str,
    user_id: &str,
    file: &web_sys::File,
) -> Result<ResumeUpload, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network)?;
    let resp = authorize(gloo_net::http::Request::post(&resume_upload_path(user_id)), token)
        .body(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    parse_response(resp).await
}

/// Rank listings for a user via `POST /api/matching/matches`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn fetch_matches(token: &str, request: &MatchRequest) -> Result<MatchResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&api_url("/matching/matches"), Some(token), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Network)
    }
}

/// Fetch all job postings via `GET /api/jobs/list`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn fetch_jobs(token: &str) -> Result<JobsList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&api_url("/jobs/list"), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// Fetch all internship postings via `GET /api/internships/list`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn fetch_internships(token: &str) -> Result<InternshipsList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&api_url("/internships/list"), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// Fetch platform-wide counts via `GET /api/statistics/overview`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn fetch_overview_stats(token: &str) -> Result<OverviewStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&api_url("/statistics/overview"), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// Fetch per-user aggregates via `GET /api/statistics/user/{id}`.
///
/// # Errors
///
/// [`ApiError::Server`] with status 404 when the user does not exist.
pub async fn fetch_user_stats(token: &str, user_id: &str) -> Result<UserStatistics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&user_stats_path(user_id), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Network)
    }
}

/// Send a chat message via `POST /api/chat/message`.
///
/// # Errors
///
/// Propagates backend rejections and transport failures.
pub async fn send_chat_message(token: &str, request: &ChatRequest) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&api_url("/chat/message"), Some(token), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Network)
    }
}
