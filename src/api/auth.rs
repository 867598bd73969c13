//! Session endpoints: login, session check and logout.
//!
//! The session itself lives in the server's cookie, held by the client's
//! cookie jar. Nothing about the user is kept here.

use super::client::{get_json, read_message, ApiClient};
use super::error::ApiError;
use super::types::{Credentials, MessageResponse, SessionStatus};

/// Message used when a failed login response carries none.
pub const LOGIN_FAILED: &str = "Login failed.";

/// Log in with username and password.
///
/// POST /login with `{username, password}`. A non-2xx answer fails with the
/// server's `message` (e.g. "Invalid credentials"), or `LOGIN_FAILED`.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<MessageResponse, ApiError> {
    let credentials = Credentials { username, password };
    let resp = client.post("/login", &credentials).await?;

    let body = read_message(resp)
        .await
        .map_err(|e| e.into_rejected(Some(LOGIN_FAILED)))?;

    log::info!("Logged in as {}", username);
    Ok(body)
}

/// Ask the server whether the current cookie belongs to a live session.
///
/// GET /session
pub async fn check_session(client: &ApiClient) -> Result<SessionStatus, ApiError> {
    get_json(client, "/session").await
}

/// End the session on the server.
///
/// POST /logout
pub async fn logout(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    let resp = client.post_empty("/logout").await?;
    let body = read_message(resp).await?;
    log::info!("Logged out");
    Ok(body)
}
