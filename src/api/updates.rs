//! Current user and the admin system-update note.

use super::client::{get_json, read_message, ApiClient};
use super::error::ApiError;
use super::types::{MessageResponse, SystemUpdate, UserAndUpdates};

/// Fetch the current user and the system-update note together.
///
/// GET /api/user and GET /api/system-updates run concurrently; if either
/// fails the whole call fails and no partial result is returned.
pub async fn fetch_user_and_updates(client: &ApiClient) -> Result<UserAndUpdates, ApiError> {
    let (user, updates) = tokio::try_join!(
        get_json::<serde_json::Value>(client, "/api/user"),
        get_json::<SystemUpdate>(client, "/api/system-updates")
    )?;
    Ok(UserAndUpdates {
        user,
        updates: updates.content,
    })
}

/// Replace the system-update note (admin only, enforced by the server).
///
/// POST /api/system-updates with `{content}`.
pub async fn save_update(client: &ApiClient, content: &str) -> Result<MessageResponse, ApiError> {
    let update = SystemUpdate {
        content: content.to_string(),
    };
    let resp = client.post("/api/system-updates", &update).await?;
    read_message(resp).await
}
