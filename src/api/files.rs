//! File and folder operations.
//!
//! Deletions and folder creation address items by path in a JSON body
//! (`{"path": "docs/a.txt"}`); listing and download take the folder as a
//! percent-encoded `folder` query parameter.

use bytes::Bytes;
use reqwest::multipart;

use super::client::{ensure_success, get_json, read_message, ApiClient};
use super::error::ApiError;
use super::types::{FileListing, ItemKind, MessageResponse, MoveRequest, PathRequest, RenameRequest};
use super::upload::{progress_stream, ProgressCallback, UploadFile};

/// Append `?folder=<encoded>` unless the folder is empty.
fn with_folder_query(path: &str, folder: &str) -> String {
    if folder.is_empty() {
        path.to_string()
    } else {
        format!("{}?folder={}", path, urlencoding::encode(folder))
    }
}

/// Upload a file, optionally into a folder.
///
/// POST /upload as multipart form data with a `file` part and, when given,
/// a `folder` field. `on_progress` receives percentages as the body is sent.
pub async fn upload_file(
    client: &ApiClient,
    file: UploadFile,
    folder: Option<&str>,
    on_progress: Option<ProgressCallback>,
) -> Result<MessageResponse, ApiError> {
    let length = file.len();
    let body = reqwest::Body::wrap_stream(progress_stream(file.bytes, on_progress));
    let part = multipart::Part::stream_with_length(body, length)
        .file_name(file.file_name.clone())
        .mime_str(&file.mime)?;

    let mut form = multipart::Form::new().part("file", part);
    if let Some(folder) = folder.filter(|f| !f.is_empty()) {
        form = form.text("folder", folder.to_string());
    }

    log::debug!("Uploading {} ({} bytes)", file.file_name, length);
    let resp = client.multipart_post("/upload", form).await?;
    read_message(resp).await
}

/// List a folder; the empty string lists the root.
///
/// GET /files or GET /files?folder={folder}
pub async fn fetch_files(client: &ApiClient, folder: &str) -> Result<FileListing, ApiError> {
    get_json(client, &with_folder_query("/files", folder)).await
}

/// Delete a file by path.
///
/// DELETE /delete with `{path}`. A non-2xx answer carrying `{message}` fails
/// with that message; failures are logged before being returned.
pub async fn delete_file(client: &ApiClient, path: &str) -> Result<MessageResponse, ApiError> {
    delete_path(client, path).await.map_err(|e| {
        log::error!("delete_file failed for {}: {}", path, e);
        e
    })
}

/// Delete a folder and its contents by path.
///
/// Same endpoint and error handling as [`delete_file`].
pub async fn delete_folder(client: &ApiClient, path: &str) -> Result<MessageResponse, ApiError> {
    delete_path(client, path).await.map_err(|e| {
        log::error!("delete_folder failed for {}: {}", path, e);
        e
    })
}

async fn delete_path(client: &ApiClient, path: &str) -> Result<MessageResponse, ApiError> {
    let resp = client.delete("/delete", &PathRequest { path }).await?;
    read_message(resp).await.map_err(|e| e.into_rejected(None))
}

/// Create a folder (intermediate folders included, server side).
///
/// POST /create-folder with `{path}`.
pub async fn create_folder(client: &ApiClient, path: &str) -> Result<MessageResponse, ApiError> {
    let resp = client.post("/create-folder", &PathRequest { path }).await?;
    read_message(resp).await
}

/// Rename a file or folder in place.
///
/// POST /rename with `{path, new_name, type}`.
pub async fn rename_item(
    client: &ApiClient,
    path: &str,
    new_name: &str,
    kind: ItemKind,
) -> Result<MessageResponse, ApiError> {
    let request = RenameRequest {
        path,
        new_name,
        kind,
    };
    let resp = client.post("/rename", &request).await?;
    read_message(resp).await
}

/// Move a file into another folder.
///
/// POST /move with `{src_path, dest_folder}`.
pub async fn move_file(
    client: &ApiClient,
    src_path: &str,
    dest_folder: &str,
) -> Result<MessageResponse, ApiError> {
    let request = MoveRequest {
        src_path,
        dest_folder,
    };
    let resp = client.post("/move", &request).await?;
    read_message(resp).await
}

/// Download a file's raw bytes.
///
/// GET /download/{filename}[?folder={folder}]. Slashes inside `filename` are
/// kept as path separators; every segment is percent-encoded.
pub async fn download_file(
    client: &ApiClient,
    filename: &str,
    folder: &str,
) -> Result<Bytes, ApiError> {
    let encoded: Vec<String> = filename
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();
    let path = with_folder_query(&format!("/download/{}", encoded.join("/")), folder);

    let resp = ensure_success(client.get(&path).await?).await?;
    Ok(resp.bytes().await?)
}
