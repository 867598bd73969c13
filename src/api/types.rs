//! Request and response types for the file server API.
//!
//! Field names follow the server's JSON: snake_case bodies, except the
//! session endpoint which answers in camelCase.

use serde::{Deserialize, Serialize};

/// Login request body sent to POST /login.
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Generic acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Response from GET /session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Files of a folder, bucketed by MIME family on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedFiles {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
    #[serde(default)]
    pub others: Vec<String>,
}

impl CategorizedFiles {
    /// All file names regardless of category.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .chain(&self.videos)
            .chain(&self.audio)
            .chain(&self.others)
            .map(String::as_str)
    }
}

/// Response from GET /files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileListing {
    #[serde(default)]
    pub files: CategorizedFiles,
    #[serde(default)]
    pub folders: Vec<String>,
}

/// Body for DELETE /delete and POST /create-folder.
#[derive(Debug, Serialize)]
pub struct PathRequest<'a> {
    pub path: &'a str,
}

/// Whether a rename targets a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ItemKind::File),
            "folder" => Ok(ItemKind::Folder),
            other => Err(format!("unknown item type '{}' (expected file or folder)", other)),
        }
    }
}

/// Body for POST /rename.
#[derive(Debug, Serialize)]
pub struct RenameRequest<'a> {
    pub path: &'a str,
    pub new_name: &'a str,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// Body for POST /move.
#[derive(Debug, Serialize)]
pub struct MoveRequest<'a> {
    pub src_path: &'a str,
    pub dest_folder: &'a str,
}

/// The admin system-update note, GET/POST /api/system-updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemUpdate {
    #[serde(default)]
    pub content: String,
}

/// Combined result of GET /api/user and GET /api/system-updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAndUpdates {
    /// User document as returned by the server (shape owned by the server).
    pub user: serde_json::Value,
    /// Content of the system-update note.
    pub updates: String,
}
