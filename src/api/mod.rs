//! API client module for the file server.
//!
//! Provides the HTTP client bound to one base origin, one function per server
//! operation, and the request/response types matching the server's JSON.

pub mod auth;
pub mod client;
pub mod error;
pub mod files;
pub mod types;
pub mod updates;
pub mod upload;

pub use auth::{check_session, login, logout};
pub use client::ApiClient;
pub use error::ApiError;
pub use files::{
    create_folder, delete_file, delete_folder, download_file, fetch_files, move_file, rename_item,
    upload_file,
};
pub use types::{FileListing, ItemKind, MessageResponse, SessionStatus, UserAndUpdates};
pub use updates::{fetch_user_and_updates, save_update};
pub use upload::{ProgressCallback, UploadFile};
