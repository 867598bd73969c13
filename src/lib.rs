//! Client for the file-management server: session, upload with progress,
//! listing, delete/rename/move, folder creation, download and the admin
//! system-update note.
//!
//! ```ignore
//! use filebox_client::{api, ApiClient, ClientConfig};
//!
//! let client = ApiClient::from_config(&ClientConfig::from_env())?;
//! api::login(&client, "alice", "secret").await?;
//! let listing = api::fetch_files(&client, "docs").await?;
//! ```

pub mod api;
pub mod config;

pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
