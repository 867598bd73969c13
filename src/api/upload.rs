//! Upload payloads and progress reporting.
//!
//! The file body is fed to the transport in fixed-size chunks; each chunk
//! handed over advances the reported percentage.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};

/// Callback receiving upload progress as an integer percentage (0..=100).
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Size of the chunks handed to the transport.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

const DEFAULT_MIME: &str = "application/octet-stream";

/// A file to send to POST /upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Bytes,
    pub mime: String,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime: DEFAULT_MIME.to_string(),
        }
    }

    /// Read a local file; the upload keeps its base name.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("not a file path: {}", path.display()),
                )
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Percentage of `sent` over `total`, rounded to nearest.
///
/// Held at 99 until every byte is sent so 100 marks completion.
pub fn percent(sent: u64, total: u64) -> u8 {
    if total == 0 || sent >= total {
        return 100;
    }
    let rounded = (sent * 200 + total) / (total * 2);
    rounded.min(99) as u8
}

/// Chunk `data` into a body stream that reports progress as it is consumed.
///
/// A value is reported only when it differs from the previous one, so the
/// sequence is strictly increasing and ends with 100.
pub(crate) fn progress_stream(
    data: Bytes,
    on_progress: Option<ProgressCallback>,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + Sync + 'static {
    let total = data.len() as u64;
    let chunks: Vec<Bytes> = (0..data.len())
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| data.slice(start..(start + UPLOAD_CHUNK_SIZE).min(data.len())))
        .collect();

    let mut sent = 0u64;
    let mut last: Option<u8> = None;
    stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(ref cb) = on_progress {
            let pct = percent(sent, total);
            if last != Some(pct) {
                last = Some(pct);
                cb(pct);
            }
        }
        Ok(chunk)
    })
}
