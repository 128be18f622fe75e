//! File resolution into self-contained data URLs
//!
//! Resolution suspends the caller until the read completes; it is not
//! cancellable and has no timeout.

use crate::error::SubmitError;
use crate::page::{FileSource, SelectedFile};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io;
use std::path::PathBuf;

/// Fallback content type when the source does not know one
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// In-memory encoded representation of a user-selected file.
///
/// `data_url` is self-contained; no external reference survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub name: String,
    pub size: u64,
    pub data_url: String,
}

/// Resolve the selected file of a source into a [`FileResult`].
///
/// Zero files selected is an explicit failure, never a null success; read
/// errors propagate with their cause attached.
pub async fn resolve(source: &dyn FileSource) -> Result<FileResult, SubmitError> {
    let Some(selected) = source.selected() else {
        return Err(SubmitError::NoFileSelected);
    };

    let bytes = source
        .read()
        .await
        .map_err(|err| SubmitError::FileRead(err.to_string()))?;

    let content_type = selected
        .content_type
        .as_deref()
        .unwrap_or(DEFAULT_CONTENT_TYPE);
    Ok(FileResult {
        name: selected.name,
        size: selected.size,
        data_url: format!("data:{};base64,{}", content_type, STANDARD.encode(&bytes)),
    })
}

/// Decode a data URL back into its content type and bytes.
pub fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (content_type, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((content_type.to_string(), bytes))
}

/// File source backed by a local path, read through tokio.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
    content_type: Option<String>,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[async_trait]
impl FileSource for LocalFileSource {
    fn selected(&self) -> Option<SelectedFile> {
        let metadata = std::fs::metadata(&self.path).ok()?;
        let name = self.path.file_name()?.to_string_lossy().into_owned();
        Some(SelectedFile {
            name,
            size: metadata.len(),
            content_type: self.content_type.clone(),
        })
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}
