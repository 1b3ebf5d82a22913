//! Figma document source.
//!
//! Fetches a design file from the Figma REST API and decodes it into
//! the [`figc_document`] node tree. All retrieval failures (auth,
//! network, not-found, malformed payload) surface as
//! [`ClientError::SourceUnavailable`]; the conversion engine never sees
//! partial documents.

use figc_document::{DesignNode, NodeKind};
use log::debug;
use serde::Deserialize;

const BASE_URL: &str = "https://api.figma.com/v1";

/// Document source error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The document could not be retrieved or decoded, for any reason.
    #[error("source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The requested page index does not exist in the document.
    #[error("page index {index} out of range: document has {count} page(s)")]
    PageOutOfRange { index: usize, count: usize },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::SourceUnavailable {
            reason: err.to_string(),
        }
    }
}

/// A decoded Figma file: the document root plus file metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    pub document: DesignNode,
}

impl FigmaFile {
    /// Decode a raw API response (or a saved copy of one).
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        serde_json::from_str(raw).map_err(|err| ClientError::SourceUnavailable {
            reason: format!("malformed document payload: {err}"),
        })
    }

    /// Select the index-th page (canvas) under the document root.
    pub fn page(&self, index: usize) -> Result<&DesignNode, ClientError> {
        let pages: Vec<&DesignNode> = self
            .document
            .children
            .iter()
            .filter(|child| child.kind == NodeKind::Canvas)
            .collect();
        pages
            .get(index)
            .copied()
            .ok_or(ClientError::PageOutOfRange {
                index,
                count: pages.len(),
            })
    }
}

/// Client for the Figma REST API.
pub struct FigmaClient {
    token: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: BASE_URL.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch and decode a file by its key.
    pub fn get_file(&self, file_key: &str) -> Result<FigmaFile, ClientError> {
        FigmaFile::from_json(&self.get_file_raw(file_key)?)
    }

    /// Fetch a file's raw JSON payload, for the verbatim debug artifact.
    pub fn get_file_raw(&self, file_key: &str) -> Result<String, ClientError> {
        let url = format!("{}/files/{file_key}", self.base_url);
        debug!("fetching {url}");
        let response = self
            .http
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }
}

/// Extract the file key from a Figma URL, or pass a bare key through.
pub fn extract_file_key(input: &str) -> &str {
    if input.contains("figma.com") {
        for marker in ["/file/", "/design/"] {
            if let Some(start) = input.find(marker) {
                let rest = &input[start + marker.len()..];
                let end = rest.find(['/', '?']).unwrap_or(rest.len());
                return &rest[..end];
            }
        }
    }
    input
}
