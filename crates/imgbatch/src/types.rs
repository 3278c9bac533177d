//! Core types for batch image resolution

use crate::tensor::ImageTensor;
use crate::DEFAULT_ERROR_MESSAGE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_string()
}

/// Request to resolve a batch of image locations
///
/// `imgurl` holds one location per line; each non-blank trimmed line is
/// either a local file path or a URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveRequest {
    /// Multi-line text, one image location (URL or local path) per line
    #[serde(default)]
    pub imgurl: String,

    /// Status message used when no entry resolves
    #[serde(default = "default_error_message")]
    pub error_message: String,

    /// Fail the whole operation when no entry resolves
    #[serde(default)]
    pub throw_error: bool,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self {
            imgurl: String::new(),
            error_message: default_error_message(),
            throw_error: false,
        }
    }
}

impl ResolveRequest {
    /// Create a new request with the given location text
    pub fn new(imgurl: impl Into<String>) -> Self {
        Self {
            imgurl: imgurl.into(),
            ..Default::default()
        }
    }

    /// Set the fallback error message
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Fail outright when zero entries resolve
    pub fn throw_error(mut self) -> Self {
        self.throw_error = true;
        self
    }
}

/// Aggregate result of one resolution call
///
/// `images` holds one independently-shaped tensor per resolved entry,
/// in original input order. The count fields are strings, as the host
/// contract requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResolveBundle {
    /// Decoded images for the entries that resolved, in input order
    pub images: Vec<ImageTensor>,

    /// "OK" if at least one entry resolved, else the fallback message
    pub status: String,

    /// Number of entries that resolved, as text
    pub valid_count: String,

    /// Number of non-blank input lines, as text
    pub total_count: String,

    /// Newline-joined locations that resolved, in input order
    pub valid_locations: String,
}
