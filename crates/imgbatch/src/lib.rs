//! Imgbatch - batch image location resolver
//!
//! Given a multi-line block of text where each line is an image
//! location (a URL or a local file path), this crate fetches and
//! decodes every entry it can and aggregates the results into a
//! [`ResolveBundle`]: the decoded images as independent `(1, H, W, 3)`
//! float tensors, a status string, valid/total counts, and the
//! newline-joined locations that resolved.
//!
//! Entries are processed sequentially in input order. A failing entry
//! is skipped, never surfaced individually; the only hard failure is
//! [`ResolveError::NoValidImages`] when zero entries resolve and the
//! caller requested strict mode.
//!
//! The host-facing node declaration lives in the `imgbatch-node` crate;
//! this crate is usable and testable without any host runtime.

mod error;
mod resolver;
mod source;
mod tensor;
mod types;

pub use error::ResolveError;
pub use resolver::resolve;
pub use source::{resolve_one, Location};
pub use tensor::ImageTensor;
pub use types::{ResolveBundle, ResolveRequest};

/// Browser-like User-Agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Status string reported when at least one entry resolved
pub const OK_STATUS: &str = "OK";

/// Default fallback status when no entry resolves ("No valid image links found")
pub const DEFAULT_ERROR_MESSAGE: &str = "未找到有效的图像链接";
