//! Batch resolution of image locations
//!
//! This module provides the main entry point for resolving a multi-line
//! block of image locations. Per-entry fetch and decode logic lives in
//! the [`source`](crate::source) module.

use crate::error::ResolveError;
use crate::source;
use crate::tensor::ImageTensor;
use crate::types::{ResolveBundle, ResolveRequest};
use crate::OK_STATUS;
use tracing::warn;

/// Resolve every location in the request and aggregate the results
///
/// Entries are processed strictly in input order, one at a time. A
/// failing entry is logged and skipped; it never aborts the batch. The
/// only batch-level failure is [`ResolveError::NoValidImages`], raised
/// when zero entries resolve and the request opted into strict mode.
pub async fn resolve(req: ResolveRequest) -> Result<ResolveBundle, ResolveError> {
    let entries: Vec<&str> = req
        .imgurl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let total_count = entries.len();

    let mut images = Vec::new();
    let mut valid_locations = Vec::new();

    for entry in &entries {
        match source::resolve_one(entry).await {
            Ok(image) => {
                images.push(ImageTensor::from_image(&image));
                valid_locations.push(*entry);
            }
            Err(err) => {
                // Failure text is logged only; the bundle reports counts
                warn!(location = *entry, error = %err, "entry failed to resolve");
            }
        }
    }

    let valid_count = images.len();
    let status = if valid_count < 1 {
        req.error_message.clone()
    } else {
        OK_STATUS.to_string()
    };

    if valid_count < 1 && req.throw_error {
        return Err(ResolveError::NoValidImages(status));
    }

    Ok(ResolveBundle {
        images,
        status,
        valid_count: valid_count.to_string(),
        total_count: total_count.to_string(),
        valid_locations: valid_locations.join("\n"),
    })
}
