//! Host node declaration for the imgbatch resolver
//!
//! A node-graph host consumes three things from a plugin node: a typed
//! input record, a positionally-ordered list of output descriptors, and
//! an entry-point operation. This crate declares all three for the
//! batch image resolver and delegates execution to the `imgbatch`
//! crate, so the resolution logic stays testable without any host.
//!
//! Output order matters: hosts bind outputs by position, not by name.
//! The first output is list-valued — the host must treat it as N
//! independent items (one tensor per resolved image), never as a
//! single aggregate value.

use imgbatch::{resolve, ResolveBundle, ResolveError, ResolveRequest};
use schemars::schema_for;
use serde::{Deserialize, Serialize};

/// Node key the host registers the entry point under
pub const NODE_KEY: &str = "LoadImagesFromUrl";

/// Human-readable node title
pub const NODE_DISPLAY_NAME: &str = "Load Images From URL";

/// Menu category the node appears under
pub const NODE_CATEGORY: &str = "image/loaders";

/// Value kind of one node output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// A decoded image tensor
    Image,
    /// A plain string
    Text,
}

/// One positional output slot of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    /// Slot name shown by the host
    pub name: &'static str,
    /// Value kind of the slot
    pub kind: OutputKind,
    /// True when the slot carries N independent items instead of one value
    pub is_list: bool,
}

/// The node's five outputs, in host binding order
pub const OUTPUTS: &[OutputSpec] = &[
    OutputSpec {
        name: "images",
        kind: OutputKind::Image,
        is_list: true,
    },
    OutputSpec {
        name: "status",
        kind: OutputKind::Text,
        is_list: false,
    },
    OutputSpec {
        name: "valid_count",
        kind: OutputKind::Text,
        is_list: false,
    },
    OutputSpec {
        name: "total_count",
        kind: OutputKind::Text,
        is_list: false,
    },
    OutputSpec {
        name: "valid_locations",
        kind: OutputKind::Text,
        is_list: false,
    },
];

/// Declaration of the batch image resolver node
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeSpec;

impl NodeSpec {
    pub fn new() -> Self {
        Self
    }

    /// Key the host dispatches execution by
    pub fn key(&self) -> &'static str {
        NODE_KEY
    }

    /// Title shown in the host's node palette
    pub fn display_name(&self) -> &'static str {
        NODE_DISPLAY_NAME
    }

    /// Palette category
    pub fn category(&self) -> &'static str {
        NODE_CATEGORY
    }

    /// JSON schema of the input record (`imgurl`, `error_message`,
    /// `throw_error`), including host-contract defaults
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(ResolveRequest);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Output descriptors in host binding order
    pub fn outputs(&self) -> &'static [OutputSpec] {
        OUTPUTS
    }

    /// The node's entry point
    ///
    /// Succeeds with an empty bundle when nothing resolves, unless the
    /// request opted into strict mode.
    pub async fn execute(&self, req: ResolveRequest) -> Result<ResolveBundle, ResolveError> {
        tracing::debug!(node = NODE_KEY, "executing");
        resolve(req).await
    }
}
