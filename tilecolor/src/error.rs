use crate::model::{ColorIndex, VertexId};
use thiserror::Error;

/// Outcome of a coloring attempt that did not produce an assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// Search ended without a total valid assignment. Not fatal; callers keep
    /// whatever assignment they had before the attempt.
    #[error("no valid coloring found after {steps} steps (budget exhausted: {budget_exhausted})")]
    NoValidColoring { steps: u64, budget_exhausted: bool },

    #[error("pinned vertex {vertex} is not in a graph of {vertex_count} vertices")]
    InvalidPin { vertex: VertexId, vertex_count: usize },

    #[error("pinned color {color} is outside a palette of {palette_len} colors")]
    InvalidColor { color: ColorIndex, palette_len: usize },

    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

impl AssignError {
    pub fn is_no_coloring(&self) -> bool {
        matches!(self, AssignError::NoValidColoring { .. })
    }
}

/// Construction defect in a region graph. Never a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("edge {from} -> {to} has no reverse edge")]
    AsymmetricEdge { from: VertexId, to: VertexId },

    #[error("vertex {vertex} lists itself as a neighbor")]
    SelfLoop { vertex: VertexId },

    #[error("vertex {from} lists missing neighbor {to}")]
    DanglingEdge { from: VertexId, to: VertexId },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error(
        "palette has {0} colors; at most {max} are supported",
        max = crate::limits::MAX_PALETTE
    )]
    PaletteTooLarge(usize),

    #[error("duplicate palette color '{0}'")]
    DuplicateColor(String),

    #[error("invalid hex value '{hex}' for color '{name}'")]
    InvalidHex { name: String, hex: String },

    #[error("anchor color '{0}' is not in the palette")]
    UnknownAnchorColor(String),

    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}
