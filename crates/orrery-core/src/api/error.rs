use thiserror::Error;

use crate::api::types::BodyId;

/// Errors raised while building the orrery from parameters or config.
///
/// Per-frame composition never returns these: a malformed table is rejected
/// up front, and anything that slips past is a precondition violation.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("parameter table is empty")]
    EmptyTable,

    #[error("reference body {0:?} is not in the table")]
    UnknownReference(BodyId),

    #[error("reference distance {0} must be finite and greater than zero")]
    InvalidReferenceDistance(f32),

    #[error("body {name:?} has a non-finite {field}")]
    NonFiniteParameter { name: String, field: &'static str },

    #[error("body {name:?} has a negative {field}")]
    NegativeParameter { name: String, field: &'static str },

    #[error("body {child:?} names parent {parent:?}, which does not precede it")]
    ParentOutOfOrder { child: BodyId, parent: BodyId },

    #[error("phase bound {0} must be finite and non-negative")]
    InvalidPhaseBound(f32),

    #[error("catalogue entry {0:?} references an unknown parent")]
    UnknownParent(String),

    #[error("no body named {0:?}")]
    UnknownName(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
