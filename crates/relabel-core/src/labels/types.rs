//! Identifier type, entry view, and registry construction errors.

use serde::Serialize;

/// Class index of a relation label. Signed so it lines up with the int64
/// class-index tensors classifier code passes around.
pub type LabelId = i64;

/// Sentinel label for "no relation holds between the two entities".
pub const NO_RELATION: &str = "no_relation";

// ==============================================================================
// Entries
// ==============================================================================

/// A single `(label, id)` pair of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RelationEntry<'a> {
    pub label: &'a str,
    pub id: LabelId,
}

impl std::fmt::Display for RelationEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.label, self.id)
    }
}

// ==============================================================================
// Construction Errors
// ==============================================================================

/// Reasons a forward table cannot be inverted into a bijection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("label table is empty")]
    Empty,

    #[error("duplicate label `{0}`")]
    DuplicateLabel(String),

    #[error("id {id} assigned to both `{first}` and `{second}`")]
    DuplicateId {
        id: LabelId,
        first: String,
        second: String,
    },

    #[error("id {id} of `{label}` is outside 0..{len}")]
    IdOutOfRange {
        label: String,
        id: LabelId,
        len: usize,
    },
}
