use crate::labels::LabelId;

/// Lookup miss in either direction of a [`LabelRegistry`](crate::LabelRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown relation label: {0}")]
    UnknownLabel(String),

    #[error("relation id out of range: {0}")]
    UnknownId(LabelId),
}
