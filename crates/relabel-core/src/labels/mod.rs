//! Relation label registry.
//!
//! Maps relation-extraction labels such as `per:title` to the class ids a
//! relation classifier is trained against, and back. The built-in
//! vocabulary is TACRED's 42 relations with `no_relation` at id 0.

mod registry;
pub mod tacred;
mod types;

pub use registry::LabelRegistry;
pub use types::{LabelId, RegistryError, RelationEntry, NO_RELATION};

use crate::error::CoreError;

/// Class id of a TACRED relation label.
pub fn id_of(label: &str) -> Result<LabelId, CoreError> {
    LabelRegistry::tacred().id_of(label)
}

/// TACRED relation label for a class id.
pub fn label_of(id: LabelId) -> Result<&'static str, CoreError> {
    LabelRegistry::tacred().label_of(id)
}
