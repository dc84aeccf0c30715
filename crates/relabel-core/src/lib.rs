pub mod error;
pub mod labels;

pub use error::CoreError;
pub use labels::{id_of, label_of, LabelId, LabelRegistry, RegistryError, RelationEntry};
