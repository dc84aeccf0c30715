//! `LabelRegistry`: a validated bijection between relation labels and
//! contiguous class ids.
//!
//! The reverse table is derived from the forward table once, at
//! construction, and is rejected rather than silently overwritten when the
//! forward table is not a bijection onto `0..len`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::CoreError;

use super::tacred::TACRED_RELATIONS;
use super::types::{LabelId, RegistryError, RelationEntry, NO_RELATION};

static TACRED: OnceLock<LabelRegistry> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRegistry {
    by_label: HashMap<String, LabelId>,
    by_id: Vec<String>,
}

impl LabelRegistry {
    /// The shared registry over the built-in TACRED vocabulary, built on
    /// first access.
    pub fn tacred() -> &'static LabelRegistry {
        TACRED.get_or_init(|| {
            LabelRegistry::from_entries(TACRED_RELATIONS)
                .expect("built-in TACRED table is a bijection")
        })
    }

    /// Build a registry from a forward `(label, id)` table. Ids must cover
    /// `0..entries.len()` exactly once and labels must be unique.
    pub fn from_entries(entries: &[(&str, LabelId)]) -> Result<Self, RegistryError> {
        let registry = invert(entries).inspect_err(|err| {
            tracing::warn!(error = %err, entries = entries.len(), "rejected label table");
        })?;

        tracing::debug!(
            labels = registry.len(),
            no_relation = ?registry.no_relation_id(),
            "built label registry"
        );
        Ok(registry)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Class id of `label`, or [`CoreError::UnknownLabel`] if it is not in
    /// the vocabulary.
    pub fn id_of(&self, label: &str) -> Result<LabelId, CoreError> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| CoreError::UnknownLabel(label.to_string()))
    }

    /// Label assigned to `id`, or [`CoreError::UnknownId`] outside `0..len`.
    pub fn label_of(&self, id: LabelId) -> Result<&str, CoreError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.by_id.get(index))
            .map(String::as_str)
            .ok_or(CoreError::UnknownId(id))
    }

    /// Encode a batch of labels. The first unknown label aborts the batch.
    pub fn encode_all<I, S>(&self, labels: I) -> Result<Vec<LabelId>, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.id_of(label.as_ref()))
            .collect()
    }

    /// Decode a batch of ids. The first out-of-range id aborts the batch.
    pub fn decode_all<I>(&self, ids: I) -> Result<Vec<&str>, CoreError>
    where
        I: IntoIterator<Item = LabelId>,
    {
        ids.into_iter().map(|id| self.label_of(id)).collect()
    }

    // ========================================================================
    // Vocabulary
    // ========================================================================

    /// Number of labels, which is also one past the largest id.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn contains_id(&self, id: LabelId) -> bool {
        self.label_of(id).is_ok()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = RelationEntry<'_>> + '_ {
        self.by_id
            .iter()
            .enumerate()
            .map(|(index, label)| RelationEntry {
                label: label.as_str(),
                id: LabelId::try_from(index).expect("ids were validated as LabelId in invert"),
            })
    }

    /// Labels in class-index order, i.e. the order of a classifier's logits.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.by_id.iter().map(String::as_str)
    }

    pub fn no_relation_id(&self) -> Option<LabelId> {
        self.by_label.get(NO_RELATION).copied()
    }

    pub fn is_no_relation(&self, id: LabelId) -> bool {
        self.no_relation_id() == Some(id)
    }
}

// ============================================================================
// Internal
// ============================================================================

fn invert(entries: &[(&str, LabelId)]) -> Result<LabelRegistry, RegistryError> {
    if entries.is_empty() {
        return Err(RegistryError::Empty);
    }

    let len = entries.len();
    let mut by_label: HashMap<String, LabelId> = HashMap::with_capacity(len);
    let mut slots: Vec<Option<String>> = vec![None; len];

    for &(label, id) in entries {
        if by_label.contains_key(label) {
            return Err(RegistryError::DuplicateLabel(label.to_string()));
        }

        let slot = usize::try_from(id)
            .ok()
            .and_then(|index| slots.get_mut(index))
            .ok_or_else(|| RegistryError::IdOutOfRange {
                label: label.to_string(),
                id,
                len,
            })?;
        if let Some(first) = slot {
            return Err(RegistryError::DuplicateId {
                id,
                first: first.clone(),
                second: label.to_string(),
            });
        }

        *slot = Some(label.to_string());
        by_label.insert(label.to_string(), id);
    }

    // `len` distinct in-range ids over `len` slots leave no slot empty.
    let by_id = slots.into_iter().flatten().collect();
    Ok(LabelRegistry { by_label, by_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_table_round_trips() {
        let registry = LabelRegistry::from_entries(&[("no_relation", 0), ("per:title", 1)])
            .expect("valid table");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.id_of("per:title"), Ok(1));
        assert_eq!(registry.label_of(0), Ok("no_relation"));
        assert_eq!(registry.no_relation_id(), Some(0));
        assert!(registry.is_no_relation(0));
        assert!(!registry.is_no_relation(1));
    }

    #[test]
    fn entry_order_does_not_matter() {
        let registry = LabelRegistry::from_entries(&[("b", 1), ("c", 2), ("a", 0)])
            .expect("valid table");

        assert_eq!(registry.labels().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(registry.no_relation_id(), None);
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(LabelRegistry::from_entries(&[]), Err(RegistryError::Empty));
    }

    #[test]
    fn rejects_duplicate_id_instead_of_overwriting() {
        let err = LabelRegistry::from_entries(&[("a", 0), ("b", 0)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                id: 0,
                first: "a".into(),
                second: "b".into(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_label() {
        let err = LabelRegistry::from_entries(&[("a", 0), ("a", 1)]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateLabel("a".into()));
    }

    #[test]
    fn rejects_gaps_and_negative_ids() {
        let gap = LabelRegistry::from_entries(&[("a", 0), ("b", 2)]).unwrap_err();
        assert!(matches!(gap, RegistryError::IdOutOfRange { id: 2, len: 2, .. }));

        let negative = LabelRegistry::from_entries(&[("a", -1)]).unwrap_err();
        assert!(matches!(negative, RegistryError::IdOutOfRange { id: -1, .. }));
    }

    #[test]
    fn batch_lookup_stops_at_first_miss() {
        let registry = LabelRegistry::tacred();

        assert_eq!(
            registry.encode_all(["per:title", "org:founded_by"]),
            Ok(vec![1, 25])
        );
        assert_eq!(
            registry.encode_all(["per:title", "per:favorite_color", "bogus"]),
            Err(CoreError::UnknownLabel("per:favorite_color".into()))
        );
        assert_eq!(
            registry.decode_all([40, 41]),
            Ok(vec!["org:dissolved", "per:country_of_death"])
        );
        assert_eq!(registry.decode_all([0, 99]), Err(CoreError::UnknownId(99)));
    }

    #[test]
    fn iterated_ids_agree_with_lookup() {
        let registry = LabelRegistry::from_entries(&[("x", 2), ("y", 0), ("z", 1)])
            .expect("valid table");

        let entries: Vec<_> = registry.iter().collect();
        assert_eq!(registry.iter().len(), 3);
        assert_eq!(
            entries.iter().map(|entry| entry.id).collect::<Vec<_>>(),
            [0, 1, 2]
        );
        for entry in entries {
            assert_eq!(registry.id_of(entry.label), Ok(entry.id));
        }
    }

    #[test]
    fn membership_checks_do_not_error() {
        let registry = LabelRegistry::tacred();
        assert!(registry.contains_label("org:website"));
        assert!(!registry.contains_label("ORG:WEBSITE"));
        assert!(registry.contains_id(41));
        assert!(!registry.contains_id(42));
        assert!(!registry.contains_id(-1));
    }
}
