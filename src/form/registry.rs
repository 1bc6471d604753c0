//! Identity-keyed field registries
//!
//! A `Registry` maps `FieldId` handles to field states. It is persistent:
//! every "modification" returns a new registry, and only the touched entry
//! is new. Sibling entries are shared by reference with the registry the
//! modification started from.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::error::FormError;
use super::field::{FieldId, FieldSlot, FieldState, FormValue};
use super::status::FieldStatus;

/// Insertion-ordered, copy-on-write mapping from field handles to state
#[derive(Clone, Default)]
pub struct Registry {
    entries: Arc<IndexMap<FieldId, Arc<dyn FieldSlot>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.keys().copied()
    }

    /// Typed view of a registered field.
    ///
    /// Returns `None` when the handle is absent or was registered with a
    /// different value type.
    pub fn field<A: FormValue>(&self, id: FieldId) -> Option<&FieldState<A>> {
        self.entries
            .get(&id)?
            .as_any()
            .downcast_ref::<FieldState<A>>()
    }

    /// Status of the whole registry; an empty registry is pristine
    pub fn status(&self) -> FieldStatus {
        FieldStatus::combine_all(self.entries.values().map(|slot| slot.status()))
    }

    /// Errors of every registered field, in insertion order
    pub fn errors(&self) -> Vec<FormError> {
        self.entries
            .values()
            .flat_map(|slot| slot.errors().iter().cloned())
            .collect()
    }

    pub(crate) fn slot(&self, id: FieldId) -> Option<&Arc<dyn FieldSlot>> {
        self.entries.get(&id)
    }

    pub(crate) fn slots(&self) -> impl Iterator<Item = (FieldId, &Arc<dyn FieldSlot>)> + '_ {
        self.entries.iter().map(|(id, slot)| (*id, slot))
    }

    /// Registry holding a single field
    pub(crate) fn singleton(id: FieldId, slot: Arc<dyn FieldSlot>) -> Self {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(id, slot);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Copy of this registry with one entry inserted or replaced.
    ///
    /// Replacing keeps the entry's position.
    pub(crate) fn with_slot(&self, id: FieldId, slot: Arc<dyn FieldSlot>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(id, slot);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Union of two registries.
    ///
    /// Entries of `other` win on a shared handle. When either side is empty
    /// the other side's map is shared as is.
    pub(crate) fn union(&self, other: &Registry) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut entries = (*self.entries).clone();
        entries.extend(other.entries.iter().map(|(id, slot)| (*id, slot.clone())));
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Whether both registries are the very same map
    pub fn shares_storage_with(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(id, slot)| (id, slot.status())))
            .finish()
    }
}

/// Payload of an interior form node
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub(crate) is_submitted: bool,
    pub(crate) fields: Registry,
}

impl FormState {
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn fields(&self) -> &Registry {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{accept_text, int_validator};

    fn text_slot() -> Arc<dyn FieldSlot> {
        Arc::new(FieldState::<String>::new(Arc::new(accept_text)))
    }

    fn number_slot() -> Arc<dyn FieldSlot> {
        Arc::new(FieldState::<i64>::new(Arc::new(int_validator)))
    }

    #[test]
    fn test_empty_registry_is_pristine() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.status(), FieldStatus::Pristine);
        assert!(registry.errors().is_empty());
    }

    #[test]
    fn test_with_slot_shares_siblings() {
        let name = FieldId::mint();
        let age = FieldId::mint();
        let registry = Registry::singleton(name, text_slot()).with_slot(age, number_slot());

        let updated_age = registry.slot(age).unwrap().revalidate("27");
        let updated = registry.with_slot(age, updated_age);

        assert!(Arc::ptr_eq(
            registry.slot(name).unwrap(),
            updated.slot(name).unwrap()
        ));
        assert!(!Arc::ptr_eq(
            registry.slot(age).unwrap(),
            updated.slot(age).unwrap()
        ));
        assert_eq!(registry.field::<i64>(age).unwrap().value(), None);
        assert_eq!(updated.field::<i64>(age).unwrap().value(), Some(&27));
    }

    #[test]
    fn test_replace_keeps_position() {
        let first = FieldId::mint();
        let second = FieldId::mint();
        let registry = Registry::singleton(first, text_slot()).with_slot(second, text_slot());
        let updated = registry.with_slot(first, text_slot().revalidate("x"));
        assert_eq!(updated.ids().collect::<Vec<_>>(), vec![first, second]);
    }

    #[test]
    fn test_union_with_empty_shares_storage() {
        let registry = Registry::singleton(FieldId::mint(), text_slot());
        assert!(registry.union(&Registry::new()).shares_storage_with(&registry));
        assert!(Registry::new().union(&registry).shares_storage_with(&registry));
    }

    #[test]
    fn test_union_keeps_order() {
        let a = FieldId::mint();
        let b = FieldId::mint();
        let c = FieldId::mint();
        let left = Registry::singleton(a, text_slot()).with_slot(b, text_slot());
        let right = Registry::singleton(c, number_slot());
        let union = left.union(&right);
        assert_eq!(union.ids().collect::<Vec<_>>(), vec![a, b, c]);
    }

    #[test]
    fn test_typed_lookup_rejects_wrong_type() {
        let age = FieldId::mint();
        let registry = Registry::singleton(age, number_slot());
        assert!(registry.field::<i64>(age).is_some());
        assert!(registry.field::<String>(age).is_none());
        assert!(registry.field::<i64>(FieldId::mint()).is_none());
    }

    #[test]
    fn test_status_and_errors_aggregate() {
        let name = FieldId::mint();
        let age = FieldId::mint();
        let registry = Registry::singleton(name, text_slot().revalidate("John"))
            .with_slot(age, number_slot().revalidate("abc"));
        assert_eq!(registry.status(), FieldStatus::Dirty);
        let errors = registry.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "invalidNumber");
    }
}
