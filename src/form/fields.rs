//! Predicates over groups of fields, e.g. to enable a submit button only once
//! something changed.

use crate::domain::Normalizer;

use super::field::{FieldSnapshot, FieldState};

/// Derived change flags of a field.
pub trait FieldFlags {
    fn changed(&self) -> bool;
    fn unchanged(&self) -> bool;
    fn empty(&self) -> bool;
}

impl<N: Normalizer> FieldFlags for FieldState<N> {
    fn changed(&self) -> bool {
        FieldState::changed(self)
    }

    fn unchanged(&self) -> bool {
        FieldState::unchanged(self)
    }

    fn empty(&self) -> bool {
        FieldState::empty(self)
    }
}

impl<V> FieldFlags for FieldSnapshot<V> {
    fn changed(&self) -> bool {
        self.changed
    }

    fn unchanged(&self) -> bool {
        self.unchanged
    }

    fn empty(&self) -> bool {
        self.empty
    }
}

impl<T: FieldFlags + ?Sized> FieldFlags for &T {
    fn changed(&self) -> bool {
        (**self).changed()
    }

    fn unchanged(&self) -> bool {
        (**self).unchanged()
    }

    fn empty(&self) -> bool {
        (**self).empty()
    }
}

pub fn all_unchanged<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldFlags,
{
    fields.into_iter().all(|field| field.unchanged())
}

pub fn all_empty<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldFlags,
{
    fields.into_iter().all(|field| field.empty())
}

pub fn any_empty<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldFlags,
{
    fields.into_iter().any(|field| field.empty())
}

pub fn any_unchanged<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldFlags,
{
    fields.into_iter().any(|field| field.unchanged())
}

pub fn any_changed<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldFlags,
{
    fields.into_iter().any(|field| field.changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{NumberField, TextField};

    #[test]
    fn mixed_kinds_through_trait_objects() {
        let mut name = TextField::new("name", Some("ann".to_string()));
        let age = NumberField::new("age", None);

        let group: [&dyn FieldFlags; 2] = [&name, &age];
        assert!(all_unchanged(group));
        assert!(any_empty(group));
        assert!(!all_empty(group));
        assert!(!any_changed(group));

        name.handle_input("bob");
        let group: [&dyn FieldFlags; 2] = [&name, &age];
        assert!(any_changed(group));
        assert!(any_unchanged(group));
        assert!(!all_unchanged(group));
    }

    #[test]
    fn empty_group_follows_iterator_semantics() {
        let none: Vec<TextField> = Vec::new();
        assert!(all_unchanged(&none));
        assert!(all_empty(&none));
        assert!(!any_empty(&none));
        assert!(!any_changed(&none));
        assert!(!any_unchanged(&none));
    }

    #[test]
    fn snapshots_carry_flags() {
        let mut field = NumberField::new("n", None);
        field.handle_input("3");
        let snaps = vec![field.snapshot()];
        assert!(any_changed(&snaps));
        assert!(!any_empty(&snaps));
    }
}
