//! Ordered field list plus the current selection.
//!
//! Every mutation goes through `&mut self`, so the component layer only ever
//! applies one update at a time to the latest state (`Signal::write`).

use chrono::Utc;
use dioxus::logger::tracing::{debug, warn};
use std::collections::HashSet;

use super::field::{Field, FieldId, FieldKind, FieldUpdate, PropertyChange};
use crate::error::{BuilderError, BuilderResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldStore {
    fields: Vec<Field>,
    selected: Option<FieldId>,
    next_seq: u64,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records. Ids must be distinct.
    pub fn with_fields(fields: Vec<Field>) -> BuilderResult<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.clone()) {
                return Err(BuilderError::DuplicateField {
                    id: field.id.to_string(),
                });
            }
        }
        Ok(Self {
            fields,
            selected: None,
            next_seq: 0,
        })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn index_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    pub fn selected_field_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.field(id))
    }

    fn next_id(&mut self, kind: FieldKind) -> FieldId {
        let stamp = Utc::now().timestamp_millis();
        loop {
            self.next_seq += 1;
            let id = FieldId::new(format!("{}-{}-{}", kind, stamp, self.next_seq));
            if self.field(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a field with the kind's defaults and select it
    pub fn add_field(&mut self, kind: FieldKind) -> Field {
        let field = Field {
            id: self.next_id(kind),
            label: kind.default_label(),
            required: false,
            value: kind.default_value(),
            properties: kind.default_properties(),
        };
        debug!(id = %field.id, kind = %kind, "add field");

        self.fields.push(field.clone());
        self.selected = Some(field.id.clone());
        field
    }

    /// Returns `Ok(false)` when no field has `id`
    pub fn update_field(&mut self, id: &FieldId, update: FieldUpdate) -> BuilderResult<bool> {
        let Some(field) = self.fields.iter_mut().find(|f| &f.id == id) else {
            return Ok(false);
        };
        field.merge(update)?;
        Ok(true)
    }

    /// Returns `Ok(false)` when no field has `id`
    pub fn apply_property_change(&mut self, id: &FieldId, change: &PropertyChange) -> BuilderResult<bool> {
        let Some(field) = self.fields.iter_mut().find(|f| &f.id == id) else {
            return Ok(false);
        };
        if let Err(err) = field.apply(change) {
            warn!(%id, %err, "rejected property change");
            return Err(err);
        }
        Ok(true)
    }

    /// Take the record at `from` out and reinsert it at `to`.
    pub fn move_field(&mut self, from: usize, to: usize) -> BuilderResult<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                warn!(from, to, len, "rejected move");
                return Err(BuilderError::index_out_of_range(index, len));
            }
        }
        if from == to {
            return Ok(());
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        debug!(from, to, "move field");
        Ok(())
    }

    /// Returns whether a record was removed
    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| &f.id != id);

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }

        let removed = self.fields.len() != before;
        if removed {
            debug!(%id, "remove field");
        }
        removed
    }

    /// Select a field present in the list, or clear the selection with `None`
    pub fn set_selected_field_id(&mut self, id: Option<FieldId>) -> BuilderResult<()> {
        if let Some(id) = &id {
            if self.field(id).is_none() {
                warn!(%id, "rejected selection of unknown field");
                return Err(BuilderError::unknown_field(id.as_str()));
            }
        }
        self.selected = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::field::{FieldProperties, FieldValue, TextProperties};
    use pretty_assertions::assert_eq;

    fn ids(store: &FieldStore) -> Vec<FieldId> {
        store.fields().iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_add_field_unique_ids() {
        let mut store = FieldStore::new();
        for kind in FieldKind::ALL.into_iter().cycle().take(50) {
            store.add_field(kind);
        }
        assert_eq!(store.len(), 50);

        let unique: HashSet<FieldId> = ids(&store).into_iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_add_field_selects_and_prefixes() {
        let mut store = FieldStore::new();
        let field = store.add_field(FieldKind::Number);
        assert!(field.id.as_str().starts_with("number-"));
        assert_eq!(field.label, "New number field");
        assert!(!field.required);
        assert_eq!(store.selected_field_id(), Some(&field.id));
        assert_eq!(store.selected_field(), Some(&field));
    }

    #[test]
    fn test_move_and_back_restores_order() {
        let mut store = FieldStore::new();
        for _ in 0..5 {
            store.add_field(FieldKind::Text);
        }
        let original = ids(&store);

        store.move_field(0, 3).unwrap();
        assert_ne!(ids(&store), original);
        assert_eq!(ids(&store)[3], original[0]);
        assert_eq!(ids(&store)[0], original[1]);

        store.move_field(3, 0).unwrap();
        assert_eq!(ids(&store), original);
    }

    #[test]
    fn test_move_is_relocation_not_swap() {
        let mut store = FieldStore::new();
        for _ in 0..3 {
            store.add_field(FieldKind::Text);
        }
        let [a, b, c]: [FieldId; 3] = ids(&store).try_into().unwrap();

        store.move_field(2, 0).unwrap();
        assert_eq!(ids(&store), vec![c, a, b]);
    }

    #[test]
    fn test_move_out_of_range_rejected() {
        let mut store = FieldStore::new();
        store.add_field(FieldKind::Text);
        store.add_field(FieldKind::Radio);
        let before = ids(&store);

        assert_eq!(store.move_field(0, 2), Err(BuilderError::index_out_of_range(2, 2)));
        assert_eq!(store.move_field(7, 0), Err(BuilderError::index_out_of_range(7, 2)));
        assert_eq!(ids(&store), before);
        assert!(FieldStore::new().move_field(0, 0).is_err());
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut store = FieldStore::new();
        let first = store.add_field(FieldKind::Text);
        let second = store.add_field(FieldKind::Select);

        assert!(store.remove_field(&first.id));
        assert_eq!(store.selected_field_id(), Some(&second.id));

        assert!(store.remove_field(&second.id));
        assert_eq!(store.selected_field_id(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = FieldStore::new();
        let field = store.add_field(FieldKind::Text);
        assert!(!store.remove_field(&FieldId::new("missing")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_field_id(), Some(&field.id));
    }

    #[test]
    fn test_update_label_only() {
        let mut store = FieldStore::new();
        store.add_field(FieldKind::Text);
        let target = store.add_field(FieldKind::File);
        store.add_field(FieldKind::Radio);
        let before = store.clone();

        assert_eq!(store.update_field(&target.id, FieldUpdate::label("X")), Ok(true));

        let updated = store.field(&target.id).unwrap();
        assert_eq!(updated.label, "X");
        assert_eq!(updated.required, target.required);
        assert_eq!(updated.value, target.value);
        assert_eq!(updated.properties, target.properties);
        assert_eq!(ids(&store), ids(&before));
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = FieldStore::new();
        store.add_field(FieldKind::Text);
        let before = store.clone();
        assert_eq!(store.update_field(&FieldId::new("nope"), FieldUpdate::label("X")), Ok(false));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_value() {
        let mut store = FieldStore::new();
        let field = store.add_field(FieldKind::Text);
        store
            .update_field(&field.id, FieldUpdate::value(FieldValue::Text("hello".into())))
            .unwrap();
        assert_eq!(store.field(&field.id).unwrap().value.as_text(), "hello");
    }

    #[test]
    fn test_update_value_must_fit_kind() {
        let mut store = FieldStore::new();
        let text = store.add_field(FieldKind::Text);
        let before = store.clone();

        let result = store.update_field(&text.id, FieldUpdate::value(FieldValue::Files(vec![])));
        assert!(matches!(result, Err(BuilderError::KindMismatch { .. })));
        assert_eq!(store, before);

        let checkbox = store.add_field(FieldKind::Checkbox);
        assert_eq!(
            store.update_field(&checkbox.id, FieldUpdate::value(FieldValue::Choices(vec!["A".into()]))),
            Ok(true)
        );
    }

    #[test]
    fn test_property_change() {
        let mut store = FieldStore::new();
        let field = store.add_field(FieldKind::Text);

        assert_eq!(
            store.apply_property_change(&field.id, &PropertyChange::Placeholder("Your name".into())),
            Ok(true)
        );
        assert_eq!(
            store.field(&field.id).unwrap().properties,
            FieldProperties::Text(TextProperties {
                placeholder: "Your name".into(),
                max_length: 100
            })
        );
        assert!(store
            .apply_property_change(&field.id, &PropertyChange::Accept(".pdf".into()))
            .is_err());
        assert_eq!(
            store.apply_property_change(&FieldId::new("nope"), &PropertyChange::Required(true)),
            Ok(false)
        );
    }

    #[test]
    fn test_selection_validated() {
        let mut store = FieldStore::new();
        let first = store.add_field(FieldKind::Text);
        let second = store.add_field(FieldKind::Text);

        store.set_selected_field_id(Some(first.id.clone())).unwrap();
        assert_eq!(store.selected_field_id(), Some(&first.id));

        let err = store.set_selected_field_id(Some(FieldId::new("ghost"))).unwrap_err();
        assert_eq!(err, BuilderError::unknown_field("ghost"));
        assert_eq!(store.selected_field_id(), Some(&first.id));

        store.set_selected_field_id(None).unwrap();
        assert_eq!(store.selected_field_id(), None);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_with_fields_rejects_duplicates() {
        let mut seed = FieldStore::new();
        let field = seed.add_field(FieldKind::Text);

        let err = FieldStore::with_fields(vec![field.clone(), field.clone()]).unwrap_err();
        assert_eq!(err, BuilderError::DuplicateField { id: field.id.to_string() });

        let mut store = FieldStore::with_fields(vec![field.clone()]).unwrap();
        assert_eq!(store.selected_field_id(), None);
        let added = store.add_field(FieldKind::Text);
        assert_ne!(added.id, field.id);
    }
}
