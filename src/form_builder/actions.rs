//! The one place UI events turn into store mutations.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::form_fields::ShellDrag;
use crate::state::{
    DragController, DragItem, Field, FieldId, FieldKind, FieldStore, FieldUpdate, FieldValue,
    PreviewContext, PropertyChange,
};

/// Handle bundling the builder's state. Copy it into event handlers freely.
#[derive(Clone, Copy, PartialEq)]
pub struct BuilderActions {
    store: Signal<FieldStore>,
    drag: Signal<DragController>,
    preview: PreviewContext,
    on_change: Option<EventHandler<Vec<Field>>>,
}

impl BuilderActions {
    pub fn new(
        store: Signal<FieldStore>,
        drag: Signal<DragController>,
        preview: PreviewContext,
        on_change: Option<EventHandler<Vec<Field>>>,
    ) -> Self {
        Self {
            store,
            drag,
            preview,
            on_change,
        }
    }

    pub fn store(&self) -> Signal<FieldStore> {
        self.store
    }

    pub fn drag(&self) -> Signal<DragController> {
        self.drag
    }

    pub fn preview(&self) -> PreviewContext {
        self.preview
    }

    /// Run `f` against the latest store and report list changes to the host
    fn mutate<R>(&self, f: impl FnOnce(&mut FieldStore) -> R) -> R {
        let mut store = self.store;
        let (result, changed) = {
            let mut state = store.write();
            let before = state.fields().to_vec();
            let result = f(&mut *state);
            let changed = state.fields() != before.as_slice();
            (result, changed)
        };

        if changed {
            if let Some(on_change) = self.on_change {
                on_change.call(store.read().fields().to_vec());
            }
        }
        result
    }

    pub fn add_field(&self, kind: FieldKind) -> Field {
        self.mutate(|store| store.add_field(kind))
    }

    pub fn select(&self, id: FieldId) {
        if let Err(err) = self.mutate(|store| store.set_selected_field_id(Some(id))) {
            warn!(%err, "select failed");
        }
    }

    /// Value edits land in the record while editing and in the form data while previewing
    pub fn set_value(&self, id: FieldId, value: FieldValue) {
        if self.preview.is_preview() {
            self.preview.update_form_data(id, value);
            return;
        }
        if let Err(err) = self.mutate(|store| store.update_field(&id, FieldUpdate::value(value))) {
            warn!(%err, "value update failed");
        }
    }

    pub fn apply_property(&self, id: FieldId, change: PropertyChange) {
        // The store already logs rejected edits
        let _ = self.mutate(|store| store.apply_property_change(&id, &change));
    }

    pub fn remove(&self, id: FieldId) {
        self.mutate(|store| store.remove_field(&id));
    }

    pub fn begin_new_field_drag(&self, kind: FieldKind) {
        let mut drag = self.drag;
        drag.write().begin(DragItem::NewField(kind));
    }

    pub fn end_drag(&self) {
        let mut drag = self.drag;
        if drag.peek().active().is_some() {
            drag.write().end();
        }
    }

    /// Something was dropped on the canvas itself, outside any shell
    pub fn drop_on_canvas(&self) {
        let mut drag = self.drag;
        let kind = drag.write().drop_item();
        if let Some(kind) = kind {
            self.add_field(kind);
        }
    }

    /// Route one shell drag event for the field `id` rendered at `index`
    pub fn shell_drag(&self, id: FieldId, index: usize, event: ShellDrag) {
        let mut drag = self.drag;
        let foreign = drag.peek().active().is_none();
        match event {
            ShellDrag::Hover | ShellDrag::Drop if foreign => {}
            ShellDrag::Start => drag.write().begin(DragItem::Existing { id, index }),
            ShellDrag::Hover => {
                if !drag.peek().needs_hover(&id, index) {
                    return;
                }
                let moved = self.mutate(|store| drag.write().hover(store, &id, index));
                if let Err(err) = moved {
                    warn!(%err, "hover reorder failed");
                }
            }
            ShellDrag::Leave => {
                if drag.peek().is_over(&id) {
                    drag.write().leave(&id);
                }
            }
            ShellDrag::Drop => self.drop_on_canvas(),
            ShellDrag::End => self.end_drag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{use_drag, use_preview, DndProvider, PreviewProvider};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    thread_local! {
        static ACTIONS: RefCell<Option<BuilderActions>> = RefCell::new(None);
        static CHANGES: RefCell<Vec<Vec<Field>>> = RefCell::new(Vec::new());
    }

    #[component]
    fn Harness() -> Element {
        let preview = use_preview();
        let drag = use_drag();
        let store = use_signal(FieldStore::new);
        let on_change = use_hook(|| {
            EventHandler::new(|fields: Vec<Field>| CHANGES.with(|c| c.borrow_mut().push(fields)))
        });
        ACTIONS.with(|a| *a.borrow_mut() = Some(BuilderActions::new(store, drag, preview, Some(on_change))));
        rsx! {}
    }

    #[component]
    fn App() -> Element {
        rsx! {
            PreviewProvider {
                DndProvider { Harness {} }
            }
        }
    }

    fn mount() -> (VirtualDom, BuilderActions) {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        let actions = ACTIONS.with(|a| *a.borrow()).expect("harness rendered");
        (dom, actions)
    }

    fn change_count() -> usize {
        CHANGES.with(|c| c.borrow().len())
    }

    fn order(actions: &BuilderActions) -> Vec<FieldId> {
        actions.store().read().fields().iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_values_follow_the_mode() {
        let (dom, actions) = mount();
        dom.in_runtime(|| {
            let field = actions.add_field(FieldKind::Text);

            actions.set_value(field.id.clone(), FieldValue::Text("default".into()));
            assert_eq!(
                actions.store().read().field(&field.id).unwrap().value,
                FieldValue::Text("default".into())
            );
            assert_eq!(actions.preview().value(&field.id), None);

            actions.preview().toggle_preview();
            actions.set_value(field.id.clone(), FieldValue::Text("typed".into()));
            assert_eq!(actions.preview().value(&field.id), Some(FieldValue::Text("typed".into())));
            assert_eq!(
                actions.store().read().field(&field.id).unwrap().value,
                FieldValue::Text("default".into())
            );
        });
    }

    #[test]
    fn test_on_change_only_for_list_changes() {
        let (dom, actions) = mount();
        dom.in_runtime(|| {
            let first = actions.add_field(FieldKind::Text);
            let second = actions.add_field(FieldKind::Select);
            assert_eq!(change_count(), 2);

            actions.select(first.id.clone());
            assert_eq!(actions.store().read().selected_field_id(), Some(&first.id));
            assert_eq!(change_count(), 2);

            actions.apply_property(second.id.clone(), PropertyChange::Label("Country".into()));
            assert_eq!(change_count(), 3);
            let last = CHANGES.with(|c| c.borrow().last().cloned()).unwrap();
            assert_eq!(last[1].label, "Country");

            // Rejected edits leave the list alone
            actions.apply_property(second.id.clone(), PropertyChange::Rows(4));
            assert_eq!(change_count(), 3);

            actions.preview().toggle_preview();
            actions.set_value(first.id.clone(), FieldValue::Text("typed".into()));
            assert_eq!(change_count(), 3);

            actions.remove(first.id.clone());
            assert_eq!(change_count(), 4);
        });
    }

    #[test]
    fn test_shell_hover_reorders_once() {
        let (dom, actions) = mount();
        dom.in_runtime(|| {
            let ids: Vec<_> = (0..3).map(|_| actions.add_field(FieldKind::Number).id).collect();
            let changes = change_count();

            actions.shell_drag(ids[0].clone(), 0, ShellDrag::Start);
            actions.shell_drag(ids[1].clone(), 1, ShellDrag::Hover);
            assert_eq!(order(&actions), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
            assert_eq!(change_count(), changes + 1);

            // The same hover repeated by the browser is skipped
            actions.shell_drag(ids[1].clone(), 1, ShellDrag::Hover);
            assert_eq!(order(&actions), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
            assert_eq!(change_count(), changes + 1);

            actions.shell_drag(ids[0].clone(), 1, ShellDrag::End);
            assert_eq!(actions.drag().read().active(), None);
        });
    }

    #[test]
    fn test_hover_without_gesture_is_ignored() {
        let (dom, actions) = mount();
        dom.in_runtime(|| {
            let ids: Vec<_> = (0..2).map(|_| actions.add_field(FieldKind::File).id).collect();
            let changes = change_count();

            actions.shell_drag(ids[1].clone(), 1, ShellDrag::Hover);
            actions.shell_drag(ids[1].clone(), 1, ShellDrag::Drop);

            assert!(!actions.drag().read().is_over(&ids[1]));
            assert_eq!(order(&actions), ids);
            assert_eq!(change_count(), changes);
        });
    }

    #[test]
    fn test_toolbox_drop_adds_field() {
        let (dom, actions) = mount();
        dom.in_runtime(|| {
            actions.begin_new_field_drag(FieldKind::Radio);
            actions.drop_on_canvas();
            let store = actions.store();
            let store = store.read();
            assert_eq!(store.len(), 1);
            assert_eq!(store.fields()[0].kind(), FieldKind::Radio);
            assert_eq!(store.selected_field_id(), Some(&store.fields()[0].id));
        });
    }
}
