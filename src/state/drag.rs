//! Drag gesture bookkeeping for reordering fields.
//!
//! Reorders happen while hovering, not on drop: each time the gesture enters
//! a shell at a different index, the store moves the dragged record there and
//! the gesture's tracked index follows it. A drag across several fields
//! therefore performs one move per crossed boundary.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::field::{FieldId, FieldKind};
use super::store::FieldStore;
use crate::error::{BuilderError, BuilderResult};

/// Item type tag shared by every drag source and drop target in the builder
pub const DRAG_ITEM_TYPE: &str = "FIELD";

#[derive(Clone, Debug, PartialEq)]
pub enum DragItem {
    /// A field already on the canvas, picked up by its grip
    Existing { id: FieldId, index: usize },
    /// A toolbox entry
    NewField(FieldKind),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragController {
    active: Option<DragItem>,
    over: Option<FieldId>,
}

impl DragController {
    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self, id: &FieldId) -> bool {
        matches!(&self.active, Some(DragItem::Existing { id: dragged, .. }) if dragged == id)
    }

    pub fn is_over(&self, id: &FieldId) -> bool {
        self.over.as_ref() == Some(id)
    }

    /// Whether a hover over `id` at `hover_index` would change anything.
    /// Lets callers skip writes for the stream of repeated hover events.
    pub fn needs_hover(&self, id: &FieldId, hover_index: usize) -> bool {
        self.active.is_some()
            && (!self.is_over(id)
                || matches!(&self.active, Some(DragItem::Existing { index, .. }) if *index != hover_index))
    }

    pub fn begin(&mut self, item: DragItem) {
        debug!(item_type = DRAG_ITEM_TYPE, ?item, "drag start");
        self.active = Some(item);
        self.over = None;
    }

    /// The gesture is hovering over the shell of `id`, currently at `hover_index`.
    ///
    /// Returns the `(from, to)` pair when a reorder was performed. Drags that
    /// were not started by a grip or the toolbox (files from the OS) are ignored.
    pub fn hover(
        &mut self,
        store: &mut FieldStore,
        id: &FieldId,
        hover_index: usize,
    ) -> BuilderResult<Option<(usize, usize)>> {
        if self.active.is_none() {
            return Ok(None);
        }
        self.over = Some(id.clone());

        let Some(DragItem::Existing { index, .. }) = self.active.as_mut() else {
            return Ok(None);
        };
        let drag_index = *index;
        if drag_index == hover_index {
            return Ok(None);
        }

        store.move_field(drag_index, hover_index)?;
        *index = hover_index;
        Ok(Some((drag_index, hover_index)))
    }

    pub fn leave(&mut self, id: &FieldId) {
        if self.over.as_ref() == Some(id) {
            self.over = None;
        }
    }

    /// Finish the gesture. A toolbox item dropped on the canvas yields the kind to add.
    pub fn drop_item(&mut self) -> Option<FieldKind> {
        let item = self.active.take();
        self.over = None;
        match item {
            Some(DragItem::NewField(kind)) => Some(kind),
            _ => None,
        }
    }

    /// Abandon the gesture without a drop. Hover reorders already applied stay.
    pub fn end(&mut self) {
        self.active = None;
        self.over = None;
    }
}

/// Visual state of one shell, derived from the store and the gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellFlags {
    pub dragging: bool,
    pub drag_over: bool,
    pub selected: bool,
}

impl ShellFlags {
    pub fn derive(id: &FieldId, store: &FieldStore, drag: &DragController) -> Self {
        Self {
            dragging: drag.is_dragging(id),
            drag_over: drag.is_over(id),
            selected: store.selected_field_id() == Some(id),
        }
    }
}

/// Hosts the drag gesture for everything rendered below it
#[component]
pub fn DndProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(DragController::default()));

    rsx! { {children} }
}

pub fn try_use_drag() -> BuilderResult<Signal<DragController>> {
    try_use_context::<Signal<DragController>>().ok_or(BuilderError::MissingDragProvider)
}

/// Panics when there is no `DndProvider` above the caller.
pub fn use_drag() -> Signal<DragController> {
    match try_use_drag() {
        Ok(drag) => drag,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(n: usize) -> (FieldStore, Vec<FieldId>) {
        let mut store = FieldStore::new();
        for _ in 0..n {
            store.add_field(FieldKind::Text);
        }
        let ids = store.fields().iter().map(|f| f.id.clone()).collect();
        (store, ids)
    }

    fn order(store: &FieldStore) -> Vec<FieldId> {
        store.fields().iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_drag_across_moves_once_per_boundary() {
        let (mut store, ids) = store_with(4);
        let mut drag = DragController::default();
        drag.begin(DragItem::Existing { id: ids[0].clone(), index: 0 });

        // Hovering the dragged shell itself does nothing
        assert_eq!(drag.hover(&mut store, &ids[0], 0), Ok(None));

        // The shell that was at index 1 is hovered, then the one now at 2, then 3
        assert_eq!(drag.hover(&mut store, &ids[1], 1), Ok(Some((0, 1))));
        assert_eq!(order(&store), vec![ids[1].clone(), ids[0].clone(), ids[2].clone(), ids[3].clone()]);

        assert_eq!(drag.hover(&mut store, &ids[2], 2), Ok(Some((1, 2))));
        assert_eq!(drag.hover(&mut store, &ids[3], 3), Ok(Some((2, 3))));
        assert_eq!(order(&store), vec![ids[1].clone(), ids[2].clone(), ids[3].clone(), ids[0].clone()]);

        // Repeated hover events over the same position are idempotent
        assert_eq!(drag.hover(&mut store, &ids[0], 3), Ok(None));
        assert_eq!(
            drag.active(),
            Some(&DragItem::Existing { id: ids[0].clone(), index: 3 })
        );

        drag.end();
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn test_toolbox_item_never_reorders() {
        let (mut store, ids) = store_with(2);
        let mut drag = DragController::default();
        drag.begin(DragItem::NewField(FieldKind::Radio));

        assert_eq!(drag.hover(&mut store, &ids[1], 1), Ok(None));
        assert_eq!(order(&store), ids);
        assert_eq!(drag.drop_item(), Some(FieldKind::Radio));
        assert_eq!(drag.drop_item(), None);
    }

    #[test]
    fn test_derived_flags() {
        let (mut store, ids) = store_with(2);
        let mut drag = DragController::default();

        drag.begin(DragItem::Existing { id: ids[0].clone(), index: 0 });
        drag.hover(&mut store, &ids[1], 1).unwrap();

        let dragged = ShellFlags::derive(&ids[0], &store, &drag);
        assert!(dragged.dragging);
        assert!(!dragged.drag_over);

        let hovered = ShellFlags::derive(&ids[1], &store, &drag);
        assert_eq!(hovered, ShellFlags { dragging: false, drag_over: true, selected: true });

        drag.leave(&ids[1]);
        assert!(!ShellFlags::derive(&ids[1], &store, &drag).drag_over);
    }

    #[test]
    fn test_needs_hover() {
        let (mut store, ids) = store_with(3);
        let mut drag = DragController::default();
        drag.begin(DragItem::Existing { id: ids[0].clone(), index: 0 });

        assert!(drag.needs_hover(&ids[1], 1));
        drag.hover(&mut store, &ids[1], 1).unwrap();
        assert!(!drag.needs_hover(&ids[1], 1));
        assert!(drag.needs_hover(&ids[2], 2));
    }

    #[test]
    fn test_foreign_drag_is_ignored() {
        let (mut store, ids) = store_with(2);
        let mut drag = DragController::default();

        assert!(!drag.needs_hover(&ids[1], 1));
        assert_eq!(drag.hover(&mut store, &ids[1], 1), Ok(None));
        assert!(!ShellFlags::derive(&ids[1], &store, &drag).drag_over);
        assert_eq!(drag.drop_item(), None);
        assert_eq!(order(&store), ids);
    }

    #[test]
    fn test_stale_index_is_rejected() {
        let (mut store, ids) = store_with(2);
        let mut drag = DragController::default();
        drag.begin(DragItem::Existing { id: ids[0].clone(), index: 5 });

        assert!(drag.hover(&mut store, &ids[1], 1).is_err());
        assert_eq!(order(&store), ids);
    }
}
