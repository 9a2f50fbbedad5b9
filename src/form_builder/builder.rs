use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use super::actions::BuilderActions;
use super::canvas::Canvas;
use super::preview_mode::PreviewMode;
use super::property_panel::PropertyPanel;
use super::toolbox::Toolbox;
use crate::state::{use_drag, use_preview, Field, FieldId, FieldStore, FormSubmission, PropertyChange};

/// Drag-and-drop form editor.
///
/// Must be mounted below a `PreviewProvider` and a `DndProvider`; both panic
/// on first use otherwise. `on_change` receives the whole list after every
/// change to it and `on_submit` the collected values when a preview is submitted.
#[component]
pub fn FormBuilder(
    on_change: Option<EventHandler<Vec<Field>>>,
    on_submit: Option<EventHandler<FormSubmission>>,
    #[props(default)] initial_fields: Vec<Field>,
) -> Element {
    let preview = use_preview();
    let drag = use_drag();
    let store = use_signal(move || {
        FieldStore::with_fields(initial_fields).unwrap_or_else(|err| {
            error!(%err, "discarding initial fields");
            FieldStore::new()
        })
    });
    let actions = BuilderActions::new(store, drag, preview, on_change);
    let selected = store.read().selected_field().cloned();

    rsx! {
        div {
            class: "form-builder",
            style: "display: flex; gap: 24px; font-family: system-ui;",

            Toolbox { actions }

            div { class: "canvas-wrapper", style: "flex: 1;",
                Canvas { actions }
            }

            PropertyPanel {
                field: selected,
                on_property_change: move |(id, change): (FieldId, PropertyChange)| actions.apply_property(id, change),
                on_delete: move |id: FieldId| actions.remove(id),
            }

            PreviewMode { on_submit }
        }
    }
}
