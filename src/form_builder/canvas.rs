use dioxus::prelude::*;

use super::actions::BuilderActions;
use crate::form_fields::{BaseField, FieldControl, ShellDrag};
use crate::state::{use_preview, Field, FieldId, FieldValue, ShellFlags};

#[component]
pub fn Canvas(actions: BuilderActions) -> Element {
    let preview = use_preview();
    let is_preview = preview.is_preview();
    let fields = actions.store().read().fields().to_vec();

    rsx! {
        div {
            class: "form-canvas",
            style: "min-height: 400px; padding: 16px; background: white; border: 1px solid #e5e7eb; border-radius: 8px;",
            ondragover: move |e| e.prevent_default(),
            ondrop: move |e| {
                e.prevent_default();
                if !is_preview {
                    actions.drop_on_canvas();
                }
            },

            if fields.is_empty() {
                div {
                    style: "height: 300px; border: 2px dashed #d1d5db; border-radius: 8px; display: flex; align-items: center; justify-content: center;",
                    div { style: "text-align: center; color: #6b7280;",
                        p { style: "font-size: 18px; font-weight: 500; margin-bottom: 4px;", "No Fields Added" }
                        p { style: "font-size: 14px;", "Pick a field from the toolbox to start building your form" }
                    }
                }
            } else {
                for (index, field) in fields.into_iter().enumerate() {
                    CanvasField { key: "{field.id}", field, index, is_preview, actions }
                }
            }
        }
    }
}

/// One field on the canvas: the shell with its renderer inside
#[component]
fn CanvasField(field: Field, index: usize, is_preview: bool, actions: BuilderActions) -> Element {
    let flags = ShellFlags::derive(&field.id, &actions.store().read(), &actions.drag().read());
    let value = if is_preview {
        actions.preview().value(&field.id).unwrap_or_else(|| field.value.clone())
    } else {
        field.value.clone()
    };
    let id = field.id.clone();
    let label = field.label.clone();
    let required = field.required;
    let drag_id = field.id.clone();
    let value_id = field.id.clone();

    rsx! {
        BaseField {
            id,
            label,
            required,
            flags,
            is_preview,
            on_select: move |id: FieldId| actions.select(id),
            on_drag: move |event: ShellDrag| actions.shell_drag(drag_id.clone(), index, event),

            FieldControl {
                field,
                value,
                is_preview,
                on_change: move |value: FieldValue| actions.set_value(value_id.clone(), value),
            }
        }
    }
}
