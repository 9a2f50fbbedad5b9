use dioxus::prelude::*;

use super::actions::BuilderActions;
use crate::form_fields::browser::tag_drag_payload;
use crate::state::registry::{catalogue, FieldDescriptor};
use crate::state::{use_preview, DragItem};

#[component]
pub fn Toolbox(actions: BuilderActions) -> Element {
    let preview = use_preview();
    if preview.is_preview() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toolbox",
            style: "width: 256px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; align-self: flex-start;",
            h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "Form Fields" }

            div { style: "display: flex; flex-direction: column; gap: 8px;",
                for descriptor in catalogue() {
                    ToolboxItem { key: "{descriptor.kind}", descriptor, actions }
                }
            }

            div { style: "margin-top: 24px;",
                h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "Instructions" }
                p { style: "font-size: 12px; color: #666; line-height: 1.4;",
                    "Click or drag a field onto the form"
                    br {}
                    "Drag the ☰ grip to reorder"
                    br {}
                    "Click a field to edit it"
                }
            }
        }
    }
}

#[component]
fn ToolboxItem(descriptor: FieldDescriptor, actions: BuilderActions) -> Element {
    let kind = descriptor.kind;
    let dragging = actions.drag().read().active() == Some(&DragItem::NewField(kind));
    let opacity = if dragging { "0.5" } else { "1" };

    rsx! {
        div {
            class: "toolbox-item",
            style: "padding: 12px; border: 1px solid #e5e7eb; border-radius: 6px; cursor: move; opacity: {opacity};",
            draggable: "true",
            ondragstart: move |e| {
                tag_drag_payload(&e);
                actions.begin_new_field_drag(kind);
            },
            ondragend: move |_| actions.end_drag(),
            onclick: move |_| {
                actions.add_field(kind);
            },

            div { style: "display: flex; align-items: center; gap: 12px;",
                span { style: "font-size: 20px;", "{descriptor.icon}" }
                div {
                    h3 { style: "margin: 0; font-size: 14px; font-weight: 500;", "{descriptor.label}" }
                    p { style: "margin: 0; font-size: 12px; color: #6b7280;", "{descriptor.description}" }
                }
            }
        }
    }
}
