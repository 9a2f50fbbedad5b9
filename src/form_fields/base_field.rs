use dioxus::prelude::*;

use super::browser::{click_hits_control, tag_drag_payload};
use crate::state::{FieldId, ShellFlags};

/// Drag gesture events raised by a shell. The canvas knows which field and
/// index they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellDrag {
    /// The grip was picked up
    Start,
    /// A gesture is over this shell's body
    Hover,
    Leave,
    Drop,
    /// The gesture started on this grip ended, dropped or not
    End,
}

/// Selection and drag-reorder wrapper shared by every field renderer
#[component]
pub fn BaseField(
    id: FieldId,
    label: String,
    required: bool,
    flags: ShellFlags,
    is_preview: bool,
    on_select: EventHandler<FieldId>,
    on_drag: EventHandler<ShellDrag>,
    children: Element,
) -> Element {
    let border_color = if flags.drag_over {
        "#3b82f6"
    } else if flags.selected && !is_preview {
        "#2563eb"
    } else {
        "#e5e7eb"
    };
    let ring = if (flags.selected || flags.dragging) && !is_preview {
        "0 0 0 2px rgba(59, 130, 246, 0.6)"
    } else {
        "none"
    };
    let opacity = if flags.dragging { "0.5" } else { "1" };

    rsx! {
        div {
            class: "field-shell",
            style: "
                position: relative;
                padding: 16px;
                margin-bottom: 16px;
                border: 1px solid {border_color};
                border-radius: 8px;
                box-shadow: {ring};
                opacity: {opacity};
                background: white;
            ",
            // Inputs, buttons and their labels keep their clicks; the rest of
            // the shell, control padding included, selects the field
            onclick: move |e| {
                if !is_preview && !click_hits_control(&e) {
                    on_select.call(id.clone());
                }
            },
            ondragover: move |e| {
                if !is_preview {
                    e.prevent_default();
                    on_drag.call(ShellDrag::Hover);
                }
            },
            ondragleave: move |_| {
                if !is_preview {
                    on_drag.call(ShellDrag::Leave);
                }
            },
            ondrop: move |e| {
                if !is_preview {
                    e.prevent_default();
                    e.stop_propagation();
                    on_drag.call(ShellDrag::Drop);
                }
            },

            div { style: "display: flex; align-items: flex-start; gap: 12px;",
                if !is_preview {
                    div {
                        class: "field-grip",
                        style: "margin-top: 2px; cursor: move; color: #9ca3af; user-select: none;",
                        draggable: "true",
                        ondragstart: move |e| {
                            tag_drag_payload(&e);
                            on_drag.call(ShellDrag::Start);
                        },
                        ondragend: move |_| on_drag.call(ShellDrag::End),
                        "☰"
                    }
                }

                div { style: "flex: 1;",
                    div { style: "margin-bottom: 8px; font-weight: 500; color: #374151;",
                        "{label}"
                        if required {
                            span { style: "color: #ef4444; margin-left: 4px;", "*" }
                        }
                    }
                    {children}
                }
            }
        }
    }
}
