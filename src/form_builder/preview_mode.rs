use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::state::{use_preview, FormSubmission};

/// Floating panel switching between editing and previewing the form
#[component]
pub fn PreviewMode(#[props(!optional)] on_submit: Option<EventHandler<FormSubmission>>) -> Element {
    let preview = use_preview();
    let is_preview = preview.is_preview();

    let editor_bg = if !is_preview { "#2563eb" } else { "#f3f4f6" };
    let editor_fg = if !is_preview { "white" } else { "#374151" };
    let preview_bg = if is_preview { "#2563eb" } else { "#f3f4f6" };
    let preview_fg = if is_preview { "white" } else { "#374151" };

    rsx! {
        div {
            class: "preview-mode",
            style: "position: fixed; bottom: 16px; right: 16px; z-index: 50; background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); padding: 16px; display: flex; flex-direction: column; gap: 12px;",

            div { style: "display: flex; align-items: center; justify-content: space-between; gap: 16px;",
                h3 { style: "margin: 0; font-size: 16px;",
                    if is_preview { "Preview Mode" } else { "Edit Mode" }
                }
                div { class: "mode-toggle", style: "display: flex; gap: 8px;",
                    button {
                        style: "padding: 6px 12px; border: none; border-radius: 6px; cursor: pointer; background: {editor_bg}; color: {editor_fg};",
                        onclick: move |_| {
                            if preview.is_preview() {
                                preview.toggle_preview();
                            }
                        },
                        "Editor"
                    }
                    button {
                        style: "padding: 6px 12px; border: none; border-radius: 6px; cursor: pointer; background: {preview_bg}; color: {preview_fg};",
                        onclick: move |_| {
                            if !preview.is_preview() {
                                preview.toggle_preview();
                            }
                        },
                        "Preview"
                    }
                }
            }

            if is_preview {
                div { style: "display: flex; flex-direction: column; gap: 8px;",
                    button {
                        style: "width: 100%; padding: 8px 16px; background: #16a34a; color: white; border: none; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            let data = preview.form_data();
                            info!(fields = data.len(), "form submitted");
                            if let Some(on_submit) = on_submit {
                                on_submit.call(data);
                            }
                        },
                        "Submit Form"
                    }
                    button {
                        style: "width: 100%; padding: 8px 16px; background: white; color: #6b7280; border: 1px solid #d1d5db; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| preview.reset_form_data(),
                        "Reset"
                    }
                    p { style: "margin: 0; font-size: 12px; color: #6b7280; text-align: center;",
                        "Test your form as respondents will see it"
                    }
                }
            }
        }
    }
}
