use dioxus::prelude::*;

use super::browser::{drop_engine, engine_files, input_engine, native_drop_files, native_input_files};
use crate::state::{FileFilter, FileMeta};

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
}

pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// File picker with a drop zone. Every pick or drop replaces the whole list
/// with the files that pass `accept` and `max_size`.
#[component]
pub fn FileUpload(
    files: Vec<FileMeta>,
    accept: String,
    max_size: u64,
    #[props(default = true)] multiple: bool,
    on_change: EventHandler<Vec<FileMeta>>,
) -> Element {
    let mut drag_active = use_signal(|| false);
    let filter = FileFilter::new(&accept, max_size);

    let border = if drag_active() { "#60a5fa" } else { "#d1d5db" };
    let background = if drag_active() { "#eff6ff" } else { "transparent" };
    let max_size_label = format_megabytes(max_size);

    rsx! {
        div {
            class: "file-drop-zone",
            style: "
                border: 2px dashed {border};
                background: {background};
                border-radius: 8px;
                padding: 24px;
                text-align: center;
            ",
            ondragenter: move |e| {
                e.prevent_default();
                drag_active.set(true);
            },
            ondragover: move |e| {
                e.prevent_default();
                drag_active.set(true);
            },
            ondragleave: move |_| drag_active.set(false),
            ondrop: {
                let filter = filter.clone();
                move |e: DragEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    drag_active.set(false);

                    if let Some(files) = native_drop_files(&e) {
                        if !files.is_empty() {
                            on_change.call(filter.filter(files));
                        }
                    } else if let Some(engine) = drop_engine(&e) {
                        let filter = filter.clone();
                        spawn(async move {
                            let files = engine_files(engine).await;
                            if !files.is_empty() {
                                on_change.call(filter.filter(files));
                            }
                        });
                    }
                }
            },

            label { style: "color: #2563eb; cursor: pointer;",
                input {
                    r#type: "file",
                    style: "display: none;",
                    multiple,
                    accept: "{accept}",
                    onchange: {
                        let filter = filter.clone();
                        move |e: FormEvent| {
                            if let Some(files) = native_input_files(&e) {
                                if !files.is_empty() {
                                    on_change.call(filter.filter(files));
                                }
                            } else if let Some(engine) = input_engine(&e) {
                                let filter = filter.clone();
                                spawn(async move {
                                    let files = engine_files(engine).await;
                                    if !files.is_empty() {
                                        on_change.call(filter.filter(files));
                                    }
                                });
                            }
                        }
                    },
                }
                "Choose files"
            }
            p { style: "font-size: 14px; color: #6b7280;", "or drag and drop here" }
            if max_size > 0 {
                p { style: "font-size: 12px; color: #9ca3af;", "Max file size: {max_size_label}" }
            }

            if !files.is_empty() {
                div { style: "margin-top: 16px; display: flex; flex-direction: column; gap: 8px;",
                    for (index, file) in files.iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "display: flex; justify-content: space-between; font-size: 14px; color: #4b5563; background: #f9fafb; padding: 8px; border-radius: 4px;",
                            span { "{file.name}" }
                            span { {format_kilobytes(file.size)} }
                        }
                    }
                }
            }
        }
    }
}
