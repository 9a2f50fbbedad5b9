use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use formcraft::{DndProvider, Field, FormBuilder, FormSubmission, PreviewProvider};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div { style: "min-height: 100vh; background: #f9fafb; padding: 32px;",
            div { style: "max-width: 1152px; margin: 0 auto;",
                h1 { style: "font-size: 24px; font-weight: bold; color: #111827; margin-bottom: 4px;", "Form Builder" }
                p { style: "color: #4b5563; margin-bottom: 32px;", "Create, preview, and test form functionality" }

                DndProvider {
                    PreviewProvider {
                        FormBuilder {
                            on_change: move |fields: Vec<Field>| {
                                let json = serde_json::to_string(&fields).unwrap_or_default();
                                info!(%json, "form fields updated");
                            },
                            on_submit: move |data: FormSubmission| {
                                let json = serde_json::to_string(&data).unwrap_or_default();
                                info!(%json, "form submitted");
                            },
                        }
                    }
                }
            }
        }
    }
}
