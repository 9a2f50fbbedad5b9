use dioxus::prelude::*;

const INPUT_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box;";

#[component]
pub fn TextField(
    value: String,
    placeholder: String,
    max_length: u32,
    on_change: EventHandler<String>,
) -> Element {
    let placeholder = if placeholder.is_empty() { "Enter text...".to_string() } else { placeholder };

    rsx! {
        input {
            r#type: "text",
            style: INPUT_STYLE,
            value: "{value}",
            placeholder: "{placeholder}",
            maxlength: "{max_length}",
            oninput: move |e| on_change.call(e.value()),
        }
    }
}

#[component]
pub fn TextAreaField(
    value: String,
    placeholder: String,
    rows: u32,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            style: INPUT_STYLE,
            value: "{value}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            oninput: move |e| on_change.call(e.value()),
        }
    }
}

/// Number input. The value stays a string so a half typed number isn't lost.
#[component]
pub fn NumberField(
    value: String,
    min: f64,
    max: f64,
    step: f64,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            r#type: "number",
            style: INPUT_STYLE,
            value: "{value}",
            min: "{min}",
            max: "{max}",
            step: "{step}",
            oninput: move |e| on_change.call(e.value()),
        }
    }
}
