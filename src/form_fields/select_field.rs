use dioxus::prelude::*;

#[component]
pub fn SelectField(
    value: String,
    options: Vec<String>,
    placeholder: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            style: "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;",
            value: "{value}",
            onchange: move |e| on_change.call(e.value()),

            if let Some(placeholder) = placeholder {
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
            }
            for (i, choice) in options.iter().enumerate() {
                option {
                    key: "{i}",
                    value: "{choice}",
                    selected: *choice == value,
                    "{choice}"
                }
            }
        }
    }
}
