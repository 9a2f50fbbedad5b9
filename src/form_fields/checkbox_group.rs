use dioxus::prelude::*;

/// Toggle `option` in `checked`, keeping the order of `options`
pub fn toggle_choice(options: &[String], checked: &[String], option: &str, on: bool) -> Vec<String> {
    options
        .iter()
        .filter(|o| if o.as_str() == option { on } else { checked.contains(o) })
        .cloned()
        .collect()
}

#[component]
pub fn CheckboxGroup(
    value: Vec<String>,
    options: Vec<String>,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            for (i, choice) in options.iter().cloned().enumerate() {
                label {
                    key: "{i}",
                    style: "display: flex; align-items: center; gap: 12px; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: value.contains(&choice),
                        onchange: {
                            let choice = choice.clone();
                            let options = options.clone();
                            let value = value.clone();
                            move |e: FormEvent| on_change.call(toggle_choice(&options, &value, &choice, e.checked()))
                        },
                    }
                    span { style: "font-size: 14px; color: #374151;", "{choice}" }
                }
            }
        }
    }
}
