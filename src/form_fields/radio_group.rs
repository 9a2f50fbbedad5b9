use dioxus::prelude::*;

#[component]
pub fn RadioGroup(
    /// Groups the inputs, one group per field
    name: String,
    value: String,
    options: Vec<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            for (i, choice) in options.into_iter().enumerate() {
                label {
                    key: "{i}",
                    style: "display: flex; align-items: center; gap: 12px; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "{name}",
                        value: "{choice}",
                        checked: choice == value,
                        onchange: {
                            let choice = choice.clone();
                            move |_: FormEvent| on_change.call(choice.clone())
                        },
                    }
                    span { style: "font-size: 14px; color: #374151;", "{choice}" }
                }
            }
        }
    }
}
