//! Side panel editing the selected field.
//!
//! The panel keeps no state of its own. Every control reports one
//! `(field id, PropertyChange)` pair and the builder applies it to the store.

use dioxus::prelude::*;

use crate::state::{use_preview, Field, FieldId, FieldProperties, PropertyChange};

const CONTROL_STYLE: &str = "width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box;";

/// `max_length` -> `Max Length`
pub fn humanize(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn replace_item(items: &[String], index: usize, value: String) -> Vec<String> {
    let mut items = items.to_vec();
    if let Some(item) = items.get_mut(index) {
        *item = value;
    }
    items
}

fn remove_item(items: &[String], index: usize) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

fn push_item(items: &[String]) -> Vec<String> {
    let mut items = items.to_vec();
    items.push(String::new());
    items
}

/// Whole non-negative number from a numeric input, `None` while unparsable
fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.max(0.0).round() as u64)
}

#[component]
pub fn PropertyPanel(
    #[props(!optional)] field: Option<Field>,
    on_property_change: EventHandler<(FieldId, PropertyChange)>,
    on_delete: EventHandler<FieldId>,
) -> Element {
    let preview = use_preview();
    if preview.is_preview() {
        return rsx! {};
    }

    let Some(field) = field else {
        return rsx! {
            div { class: "properties", style: "width: 288px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; align-self: flex-start;",
                p { style: "text-align: center; color: #6b7280;", "Select a field to edit its properties" }
            }
        };
    };

    let id = field.id.clone();
    let emit = move |change: PropertyChange| on_property_change.call((id.clone(), change));
    let delete_id = field.id.clone();

    rsx! {
        div {
            class: "properties",
            style: "width: 288px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; align-self: flex-start;",
            h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "Field Properties" }

            div { style: "display: flex; flex-direction: column; gap: 16px;",
                TextProperty {
                    label: humanize("label"),
                    value: field.label.clone(),
                    on_input: {
                        let emit = emit.clone();
                        move |v| emit(PropertyChange::Label(v))
                    },
                }
                BoolProperty {
                    label: humanize("required"),
                    value: field.required,
                    on_input: {
                        let emit = emit.clone();
                        move |v| emit(PropertyChange::Required(v))
                    },
                }

                div { style: "padding-top: 16px; border-top: 1px solid #e5e7eb; display: flex; flex-direction: column; gap: 16px;",
                    h3 { style: "margin: 0; font-size: 14px;", "Field Settings" }
                    FieldSettings {
                        properties: field.properties.clone(),
                        on_change: {
                            let emit = emit.clone();
                            move |change| emit(change)
                        },
                    }
                }

                div { style: "padding-top: 16px; border-top: 1px solid #e5e7eb;",
                    button {
                        style: "width: 100%; padding: 8px; cursor: pointer; background: #fef2f2; color: #dc2626; border: none; border-radius: 6px;",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "Delete Field"
                    }
                }
            }
        }
    }
}

/// Type specific controls, one per property of the variant
#[component]
fn FieldSettings(properties: FieldProperties, on_change: EventHandler<PropertyChange>) -> Element {
    match properties {
        FieldProperties::Text(props) => rsx! {
            TextProperty {
                label: humanize("placeholder"),
                value: props.placeholder,
                on_input: move |v| on_change.call(PropertyChange::Placeholder(v)),
            }
            NumberProperty {
                label: humanize("max_length"),
                value: props.max_length as f64,
                on_input: move |raw: String| {
                    if let Some(n) = parse_count(&raw) {
                        on_change.call(PropertyChange::MaxLength(n.min(u32::MAX as u64) as u32));
                    }
                },
            }
        },
        FieldProperties::TextArea(props) => rsx! {
            TextProperty {
                label: humanize("placeholder"),
                value: props.placeholder,
                on_input: move |v| on_change.call(PropertyChange::Placeholder(v)),
            }
            NumberProperty {
                label: humanize("rows"),
                value: props.rows as f64,
                on_input: move |raw: String| {
                    if let Some(n) = parse_count(&raw) {
                        on_change.call(PropertyChange::Rows(n.min(u32::MAX as u64) as u32));
                    }
                },
            }
        },
        FieldProperties::Number(props) => rsx! {
            NumberProperty {
                label: humanize("min"),
                value: props.min,
                on_input: move |raw: String| {
                    if let Ok(v) = raw.trim().parse::<f64>() {
                        on_change.call(PropertyChange::Min(v));
                    }
                },
            }
            NumberProperty {
                label: humanize("max"),
                value: props.max,
                on_input: move |raw: String| {
                    if let Ok(v) = raw.trim().parse::<f64>() {
                        on_change.call(PropertyChange::Max(v));
                    }
                },
            }
            NumberProperty {
                label: humanize("step"),
                value: props.step,
                on_input: move |raw: String| {
                    if let Ok(v) = raw.trim().parse::<f64>() {
                        on_change.call(PropertyChange::Step(v));
                    }
                },
            }
        },
        FieldProperties::Select(props) | FieldProperties::Checkbox(props) | FieldProperties::Radio(props) => rsx! {
            ListProperty {
                label: humanize("options"),
                items: props.options,
                on_input: move |items| on_change.call(PropertyChange::Options(items)),
            }
        },
        FieldProperties::File(props) => rsx! {
            TextProperty {
                label: humanize("accept"),
                value: props.accept,
                on_input: move |v| on_change.call(PropertyChange::Accept(v)),
            }
            NumberProperty {
                label: humanize("max_size"),
                value: props.max_size as f64,
                on_input: move |raw: String| {
                    if let Some(n) = parse_count(&raw) {
                        on_change.call(PropertyChange::MaxSize(n));
                    }
                },
            }
        },
    }
}

#[component]
fn TextProperty(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "text",
                style: CONTROL_STYLE,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Reports the raw text so the caller decides how to parse it
#[component]
fn NumberProperty(label: String, value: f64, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "number",
                style: CONTROL_STYLE,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

#[component]
fn BoolProperty(label: String, value: bool, on_input: EventHandler<bool>) -> Element {
    rsx! {
        label { style: "display: flex; align-items: center; gap: 8px; font-size: 14px; font-weight: 500; color: #374151;",
            input {
                r#type: "checkbox",
                checked: value,
                onchange: move |e| on_input.call(e.checked()),
            }
            "{label}"
        }
    }
}

/// Editable list of strings with per-item delete and an add action
#[component]
fn ListProperty(label: String, items: Vec<String>, on_input: EventHandler<Vec<String>>) -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;", "{label}" }
            div { style: "display: flex; flex-direction: column; gap: 8px;",
                for (i, item) in items.iter().enumerate() {
                    div { key: "{i}", style: "display: flex; align-items: center; gap: 8px;",
                        input {
                            r#type: "text",
                            style: CONTROL_STYLE,
                            value: "{item}",
                            oninput: {
                                let items = items.clone();
                                move |e: FormEvent| on_input.call(replace_item(&items, i, e.value()))
                            },
                        }
                        button {
                            style: "padding: 4px 8px; color: #ef4444; background: none; border: none; cursor: pointer;",
                            onclick: {
                                let items = items.clone();
                                move |_: MouseEvent| on_input.call(remove_item(&items, i))
                            },
                            "×"
                        }
                    }
                }
                button {
                    style: "width: 100%; padding: 8px; font-size: 14px; color: #2563eb; border: 1px solid #93c5fd; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: {
                        let items = items.clone();
                        move |_: MouseEvent| on_input.call(push_item(&items))
                    },
                    "Add Option"
                }
            }
        }
    }
}
