pub mod base_field;
pub mod browser;
pub mod checkbox_group;
pub mod file_upload;
pub mod radio_group;
pub mod select_field;
pub mod text_field;

use dioxus::prelude::*;

pub use base_field::{BaseField, ShellDrag};
pub use checkbox_group::CheckboxGroup;
pub use file_upload::FileUpload;
pub use radio_group::RadioGroup;
pub use select_field::SelectField;
pub use text_field::{NumberField, TextAreaField, TextField};

use crate::state::{Field, FieldProperties, FieldValue, FileMeta};

/// Renders the input control for `field`, picked by its properties variant.
/// Every edit is reported through `on_change` as a whole new value.
#[component]
pub fn FieldControl(
    field: Field,
    value: FieldValue,
    is_preview: bool,
    on_change: EventHandler<FieldValue>,
) -> Element {
    let text = value.as_text().to_string();
    let on_text = move |s: String| on_change.call(FieldValue::Text(s));

    match field.properties {
        FieldProperties::Text(props) => rsx! {
            TextField {
                value: text,
                placeholder: props.placeholder,
                max_length: props.max_length,
                on_change: on_text,
            }
        },
        FieldProperties::TextArea(props) => rsx! {
            TextAreaField {
                value: text,
                placeholder: props.placeholder,
                rows: props.rows,
                on_change: on_text,
            }
        },
        FieldProperties::Number(props) => rsx! {
            NumberField {
                value: text,
                min: props.min,
                max: props.max,
                step: props.step,
                on_change: on_text,
            }
        },
        FieldProperties::Select(props) if props.options.is_empty() && !is_preview => rsx! { NoOptionsHint {} },
        FieldProperties::Select(props) => rsx! {
            SelectField {
                value: text,
                options: props.options,
                placeholder: "Choose an option".to_string(),
                on_change: on_text,
            }
        },
        FieldProperties::Radio(props) if props.options.is_empty() && !is_preview => rsx! { NoOptionsHint {} },
        FieldProperties::Radio(props) => rsx! {
            RadioGroup {
                name: field.id.to_string(),
                value: text,
                options: props.options,
                on_change: on_text,
            }
        },
        FieldProperties::Checkbox(props) if props.options.is_empty() && !is_preview => rsx! { NoOptionsHint {} },
        FieldProperties::Checkbox(props) => rsx! {
            CheckboxGroup {
                value: value.choices().to_vec(),
                options: props.options,
                on_change: move |checked: Vec<String>| on_change.call(FieldValue::Choices(checked)),
            }
        },
        FieldProperties::File(props) => rsx! {
            FileUpload {
                files: value.files().to_vec(),
                accept: props.accept,
                max_size: props.max_size,
                on_change: move |files: Vec<FileMeta>| on_change.call(FieldValue::Files(files)),
            }
        },
    }
}

#[component]
fn NoOptionsHint() -> Element {
    rsx! {
        p { style: "font-size: 13px; color: #9ca3af; font-style: italic;",
            "Add options in the property panel"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Every render adds one more blank option, like pressing "Add Option"
    #[component]
    fn GrowingOptions() -> Element {
        let renders = use_hook(|| Rc::new(Cell::new(0usize)));
        renders.set(renders.get() + 1);
        let options = vec![String::new(); renders.get()];

        rsx! {
            SelectField {
                value: String::new(),
                options: options.clone(),
                placeholder: "Choose an option".to_string(),
                on_change: |_: String| {},
            }
            RadioGroup {
                name: "radio-1-0".to_string(),
                value: String::new(),
                options: options.clone(),
                on_change: |_: String| {},
            }
            CheckboxGroup {
                value: Vec::new(),
                options,
                on_change: |_: Vec<String>| {},
            }
        }
    }

    #[test]
    fn test_duplicate_options_render() {
        let mut dom = VirtualDom::new(GrowingOptions);
        dom.rebuild_in_place();

        for _ in 0..3 {
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate(&mut NoOpMutations);
        }
    }
}
