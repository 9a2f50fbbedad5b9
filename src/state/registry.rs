//! Per-kind defaults and the toolbox catalogue.
//!
//! The renderer half of the registry lives in `form_fields::FieldControl`,
//! which dispatches on the same `FieldKind`/`FieldProperties` variants.

use super::field::{
    ChoiceProperties, FieldKind, FieldProperties, FieldValue, FileProperties, NumberProperties,
    TextAreaProperties, TextProperties,
};

/// 5MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl FieldKind {
    pub fn descriptor(&self) -> FieldDescriptor {
        let (icon, label, description) = match self {
            FieldKind::Text => ("📝", "Text Input", "Single line text input"),
            FieldKind::TextArea => ("📄", "Text Area", "Multi-line text input"),
            FieldKind::Number => ("🔢", "Number", "Numeric input field"),
            FieldKind::Select => ("📋", "Dropdown", "Single selection from options"),
            FieldKind::Checkbox => ("☑️", "Checkbox", "Multiple choice selection"),
            FieldKind::Radio => ("⭕", "Radio", "Single choice selection"),
            FieldKind::File => ("📎", "File Upload", "Attach one or more files"),
        };
        FieldDescriptor {
            kind: *self,
            icon,
            label,
            description,
        }
    }

    pub fn default_properties(&self) -> FieldProperties {
        match self {
            FieldKind::Text => FieldProperties::Text(TextProperties {
                placeholder: String::new(),
                max_length: 100,
            }),
            FieldKind::TextArea => FieldProperties::TextArea(TextAreaProperties {
                placeholder: String::new(),
                rows: 3,
            }),
            FieldKind::Number => FieldProperties::Number(NumberProperties {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            }),
            FieldKind::Select => FieldProperties::Select(ChoiceProperties::default()),
            FieldKind::Checkbox => FieldProperties::Checkbox(ChoiceProperties::default()),
            FieldKind::Radio => FieldProperties::Radio(ChoiceProperties::default()),
            FieldKind::File => FieldProperties::File(FileProperties {
                accept: String::new(),
                max_size: DEFAULT_MAX_FILE_SIZE,
            }),
        }
    }

    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Checkbox => FieldValue::Choices(Vec::new()),
            FieldKind::File => FieldValue::Files(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn default_label(&self) -> String {
        format!("New {} field", self.as_str())
    }
}

/// Toolbox entries in display order
pub fn catalogue() -> impl Iterator<Item = FieldDescriptor> {
    FieldKind::ALL.into_iter().map(|kind| kind.descriptor())
}
