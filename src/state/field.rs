use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BuilderError, BuilderResult};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Select,
    Checkbox,
    Radio,
    File,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Text,
        FieldKind::TextArea,
        FieldKind::Number,
        FieldKind::Select,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::File => "file",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BuilderError::UnknownFieldType { name: s.to_string() })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextProperties {
    pub placeholder: String,
    pub max_length: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAreaProperties {
    pub placeholder: String,
    pub rows: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberProperties {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Options shared by select, checkbox and radio fields
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceProperties {
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileProperties {
    /// Comma separated list of `.ext` suffixes and MIME patterns
    pub accept: String,
    /// Upper bound in bytes, 0 disables the check
    pub max_size: u64,
}

/// Type specific configuration. The variant is the field's kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldProperties {
    Text(TextProperties),
    TextArea(TextAreaProperties),
    Number(NumberProperties),
    Select(ChoiceProperties),
    Checkbox(ChoiceProperties),
    Radio(ChoiceProperties),
    File(FileProperties),
}

impl FieldProperties {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldProperties::Text(_) => FieldKind::Text,
            FieldProperties::TextArea(_) => FieldKind::TextArea,
            FieldProperties::Number(_) => FieldKind::Number,
            FieldProperties::Select(_) => FieldKind::Select,
            FieldProperties::Checkbox(_) => FieldKind::Checkbox,
            FieldProperties::Radio(_) => FieldKind::Radio,
            FieldProperties::File(_) => FieldKind::File,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldProperties::Select(p) | FieldProperties::Checkbox(p) | FieldProperties::Radio(p) => {
                Some(&p.options)
            }
            _ => None,
        }
    }

    /// Apply a single property edit. Label and required live on the field
    /// record itself and are rejected here.
    pub fn apply(&mut self, change: &PropertyChange) -> BuilderResult<()> {
        let kind = self.kind();
        match (self, change) {
            (FieldProperties::Text(p), PropertyChange::Placeholder(v)) => p.placeholder = v.clone(),
            (FieldProperties::Text(p), PropertyChange::MaxLength(v)) => p.max_length = *v,
            (FieldProperties::TextArea(p), PropertyChange::Placeholder(v)) => p.placeholder = v.clone(),
            (FieldProperties::TextArea(p), PropertyChange::Rows(v)) => p.rows = *v,
            (FieldProperties::Number(p), PropertyChange::Min(v)) => p.min = *v,
            (FieldProperties::Number(p), PropertyChange::Max(v)) => p.max = *v,
            (FieldProperties::Number(p), PropertyChange::Step(v)) => p.step = *v,
            (
                FieldProperties::Select(p) | FieldProperties::Checkbox(p) | FieldProperties::Radio(p),
                PropertyChange::Options(v),
            ) => p.options = v.clone(),
            (FieldProperties::File(p), PropertyChange::Accept(v)) => p.accept = v.clone(),
            (FieldProperties::File(p), PropertyChange::MaxSize(v)) => p.max_size = *v,
            (_, change) => return Err(BuilderError::property_mismatch(change.key(), kind.as_str())),
        }
        Ok(())
    }
}

/// Client side view of a picked file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choices(Vec<String>),
    Files(Vec<FileMeta>),
}

impl FieldValue {
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Choices(_) => "choices",
            FieldValue::Files(_) => "files",
        }
    }

    /// An empty JSON array reads back as `Choices`; a file field means `Files`.
    fn conform(self, kind: FieldKind) -> Self {
        match self {
            FieldValue::Choices(choices) if choices.is_empty() && kind == FieldKind::File => {
                FieldValue::Files(Vec::new())
            }
            value => value,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn choices(&self) -> &[String] {
        match self {
            FieldValue::Choices(c) => c,
            _ => &[],
        }
    }

    pub fn files(&self) -> &[FileMeta] {
        match self {
            FieldValue::Files(f) => f,
            _ => &[],
        }
    }
}

impl FieldKind {
    /// Checkbox groups hold `Choices`, file fields hold `Files`, the rest hold `Text`
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Files(_) => *self == FieldKind::File,
            FieldValue::Choices(_) => *self == FieldKind::Checkbox,
            FieldValue::Text(_) => !matches!(self, FieldKind::File | FieldKind::Checkbox),
        }
    }

    fn check_value(&self, value: FieldValue) -> BuilderResult<FieldValue> {
        let value = value.conform(*self);
        if !self.accepts(&value) {
            return Err(BuilderError::kind_mismatch(
                self.as_str(),
                format!("a {} value", value.shape()),
            ));
        }
        Ok(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord")]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    pub required: bool,
    pub value: FieldValue,
    pub properties: FieldProperties,
}

/// Wire form of `Field`, before the value is checked against the kind
#[derive(Deserialize)]
struct FieldRecord {
    id: FieldId,
    label: String,
    required: bool,
    value: FieldValue,
    properties: FieldProperties,
}

impl TryFrom<FieldRecord> for Field {
    type Error = BuilderError;

    fn try_from(record: FieldRecord) -> BuilderResult<Self> {
        let value = record.properties.kind().check_value(record.value)?;
        Ok(Field {
            id: record.id,
            label: record.label,
            required: record.required,
            value,
            properties: record.properties,
        })
    }
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        self.properties.kind()
    }

    /// Merge a partial update into this record
    pub fn merge(&mut self, update: FieldUpdate) -> BuilderResult<()> {
        if let Some(properties) = &update.properties {
            if properties.kind() != self.kind() {
                return Err(BuilderError::kind_mismatch(
                    self.kind().as_str(),
                    format!("{} properties", properties.kind()),
                ));
            }
        }
        let value = match update.value {
            Some(value) => Some(self.kind().check_value(value)?),
            None => None,
        };
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(required) = update.required {
            self.required = required;
        }
        if let Some(value) = value {
            self.value = value;
        }
        if let Some(properties) = update.properties {
            self.properties = properties;
        }
        Ok(())
    }

    pub fn apply(&mut self, change: &PropertyChange) -> BuilderResult<()> {
        match change {
            PropertyChange::Label(label) => self.label = label.clone(),
            PropertyChange::Required(required) => self.required = *required,
            other => self.properties.apply(other)?,
        }
        Ok(())
    }
}

/// Partial update for `FieldStore::update_field`. `None` leaves the attribute alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub value: Option<FieldValue>,
    pub properties: Option<FieldProperties>,
}

impl FieldUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn value(value: FieldValue) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
}

/// One edit emitted by the property panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum PropertyChange {
    Label(String),
    Required(bool),
    Placeholder(String),
    MaxLength(u32),
    Rows(u32),
    Min(f64),
    Max(f64),
    Step(f64),
    Options(Vec<String>),
    Accept(String),
    MaxSize(u64),
}

impl PropertyChange {
    pub fn key(&self) -> &'static str {
        match self {
            PropertyChange::Label(_) => "label",
            PropertyChange::Required(_) => "required",
            PropertyChange::Placeholder(_) => "placeholder",
            PropertyChange::MaxLength(_) => "max_length",
            PropertyChange::Rows(_) => "rows",
            PropertyChange::Min(_) => "min",
            PropertyChange::Max(_) => "max",
            PropertyChange::Step(_) => "step",
            PropertyChange::Options(_) => "options",
            PropertyChange::Accept(_) => "accept",
            PropertyChange::MaxSize(_) => "max_size",
        }
    }
}
