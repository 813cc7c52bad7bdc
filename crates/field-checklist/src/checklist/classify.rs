use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::template::PageElement;

/// Discriminant of a page element. Renderers and validators dispatch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    RadioGroup,
    Checkbox,
    Panel,
}

impl ElementKind {
    pub const fn discriminant(self) -> &'static str {
        match self {
            Self::RadioGroup => "radiogroup",
            Self::Checkbox => "checkbox",
            Self::Panel => "panel",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RadioGroup => "Radio group",
            Self::Checkbox => "Checkbox",
            Self::Panel => "Panel",
        }
    }

    pub const fn is_question(self) -> bool {
        matches!(self, Self::RadioGroup | Self::Checkbox)
    }

    /// Exact, case-sensitive match on the wire discriminant.
    pub fn from_discriminant(raw: &str) -> Result<Self, UnknownElementKind> {
        match raw {
            "radiogroup" => Ok(Self::RadioGroup),
            "checkbox" => Ok(Self::Checkbox),
            "panel" => Ok(Self::Panel),
            other => Err(UnknownElementKind {
                discriminant: Some(other.to_string()),
            }),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminant())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("{0}")]
    Unknown(#[from] UnknownElementKind),
    #[error("element record must be a JSON object")]
    NotAnObject,
}

/// Raised for a `type` value outside the known element kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_unknown(.discriminant))]
pub struct UnknownElementKind {
    /// `None` when the record carries no string `type` field at all.
    pub discriminant: Option<String>,
}

fn describe_unknown(discriminant: &Option<String>) -> String {
    match discriminant {
        Some(raw) => format!("unknown element kind '{raw}'"),
        None => "element record has no string 'type' discriminant".to_string(),
    }
}

pub fn classify(element: &PageElement) -> ElementKind {
    match element {
        PageElement::RadioGroup(_) => ElementKind::RadioGroup,
        PageElement::Checkbox(_) => ElementKind::Checkbox,
        PageElement::Panel(_) => ElementKind::Panel,
    }
}

pub fn is_radio_group(element: &PageElement) -> bool {
    classify(element) == ElementKind::RadioGroup
}

pub fn is_checkbox(element: &PageElement) -> bool {
    classify(element) == ElementKind::Checkbox
}

pub fn is_panel(element: &PageElement) -> bool {
    classify(element) == ElementKind::Panel
}

pub fn is_question(element: &PageElement) -> bool {
    classify(element).is_question()
}

/// Classify an undecoded element record by its `type` field.
pub fn classify_record(record: &Value) -> Result<ElementKind, ClassifyError> {
    let object = record.as_object().ok_or(ClassifyError::NotAnObject)?;
    match object.get("type").and_then(Value::as_str) {
        Some(raw) => Ok(ElementKind::from_discriminant(raw)?),
        None => Err(UnknownElementKind { discriminant: None }.into()),
    }
}
