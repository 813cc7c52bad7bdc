//! JSON decoding helpers.
//!
//! Templates are classified element by element before serde decodes them, so
//! an unrecognized `type` is reported as `UnknownElementKind` at its path
//! rather than as an opaque serde message.

use serde_json::Value;

use super::answer::ChecklistAnswer;
use super::classify::{classify_record, ClassifyError, ElementKind};
use super::template::ChecklistTemplate;
use super::validate::{ValidationCode, ValidationError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template contains unknown element kinds: {0}")]
    UnknownElementKinds(ValidationErrors),
}

impl DecodeError {
    /// Findings carried by the error, if it is a classification failure.
    pub fn findings(&self) -> Option<&ValidationErrors> {
        match self {
            DecodeError::UnknownElementKinds(errors) => Some(errors),
            DecodeError::Json(_) => None,
        }
    }
}

pub fn decode_template(raw: &str) -> Result<ChecklistTemplate, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    decode_template_value(value)
}

pub fn decode_template_value(value: Value) -> Result<ChecklistTemplate, DecodeError> {
    let mut findings = Vec::new();
    if let Some(pages) = value.get("pages").and_then(Value::as_array) {
        for (index, page) in pages.iter().enumerate() {
            let page_path = segment_name(page, || format!("pages[{index}]"));
            if let Some(elements) = page.get("elements").and_then(Value::as_array) {
                classify_elements(elements, &page_path, &mut findings);
            }
        }
    }

    ValidationErrors::check(findings).map_err(DecodeError::UnknownElementKinds)?;
    Ok(serde_json::from_value(value)?)
}

pub fn decode_answer(raw: &str) -> Result<ChecklistAnswer, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_template(template: &ChecklistTemplate) -> Result<String, DecodeError> {
    Ok(serde_json::to_string_pretty(template)?)
}

fn classify_elements(elements: &[Value], parent: &str, findings: &mut Vec<ValidationError>) {
    for (index, element) in elements.iter().enumerate() {
        let path = format!(
            "{parent}.{}",
            segment_name(element, || format!("elements[{index}]"))
        );
        match classify_record(element) {
            Ok(ElementKind::Panel) => {
                if let Some(children) = element.get("elements").and_then(Value::as_array) {
                    classify_elements(children, &path, findings);
                }
            }
            Ok(_) => {}
            Err(ClassifyError::Unknown(unknown)) => findings.push(ValidationError::new(
                path,
                ValidationCode::UnknownElementKind,
                unknown.to_string(),
            )),
            Err(err @ ClassifyError::NotAnObject) => findings.push(ValidationError::new(
                path,
                ValidationCode::UnknownElementKind,
                err.to_string(),
            )),
        }
    }
}

fn segment_name(record: &Value, fallback: impl FnOnce() -> String) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(fallback)
}
