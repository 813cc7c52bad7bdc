use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mime::Mime;
use tracing::debug;

use super::template::ValidatedTemplate;
use super::{ValidationCode, ValidationError, ValidationErrors};
use crate::checklist::answer::{AnswerImage, AnswerValue, ChecklistAnswer};
use crate::checklist::keys::{comment_key, image_key, is_other};
use crate::checklist::template::QuestionRef;

impl<'a> ValidatedTemplate<'a> {
    /// Check `answer` against this template.
    ///
    /// Per-question findings come first, in template order; orphan keys
    /// follow in key order.
    pub fn validate_answer(&self, answer: &ChecklistAnswer) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        for question in self.template().questions() {
            check_question(question, answer, &mut errors);
        }

        for key in answer.keys() {
            if self.resolve_key(key).is_none() {
                errors.push(ValidationError::new(
                    key,
                    ValidationCode::OrphanAnswerKey,
                    format!("key '{key}' does not belong to any question"),
                ));
            }
        }

        debug!(
            answer_id = %answer.id,
            checklist_id = %answer.checklist_id,
            errors = errors.len(),
            "answer validation finished"
        );

        ValidationErrors::check(errors)
    }
}

fn check_question(
    question: QuestionRef<'_>,
    answer: &ChecklistAnswer,
    errors: &mut Vec<ValidationError>,
) {
    let name = question.name();
    let other_selected = check_selection_value(question, answer.get(name), errors);
    check_comment(name, other_selected, answer, errors);
    check_images(question, answer, errors);
}

/// Returns whether the "other" sentinel was selected.
///
/// The value's shape is checked before emptiness, so `[]` on a radio group
/// is a wrong shape rather than an unanswered question.
fn check_selection_value(
    question: QuestionRef<'_>,
    value: Option<&AnswerValue>,
    errors: &mut Vec<ValidationError>,
) -> bool {
    let name = question.name();
    let Some(value) = value else {
        report_unanswered(question, errors);
        return false;
    };

    match (question, value) {
        (QuestionRef::RadioGroup(_), AnswerValue::Text(selected)) => {
            if selected.is_empty() {
                report_unanswered(question, errors);
                return false;
            }
            check_choice(question, selected, errors)
        }
        (QuestionRef::Checkbox(_), AnswerValue::Selections(selected)) => {
            if selected.is_empty() {
                report_unanswered(question, errors);
            }
            let mut other_selected = false;
            for value in selected {
                other_selected |= check_choice(question, value, errors);
            }
            other_selected
        }
        (QuestionRef::RadioGroup(_), other) => {
            errors.push(ValidationError::new(
                name,
                ValidationCode::InvalidChoiceValue,
                format!(
                    "radio group '{name}' expects a single choice value, got a {}",
                    other.type_name()
                ),
            ));
            false
        }
        (QuestionRef::Checkbox(_), other) => {
            errors.push(ValidationError::new(
                name,
                ValidationCode::InvalidChoiceValue,
                format!(
                    "checkbox '{name}' expects a list of choice values, got a {}",
                    other.type_name()
                ),
            ));
            false
        }
    }
}

fn report_unanswered(question: QuestionRef<'_>, errors: &mut Vec<ValidationError>) {
    if question.is_required() {
        let name = question.name();
        errors.push(ValidationError::new(
            name,
            ValidationCode::MissingRequiredAnswer,
            format!("required question '{name}' has no answer"),
        ));
    }
}

fn check_choice(
    question: QuestionRef<'_>,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> bool {
    if is_other(value) {
        return true;
    }
    if !question.has_choice(value) {
        errors.push(ValidationError::new(
            question.name(),
            ValidationCode::InvalidChoiceValue,
            format!("'{value}' is not a choice of '{}'", question.name()),
        ));
    }
    false
}

fn check_comment(
    name: &str,
    other_selected: bool,
    answer: &ChecklistAnswer,
    errors: &mut Vec<ValidationError>,
) {
    let key = comment_key(name);
    match answer.get(&key) {
        Some(AnswerValue::Text(comment)) if !comment.is_empty() => {}
        Some(AnswerValue::Text(_)) | None => {
            if other_selected {
                errors.push(ValidationError::new(
                    name,
                    ValidationCode::OtherWithoutComment,
                    format!("'{name}' selected 'other' without a comment under '{key}'"),
                ));
            }
        }
        Some(value) => errors.push(ValidationError::new(
            key.as_str(),
            ValidationCode::MismatchedValueType,
            format!("comment '{key}' must be text, got a {}", value.type_name()),
        )),
    }
}

fn check_images(
    question: QuestionRef<'_>,
    answer: &ChecklistAnswer,
    errors: &mut Vec<ValidationError>,
) {
    let key = image_key(question.name());
    let Some(value) = answer.get(&key) else {
        return;
    };

    let Some(images) = value.as_images() else {
        errors.push(ValidationError::new(
            key.as_str(),
            ValidationCode::MismatchedValueType,
            format!("'{key}' must hold images, got a {}", value.type_name()),
        ));
        return;
    };

    if images.is_empty() {
        return;
    }

    if !question.show_image_upload() {
        errors.push(ValidationError::new(
            key.as_str(),
            ValidationCode::UnexpectedImageUpload,
            format!("question '{}' does not accept image uploads", question.name()),
        ));
        return;
    }

    for (index, image) in images.iter().enumerate() {
        if let Err(reason) = check_image_encoding(image) {
            errors.push(ValidationError::new(
                format!("{key}[{index}]"),
                ValidationCode::InvalidImageEncoding,
                format!("image '{}': {reason}", image.name),
            ));
        }
    }
}

/// Syntactic check only: a parseable MIME type and decodable base64. For
/// `data:` URLs the embedded media type must match the declared one.
pub(crate) fn check_image_encoding(image: &AnswerImage) -> Result<(), String> {
    let declared: Mime = image.mime_type.parse().map_err(|err| {
        format!(
            "declared type '{}' is not a MIME type ({err})",
            image.mime_type
        )
    })?;

    let payload = match image.content.strip_prefix("data:") {
        Some(data_url) => {
            let (header, payload) = data_url
                .split_once(',')
                .ok_or_else(|| "data URL has no payload separator".to_string())?;
            let media = header
                .strip_suffix(";base64")
                .ok_or_else(|| "data URL is not base64 encoded".to_string())?;
            let embedded: Mime = media
                .parse()
                .map_err(|err| format!("data URL type '{media}' is not a MIME type ({err})"))?;
            if embedded.essence_str() != declared.essence_str() {
                return Err(format!(
                    "declared type '{}' does not match data URL type '{}'",
                    declared.essence_str(),
                    embedded.essence_str()
                ));
            }
            payload
        }
        None => image.content.as_str(),
    };

    if payload.is_empty() {
        return Err("content is empty".to_string());
    }

    STANDARD
        .decode(payload)
        .map(|_| ())
        .map_err(|err| format!("content is not valid base64 ({err})"))
}
