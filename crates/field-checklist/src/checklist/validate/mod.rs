//! Structural validation of checklist templates and submitted answers.
//!
//! Both validators collect every violation in traversal order instead of
//! stopping at the first one, so an authoring UI or submission pipeline can
//! show them together. Validation never mutates its input.

mod answer;
mod path;
mod template;

#[cfg(test)]
mod tests;

pub use path::ElementPath;
pub use template::{validate_template, ValidatedTemplate};

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answer::ChecklistAnswer;
use super::template::ChecklistTemplate;

/// Machine-readable reason attached to every validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationCode {
    UnknownElementKind,
    DuplicateName,
    ReservedName,
    EmptyChoices,
    NestedPanel,
    DuplicateChoiceValue,
    EmptyTemplate,
    MissingRequiredAnswer,
    InvalidChoiceValue,
    OtherWithoutComment,
    UnexpectedImageUpload,
    InvalidImageEncoding,
    MismatchedValueType,
    OrphanAnswerKey,
}

impl ValidationCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownElementKind => "UnknownElementKind",
            Self::DuplicateName => "DuplicateName",
            Self::ReservedName => "ReservedName",
            Self::EmptyChoices => "EmptyChoices",
            Self::NestedPanel => "NestedPanel",
            Self::DuplicateChoiceValue => "DuplicateChoiceValue",
            Self::EmptyTemplate => "EmptyTemplate",
            Self::MissingRequiredAnswer => "MissingRequiredAnswer",
            Self::InvalidChoiceValue => "InvalidChoiceValue",
            Self::OtherWithoutComment => "OtherWithoutComment",
            Self::UnexpectedImageUpload => "UnexpectedImageUpload",
            Self::InvalidImageEncoding => "InvalidImageEncoding",
            Self::MismatchedValueType => "MismatchedValueType",
            Self::OrphanAnswerKey => "OrphanAnswerKey",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation located by template path or answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.path, self.message)
    }
}

/// Non-empty, ordered list of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        if let Some(first) = self.0.first() {
            write!(f, ", first: {first}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// `Ok(())` when nothing was collected.
    pub(crate) fn check(errors: Vec<ValidationError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn codes(&self) -> Vec<ValidationCode> {
        self.0.iter().map(|error| error.code).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate `answer` against `template`.
///
/// The template is validated first; if it is structurally invalid its
/// errors are returned and the answer is not inspected.
pub fn validate_answer(
    template: &ChecklistTemplate,
    answer: &ChecklistAnswer,
) -> Result<(), ValidationErrors> {
    validate_template(template)?.validate_answer(answer)
}
