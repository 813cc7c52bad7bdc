//! Checklist templates, answers, and the rules tying them together.

pub mod answer;
pub mod cache;
pub mod classify;
pub mod codec;
pub mod keys;
pub mod template;
pub mod validate;

pub use answer::{AnswerImage, AnswerValue, ChecklistAnswer};
pub use cache::{TemplateFingerprint, TemplateValidationCache};
pub use classify::{
    classify, classify_record, is_checkbox, is_panel, is_question, is_radio_group, ClassifyError,
    ElementKind, UnknownElementKind,
};
pub use codec::{decode_answer, decode_template, encode_template, DecodeError};
pub use keys::{comment_key, image_key, KeyRole, OTHER_SENTINEL};
pub use template::{
    CheckboxQuestion, ChecklistPage, ChecklistTemplate, Choice, PageElement, PanelElement,
    QuestionRef, RadioGroupQuestion,
};
pub use validate::{
    validate_answer, validate_template, ElementPath, ValidatedTemplate, ValidationCode,
    ValidationError, ValidationErrors,
};
