use field_checklist::checklist::{ElementKind, ValidationError, ValidationErrors};
use field_checklist::config::OutputFormat;
use field_checklist::error::AppError;
use serde::Serialize;
use std::fmt::Write as _;

/// Outcome of checking one template or answer file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DocumentReport {
    pub(crate) document: String,
    pub(crate) valid: bool,
    pub(crate) errors: Vec<ValidationError>,
}

impl DocumentReport {
    pub(crate) fn passed(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            valid: true,
            errors: Vec::new(),
        }
    }

    pub(crate) fn failed(document: impl Into<String>, errors: ValidationErrors) -> Self {
        Self {
            document: document.into(),
            valid: false,
            errors: errors.into_vec(),
        }
    }
}

/// One row of `template inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ElementSummary {
    pub(crate) path: String,
    pub(crate) kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question: Option<QuestionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionSummary {
    pub(crate) required: bool,
    pub(crate) choices: Vec<String>,
    pub(crate) accepts_other: bool,
    pub(crate) accepts_images: bool,
    pub(crate) answer_key: String,
    pub(crate) comment_key: String,
    pub(crate) image_key: String,
}

pub(crate) fn render_reports(
    reports: &[DocumentReport],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in reports {
                if report.valid {
                    let _ = writeln!(out, "PASS {}", report.document);
                    continue;
                }
                let _ = writeln!(
                    out,
                    "FAIL {} ({} error(s))",
                    report.document,
                    report.errors.len()
                );
                for error in &report.errors {
                    let _ = writeln!(out, "  - {error}");
                }
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_inspection(
    template_id: &str,
    elements: &[ElementSummary],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(elements)?),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Template {template_id}");
            for element in elements {
                match &element.question {
                    None => {
                        let _ = writeln!(out, "- {} [{}]", element.path, element.kind);
                    }
                    Some(question) => {
                        let _ = writeln!(
                            out,
                            "- {} [{}{}] choices: {}",
                            element.path,
                            element.kind,
                            if question.required { ", required" } else { "" },
                            question.choices.join(", ")
                        );
                        let _ = writeln!(out, "    answer:  {}", question.answer_key);
                        let _ = writeln!(
                            out,
                            "    comment: {}{}",
                            question.comment_key,
                            if question.accepts_other {
                                " (other enabled)"
                            } else {
                                ""
                            }
                        );
                        let _ = writeln!(
                            out,
                            "    image:   {}{}",
                            question.image_key,
                            if question.accepts_images {
                                " (uploads enabled)"
                            } else {
                                ""
                            }
                        );
                    }
                }
            }
            Ok(out)
        }
    }
}
