use crate::cli::{AnswerValidateArgs, TemplateArgs};
use crate::report::{
    render_inspection, render_reports, DocumentReport, ElementSummary, QuestionSummary,
};
use field_checklist::checklist::{
    classify, comment_key, decode_answer, decode_template, image_key, validate_template,
    ChecklistTemplate, DecodeError, ElementPath, PageElement, TemplateValidationCache,
};
use field_checklist::config::AppConfig;
use field_checklist::error::AppError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub(crate) fn run_template_validate(
    args: TemplateArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let raw = read_document(&args.path)?;
    let report = match load_template(&args.path, &raw)? {
        Ok(template) => check_template(&args.path.display().to_string(), &template),
        Err(report) => report,
    };

    print_and_reject(report, config)
}

pub(crate) fn run_template_inspect(
    args: TemplateArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let raw = read_document(&args.path)?;
    let document = args.path.display().to_string();
    let template = match load_template(&args.path, &raw)? {
        Ok(template) => template,
        Err(report) => return print_and_reject(report, config),
    };

    if let Err(errors) = validate_template(&template) {
        return print_and_reject(DocumentReport::failed(document, errors), config);
    }

    let elements = summarize_elements(&template);
    print!("{}", render_inspection(&template.id, &elements, config.output)?);
    Ok(())
}

pub(crate) fn run_answer_validate(
    args: AnswerValidateArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let AnswerValidateArgs { template, answers } = args;

    let raw_template = read_document(&template)?;
    let template_doc = template.display().to_string();
    let template = match load_template(&template, &raw_template)? {
        Ok(template) => template,
        Err(report) => return print_and_reject(report, config),
    };

    let mut cache = TemplateValidationCache::with_capacity(config.validation.cache_capacity);
    let mut reports = Vec::with_capacity(answers.len());
    for path in &answers {
        let validated = match cache.validate(&template) {
            Ok(validated) => validated,
            Err(errors) => {
                return print_and_reject(DocumentReport::failed(template_doc, errors), config)
            }
        };

        let raw = read_document(path)?;
        let answer = decode_answer(&raw).map_err(|source| AppError::Decode {
            path: path.clone(),
            source,
        })?;
        let document = path.display().to_string();
        reports.push(match validated.validate_answer(&answer) {
            Ok(()) => DocumentReport::passed(document),
            Err(errors) => DocumentReport::failed(document, errors),
        });
    }

    debug!(
        hits = cache.hits(),
        misses = cache.misses(),
        "template validation cache usage"
    );

    print!("{}", render_reports(&reports, config.output)?);
    reject_failures(&reports)
}

fn read_document(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes a template; unknown element kinds come back as a failed report,
/// malformed JSON as an error.
fn load_template(
    path: &Path,
    raw: &str,
) -> Result<Result<ChecklistTemplate, DocumentReport>, AppError> {
    match decode_template(raw) {
        Ok(template) => Ok(Ok(template)),
        Err(DecodeError::UnknownElementKinds(findings)) => Ok(Err(DocumentReport::failed(
            path.display().to_string(),
            findings,
        ))),
        Err(source) => Err(AppError::Decode {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn check_template(document: &str, template: &ChecklistTemplate) -> DocumentReport {
    match validate_template(template) {
        Ok(_) => DocumentReport::passed(document),
        Err(errors) => DocumentReport::failed(document, errors),
    }
}

fn print_and_reject(report: DocumentReport, config: &AppConfig) -> Result<(), AppError> {
    let reports = [report];
    print!("{}", render_reports(&reports, config.output)?);
    reject_failures(&reports)
}

fn reject_failures(reports: &[DocumentReport]) -> Result<(), AppError> {
    let documents = reports.iter().filter(|report| !report.valid).count();
    info!(
        checked = reports.len(),
        rejected = documents,
        "validation run finished"
    );
    if documents == 0 {
        Ok(())
    } else {
        Err(AppError::Rejected { documents })
    }
}

fn summarize_elements(template: &ChecklistTemplate) -> Vec<ElementSummary> {
    let mut summaries = Vec::new();
    for page in &template.pages {
        let page_path = ElementPath::page(&page.name);
        for element in &page.elements {
            let path = page_path.child(element.name());
            summaries.push(summarize(element, &path));
            if let PageElement::Panel(panel) = element {
                for child in &panel.elements {
                    summaries.push(summarize(child, &path.child(child.name())));
                }
            }
        }
    }
    summaries
}

fn summarize(element: &PageElement, path: &ElementPath) -> ElementSummary {
    ElementSummary {
        path: path.to_string(),
        kind: classify(element),
        question: element.as_question().map(|question| QuestionSummary {
            required: question.is_required(),
            choices: question
                .choices()
                .iter()
                .map(|choice| choice.value.clone())
                .collect(),
            accepts_other: question.show_other_item(),
            accepts_images: question.show_image_upload(),
            answer_key: question.name().to_string(),
            comment_key: comment_key(question.name()),
            image_key: image_key(question.name()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_checklist::checklist::{ElementKind, ValidationCode};
    use std::path::PathBuf;

    const TEMPLATE: &str = r#"{
        "id": "inspection",
        "pages": [{
            "name": "kitchen",
            "elements": [
                {"type": "radiogroup", "name": "q1", "isRequired": true,
                 "choices": [{"value": "Item 1", "text": "Yes"}, {"value": "Item 2", "text": "No"}]},
                {"type": "panel", "name": "appliances", "elements": [
                    {"type": "checkbox", "name": "oven", "showOtherItem": true, "showImageUpload": true,
                     "choices": [{"value": "Item 1", "text": "Clean"}]}
                ]}
            ]
        }]
    }"#;

    #[test]
    fn unknown_element_kind_becomes_a_failed_report() {
        let raw = r#"{"id": "t", "pages": [{"name": "p", "elements": [
            {"type": "text", "name": "notes"}
        ]}]}"#;
        let report = load_template(Path::new("t.json"), raw)
            .expect("json is well formed")
            .expect_err("unknown kind is rejected");

        assert!(!report.valid);
        assert_eq!(report.errors[0].code, ValidationCode::UnknownElementKind);
        assert_eq!(report.errors[0].path, "p.notes");
    }

    #[test]
    fn malformed_json_is_an_app_error() {
        match load_template(Path::new("broken.json"), "{not json") {
            Err(AppError::Decode { path, .. }) => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn inspection_lists_panel_children_with_derived_keys() {
        let template = decode_template(TEMPLATE).expect("template decodes");
        let summaries = summarize_elements(&template);

        let paths: Vec<_> = summaries.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["kitchen.q1", "kitchen.appliances", "kitchen.appliances.oven"]
        );
        assert_eq!(summaries[1].kind, ElementKind::Panel);
        assert!(summaries[1].question.is_none());

        let oven = summaries[2].question.as_ref().expect("oven is a question");
        assert_eq!(oven.comment_key, "oven-Comment");
        assert_eq!(oven.image_key, "oven-Image");
        assert!(oven.accepts_other);
        assert!(oven.accepts_images);
    }

    #[test]
    fn reject_failures_counts_invalid_documents() {
        let template = decode_template(TEMPLATE).expect("template decodes");
        let ok = check_template("t.json", &template);
        assert!(ok.valid);
        reject_failures(&[ok.clone()]).expect("nothing rejected");

        let mut broken = template.clone();
        broken.pages[0].elements.clear();
        let failed = check_template("broken.json", &broken);
        match reject_failures(&[ok, failed]) {
            Err(AppError::Rejected { documents }) => assert_eq!(documents, 1),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
