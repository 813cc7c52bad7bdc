use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::path::ElementPath;
use super::{ValidationCode, ValidationError, ValidationErrors};
use crate::checklist::keys::{derived_keys, KeyRole};
use crate::checklist::template::{ChecklistTemplate, PageElement, QuestionRef};

/// Question names that would shadow the fixed answer fields.
const RESERVED_NAMES: [&str; 2] = ["id", "checklistId"];

/// A template that passed structural validation.
///
/// Holds the answer-key index used to map every answer key back to its
/// question; the index is only built once names are known not to collide.
#[derive(Debug, Clone)]
pub struct ValidatedTemplate<'a> {
    template: &'a ChecklistTemplate,
    keys: HashMap<String, (QuestionRef<'a>, KeyRole)>,
}

impl<'a> ValidatedTemplate<'a> {
    pub(crate) fn index(template: &'a ChecklistTemplate) -> Self {
        let mut keys = HashMap::new();
        for question in template.questions() {
            for (role, key) in derived_keys(question.name()) {
                keys.insert(key, (question, role));
            }
        }
        Self { template, keys }
    }

    pub fn template(&self) -> &'a ChecklistTemplate {
        self.template
    }

    /// Question and role an answer key belongs to, if any.
    pub fn resolve_key(&self, key: &str) -> Option<(QuestionRef<'a>, KeyRole)> {
        self.keys.get(key).copied()
    }
}

/// Check names, choices, nesting and emptiness of `template`.
pub fn validate_template(
    template: &ChecklistTemplate,
) -> Result<ValidatedTemplate<'_>, ValidationErrors> {
    let mut walker = TemplateWalker::default();
    walker.walk(template);

    debug!(
        template_id = %template.id,
        errors = walker.errors.len(),
        "template validation finished"
    );

    ValidationErrors::check(walker.errors)?;
    Ok(ValidatedTemplate::index(template))
}

#[derive(Debug)]
struct ClaimedKey {
    owner: String,
    role: KeyRole,
    path: String,
}

#[derive(Debug, Default)]
struct TemplateWalker {
    errors: Vec<ValidationError>,
    page_names: HashSet<String>,
    claimed: HashMap<String, ClaimedKey>,
}

impl TemplateWalker {
    fn walk(&mut self, template: &ChecklistTemplate) {
        if template.pages.is_empty() {
            self.report(
                "pages",
                ValidationCode::EmptyTemplate,
                "template has no pages",
            );
        }

        for page in &template.pages {
            let path = ElementPath::page(&page.name);
            if !self.page_names.insert(page.name.clone()) {
                self.report(
                    &path,
                    ValidationCode::DuplicateName,
                    format!("page name '{}' is used more than once", page.name),
                );
            }
            if page.elements.is_empty() {
                self.report(
                    &path,
                    ValidationCode::EmptyTemplate,
                    format!("page '{}' has no elements", page.name),
                );
            }

            for element in &page.elements {
                self.visit_top_level(element, &path);
            }
        }
    }

    fn visit_top_level(&mut self, element: &PageElement, page: &ElementPath) {
        let path = page.child(element.name());
        self.claim_name(element, &path);

        match element {
            PageElement::Panel(panel) => {
                for child in &panel.elements {
                    self.visit_panel_child(child, &path);
                }
            }
            question => self.check_question(question, &path),
        }
    }

    fn visit_panel_child(&mut self, element: &PageElement, panel: &ElementPath) {
        let path = panel.child(element.name());
        self.claim_name(element, &path);

        match element {
            PageElement::Panel(nested) => self.report(
                &path,
                ValidationCode::NestedPanel,
                format!(
                    "panel '{}' is nested inside another panel; panels may only contain questions",
                    nested.name
                ),
            ),
            question => self.check_question(question, &path),
        }
    }

    /// Claims the base, comment and image keys of `element`. Reports at most
    /// one collision per element.
    fn claim_name(&mut self, element: &PageElement, path: &ElementPath) {
        let name = element.name();
        let path_text = path.to_string();

        if element.as_question().is_some() && RESERVED_NAMES.contains(&name) {
            self.report(
                &path_text,
                ValidationCode::ReservedName,
                format!("question name '{name}' is reserved for answer metadata"),
            );
        }

        let mut collision = None;
        for (role, key) in derived_keys(name) {
            match self.claimed.get(&key) {
                Some(existing) => {
                    if collision.is_none() {
                        collision = Some(describe_collision(name, role, &key, existing));
                    }
                }
                None => {
                    self.claimed.insert(
                        key,
                        ClaimedKey {
                            owner: name.to_string(),
                            role,
                            path: path_text.clone(),
                        },
                    );
                }
            }
        }

        if let Some(message) = collision {
            self.report(&path_text, ValidationCode::DuplicateName, message);
        }
    }

    fn check_question(&mut self, element: &PageElement, path: &ElementPath) {
        let Some(question) = element.as_question() else {
            return;
        };

        let choices = question.choices();
        if choices.is_empty() {
            self.report(
                path,
                ValidationCode::EmptyChoices,
                format!("question '{}' has no choices", question.name()),
            );
            return;
        }

        let mut seen = HashSet::new();
        for (index, choice) in choices.iter().enumerate() {
            if !seen.insert(choice.value.as_str()) {
                self.report(
                    path.choice(index),
                    ValidationCode::DuplicateChoiceValue,
                    format!(
                        "choice value '{}' appears more than once in '{}'",
                        choice.value,
                        question.name()
                    ),
                );
            }
        }
    }

    fn report(
        &mut self,
        path: impl Into<String>,
        code: ValidationCode,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError::new(path, code, message));
    }
}

fn describe_collision(name: &str, role: KeyRole, key: &str, existing: &ClaimedKey) -> String {
    match (role, existing.role) {
        (KeyRole::Base, KeyRole::Base) => {
            format!("name '{name}' is already used at {}", existing.path)
        }
        (KeyRole::Base, _) => format!(
            "name '{name}' collides with the {} key of '{}' at {}",
            existing.role.label(),
            existing.owner,
            existing.path
        ),
        _ => format!(
            "{} key '{key}' of '{name}' collides with '{}' at {}",
            role.label(),
            existing.owner,
            existing.path
        ),
    }
}
