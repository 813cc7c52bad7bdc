use serde::{Deserialize, Serialize};

/// One selectable option of a RadioGroup or Checkbox question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub text: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Single-selection question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioGroupQuestion {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_required: bool,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_other_item: bool,
}

/// Multi-selection question, optionally accepting photo attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxQuestion {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_required: bool,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_other_item: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_image_upload: bool,
}

/// Grouping container for questions within a page.
///
/// Children are decoded as full page elements so that a nested panel stays
/// representable and can be rejected by template validation instead of
/// failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelElement {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageElement {
    RadioGroup(RadioGroupQuestion),
    Checkbox(CheckboxQuestion),
    Panel(PanelElement),
}

impl PageElement {
    pub fn name(&self) -> &str {
        match self {
            PageElement::RadioGroup(question) => &question.name,
            PageElement::Checkbox(question) => &question.name,
            PageElement::Panel(panel) => &panel.name,
        }
    }

    pub fn as_question(&self) -> Option<QuestionRef<'_>> {
        match self {
            PageElement::RadioGroup(question) => Some(QuestionRef::RadioGroup(question)),
            PageElement::Checkbox(question) => Some(QuestionRef::Checkbox(question)),
            PageElement::Panel(_) => None,
        }
    }

    pub fn as_panel(&self) -> Option<&PanelElement> {
        match self {
            PageElement::Panel(panel) => Some(panel),
            _ => None,
        }
    }
}

impl From<RadioGroupQuestion> for PageElement {
    fn from(question: RadioGroupQuestion) -> Self {
        Self::RadioGroup(question)
    }
}

impl From<CheckboxQuestion> for PageElement {
    fn from(question: CheckboxQuestion) -> Self {
        Self::Checkbox(question)
    }
}

impl From<PanelElement> for PageElement {
    fn from(panel: PanelElement) -> Self {
        Self::Panel(panel)
    }
}

/// Borrowed view over either question variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRef<'a> {
    RadioGroup(&'a RadioGroupQuestion),
    Checkbox(&'a CheckboxQuestion),
}

impl<'a> QuestionRef<'a> {
    pub fn name(self) -> &'a str {
        match self {
            QuestionRef::RadioGroup(question) => &question.name,
            QuestionRef::Checkbox(question) => &question.name,
        }
    }

    pub fn title(self) -> &'a str {
        match self {
            QuestionRef::RadioGroup(question) => &question.title,
            QuestionRef::Checkbox(question) => &question.title,
        }
    }

    pub fn is_required(self) -> bool {
        match self {
            QuestionRef::RadioGroup(question) => question.is_required,
            QuestionRef::Checkbox(question) => question.is_required,
        }
    }

    pub fn choices(self) -> &'a [Choice] {
        match self {
            QuestionRef::RadioGroup(question) => &question.choices,
            QuestionRef::Checkbox(question) => &question.choices,
        }
    }

    pub fn show_other_item(self) -> bool {
        match self {
            QuestionRef::RadioGroup(question) => question.show_other_item,
            QuestionRef::Checkbox(question) => question.show_other_item,
        }
    }

    /// RadioGroup questions never accept attachments.
    pub fn show_image_upload(self) -> bool {
        match self {
            QuestionRef::RadioGroup(_) => false,
            QuestionRef::Checkbox(question) => question.show_image_upload,
        }
    }

    pub fn has_choice(self, value: &str) -> bool {
        self.choices().iter().any(|choice| choice.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistPage {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

/// Root aggregate of an authored checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pages: Vec<ChecklistPage>,
}

impl ChecklistTemplate {
    /// Questions in authoring order: page-level questions and the direct
    /// children of page-level panels. Deeper panels are never descended into.
    pub fn questions(&self) -> impl Iterator<Item = QuestionRef<'_>> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter())
            .flat_map(|element| match element {
                PageElement::Panel(panel) => panel
                    .elements
                    .iter()
                    .filter_map(PageElement::as_question)
                    .collect::<Vec<_>>(),
                other => other.as_question().into_iter().collect(),
            })
    }

    pub fn find_question(&self, name: &str) -> Option<QuestionRef<'_>> {
        self.questions().find(|question| question.name() == name)
    }
}
