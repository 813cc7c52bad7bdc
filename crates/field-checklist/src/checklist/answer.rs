use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::keys::{comment_key, image_key};

/// Photo attached to a question, as produced by the form renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerImage {
    /// Original file name.
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Base64 payload, either bare or wrapped in a `data:` URL.
    pub content: String,
}

/// Value stored under one answer key.
///
/// Serialized untagged so records keep their flat wire shape: a string, an
/// array of strings, or an array of image objects. An empty array decodes as
/// `Selections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selections(Vec<String>),
    Images(Vec<AnswerImage>),
}

impl AnswerValue {
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::Selections(values) => values.is_empty(),
            AnswerValue::Images(images) => images.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Selections(values) => Some(values),
            _ => None,
        }
    }

    /// Empty arrays count as zero images.
    pub fn as_images(&self) -> Option<&[AnswerImage]> {
        match self {
            AnswerValue::Images(images) => Some(images),
            AnswerValue::Selections(values) if values.is_empty() => Some(&[]),
            _ => None,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Selections(_) => "selection list",
            Self::Images(_) => "image list",
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Selections(values)
    }
}

impl From<Vec<AnswerImage>> for AnswerValue {
    fn from(images: Vec<AnswerImage>) -> Self {
        Self::Images(images)
    }
}

/// One field worker's submission against a template.
///
/// `checklist_id` references a template by id only; nothing here checks that
/// the template still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistAnswer {
    pub id: String,
    #[serde(rename = "checklistId")]
    pub checklist_id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, AnswerValue>,
}

impl ChecklistAnswer {
    pub fn new(id: impl Into<String>, checklist_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checklist_id: checklist_id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn set_comment(&mut self, question: &str, comment: impl Into<String>) {
        self.fields
            .insert(comment_key(question), AnswerValue::Text(comment.into()));
    }

    pub fn attach_images(&mut self, question: &str, images: Vec<AnswerImage>) {
        if images.is_empty() {
            return;
        }
        self.fields
            .entry(image_key(question))
            .and_modify(|existing| {
                if let AnswerValue::Images(current) = existing {
                    current.extend(images.iter().cloned());
                } else {
                    *existing = AnswerValue::Images(images.clone());
                }
            })
            .or_insert_with(|| AnswerValue::Images(images.clone()));
    }

    pub fn comment(&self, question: &str) -> Option<&str> {
        self.fields
            .get(&comment_key(question))
            .and_then(AnswerValue::as_text)
    }

    pub fn images(&self, question: &str) -> &[AnswerImage] {
        self.fields
            .get(&image_key(question))
            .and_then(AnswerValue::as_images)
            .unwrap_or(&[])
    }

    /// Dynamic keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
