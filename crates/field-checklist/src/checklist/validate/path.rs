use std::fmt;

/// Location of an element inside a template, rooted at its page name.
///
/// Rendered as dotted names, e.g. `kitchen.appliances.oven`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementPath {
    segments: Vec<String>,
}

impl ElementPath {
    pub fn page(name: &str) -> Self {
        Self {
            segments: vec![name.to_string()],
        }
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    pub fn choice(&self, index: usize) -> String {
        format!("{self}.choices[{index}]")
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<ElementPath> for String {
    fn from(path: ElementPath) -> Self {
        path.to_string()
    }
}

impl From<&ElementPath> for String {
    fn from(path: &ElementPath) -> Self {
        path.to_string()
    }
}
