//! Derived answer keys.
//!
//! A question's answer lives under its `name`. Free-text for the "other"
//! choice lives under `name-Comment` and photo attachments under
//! `name-Image`. Names are used byte-for-byte; nothing is trimmed or folded.

/// Selection value meaning "none of the listed choices, see comment".
pub const OTHER_SENTINEL: &str = "other";

pub const COMMENT_SUFFIX: &str = "-Comment";
pub const IMAGE_SUFFIX: &str = "-Image";

pub fn comment_key(name: &str) -> String {
    format!("{name}{COMMENT_SUFFIX}")
}

pub fn image_key(name: &str) -> String {
    format!("{name}{IMAGE_SUFFIX}")
}

/// What a key in an answer record stores for its question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyRole {
    Base,
    Comment,
    Image,
}

impl KeyRole {
    pub const fn ordered() -> [Self; 3] {
        [Self::Base, Self::Comment, Self::Image]
    }

    pub fn key_for(self, name: &str) -> String {
        match self {
            KeyRole::Base => name.to_string(),
            KeyRole::Comment => comment_key(name),
            KeyRole::Image => image_key(name),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "answer",
            Self::Comment => "comment",
            Self::Image => "image",
        }
    }
}

/// Base, comment and image keys for `name`, in that order.
pub fn derived_keys(name: &str) -> [(KeyRole, String); 3] {
    KeyRole::ordered().map(|role| (role, role.key_for(name)))
}

pub fn is_other(value: &str) -> bool {
    value == OTHER_SENTINEL
}
