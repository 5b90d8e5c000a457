//! Flashcard records and their wire shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::FlashcardError;

/// Message returned when a tag is not one of the canonical values
pub const TAG_CHOICES_MESSAGE: &str = "Choose one amongst RED, YELLOW, or GREEN";

/// Priority marker attached to every flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Red,
    Yellow,
    Green,
}

impl Tag {
    /// All tags, in display order
    pub const ALL: [Tag; 3] = [Tag::Red, Tag::Yellow, Tag::Green];

    /// Canonical uppercase form
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Red => "RED",
            Tag::Yellow => "YELLOW",
            Tag::Green => "GREEN",
        }
    }

    /// Lowercase form, used in route paths
    pub fn slug(&self) -> &'static str {
        match self {
            Tag::Red => "red",
            Tag::Yellow => "yellow",
            Tag::Green => "green",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tag {
    type Err = FlashcardError;

    /// Case-insensitive, ignores surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RED" => Ok(Tag::Red),
            "YELLOW" => Ok(Tag::Yellow),
            "GREEN" => Ok(Tag::Green),
            _ => Err(FlashcardError::validation(TAG_CHOICES_MESSAGE)),
        }
    }
}

/// A stored flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub tag: Tag,
}

impl Flashcard {
    /// Serialized view of this card; the answer is only carried when revealed
    pub fn view(&self, reveal: bool) -> FlashcardView {
        FlashcardView {
            id: self.id,
            question: self.question.clone(),
            answer: reveal.then(|| self.answer.clone()),
            tag: self.tag,
        }
    }
}

/// Read-path representation of a flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardView {
    pub id: u64,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub tag: Tag,
}

/// Fields to change on an existing flashcard; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub tag: Option<Tag>,
}

/// Raw create/update input as it arrives from a client
///
/// Fields are untrimmed and unvalidated; a missing field is `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashcardInput {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl FlashcardInput {
    /// Input with all three fields supplied
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            tag: Some(tag.into()),
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
