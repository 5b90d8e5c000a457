//! Flashcard input validation
//!
//! Pure checks, no mutation. Callers trim input before calling.

use super::errors::{FlashcardError, FlashcardResult};
use super::model::Tag;
use super::store::FlashcardStore;

/// Upper-case the first character of a field name for messages
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fail if a required field was omitted
pub fn require_present<'a>(name: &str, value: Option<&'a str>) -> FlashcardResult<&'a str> {
    value.ok_or_else(|| FlashcardError::validation(format!("{} is required", capitalize(name))))
}

/// Fail if the value is blank after trimming; omitted values pass
pub fn require_non_empty(name: &str, value: Option<&str>) -> FlashcardResult<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(FlashcardError::validation(format!(
            "{} cannot be empty",
            capitalize(name)
        ))),
        _ => Ok(()),
    }
}

/// Parse a tag case-insensitively; omitted tags pass as `None`
pub fn check_tag(tag: Option<&str>) -> FlashcardResult<Option<Tag>> {
    tag.map(str::parse::<Tag>).transpose()
}

/// Fail if another flashcard already has this question
///
/// Comparison is exact and case-sensitive after trimming. The first match in
/// insertion order is reported.
pub fn check_question_unique(
    question: &str,
    store: &FlashcardStore,
    exclude_id: Option<u64>,
) -> FlashcardResult<()> {
    let question = question.trim();
    let clash = store
        .list()
        .filter(|card| Some(card.id) != exclude_id)
        .find(|card| card.question == question);

    match clash {
        Some(card) => Err(FlashcardError::validation(format!(
            "Question already exists at flashcard_id: {}",
            card.id
        ))),
        None => Ok(()),
    }
}
