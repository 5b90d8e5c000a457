//! Flashcard service
//!
//! Transport-free request handling: trims input, validates it against the
//! store, then mutates. The store sits behind one lock; every write holds
//! the write guard across validation and mutation, so id allocation and the
//! uniqueness check cannot interleave with another write.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::errors::FlashcardResult;
use super::model::{Flashcard, FlashcardInput, FlashcardPatch, FlashcardView, Tag};
use super::store::FlashcardStore;
use super::validator::{check_question_unique, check_tag, require_non_empty, require_present};

/// Shared flashcard service
#[derive(Debug, Default)]
pub struct FlashcardService {
    store: RwLock<FlashcardStore>,
}

impl FlashcardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store
    pub fn with_store(store: FlashcardStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    // Writes validate before they mutate, so a poisoned guard still holds a
    // consistent store.
    fn read(&self) -> RwLockReadGuard<'_, FlashcardStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FlashcardStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every flashcard
    pub fn list_all(&self, reveal: bool) -> Vec<FlashcardView> {
        self.read().list().map(|card| card.view(reveal)).collect()
    }

    /// Flashcards with the given tag
    pub fn list_by_tag(&self, tag: Tag, reveal: bool) -> Vec<FlashcardView> {
        self.read()
            .list_by_tag(tag)
            .map(|card| card.view(reveal))
            .collect()
    }

    /// One flashcard by id
    pub fn get(&self, id: u64, reveal: bool) -> FlashcardResult<FlashcardView> {
        self.read().get(id).map(|card| card.view(reveal))
    }

    /// Create a flashcard from raw client input
    ///
    /// All three fields are required. Checks run in order: presence,
    /// non-empty question, non-empty answer, tag, question uniqueness.
    pub fn create(&self, input: FlashcardInput) -> FlashcardResult<Flashcard> {
        let question = require_present("question", input.question.as_deref())?.trim();
        let answer = require_present("answer", input.answer.as_deref())?.trim();
        let tag = require_present("tag", input.tag.as_deref())?.trim();

        require_non_empty("question", Some(question))?;
        require_non_empty("answer", Some(answer))?;
        let tag: Tag = tag.parse()?;

        let mut store = self.write();
        if let Err(err) = check_question_unique(question, &store, None) {
            debug!(error = %err, "flashcard create rejected");
            return Err(err);
        }

        let card = store.create(question.to_string(), answer.to_string(), tag);
        info!(flashcard_id = card.id, tag = %card.tag, "flashcard created");
        Ok(card)
    }

    /// Apply a partial update
    ///
    /// Checks run in order: existence, tag, non-empty question, non-empty
    /// answer, question uniqueness excluding this card. Nothing changes
    /// unless every check passes.
    pub fn update(&self, id: u64, input: FlashcardInput) -> FlashcardResult<Flashcard> {
        let mut store = self.write();
        store.get(id)?;

        let question = input.question.as_deref().map(str::trim);
        let answer = input.answer.as_deref().map(str::trim);

        let tag = check_tag(input.tag.as_deref())?;
        require_non_empty("question", question)?;
        require_non_empty("answer", answer)?;
        if let Some(question) = question {
            if let Err(err) = check_question_unique(question, &store, Some(id)) {
                debug!(flashcard_id = id, error = %err, "flashcard update rejected");
                return Err(err);
            }
        }

        let patch = FlashcardPatch {
            question: question.map(str::to_string),
            answer: answer.map(str::to_string),
            tag,
        };
        let card = store.update(id, patch)?.clone();
        info!(flashcard_id = id, tag = %card.tag, "flashcard updated");
        Ok(card)
    }

    /// Remove a flashcard
    pub fn delete(&self, id: u64) -> FlashcardResult<()> {
        self.write().delete(id)?;
        info!(flashcard_id = id, "flashcard deleted");
        Ok(())
    }

    /// Number of stored flashcards
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
