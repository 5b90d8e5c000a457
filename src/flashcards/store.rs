//! In-memory flashcard store
//!
//! Owns every flashcard record and allocates ids. The store does not
//! validate; callers run the validator first.
//!
//! Ids are allocated as `max(existing) + 1`, or 0 when empty. A new id is
//! therefore always larger than every id present, so iterating the map in
//! key order is the same as iterating in insertion order. Deleting the
//! current maximum lets the next create reuse its id.

use std::collections::BTreeMap;

use super::errors::{FlashcardError, FlashcardResult};
use super::model::{Flashcard, FlashcardPatch, Tag};

/// Id-keyed flashcard storage
#[derive(Debug, Default)]
pub struct FlashcardStore {
    cards: BTreeMap<u64, Flashcard>,
}

impl FlashcardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All flashcards in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.values()
    }

    /// Flashcards carrying the given tag, in insertion order
    pub fn list_by_tag(&self, tag: Tag) -> impl Iterator<Item = &Flashcard> {
        self.cards.values().filter(move |card| card.tag == tag)
    }

    /// Look up a flashcard by id
    pub fn get(&self, id: u64) -> FlashcardResult<&Flashcard> {
        self.cards.get(&id).ok_or(FlashcardError::NotFound(id))
    }

    /// Id the next create will receive
    pub fn next_id(&self) -> u64 {
        self.cards.keys().next_back().map_or(0, |max| max + 1)
    }

    /// Insert a new flashcard under a freshly allocated id
    pub fn create(&mut self, question: String, answer: String, tag: Tag) -> Flashcard {
        let id = self.next_id();
        let card = Flashcard {
            id,
            question,
            answer,
            tag,
        };
        self.cards.insert(id, card.clone());
        card
    }

    /// Apply the supplied fields, in order question, answer, tag
    pub fn update(&mut self, id: u64, patch: FlashcardPatch) -> FlashcardResult<&Flashcard> {
        let card = self.cards.get_mut(&id).ok_or(FlashcardError::NotFound(id))?;

        if let Some(question) = patch.question {
            card.question = question;
        }
        if let Some(answer) = patch.answer {
            card.answer = answer;
        }
        if let Some(tag) = patch.tag {
            card.tag = tag;
        }

        Ok(card)
    }

    /// Remove a flashcard entirely
    pub fn delete(&mut self, id: u64) -> FlashcardResult<Flashcard> {
        self.cards.remove(&id).ok_or(FlashcardError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &mut FlashcardStore, question: &str) -> Flashcard {
        store.create(question.to_string(), "a".to_string(), Tag::Green)
    }

    #[test]
    fn test_first_id_is_zero() {
        let mut store = FlashcardStore::new();
        assert_eq!(store.next_id(), 0);
        assert_eq!(create(&mut store, "q0").id, 0);
    }

    #[test]
    fn test_ids_increase_past_max() {
        let mut store = FlashcardStore::new();
        let ids: Vec<u64> = (0..5).map(|i| create(&mut store, &format!("q{}", i)).id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_deleted_max_id_is_reused() {
        let mut store = FlashcardStore::new();
        create(&mut store, "q0");
        let last = create(&mut store, "q1");

        store.delete(last.id).unwrap();
        assert_eq!(create(&mut store, "q2").id, last.id);
    }

    #[test]
    fn test_deleted_inner_id_is_not_reused() {
        let mut store = FlashcardStore::new();
        let first = create(&mut store, "q0");
        create(&mut store, "q1");

        store.delete(first.id).unwrap();
        assert_eq!(create(&mut store, "q2").id, 2);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = FlashcardStore::new();
        create(&mut store, "q0");
        create(&mut store, "q1");
        create(&mut store, "q2");
        store.delete(0).unwrap();
        create(&mut store, "q3");

        let questions: Vec<&str> = store.list().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn test_list_by_tag() {
        let mut store = FlashcardStore::new();
        store.create("q0".into(), "a".into(), Tag::Red);
        store.create("q1".into(), "a".into(), Tag::Green);
        store.create("q2".into(), "a".into(), Tag::Red);

        let ids: Vec<u64> = store.list_by_tag(Tag::Red).map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(store.list_by_tag(Tag::Yellow).count(), 0);
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut store = FlashcardStore::new();
        let card = create(&mut store, "q0");

        let patch = FlashcardPatch {
            answer: Some("b".to_string()),
            ..Default::default()
        };
        let updated = store.update(card.id, patch).unwrap();

        assert_eq!(updated.question, "q0");
        assert_eq!(updated.answer, "b");
        assert_eq!(updated.tag, Tag::Green);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = FlashcardStore::new();
        assert_eq!(store.get(9).unwrap_err(), FlashcardError::NotFound(9));
        assert_eq!(
            store.update(9, FlashcardPatch::default()).unwrap_err(),
            FlashcardError::NotFound(9)
        );
        assert_eq!(store.delete(9).unwrap_err(), FlashcardError::NotFound(9));
    }

    #[test]
    fn test_delete_erases_entry() {
        let mut store = FlashcardStore::new();
        let card = create(&mut store, "q0");

        assert_eq!(store.delete(card.id).unwrap(), card);
        assert!(store.is_empty());
        assert!(store.get(card.id).is_err());
    }
}
