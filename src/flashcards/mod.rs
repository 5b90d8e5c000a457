//! Flashcards subsystem
//!
//! In-memory question/answer/tag records with validated CRUD.
//!
//! # Invariants
//!
//! - No two stored flashcards share a question (trimmed, case-sensitive)
//! - A stored tag is always one of RED, YELLOW, GREEN
//! - An id identifies one flashcard until that flashcard is deleted
//!
//! # Usage
//!
//! ```ignore
//! use flashdeck::flashcards::{FlashcardInput, FlashcardService};
//!
//! let service = FlashcardService::new();
//! let card = service.create(FlashcardInput::new("2+2=?", "4", "red"))?;
//! let view = service.get(card.id, true)?;
//! ```

mod errors;
mod model;
mod service;
mod store;
pub mod validator;

pub use errors::{FlashcardError, FlashcardResult};
pub use model::{Flashcard, FlashcardInput, FlashcardPatch, FlashcardView, Tag, TAG_CHOICES_MESSAGE};
pub use service::FlashcardService;
pub use store::FlashcardStore;
