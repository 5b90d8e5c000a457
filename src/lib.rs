//! flashdeck - an in-memory flashcard service with an activity heatmap

pub mod activity;
pub mod cli;
pub mod flashcards;
pub mod http_server;
pub mod observability;
