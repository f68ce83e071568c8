//! Goal list editor with AI-generated suggestions.
//!
//! The [`editor::GoalEditor`] is a plain state container: a list of goals plus a
//! single input used for both creating and editing entries. Each submit asks a
//! [`suggestion::SuggestionService`] for advisory text; failures degrade to a
//! fixed fallback message instead of an error.

pub mod config;
pub mod console;
pub mod editor;
pub mod models;
pub mod suggestion;
