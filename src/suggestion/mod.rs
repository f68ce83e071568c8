//! Suggestion Service: advisory text for a goal.
//!
//! The editor only sees the [`SuggestionService`] trait and the tagged
//! [`Suggestion`] outcome. Failures never propagate; they become
//! [`Suggestion::Fallback`], whose text is [`FALLBACK_MESSAGE`].

mod client;
mod types;

use std::future::Future;

pub use client::{ClientError, SuggestionClient, DEFAULT_URL, SUGGESTION_PATH};
pub use types::*;

/// Text shown in place of a suggestion when the service could not provide one.
pub const FALLBACK_MESSAGE: &str = "Unable to generate suggestions.";

/// Outcome of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// The service answered with this message.
    Generated(String),
    /// The request failed; display [`FALLBACK_MESSAGE`].
    Fallback,
}

impl Suggestion {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(message) => message,
            Self::Fallback => FALLBACK_MESSAGE,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated(message) => message,
            Self::Fallback => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Produces a suggestion for non-empty goal text.
///
/// Implementations perform at most one request per call and must not fail:
/// any error is reported as [`Suggestion::Fallback`].
pub trait SuggestionService {
    fn suggest(&self, goal: &str) -> impl Future<Output = Suggestion> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_text_is_fixed_message() {
        assert_eq!(Suggestion::Fallback.text(), "Unable to generate suggestions.");
        assert_eq!(
            Suggestion::Fallback.into_text(),
            "Unable to generate suggestions."
        );
    }

    #[test]
    fn generated_text_is_passed_through() {
        let suggestion = Suggestion::Generated("Start slow".to_string());
        assert_eq!(suggestion.text(), "Start slow");
        assert!(!suggestion.is_fallback());
        assert_eq!(suggestion.into_text(), "Start slow");
    }
}
