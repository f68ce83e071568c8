//! The Goal List Editor state container.
//!
//! # Modes
//!
//! - **Create** (no edit target): submitting appends a new goal.
//! - **Edit** (target set by [`GoalEditor::start_editing`]): submitting replaces
//!   the target's text and suggestion in place, keeping its id and position.
//!
//! Either way a submit makes exactly one Suggestion Service call, then clears
//! the input and returns to create mode. While that call is outstanding the
//! editor is busy and [`GoalEditor::can_submit`] is false.
//!
//! Submitting is split into [`GoalEditor::begin_submit`] and
//! [`GoalEditor::finish_submit`] so callers (and tests) can observe the busy
//! window; [`GoalEditor::submit`] composes the two around the service call.

pub mod render;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::models::{Goal, GoalId, IdClock};
use crate::suggestion::{Suggestion, SuggestionService};

/// Editor operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Goal not found: {0}")]
    NotFound(GoalId),

    #[error("A suggestion request is already in flight")]
    Busy,
}

/// Whether a submit creates a goal or updates the edit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(GoalId),
}

impl EditorMode {
    /// Label of the submit control.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Create => "Add",
            Self::Edit(_) => "Update",
        }
    }
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty or a request was already in flight. No request was made.
    Ignored,
    Added(GoalId),
    Updated(GoalId),
    /// The edit target was deleted while its request was in flight.
    TargetGone(GoalId),
    /// The request was cancelled; input and edit target are unchanged.
    Cancelled,
}

/// A submit whose suggestion request is in flight.
///
/// Holds the text and target captured when the request started, so later
/// typing does not change what gets stored.
#[derive(Debug)]
#[must_use = "a pending submit leaves the editor busy until finished or aborted"]
pub struct PendingSubmit {
    text: String,
    target: Option<GoalId>,
}

impl PendingSubmit {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> Option<GoalId> {
        self.target
    }
}

/// In-memory goal list plus the single-entry input form.
#[derive(Debug, Default)]
pub struct GoalEditor {
    goals: Vec<Goal>,
    input: String,
    editing: Option<GoalId>,
    busy: bool,
    clock: IdClock,
}

impl GoalEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn editing(&self) -> Option<GoalId> {
        self.editing
    }

    pub fn mode(&self) -> EditorMode {
        match self.editing {
            Some(id) => EditorMode::Edit(id),
            None => EditorMode::Create,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.busy
    }

    /// Replace the pending text (typing).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Target `id` for editing and copy its text into the input.
    pub fn start_editing(&mut self, id: GoalId) -> Result<(), EditorError> {
        if self.busy {
            return Err(EditorError::Busy);
        }
        let goal = self.goal(id).ok_or(EditorError::NotFound(id))?;
        self.input = goal.text.clone();
        self.editing = Some(id);
        tracing::debug!("Editing goal {}", id);
        Ok(())
    }

    /// Remove the goal with `id`, in any mode. Returns whether it existed.
    ///
    /// Deleting the current edit target drops back to create mode and clears
    /// the input.
    pub fn delete(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        let removed = self.goals.len() != before;

        if self.editing == Some(id) {
            self.editing = None;
            self.input.clear();
        }
        if removed {
            tracing::debug!("Deleted goal {}", id);
        }
        removed
    }

    /// Start a submit: mark the editor busy and capture the input and target.
    /// Returns `None` when the submit control is disabled.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if !self.can_submit() {
            tracing::debug!(
                "Submit ignored (empty input: {}, busy: {})",
                self.input.is_empty(),
                self.busy
            );
            return None;
        }
        self.busy = true;
        Some(PendingSubmit {
            text: self.input.clone(),
            target: self.editing,
        })
    }

    /// Complete a submit with the service's answer.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit,
        suggestion: Suggestion,
    ) -> SubmitOutcome {
        self.busy = false;
        let suggestions = suggestion.into_text();

        let outcome = match pending.target {
            None => {
                let id = self.clock.next_id();
                self.goals.push(Goal {
                    id,
                    text: pending.text,
                    suggestions,
                });
                tracing::debug!("Added goal {}", id);
                SubmitOutcome::Added(id)
            }
            Some(id) => match self.goals.iter_mut().find(|g| g.id == id) {
                Some(goal) => {
                    goal.text = pending.text;
                    goal.suggestions = suggestions;
                    tracing::debug!("Updated goal {}", id);
                    SubmitOutcome::Updated(id)
                }
                None => {
                    tracing::warn!("Goal {} was deleted before its update completed", id);
                    SubmitOutcome::TargetGone(id)
                }
            },
        };

        self.input.clear();
        self.editing = None;
        outcome
    }

    /// Give up on a submit without touching the list, input, or edit target.
    pub fn abort_submit(&mut self, pending: PendingSubmit) {
        self.busy = false;
        tracing::debug!("Submit of {:?} aborted", pending.text);
    }

    /// Submit the current input: one suggestion request, then add or update.
    ///
    /// If `cancel` fires before the service answers, the request is dropped and
    /// the editor is left as it was before the submit.
    pub async fn submit<S: SuggestionService>(
        &mut self,
        service: &S,
        cancel: &CancellationToken,
    ) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let suggestion = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            suggestion = service.suggest(&pending.text) => Some(suggestion),
        };

        match suggestion {
            Some(suggestion) => self.finish_submit(pending, suggestion),
            None => {
                self.abort_submit(pending);
                SubmitOutcome::Cancelled
            }
        }
    }
}
