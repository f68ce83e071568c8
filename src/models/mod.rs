//! Domain models for the goal editor.
//!
//! - [`Goal`]: a user-entered objective with its suggestion text. Goals live only
//!   in the editor's in-memory list; nothing is persisted.
//! - [`GoalId`]: integer identifier minted by an [`IdClock`] at creation time.

mod goal;

pub use goal::*;
