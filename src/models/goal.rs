use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a goal: milliseconds since the Unix epoch at creation time,
/// bumped forward when two goals are created within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(i64);

impl GoalId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GoalId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A user-entered objective.
///
/// `suggestions` holds whatever the Suggestion Service returned for `text`,
/// or the fallback message when the request failed. It may be empty if the
/// service answered with an empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
    pub suggestions: String,
}

/// Monotonic, time-based source of [`GoalId`]s.
#[derive(Debug, Default)]
pub struct IdClock {
    last: Option<i64>,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id: the current wall-clock millisecond, or one past the
    /// previous id if the clock has not advanced (or went backwards).
    pub fn next_id(&mut self) -> GoalId {
        let now = Utc::now().timestamp_millis();
        let next = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(next);
        GoalId(next)
    }
}
