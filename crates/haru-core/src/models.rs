use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

/// A single tracked goal for the current session.
///
/// Both timestamps are fixed-zone (KST); `done` only ever transitions
/// false -> true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub description: String,
    pub deadline: DateTime<Tz>,
    pub created_at: DateTime<Tz>,
    pub done: bool,
}

impl Goal {
    pub fn new(description: String, deadline: DateTime<Tz>, created_at: DateTime<Tz>) -> Self {
        Self {
            description,
            deadline,
            created_at,
            done: false,
        }
    }
}

/// The record the extraction collaborator returns for one submitted sentence.
/// `deadline` is the raw natural-language phrase; resolution happens locally.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtractedGoal {
    pub goal: String,
    pub deadline: String,
}
