//! Submission lifecycle

use serde::{Deserialize, Serialize};

/// `Idle -> Pending -> {Succeeded, Failed}`, and back to `Pending` only
/// through a new submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}
