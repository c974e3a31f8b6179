//! Wire DTOs for the feedback backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of `GET /summary/{district}/{service}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    /// AI-generated summary of prior feedback; paragraphs separated by
    /// blank lines.
    pub summary: String,
}

/// Body of `POST /submit_feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    /// District routing code (e.g. `"lko"`).
    pub district_name: String,
    /// Service category name (e.g. `"Water Supply"`).
    pub service_type: String,
    /// The user's free-text feedback, as typed.
    pub user_feedback: String,
}

/// Response of `POST /submit_feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeedbackResponse {
    /// Acknowledgement text from the handling department.
    pub response: String,
}
