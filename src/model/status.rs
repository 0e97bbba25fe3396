//! Status enumerations consumed by displays and downstream summaries.

use serde::{Deserialize, Serialize};

/// Whether a specific office action still awaits a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfficeActionStatus {
    /// The action is the current one and no response has closed it.
    PendingResponse,

    /// The action has been responded to, superseded, or is not part of
    /// the timeline at all.
    Completed,
}

/// Overall procedural posture of an application.
///
/// Applications alternate between `PendingExamination` (ball in the
/// examiner's court) and `PendingResponse` (a response is owed) until
/// allowance, which is terminal for this model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// A notice of allowance has issued.
    Allowed,

    /// An office action is awaiting the applicant's response.
    PendingResponse,

    /// No action has issued yet, or the latest one has been responded
    /// to and no further action has followed.
    PendingExamination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&OfficeActionStatus::PendingResponse).unwrap(),
            "\"PENDING_RESPONSE\""
        );
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::PendingExamination).unwrap(),
            "\"PENDING_EXAMINATION\""
        );
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Allowed).unwrap(),
            "\"ALLOWED\""
        );
    }
}
