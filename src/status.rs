//! Status classification: per-action and whole-application procedural
//! status.

use crate::classify::Classifier;
use crate::model::{ApplicationStatus, Document, EventType, OfficeActionStatus, TimelineEvent};
use crate::resolve::find_current_office_action;
use crate::timeline::build_timeline;

/// Whether the given office action still awaits a response.
///
/// The timeline is rebuilt from the full document set and the current
/// action re-resolved; the supplied action is pending exactly when it
/// is that resolved action. Anything else — responded to, superseded,
/// or absent from the timeline entirely — reports `Completed`. Never an
/// error.
pub fn office_action_status(
    classifier: &Classifier,
    all_documents: &[Document],
    action: &TimelineEvent,
) -> OfficeActionStatus {
    let timeline = build_timeline(classifier, all_documents);
    match find_current_office_action(&timeline) {
        Some(current) if current.id == action.id => OfficeActionStatus::PendingResponse,
        _ => OfficeActionStatus::Completed,
    }
}

/// Overall procedural status of an application.
///
/// Any notice of allowance makes the application `Allowed`, terminal
/// for this model. Otherwise a pending office action means a response
/// is owed; with none, the ball is in the examiner's court.
pub fn application_status(timeline: &[TimelineEvent]) -> ApplicationStatus {
    if timeline
        .iter()
        .any(|event| event.event_type == EventType::NoticeOfAllowance)
    {
        return ApplicationStatus::Allowed;
    }

    if find_current_office_action(timeline).is_some() {
        ApplicationStatus::PendingResponse
    } else {
        ApplicationStatus::PendingExamination
    }
}
