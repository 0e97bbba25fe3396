//! Current-action resolution: which office action, if any, is awaiting
//! a response.

use crate::model::{EventType, TimelineEvent};

/// Find the office action currently awaiting a response.
///
/// A single left fold over the ordered timeline, carrying the one
/// pending action:
///
/// - a non-final or final action becomes the pending action,
///   unconditionally — an action issued while another is pending is by
///   definition the earlier one's implicit response;
/// - a response or continued-examination request clears it (a no-op if
///   nothing was pending);
/// - a notice of allowance clears it terminally;
/// - everything else is inert.
///
/// The input must already be date-ordered ([`build_timeline`] output);
/// no sorting happens here. The result, when present, is always a
/// non-final or final action.
///
/// [`build_timeline`]: crate::build_timeline
pub fn find_current_office_action(timeline: &[TimelineEvent]) -> Option<&TimelineEvent> {
    timeline
        .iter()
        .fold(None, |pending, event| match event.event_type {
            EventType::NonFinalAction | EventType::FinalAction => Some(event),
            EventType::ResponseFiled
            | EventType::ContinuedExaminationRequest
            | EventType::NoticeOfAllowance => None,
            EventType::ApplicationFiled | EventType::ExtensionOfTime | EventType::Other => pending,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn event(id: &str, year: i16, month: i8, day: i8, event_type: EventType) -> TimelineEvent {
        TimelineEvent {
            id: id.into(),
            date: date(year, month, day),
            event_type,
            type_code: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn empty_timeline_has_no_current_action() {
        assert!(find_current_office_action(&[]).is_none());
    }

    #[test]
    fn unanswered_action_is_current() {
        let timeline = vec![
            event("filed", 2023, 1, 1, EventType::ApplicationFiled),
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
            event("resp-1", 2023, 9, 1, EventType::ResponseFiled),
            event("oa-2", 2024, 1, 1, EventType::NonFinalAction),
        ];

        let current = find_current_office_action(&timeline).unwrap();
        assert_eq!(current.id, "oa-2");
        assert!(current.event_type.is_action());
    }

    #[test]
    fn fully_answered_timeline_has_no_current_action() {
        let timeline = vec![
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
            event("resp-1", 2023, 9, 1, EventType::ResponseFiled),
            event("oa-2", 2024, 1, 1, EventType::NonFinalAction),
            event("resp-2", 2024, 3, 1, EventType::ResponseFiled),
        ];

        assert!(find_current_office_action(&timeline).is_none());
    }

    #[test]
    fn later_action_implicitly_answers_earlier_one() {
        let timeline = vec![
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
            event("final", 2024, 1, 1, EventType::FinalAction),
        ];

        let current = find_current_office_action(&timeline).unwrap();
        assert_eq!(current.id, "final");
        assert_eq!(current.event_type, EventType::FinalAction);
    }

    #[test]
    fn allowance_closes_response_tracking() {
        let timeline = vec![
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
            event("resp-1", 2023, 9, 1, EventType::ResponseFiled),
            event("noa", 2024, 1, 1, EventType::NoticeOfAllowance),
        ];

        assert!(find_current_office_action(&timeline).is_none());
    }

    #[test]
    fn continued_examination_request_satisfies_final_action() {
        let timeline = vec![
            event("final", 2023, 6, 1, EventType::FinalAction),
            event("rce", 2023, 8, 1, EventType::ContinuedExaminationRequest),
        ];

        assert!(find_current_office_action(&timeline).is_none());
    }

    #[test]
    fn inert_events_leave_pending_state_alone() {
        let timeline = vec![
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
            event("ext", 2023, 8, 1, EventType::ExtensionOfTime),
            event("misc", 2023, 8, 15, EventType::Other),
        ];

        let current = find_current_office_action(&timeline).unwrap();
        assert_eq!(current.id, "oa-1");
    }

    #[test]
    fn response_with_nothing_pending_is_a_no_op() {
        let timeline = vec![
            event("resp", 2023, 3, 1, EventType::ResponseFiled),
            event("oa-1", 2023, 6, 1, EventType::NonFinalAction),
        ];

        let current = find_current_office_action(&timeline).unwrap();
        assert_eq!(current.id, "oa-1");
    }
}
