//! Timeline events: the classified, dated entries the engine reasons
//! over.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Semantic category of a prosecution-history document.
///
/// Closed enumeration so the resolver's and status classifier's branch
/// logic is exhaustiveness-checked. Type codes the vocabulary does not
/// recognize classify as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// The application's first filing.
    ApplicationFiled,

    /// A non-final office action. Opens a three-month response period.
    NonFinalAction,

    /// A final office action. Opens a two-month response period.
    FinalAction,

    /// An amendment or other response filed by the applicant.
    ResponseFiled,

    /// A request for continued examination. Resets examination after a
    /// final action; a response for timeline purposes.
    ContinuedExaminationRequest,

    /// Notice that the application will be granted. Terminal for
    /// response tracking.
    NoticeOfAllowance,

    /// A filing that purchases additional response time, one calendar
    /// month per filing.
    ExtensionOfTime,

    /// Recognized as data but procedurally insignificant, or not
    /// recognized at all.
    Other,
}

impl EventType {
    /// An office action that opens a response obligation.
    pub fn is_action(self) -> bool {
        matches!(self, Self::NonFinalAction | Self::FinalAction)
    }

    /// A filing that explicitly satisfies a pending action.
    pub fn is_response(self) -> bool {
        matches!(self, Self::ResponseFiled | Self::ContinuedExaminationRequest)
    }
}

/// A dated, classified entry in the prosecution timeline.
///
/// Derived one-to-one from each milestone document. Recomputed on every
/// query; nothing here is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// The source document's id.
    pub id: String,

    pub date: Date,

    pub event_type: EventType,

    /// The original type code, kept for display and audit.
    pub type_code: String,

    /// The source document's free text.
    pub description: String,
}
