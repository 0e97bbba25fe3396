//! Response-deadline computation: statutory period plus filed
//! extensions, in calendar months.

use jiff::Span;
use jiff::civil::Date;

use crate::classify::Classifier;
use crate::model::{Document, EventType, TimelineEvent};

/// Months allowed to respond to a non-final office action.
const NON_FINAL_PERIOD_MONTHS: i64 = 3;

/// Months allowed to respond to a final office action.
const FINAL_PERIOD_MONTHS: i64 = 2;

/// Compute the statutory response deadline for an office action.
///
/// The base period — three months for a non-final action, two for a
/// final one — is extended by one calendar month per extension-of-time
/// filing dated strictly after the action. Extensions are counted over
/// the full, unfiltered document set rather than the built timeline. No
/// cap is applied to the count.
///
/// Month addition is calendar arithmetic with end-of-month clamping
/// (Jan 31 + 1 month = Feb 28 or 29); there is no business-day or
/// holiday adjustment.
///
/// Callers are expected to pass action events only. A non-action event
/// gets the non-final period rather than a panic.
pub fn response_deadline(
    classifier: &Classifier,
    action: &TimelineEvent,
    all_documents: &[Document],
) -> Date {
    let base = match action.event_type {
        EventType::FinalAction => FINAL_PERIOD_MONTHS,
        _ => NON_FINAL_PERIOD_MONTHS,
    };
    let extensions = extensions_after(classifier, all_documents, action.date);
    action.date.saturating_add(Span::new().months(base + extensions))
}

/// Count extension-of-time documents dated strictly after `after`.
/// Undated extensions cannot be placed and do not count.
fn extensions_after(classifier: &Classifier, documents: &[Document], after: Date) -> i64 {
    documents
        .iter()
        .filter(|doc| classifier.classify(&doc.type_code).event_type == EventType::ExtensionOfTime)
        .filter_map(|doc| doc.date.as_deref()?.parse::<Date>().ok())
        .filter(|&date| date > after)
        .count() as i64
}
