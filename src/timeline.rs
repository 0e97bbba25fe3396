//! Timeline construction: filter a raw document collection down to its
//! milestone events, in chronological order.

use jiff::civil::Date;

use crate::classify::Classifier;
use crate::model::{Document, TimelineEvent};

/// Build the ordered prosecution timeline for a document collection.
///
/// Documents with no parsable date and documents that classify as
/// non-milestones are dropped, not errors — real histories contain
/// scanning artifacts and codes the vocabulary does not know yet.
///
/// Events sort ascending by date. Same-day events keep their input
/// order (stable sort); that tie-break is part of the contract, since
/// the resolver is order-sensitive.
pub fn build_timeline(classifier: &Classifier, documents: &[Document]) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = documents
        .iter()
        .filter_map(|doc| {
            let classification = classifier.classify(&doc.type_code);
            if !classification.milestone {
                return None;
            }
            let date: Date = doc.date.as_deref()?.parse().ok()?;
            Some(TimelineEvent {
                id: doc.id.clone(),
                date,
                event_type: classification.event_type,
                type_code: doc.type_code.clone(),
                description: doc.description.clone(),
            })
        })
        .collect();

    events.sort_by_key(|event| event.date);
    events
}
