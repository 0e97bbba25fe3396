//! The raw prosecution-history document, as handed over by ingestion.

use serde::{Deserialize, Serialize};

/// A single prosecution-history record.
///
/// Produced upstream by the ingestion service and never mutated here;
/// this crate only derives timelines and statuses from collections of
/// them. The `date` stays a raw ISO-8601 string because real histories
/// are incomplete — a missing or unparsable date excludes the document
/// from the timeline rather than failing the computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique within the collection; assigned upstream.
    pub id: String,

    /// Procedural type code, drawn from an open, growing vocabulary.
    pub type_code: String,

    /// Free text. Carried through to timeline events, unused by the
    /// algorithms.
    pub description: String,

    /// ISO-8601 date, or `None` when the record has no usable date.
    pub date: Option<String>,
}
