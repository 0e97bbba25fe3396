//! Core data model: documents as supplied by ingestion, and the
//! timeline events and statuses derived from them.

mod document;
mod event;
mod status;

pub use document::Document;
pub use event::{EventType, TimelineEvent};
pub use status::{ApplicationStatus, OfficeActionStatus};
