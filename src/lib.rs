//! Prosecution timeline and response-deadline engine.
//!
//! Given the record of filings and communications exchanged between an
//! applicant and a patent office, this crate determines which
//! communication (if any) currently awaits a response, the statutory
//! deadline for that response including filed extensions, and the
//! overall procedural status of the application.
//!
//! The whole crate is pure, synchronous computation over value objects:
//! no I/O, no shared state, nothing stored or cached. Every exposed
//! function is safe to call concurrently; derived values are recomputed
//! on each query.
//!
//! ```
//! use docket::{Classifier, Document, build_timeline, find_current_office_action};
//!
//! let docs = vec![Document {
//!     id: "doc-1".into(),
//!     type_code: "CTNF".into(),
//!     description: "Non-final rejection".into(),
//!     date: Some("2023-06-01".into()),
//! }];
//!
//! let classifier = Classifier::builtin();
//! let timeline = build_timeline(&classifier, &docs);
//! assert!(find_current_office_action(&timeline).is_some());
//! ```

mod classify;
mod deadline;
mod model;
mod resolve;
mod status;
mod timeline;

pub use classify::{Classification, Classifier, ClassifierTableError};
pub use deadline::response_deadline;
pub use model::{ApplicationStatus, Document, EventType, OfficeActionStatus, TimelineEvent};
pub use resolve::find_current_office_action;
pub use status::{application_status, office_action_status};
pub use timeline::build_timeline;
