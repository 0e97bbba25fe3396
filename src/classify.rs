//! Document classification: raw procedural type codes to event
//! categories.
//!
//! The code-to-category mapping is data, not logic. The source
//! vocabulary grows over time as offices introduce new document codes,
//! so new entries land in the table — builtin or an operator-supplied
//! TOML file — without touching resolver or deadline code.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::EventType;

/// Result of classifying a single type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub event_type: EventType,

    /// Procedurally significant: produces a timeline event.
    pub milestone: bool,
}

/// Errors from loading an external classification table.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierTableError {
    #[error("invalid classifier table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("classifier table has no code entries")]
    Empty,
}

/// Builtin vocabulary: the USPTO transaction-history codes this engine
/// ships with. Every builtin code is a milestone; anything outside the
/// table classifies as [`EventType::Other`] and produces no event.
const BUILTIN_CODES: &[(&str, EventType)] = &[
    ("IEXX", EventType::ApplicationFiled),
    ("FLRCPT", EventType::ApplicationFiled),
    ("CTNF", EventType::NonFinalAction),
    ("CTFR", EventType::FinalAction),
    ("A...", EventType::ResponseFiled),
    ("A.NE", EventType::ResponseFiled),
    ("RESP", EventType::ResponseFiled),
    ("AMSB", EventType::ResponseFiled),
    ("RCEX", EventType::ContinuedExaminationRequest),
    ("BRCE", EventType::ContinuedExaminationRequest),
    ("NOA", EventType::NoticeOfAllowance),
    ("MN/=.", EventType::NoticeOfAllowance),
    ("XT/G", EventType::ExtensionOfTime),
    ("EXT.", EventType::ExtensionOfTime),
];

/// Maps raw type codes to semantic event categories.
#[derive(Debug, Clone)]
pub struct Classifier {
    codes: HashMap<String, Classification>,
}

impl Classifier {
    /// The compiled-in vocabulary.
    pub fn builtin() -> Self {
        let codes = BUILTIN_CODES
            .iter()
            .map(|&(code, event_type)| {
                (
                    code.to_string(),
                    Classification {
                        event_type,
                        milestone: true,
                    },
                )
            })
            .collect();
        Self { codes }
    }

    /// Load a vocabulary from a TOML table:
    ///
    /// ```toml
    /// [[code]]
    /// code = "CTNF"
    /// event-type = "NON_FINAL_ACTION"
    ///
    /// [[code]]
    /// code = "N417"
    /// event-type = "OTHER"
    /// milestone = false
    /// ```
    ///
    /// `milestone` defaults to `true`. Duplicate codes resolve
    /// last-wins, so a table can restate an earlier entry to override
    /// it.
    pub fn from_toml(table: &str) -> Result<Self, ClassifierTableError> {
        let file: TableFile = toml::from_str(table)?;
        if file.code.is_empty() {
            return Err(ClassifierTableError::Empty);
        }

        let mut codes = HashMap::new();
        for entry in file.code {
            codes.insert(
                entry.code,
                Classification {
                    event_type: entry.event_type,
                    milestone: entry.milestone,
                },
            );
        }
        Ok(Self { codes })
    }

    /// Classify a type code.
    ///
    /// Unknown codes are data, not errors: they classify as
    /// [`EventType::Other`] with `milestone = false`.
    pub fn classify(&self, type_code: &str) -> Classification {
        self.codes
            .get(type_code)
            .copied()
            .unwrap_or(Classification {
                event_type: EventType::Other,
                milestone: false,
            })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TableFile {
    #[serde(default)]
    code: Vec<TableEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TableEntry {
    code: String,
    event_type: EventType,
    #[serde(default = "default_milestone")]
    milestone: bool,
}

fn default_milestone() -> bool {
    true
}
