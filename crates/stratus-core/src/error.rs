use std::path::PathBuf;

use thiserror::Error;

use crate::{Dimension, FocusCategory};

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by callers to decide who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog or a focus name is wrong. Not recoverable at runtime.
    Configuration,
    /// The caller passed values the core refuses to work with.
    InvalidInput,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown focus category '{0}' (expected one of: {list})", list = FocusCategory::names().join(", "))]
    UnknownFocus(String),

    #[error("catalog has no template for focus '{0}'")]
    MissingTemplate(FocusCategory),

    #[error("catalog has more than one template for focus '{0}'")]
    DuplicateTemplate(FocusCategory),

    #[error("template for focus '{0}' is empty")]
    EmptyTemplate(FocusCategory),

    #[error("template for focus '{focus}' lists '{label}' more than once")]
    DuplicateTemplateLabel { focus: FocusCategory, label: String },

    #[error("catalog {location} contains a blank label")]
    BlankCatalogLabel { location: String },

    #[error("component table lists '{0}' more than once")]
    DuplicateComponent(String),

    #[error("threshold for {dimension} is {value}, must be within 0..=10")]
    ThresholdOutOfRange { dimension: Dimension, value: u8 },

    #[error("rule '{rule}' is invalid: {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{dimension} priority is {value}, must be within 0..=10")]
    PriorityOutOfRange { dimension: Dimension, value: i64 },

    #[error("component list is empty")]
    EmptySequence,

    #[error("component label at position {0} is blank")]
    BlankLabel(usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PriorityOutOfRange { .. } | Error::EmptySequence | Error::BlankLabel(_) => {
                ErrorKind::InvalidInput
            }
            _ => ErrorKind::Configuration,
        }
    }
}
