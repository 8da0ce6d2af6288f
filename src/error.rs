// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for music theory operations.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors raised by note, interval and pitch-set operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Operand of the wrong kind (e.g. adding a note to a note)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Name not present in the interval, note, chord or scale catalog
    #[error("Unknown {kind} name: {name:?}")]
    UnknownName { kind: NameKind, name: String },

    /// Numeric argument outside its valid range (e.g. degree < 1)
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: i64 },
}

impl TheoryError {
    pub(crate) fn unknown(kind: NameKind, name: impl Into<String>) -> Self {
        TheoryError::UnknownName {
            kind,
            name: name.into(),
        }
    }
}

/// Which catalog a failed name lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Note,
    Interval,
    IntervalSet,
    Chord,
    Scale,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Note => write!(f, "note"),
            NameKind::Interval => write!(f, "interval"),
            NameKind::IntervalSet => write!(f, "interval set"),
            NameKind::Chord => write!(f, "chord"),
            NameKind::Scale => write!(f, "scale"),
        }
    }
}
