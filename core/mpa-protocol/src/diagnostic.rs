use alloc::string::String;
use core::fmt;

use crate::ids::LineNumber;
use crate::rule::Rule;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// A rule violation. Any error makes the file incorrect.
    Error,
    /// Progress and verdict notes for human readers.
    Info,
}

/// A single message produced while checking a file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: Option<Rule>,
    /// Absent for file-level findings.
    pub line: Option<LineNumber>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule: Rule, line: Option<LineNumber>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule: Some(rule),
            line,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            rule: None,
            line: None,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Error: {}", self.message),
            Severity::Info => write!(f, "Info: {}", self.message),
        }
    }
}
