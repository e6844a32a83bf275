//! Format checker for CDLI CoNLL morphological annotation files.
//!
//! A file is two header lines followed by tab-separated token records:
//!
//! ```text
//! #new_text=P100001
//! # ID FORM SEGM XPOSTAG HEAD DEPREL MISC
//! o.1.1	lugal-e	lugal[king]-e	N.ERG	_	_	_
//! ```
//!
//! [`Checker`] scans every line, collects a diagnostic for each violation and
//! never stops early. The result is a [`Report`].

pub mod error;
pub mod line;
pub mod morphology;
pub mod record;
pub mod report;
pub mod rules;

use std::fs;
use std::path::Path;

use mpa_vocab::Vocabulary;
use tracing::{debug, info};

pub use error::CheckError;
pub use line::{split_lines, LineKind};
pub use morphology::TagParts;
pub use mpa_protocol::{Diagnostic, LineNumber, Rule, RuleFlags, Severity};
pub use record::Record;
pub use report::{Accumulator, Report};

/// Read-only inputs shared by every check of one file.
pub(crate) struct Context<'a> {
    pub filename: &'a str,
    pub vocab: &'a Vocabulary,
}

impl<'a> Context<'a> {
    pub fn new(filename: &'a str, vocab: &'a Vocabulary) -> Self {
        Self { filename, vocab }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Checker<'v> {
    vocab: &'v Vocabulary,
}

impl Default for Checker<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::builtin())
    }
}

impl<'v> Checker<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Checks a sequence of lines. Each line is trimmed before it is checked.
    pub fn check_lines<I, S>(&self, filename: &str, lines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ctx = Context::new(filename, self.vocab);
        let mut acc = Accumulator::new();
        let mut total_lines = 0;

        for (index, raw) in lines.into_iter().enumerate() {
            line::check_line(&ctx, index, raw.as_ref().trim(), &mut acc);
            total_lines += 1;
        }

        let report = acc.finalize(filename, total_lines);
        info!(
            filename,
            total_lines,
            errors = report.diagnostics.len(),
            correct = report.is_correct(),
            "checked file"
        );
        report
    }

    /// Checks text split at every Unicode line boundary, lone `\r` included.
    pub fn check_str(&self, filename: &str, text: &str) -> Report {
        self.check_lines(filename, line::split_lines(text))
    }

    /// Reads and checks a UTF-8 file. Read failures are errors, format
    /// violations are diagnostics in the returned report.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<Report, CheckError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading annotation file");

        let bytes = fs::read(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| CheckError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.check_str(&path.display().to_string(), &text))
    }
}
