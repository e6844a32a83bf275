use std::collections::{HashMap, HashSet};

use mpa_protocol::{Diagnostic, LineNumber, Rule, RuleFlags};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Running state of one file check.
///
/// Every validation step takes the accumulator explicitly; nothing else is
/// shared between lines, so independent files can be checked concurrently.
#[derive(Debug)]
pub struct Accumulator {
    correct: bool,
    ids: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            correct: true,
            ids: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn error(&mut self, rule: Rule, line: Option<LineNumber>, message: String) {
        debug!(rule = %rule, line = ?line.map(LineNumber::get), "format violation");
        self.correct = false;
        self.diagnostics.push(Diagnostic::error(rule, line, message));
    }

    pub fn record_id(&mut self, id: &str) {
        self.ids.push(id.to_owned());
    }

    /// Runs the file-level checks and seals the result.
    pub fn finalize(mut self, filename: &str, total_lines: usize) -> Report {
        if total_lines < 2 {
            self.error(
                Rule::MissingHeaderLines,
                None,
                format!("The first 2 lines of the file {filename} are not present."),
            );
        }

        let duplicate_ids = duplicates(&self.ids);
        if !duplicate_ids.is_empty() {
            self.error(
                Rule::DuplicateIds,
                None,
                format!(
                    "File {filename} : IDs generated are not unique. Duplicate IDs : [{}].",
                    duplicate_ids.join(", ")
                ),
            );
        }

        Report {
            filename: filename.to_owned(),
            total_lines,
            correct: self.correct,
            ids: self.ids,
            duplicate_ids,
            diagnostics: self.diagnostics,
        }
    }
}

/// Ids occurring more than once, in order of first occurrence.
fn duplicates(ids: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        *counts.entry(id.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    ids.iter()
        .filter(|id| counts[id.as_str()] > 1 && reported.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Verdict and diagnostics for one checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    pub filename: String,
    pub total_lines: usize,
    pub correct: bool,
    /// Every record id in file order, well-formed or not.
    pub ids: Vec<String>,
    pub duplicate_ids: Vec<String>,
    /// Errors in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn errors_for(&self, rule: Rule) -> impl Iterator<Item = &Diagnostic> {
        self.errors().filter(move |d| d.rule == Some(rule))
    }

    pub fn violated_rules(&self) -> RuleFlags {
        self.errors().filter_map(|d| d.rule).collect()
    }

    /// The human-readable message stream for this file.
    pub fn messages(&self, verbose: bool) -> Vec<Diagnostic> {
        let mut messages = Vec::with_capacity(self.diagnostics.len() + 2);
        if verbose {
            messages.push(Diagnostic::info(format!("Checking file {}.", self.filename)));
        }
        messages.extend(self.diagnostics.iter().cloned());
        if self.correct {
            messages.push(Diagnostic::info(format!(
                "The file {} has correct format.",
                self.filename
            )));
        }
        messages
    }
}
