use mpa_protocol::{LineNumber, Rule};

use crate::morphology::check_morphology;
use crate::report::Accumulator;
use crate::rules::ID;
use crate::Context;

pub const FIELD_DELIMITER: char = '\t';

// Column positions (FORM, HEAD, DEPREL and MISC are not validated).
pub const ID_FIELD: usize = 0;
pub const SEGM_FIELD: usize = 2;
pub const XPOSTAG_FIELD: usize = 3;

/// Fields a record needs before SEGM and XPOSTAG can be checked.
pub const MIN_FIELDS: usize = 4;

/// A data line split into its tab-separated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub line: LineNumber,
    pub fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn parse(line: LineNumber, text: &'a str) -> Self {
        Self {
            line,
            fields: text.split(FIELD_DELIMITER).collect(),
        }
    }

    pub fn id(&self) -> Option<&'a str> {
        self.fields.get(ID_FIELD).copied()
    }

    /// SEGM and XPOSTAG, present only when the record has enough fields.
    pub fn morphology(&self) -> Option<(&'a str, &'a str)> {
        if self.fields.len() < MIN_FIELDS {
            return None;
        }
        Some((self.fields[SEGM_FIELD], self.fields[XPOSTAG_FIELD]))
    }
}

pub(crate) fn check_record(ctx: &Context<'_>, line: LineNumber, text: &str, acc: &mut Accumulator) {
    let record = Record::parse(line, text);

    match record.morphology() {
        Some((segm, xpostag)) => check_morphology(ctx, segm, xpostag, line, acc),
        None => acc.error(
            Rule::FieldCount,
            Some(line),
            format!(
                "No field should be empty in file {} line number {line} \
                 (an underscore should be added in fields that have no value).",
                ctx.filename
            ),
        ),
    }

    if let Some(id) = record.id() {
        if !ID.matches(id) {
            acc.error(
                ID.rule,
                Some(line),
                format!(
                    "The id {id} in line number {line} in file {} does not follow the CoNLL format \"{}\".",
                    ctx.filename, ID.pattern
                ),
            );
        }
        acc.record_id(id);
    }
}
