use mpa_protocol::LineNumber;

use crate::record::check_record;
use crate::report::Accumulator;
use crate::rules::{PatternRule, COLUMN_HEADER, TEXT_DECLARATION};
use crate::Context;

/// Role of a line, derived from its position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#new_text=...`
    TextDeclaration,
    /// `# ID FORM SEGM XPOSTAG HEAD DEPREL MISC`
    ColumnHeader,
    DataRecord,
}

impl LineKind {
    pub fn classify(index: usize) -> Self {
        match index {
            0 => LineKind::TextDeclaration,
            1 => LineKind::ColumnHeader,
            _ => LineKind::DataRecord,
        }
    }
}

/// Splits text at every Unicode line boundary: `\n`, `\r\n`, a lone `\r`,
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// line/paragraph separators. A terminator at the very end does not start
/// another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((at, c)) => {
                let line = &rest[..at];
                let mut next = at + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub(crate) fn check_line(ctx: &Context<'_>, index: usize, text: &str, acc: &mut Accumulator) {
    let line = line_number(index);
    match LineKind::classify(index) {
        LineKind::TextDeclaration => check_header(ctx, &TEXT_DECLARATION, line, text, acc),
        LineKind::ColumnHeader => check_header(ctx, &COLUMN_HEADER, line, text, acc),
        LineKind::DataRecord => check_record(ctx, line, text, acc),
    }
}

fn check_header(
    ctx: &Context<'_>,
    rule: &PatternRule,
    line: LineNumber,
    text: &str,
    acc: &mut Accumulator,
) {
    if !rule.matches(text) {
        acc.error(
            rule.rule,
            Some(line),
            format!(
                "The line number {line} in file {} does not follow the CoNLL format \"{}\".",
                ctx.filename, rule.pattern
            ),
        );
    }
}

pub(crate) fn line_number(index: usize) -> LineNumber {
    LineNumber::new(u32::try_from(index).unwrap_or(u32::MAX))
}
