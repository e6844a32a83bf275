//! Cross-checks between the SEGM and XPOSTAG columns.
//!
//! All five checks run on every record; each failing one reports on its own.

use mpa_protocol::{LineNumber, Rule};
use mpa_vocab::Vocabulary;

use crate::report::Accumulator;
use crate::rules::{SEGM, XPOSTAG};
use crate::Context;

pub const TAG_SEPARATOR: char = '.';
pub const MORPHEME_SEPARATOR: char = '-';

/// An xpostag split around its base postag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts<'a> {
    pub prefixes: Vec<&'a str>,
    pub base: &'a str,
    pub suffixes: Vec<&'a str>,
}

impl<'a> TagParts<'a> {
    /// Splits on `.` and takes the first known postag as the base.
    pub fn split(xpostag: &'a str, vocab: &Vocabulary) -> Option<Self> {
        let segments: Vec<&str> = xpostag.split(TAG_SEPARATOR).collect();
        let position = segments.iter().position(|s| vocab.is_postag(s))?;
        Some(Self {
            prefixes: segments[..position].to_vec(),
            base: segments[position],
            suffixes: segments[position + 1..].to_vec(),
        })
    }
}

pub(crate) fn check_morphology(
    ctx: &Context<'_>,
    segm: &str,
    xpostag: &str,
    line: LineNumber,
    acc: &mut Accumulator,
) {
    check_parity(ctx, segm, xpostag, line, acc);
    check_xpostag_format(ctx, xpostag, line, acc);
    check_tag_parts(ctx, xpostag, line, acc);
    check_segm_format(ctx, segm, line, acc);
}

fn check_parity(ctx: &Context<'_>, segm: &str, xpostag: &str, line: LineNumber, acc: &mut Accumulator) {
    let dashes = segm.matches(MORPHEME_SEPARATOR).count();
    let dots = xpostag.matches(TAG_SEPARATOR).count();
    if dots != dashes {
        acc.error(
            Rule::DotDashParity,
            Some(line),
            format!(
                "The xpostag dot count {dots} in line number {line} in file {} \
                 does not match with segm dash count {dashes}.",
                ctx.filename
            ),
        );
    }
}

fn check_xpostag_format(ctx: &Context<'_>, xpostag: &str, line: LineNumber, acc: &mut Accumulator) {
    if !XPOSTAG.matches(xpostag) {
        acc.error(
            XPOSTAG.rule,
            Some(line),
            format!(
                "The xpostag {xpostag} in line number {line} in file {} does not follow the format \"{}\".",
                ctx.filename, XPOSTAG.pattern
            ),
        );
    }
}

fn check_tag_parts(ctx: &Context<'_>, xpostag: &str, line: LineNumber, acc: &mut Accumulator) {
    let vocab = ctx.vocab;
    let location = format!("The xpostag {xpostag} in line number {line} in file {}", ctx.filename);

    let Some(parts) = TagParts::split(xpostag, vocab) else {
        acc.error(
            Rule::MissingBasePostag,
            Some(line),
            format!("{location} does not have a base postag out of {}.", listing(vocab.postags())),
        );
        return;
    };

    let is_verb = vocab.is_special_postag(parts.base);
    if !parts.prefixes.is_empty() && !is_verb {
        acc.error(
            Rule::PrefixWithoutVerb,
            Some(line),
            format!("{location} has a prefix while {} is not a verb postag.", parts.base),
        );
        return;
    }

    if is_verb {
        for prefix in parts.prefixes.iter().filter(|p| !vocab.is_verb_prefix(p)) {
            acc.error(
                Rule::VerbPrefix,
                Some(line),
                format!(
                    "{location} has a prefix {prefix} not in verb postag prefix list {}.",
                    listing(vocab.verb_prefixes())
                ),
            );
        }
        for suffix in parts.suffixes.iter().filter(|s| !vocab.is_verb_suffix(s)) {
            acc.error(
                Rule::VerbSuffix,
                Some(line),
                format!(
                    "{location} has a suffix {suffix} not in verb postag suffix list {}.",
                    listing(vocab.verb_suffixes())
                ),
            );
        }
    } else {
        // No prefixes can reach here.
        for suffix in parts.suffixes.iter().filter(|s| !vocab.is_noun_morph(s)) {
            acc.error(
                Rule::NounSuffix,
                Some(line),
                format!(
                    "{location} has a suffix {suffix} not in noun postag suffix list {}.",
                    listing(vocab.noun_morphs())
                ),
            );
        }
    }
}

fn check_segm_format(ctx: &Context<'_>, segm: &str, line: LineNumber, acc: &mut Accumulator) {
    if !SEGM.matches(segm) {
        acc.error(
            SEGM.rule,
            Some(line),
            format!(
                "The segm {segm} in line number {line} in file {} does not follow the format \"{}\".",
                ctx.filename, SEGM.pattern
            ),
        );
    }
}

fn listing(tags: Vec<&str>) -> String {
    format!("[{}]", tags.join(", "))
}
