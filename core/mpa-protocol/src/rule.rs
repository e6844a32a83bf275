#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use core::fmt;

/// Every conformance check the checker performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Rule {
    /// Line 0 must be `#new_text=<alphanumeric>`.
    TextDeclaration = 0,
    /// Line 1 must name the seven columns.
    ColumnHeader = 1,
    /// A data record needs at least ID, FORM, SEGM and XPOSTAG.
    FieldCount = 2,
    IdFormat = 3,
    /// Dashes in SEGM must equal dots in XPOSTAG.
    DotDashParity = 4,
    XpostagFormat = 5,
    MissingBasePostag = 6,
    /// Only verb-class postags may be preceded by prefixes.
    PrefixWithoutVerb = 7,
    VerbPrefix = 8,
    VerbSuffix = 9,
    NounSuffix = 10,
    SegmFormat = 11,
    /// The file is shorter than its two header lines.
    MissingHeaderLines = 12,
    DuplicateIds = 13,
}

impl Rule {
    pub const ALL: [Rule; 14] = [
        Rule::TextDeclaration,
        Rule::ColumnHeader,
        Rule::FieldCount,
        Rule::IdFormat,
        Rule::DotDashParity,
        Rule::XpostagFormat,
        Rule::MissingBasePostag,
        Rule::PrefixWithoutVerb,
        Rule::VerbPrefix,
        Rule::VerbSuffix,
        Rule::NounSuffix,
        Rule::SegmFormat,
        Rule::MissingHeaderLines,
        Rule::DuplicateIds,
    ];

    /// Stable identifier used in machine-readable output.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::TextDeclaration => "text_declaration",
            Rule::ColumnHeader => "column_header",
            Rule::FieldCount => "field_count",
            Rule::IdFormat => "id_format",
            Rule::DotDashParity => "dot_dash_parity",
            Rule::XpostagFormat => "xpostag_format",
            Rule::MissingBasePostag => "missing_base_postag",
            Rule::PrefixWithoutVerb => "prefix_without_verb",
            Rule::VerbPrefix => "verb_prefix",
            Rule::VerbSuffix => "verb_suffix",
            Rule::NounSuffix => "noun_suffix",
            Rule::SegmFormat => "segm_format",
            Rule::MissingHeaderLines => "missing_header_lines",
            Rule::DuplicateIds => "duplicate_ids",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Rule::TextDeclaration => "first line declares the text",
            Rule::ColumnHeader => "second line lists the columns",
            Rule::FieldCount => "records have no empty fields",
            Rule::IdFormat => "token ids follow the CDLI id format",
            Rule::DotDashParity => "xpostag dots match segm dashes",
            Rule::XpostagFormat => "xpostag follows the tag format",
            Rule::MissingBasePostag => "xpostag contains a base postag",
            Rule::PrefixWithoutVerb => "only verbs take prefixes",
            Rule::VerbPrefix => "verb prefixes are known",
            Rule::VerbSuffix => "verb suffixes are known",
            Rule::NounSuffix => "noun suffixes are known",
            Rule::SegmFormat => "segm follows the segmentation format",
            Rule::MissingHeaderLines => "file has both header lines",
            Rule::DuplicateIds => "token ids are unique",
        }
    }

    pub const fn flag(self) -> RuleFlags {
        RuleFlags::from_bits_truncate(1 << (self as u8))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RuleFlags: u16 {
        // Header lines (Bits 0-1)
        const TEXT_DECLARATION = 1;
        const COLUMN_HEADER = 2;

        // Record shape (Bits 2-3)
        const FIELD_COUNT = 4;
        const ID_FORMAT = 8;

        // Morphology (Bits 4-11)
        const DOT_DASH_PARITY = 16;
        const XPOSTAG_FORMAT = 32;
        const MISSING_BASE_POSTAG = 64;
        const PREFIX_WITHOUT_VERB = 128;
        const VERB_PREFIX = 256;
        const VERB_SUFFIX = 512;
        const NOUN_SUFFIX = 1024;
        const SEGM_FORMAT = 2048;

        // File level (Bits 12-13)
        const MISSING_HEADER_LINES = 4096;
        const DUPLICATE_IDS = 8192;
    }
}

impl FromIterator<Rule> for RuleFlags {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RuleFlags::empty(), |flags, rule| flags | rule.flag())
    }
}
