//! Declarative field-shape rules.
//!
//! Each rule pairs a [`Rule`] with the pattern quoted in its diagnostic. A
//! field conforms when the pattern matches starting at the field's first
//! character; patterns that need to constrain the end carry their own `$`.

use mpa_protocol::Rule;
use once_cell::sync::OnceCell;
use regex::Regex;

pub struct PatternRule {
    pub rule: Rule,
    pub pattern: &'static str,
    compiled: OnceCell<Regex>,
}

impl PatternRule {
    const fn new(rule: Rule, pattern: &'static str) -> Self {
        Self {
            rule,
            pattern,
            compiled: OnceCell::new(),
        }
    }

    pub fn matches(&self, field: &str) -> bool {
        self.regex().is_match(field)
    }

    fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(&format!("^(?:{})", self.pattern))
                .expect("built-in pattern must compile")
        })
    }
}

pub static TEXT_DECLARATION: PatternRule =
    PatternRule::new(Rule::TextDeclaration, r"^#new_text=[a-zA-Z0-9]+\s*$");

pub static COLUMN_HEADER: PatternRule = PatternRule::new(
    Rule::ColumnHeader,
    r"#\s+ID\s+FORM\s+SEGM\s+XPOSTAG\s+HEAD\s+DEPREL\s+MISC\s*",
);

pub static ID: PatternRule = PatternRule::new(
    Rule::IdFormat,
    r"^e?(o|r|t|b|l|ri|(s?[a-z]?[0-9]?))\.((col|b)[0-9]'?\.)?[0-9]+'?\.[0-9]+$",
);

pub static XPOSTAG: PatternRule = PatternRule::new(
    Rule::XpostagFormat,
    r"^(([A-Z0-9]+)(\-([A-Z0-9]+))*)(\.([A-Z0-9]+)(\-([A-Z0-9]+))*)+|[A-Z]+$",
);

pub static SEGM: PatternRule = PatternRule::new(
    Rule::SegmFormat,
    r"^(([a-z0-9]+)((\-[a-z0-9]+)|(\[\-[a-z0-9]+\]))*\-)?[A-Za-z0-9\(\)]+\[[a-z0-9]*\]((\-[a-z0-9]+)|(\[\-[a-z0-9]+\])|(\[\-ø\]))*$",
);

pub static ALL: [&PatternRule; 5] = [&TEXT_DECLARATION, &COLUMN_HEADER, &ID, &XPOSTAG, &SEGM];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for rule in ALL {
            assert!(Regex::new(rule.pattern).is_ok(), "{} does not compile", rule.rule);
            let _ = rule.matches("");
        }
    }

    #[test]
    fn test_text_declaration() {
        assert!(TEXT_DECLARATION.matches("#new_text=P100001"));
        assert!(TEXT_DECLARATION.matches("#new_text=XYZ1  "));
        assert!(!TEXT_DECLARATION.matches("#new_text="));
        assert!(!TEXT_DECLARATION.matches("#new_text=P10-0001"));
        assert!(!TEXT_DECLARATION.matches(" #new_text=P1"));
    }

    #[test]
    fn test_column_header_is_prefix_match() {
        assert!(COLUMN_HEADER.matches("# ID FORM SEGM XPOSTAG HEAD DEPREL MISC"));
        assert!(COLUMN_HEADER.matches("#\tID\tFORM\tSEGM\tXPOSTAG\tHEAD\tDEPREL\tMISC"));
        // Nothing after MISC is constrained.
        assert!(COLUMN_HEADER.matches("# ID FORM SEGM XPOSTAG HEAD DEPREL MISC EXTRA"));
        assert!(!COLUMN_HEADER.matches("#ID FORM SEGM XPOSTAG HEAD DEPREL MISC"));
        assert!(!COLUMN_HEADER.matches("# ID FORM SEGM HEAD DEPREL MISC"));
        assert!(!COLUMN_HEADER.matches("x # ID FORM SEGM XPOSTAG HEAD DEPREL MISC"));
    }

    #[test]
    fn test_ids() {
        for id in ["o.1.1", "r.12.3", "eo.1.1", "o.col1.2.3", "o.b2'.4'.1", "ri.3.2", "s.1.1", "sa1.4.2", ".1.1"] {
            assert!(ID.matches(id), "{id} should match");
        }
        for id in ["", "o.1", "o.1.1.1", "x.y.1", "o.col12.1.1", "O.1.1", "o.1'.1'"] {
            assert!(!ID.matches(id), "{id} should not match");
        }
    }

    #[test]
    fn test_xpostags() {
        for tag in ["N", "V", "N.ERG", "MOD1.V.3-SG-S", "3-SG-H-A.V", "N.DAT-H.PL"] {
            assert!(XPOSTAG.matches(tag), "{tag} should match");
        }
        for tag in ["", "n", "N1", "N-ERG", ".N", "N."] {
            assert!(!XPOSTAG.matches(tag), "{tag} should not match");
        }
        // The dotted alternative is only anchored at the start.
        assert!(XPOSTAG.matches("N.ERG!"));
    }

    #[test]
    fn test_segms() {
        for segm in [
            "lu[person]",
            "lugal[king]-e",
            "mu-na-du[build]",
            "i3[-n]-du[build][-ø]",
            "e2[house][-ø]",
            "Ur(d)Namma[1]",
            "dumu[child][-ak]-ene",
            "x[]",
        ] {
            assert!(SEGM.matches(segm), "{segm} should match");
        }
        for segm in ["", "lu", "lu[Person]", "-lu[person]", "lu[person]-", "lu[person] "] {
            assert!(!SEGM.matches(segm), "{segm} should not match");
        }
    }
}
