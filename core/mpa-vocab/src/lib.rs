//! Tag vocabulary queried by the morphology checks.
//!
//! The checker never reaches for global tables directly: it borrows a
//! [`Vocabulary`], which is either the embedded CDLI set returned by
//! [`Vocabulary::builtin`], a fixture assembled with [`Vocabulary::builder`],
//! or a JSON document loaded with [`Vocabulary::from_path`].

mod builtin;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use builtin::{NOUN_MORPHS, POSTAGS, SPECIAL_POSTAGS, VERB_PREFIXES, VERB_SUFFIXES};

static BUILTIN: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::builder()
        .postags(POSTAGS.iter().copied())
        .special_postags(SPECIAL_POSTAGS.iter().copied())
        .verb_prefixes(VERB_PREFIXES.iter().copied())
        .verb_suffixes(VERB_SUFFIXES.iter().copied())
        .noun_morphs(NOUN_MORPHS.iter().copied())
        .build()
});

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed vocabulary document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary declares no base postags")]
    NoPostags,
    #[error("special postag {0} is not a base postag")]
    SpecialNotBase(String),
}

/// Immutable membership sets for the five tag families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    postags: HashSet<String>,
    special_postags: HashSet<String>,
    verb_prefixes: HashSet<String>,
    verb_suffixes: HashSet<String>,
    noun_morphs: HashSet<String>,
}

/// On-disk shape of a vocabulary override.
#[derive(Debug, Serialize, Deserialize)]
struct VocabularyDocument {
    postags: Vec<String>,
    #[serde(default)]
    special_postags: Vec<String>,
    #[serde(default)]
    verb_prefixes: Vec<String>,
    #[serde(default)]
    verb_suffixes: Vec<String>,
    #[serde(default)]
    noun_morphs: Vec<String>,
}

impl Vocabulary {
    /// The embedded CDLI tag set, built on first use.
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    pub fn from_json(input: &str) -> Result<Self, VocabError> {
        let doc: VocabularyDocument = serde_json::from_str(input)?;
        let vocab = Vocabulary::builder()
            .postags(doc.postags)
            .special_postags(doc.special_postags)
            .verb_prefixes(doc.verb_prefixes)
            .verb_suffixes(doc.verb_suffixes)
            .noun_morphs(doc.noun_morphs)
            .build();
        vocab.validate()?;
        Ok(vocab)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&input)
    }

    /// Serializes the sets back into the override document format.
    pub fn to_json(&self) -> Result<String, VocabError> {
        let doc = VocabularyDocument {
            postags: self.postags().into_iter().map(str::to_owned).collect(),
            special_postags: sorted(&self.special_postags).into_iter().map(str::to_owned).collect(),
            verb_prefixes: self.verb_prefixes().into_iter().map(str::to_owned).collect(),
            verb_suffixes: self.verb_suffixes().into_iter().map(str::to_owned).collect(),
            noun_morphs: self.noun_morphs().into_iter().map(str::to_owned).collect(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn validate(&self) -> Result<(), VocabError> {
        if self.postags.is_empty() {
            return Err(VocabError::NoPostags);
        }
        if let Some(tag) = sorted(&self.special_postags)
            .into_iter()
            .find(|tag| !self.postags.contains(*tag))
        {
            return Err(VocabError::SpecialNotBase(tag.to_owned()));
        }
        Ok(())
    }

    pub fn is_postag(&self, segment: &str) -> bool {
        self.postags.contains(segment)
    }

    /// Verb-class postags, the only ones allowed to carry prefixes.
    pub fn is_special_postag(&self, segment: &str) -> bool {
        self.special_postags.contains(segment)
    }

    pub fn is_verb_prefix(&self, segment: &str) -> bool {
        self.verb_prefixes.contains(segment)
    }

    pub fn is_verb_suffix(&self, segment: &str) -> bool {
        self.verb_suffixes.contains(segment)
    }

    pub fn is_noun_morph(&self, segment: &str) -> bool {
        self.noun_morphs.contains(segment)
    }

    // Sorted listings, used when a diagnostic quotes the allowed values.

    pub fn postags(&self) -> Vec<&str> {
        sorted(&self.postags)
    }

    pub fn verb_prefixes(&self) -> Vec<&str> {
        sorted(&self.verb_prefixes)
    }

    pub fn verb_suffixes(&self) -> Vec<&str> {
        sorted(&self.verb_suffixes)
    }

    pub fn noun_morphs(&self) -> Vec<&str> {
        sorted(&self.noun_morphs)
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    set.iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    vocab: Vocabulary,
}

impl VocabularyBuilder {
    pub fn postags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab.postags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn special_postags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab.special_postags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn verb_prefixes<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab.verb_prefixes.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn verb_suffixes<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab.verb_suffixes.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn noun_morphs<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab.noun_morphs.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Vocabulary {
        self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn test_builtin_specials_are_postags() {
        let vocab = Vocabulary::builtin();
        for tag in SPECIAL_POSTAGS {
            assert!(vocab.is_postag(tag), "{tag} missing from postags");
            assert!(vocab.is_special_postag(tag));
        }
        assert!(vocab.validate().is_ok());
    }

    #[test]
    fn test_builtin_membership() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.is_postag("N"));
        assert!(!vocab.is_special_postag("N"));
        assert!(!vocab.is_postag("PREF"));
        assert!(vocab.is_verb_prefix("MOD1"));
        assert!(vocab.is_verb_suffix("3-SG-S"));
        assert!(vocab.is_noun_morph("ERG"));
        assert!(!vocab.is_noun_morph("NOM"));
    }

    #[test]
    fn test_listing_is_sorted() {
        let vocab = Vocabulary::builder().postags(["V", "N", "AJ"]).build();
        assert_eq!(vocab.postags(), vec!["AJ", "N", "V"]);
    }

    #[test]
    fn test_from_json_defaults_missing_sets() {
        let vocab = Vocabulary::from_json(r#"{ "postags": ["N", "V"], "special_postags": ["V"] }"#).unwrap();
        assert!(vocab.is_special_postag("V"));
        assert!(vocab.noun_morphs().is_empty());
    }

    #[test]
    fn test_from_json_rejects_orphan_special() {
        let err = Vocabulary::from_json(r#"{ "postags": ["N"], "special_postags": ["V"] }"#).unwrap_err();
        assert!(matches!(err, VocabError::SpecialNotBase(tag) if tag == "V"));
    }

    #[test]
    fn test_from_json_rejects_empty() {
        let err = Vocabulary::from_json(r#"{ "postags": [] }"#).unwrap_err();
        assert!(matches!(err, VocabError::NoPostags));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", Vocabulary::builtin().to_json().unwrap()).unwrap();

        let loaded = Vocabulary::from_path(file.path()).unwrap();
        assert_eq!(&loaded, Vocabulary::builtin());
    }

    #[test]
    fn test_from_missing_path() {
        let err = Vocabulary::from_path("/nonexistent/vocab.json").unwrap_err();
        assert!(matches!(err, VocabError::Io { .. }));
    }

    proptest! {
        #[test]
        fn test_builder_membership(tags in proptest::collection::vec("[A-Z0-9]{1,4}", 1..8)) {
            let vocab = Vocabulary::builder().noun_morphs(tags.clone()).build();
            for tag in &tags {
                prop_assert!(vocab.is_noun_morph(tag));
                prop_assert!(!vocab.is_postag(tag));
            }
        }
    }
}
