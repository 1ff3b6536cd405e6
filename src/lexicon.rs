//! Phrase tables and the compiled matcher that applies them.
//!
//! Each table is compiled once into a single case-insensitive alternation,
//! sorted longest phrase first, so that `in order to` always wins over any
//! shorter phrase it contains. Compiled tables are process-wide and
//! read-only.

pub mod data;

use crate::case::preserve_case;
use data::{CONNECTORS, CONTRACTIONS, FILLER_PHRASES, VOCABULARY};
use regex::{Captures, Regex};
use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

pub static FILLERS: LazyLock<ReplacementTable> = LazyLock::new(|| {
    ReplacementTable::new(FILLER_PHRASES.iter().map(|&phrase| (phrase, "")))
        .expect("filler table compiles")
});

pub static CONNECTIVES: LazyLock<ReplacementTable> = LazyLock::new(|| {
    ReplacementTable::new(CONNECTORS.entries().map(|(&k, &v)| (k, v)))
        .expect("connector table compiles")
});

pub static CONTRACTION_TABLE: LazyLock<ReplacementTable> = LazyLock::new(|| {
    ReplacementTable::new(CONTRACTIONS.entries().map(|(&k, &v)| (k, v)))
        .expect("contraction table compiles")
});

pub static VOCABULARY_TABLE: LazyLock<ReplacementTable> = LazyLock::new(|| {
    ReplacementTable::new(VOCABULARY.entries().map(|(&k, &v)| (k, v)))
        .expect("vocabulary table compiles")
});

/// A phrase → replacement mapping compiled into one word-boundary matcher.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    pattern: Regex,
    replacements: HashMap<String, String>,
}

impl ReplacementTable {
    /// Compile a table. Keys are matched case-insensitively on word
    /// boundaries; spaces inside a key match any run of whitespace.
    pub fn new<'t>(
        entries: impl IntoIterator<Item = (&'t str, &'t str)>,
    ) -> Result<Self, regex::Error> {
        let mut replacements = HashMap::new();
        for (phrase, replacement) in entries {
            let key = canonical(phrase);
            if key.is_empty() {
                continue;
            }
            replacements.insert(key, replacement.to_lowercase());
        }

        let mut keys: Vec<&str> = replacements.keys().map(String::as_str).collect();
        // Longest first; ties alphabetical so the pattern is deterministic.
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|key| {
                key.split(' ')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");
        // An empty table gets a pattern that can never match.
        let source = if alternation.is_empty() {
            r"[^\s\S]".to_owned()
        } else {
            format!(r"(?i)\b(?:{alternation})\b")
        };

        Ok(Self {
            pattern: Regex::new(&source)?,
            replacements,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Replacement registered for `phrase`, if any (case and spacing ignored).
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.replacements.get(&canonical(phrase)).map(String::as_str)
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replace every match, re-applying the case class of the matched text.
    /// Borrowed when nothing matched.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            match self.lookup(matched) {
                Some(replacement) => preserve_case(matched, replacement),
                None => matched.to_owned(),
            }
        })
    }
}

/// Lowercase with every whitespace run folded into one space.
fn canonical(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Direct lexicon substitution: every verbose phrase in `text` is replaced by
/// its plain equivalent, case preserved.
pub fn substitute_vocabulary(text: &str) -> Cow<'_, str> {
    VOCABULARY_TABLE.replace_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_phrase_wins() {
        let table =
            ReplacementTable::new([("in", "inside"), ("in order to", "to"), ("order", "sort")])
                .unwrap();
        assert_eq!(table.replace_all("in order to win"), "to win");
        assert_eq!(table.replace_all("in the order"), "inside the sort");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(substitute_vocabulary("UTILIZE it"), "USE it");
        assert_eq!(substitute_vocabulary("Utilize it"), "Use it");
        assert_eq!(substitute_vocabulary("we utilize it"), "we use it");
    }

    #[test]
    fn multi_word_keys_span_any_whitespace() {
        assert_eq!(
            substitute_vocabulary("run in  order\tto win"),
            "run to win"
        );
    }

    #[test]
    fn word_boundaries_respected() {
        // "objectives" has its own entry, "objectively" has none
        assert_eq!(substitute_vocabulary("objectively"), "objectively");
        assert_eq!(substitute_vocabulary("our objectives"), "our goals");
    }

    #[test]
    fn unmatched_text_is_borrowed() {
        let text = "nothing verbose here";
        assert!(matches!(substitute_vocabulary(text), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_table_never_matches() {
        let table = ReplacementTable::new(std::iter::empty()).unwrap();
        assert!(table.is_empty());
        assert!(!table.is_match("anything at all"));
    }

    #[test]
    fn static_tables_compile() {
        assert_eq!(FILLERS.len(), FILLER_PHRASES.len());
        assert_eq!(CONNECTIVES.len(), CONNECTORS.len());
        assert_eq!(CONTRACTION_TABLE.len(), CONTRACTIONS.len());
        assert_eq!(VOCABULARY_TABLE.len(), VOCABULARY.len());
        assert_eq!(CONTRACTION_TABLE.lookup("Do   NOT"), Some("don't"));
    }
}
