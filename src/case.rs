//! Case-class detection and case-preserving replacement.
//!
//! Shared by every table-driven pass (fillers, connectors, contractions,
//! vocabulary) and by the token simplifier.

use crate::unicode::upper_first;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// At least one cased letter and no lowercase ones: `NASA`, `DO NOT`.
    AllCaps,
    /// First character is uppercase: `Therefore`, `In order to`.
    Capitalized,
    /// Anything else.
    Lower,
}

impl CaseClass {
    pub fn of(text: &str) -> Self {
        let has_cased = text.chars().any(|c| c.is_uppercase() || c.is_lowercase());
        if has_cased && !text.chars().any(char::is_lowercase) {
            return CaseClass::AllCaps;
        }
        match text.chars().next() {
            Some(c) if c.is_uppercase() => CaseClass::Capitalized,
            _ => CaseClass::Lower,
        }
    }
}

/// Re-apply the case class of `original` to `replacement`.
///
/// - all-caps origin → all-caps replacement
/// - capitalized origin → capitalized replacement
/// - otherwise → lowercase replacement
pub fn preserve_case(original: &str, replacement: &str) -> String {
    match CaseClass::of(original) {
        CaseClass::AllCaps => replacement.to_uppercase(),
        CaseClass::Capitalized => upper_first(&replacement.to_lowercase()),
        CaseClass::Lower => replacement.to_lowercase(),
    }
}
