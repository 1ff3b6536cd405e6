//! Offline, rule-based text cleanup and plain-language rewriting.
//!
//! Two entry points cover most uses:
//!
//! - [`normalize`]: Unicode and structural cleanup (NFKC, invisible
//!   characters, smart punctuation, hyphenated line breaks, markup remnants,
//!   spacing, sentence case).
//! - [`humanize`]: normalize, then rewrite every sentence (fillers,
//!   connectors, contractions, passive voice, vocabulary) and split the ones
//!   that run too long.
//!
//! Both are total functions: every input, including the empty string,
//! produces a defined output. For custom limits use [`Humanizer::builder`].

pub mod case;
pub mod context;
pub mod governor;
pub mod humanizer;
pub mod lexicon;
pub mod process;
pub mod profile;
pub mod sentence;
pub mod stage;
pub mod testing;
pub mod unicode;

pub use context::Context;
pub use governor::enforce_limits;
pub use humanizer::{
    ConfigError, Humanizer, HumanizerBuilder, clean_only, humanize, normalize,
    substitute_vocabulary,
};
pub use lexicon::ReplacementTable;
pub use sentence::split_sentences;
pub use stage::Stage;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
