use thiserror::Error;

use crate::{
    context::Context,
    governor::enforce_limits,
    lexicon,
    profile::preset,
    sentence::split_sentences,
    stage::{changed, keep_or},
    unicode::{is_sentence_terminal, upper_first},
};
use std::{borrow::Cow, sync::LazyLock};
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidLimit {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },
}

/// Entry point to the pipeline: a validated set of limits plus the
/// `clean_only` flavour.
///
/// ```
/// use plainly::Humanizer;
///
/// let h = Humanizer::builder().max_sentence_len(80).build().unwrap();
/// assert_eq!(h.humanize("do not worry"), "Don't worry.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Humanizer {
    ctx: Context,
    substitute_on_clean: bool,
}

impl Humanizer {
    pub fn builder() -> HumanizerBuilder {
        HumanizerBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Unicode and structural cleanup of a whole document. Paragraph breaks
    /// survive as `"\n\n"`.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        preset::clean().run(Cow::Borrowed(text), &self.ctx)
    }

    /// Normalize, then rewrite sentence by sentence and re-join the result
    /// with single spaces. Every emitted sentence starts with a capital and
    /// ends in `.`, `!` or `?`.
    pub fn humanize(&self, text: &str) -> String {
        let normalized = self.normalize(text);
        let rewrite = preset::rewrite();

        let mut out = String::with_capacity(normalized.len());
        let mut sentences = 0usize;
        let mut pieces = 0usize;
        for sentence in split_sentences(&normalized) {
            sentences += 1;
            let rewritten = rewrite.run(Cow::Borrowed(sentence), &self.ctx);
            for piece in enforce_limits(&rewritten, &self.ctx) {
                let Some(piece) = finish_piece(&piece) else {
                    continue;
                };
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&piece);
                pieces += 1;
            }
        }
        debug!(sentences, pieces, len = out.len(), "humanized text");
        out
    }

    /// Normalizer only; with `substitute_on_clean` the lexicon substitution
    /// runs on the normalized text as well.
    pub fn clean_only<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let normalized = self.normalize(text);
        if !self.substitute_on_clean {
            return normalized;
        }
        let substituted = changed(lexicon::substitute_vocabulary(&normalized));
        keep_or(normalized, substituted)
    }

    /// Direct lexicon substitution, independent of the humanize heuristics.
    #[inline]
    pub fn substitute_vocabulary<'a>(&self, text: &'a str) -> Cow<'a, str> {
        lexicon::substitute_vocabulary(text)
    }
}

/// Final touch on one emitted piece: whitespace collapsed, a terminal mark
/// guaranteed, first letter raised. Pieces with nothing to say are dropped.
fn finish_piece(piece: &str) -> Option<String> {
    if !piece.chars().any(char::is_alphanumeric) {
        return None;
    }
    let mut text = piece.split_whitespace().collect::<Vec<_>>().join(" ");
    if !text.chars().last().is_some_and(is_sentence_terminal) {
        text.truncate(text.trim_end_matches([' ', ',', ';', ':']).len());
        if !text.chars().last().is_some_and(is_sentence_terminal) {
            text.push('.');
        }
    }
    Some(upper_first(&text))
}

#[derive(Debug, Clone, Default)]
pub struct HumanizerBuilder {
    ctx: Context,
    substitute_on_clean: bool,
}

impl HumanizerBuilder {
    /// Sentences longer than this many characters go to the length governor.
    pub fn max_sentence_len(mut self, len: usize) -> Self {
        self.ctx.max_sentence_len = len;
        self
    }

    /// Longest piece a punctuation split may produce.
    pub fn max_piece_len(mut self, len: usize) -> Self {
        self.ctx.max_piece_len = len;
        self
    }

    /// Most pieces a punctuation split may produce.
    pub fn max_pieces(mut self, pieces: usize) -> Self {
        self.ctx.max_pieces = pieces;
        self
    }

    pub fn substitute_on_clean(mut self, enabled: bool) -> Self {
        self.substitute_on_clean = enabled;
        self
    }

    pub fn build(self) -> Result<Humanizer, ConfigError> {
        let ctx = self.ctx;
        if ctx.max_sentence_len == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_sentence_len",
                value: ctx.max_sentence_len,
                reason: "must be at least 1",
            });
        }
        if ctx.max_piece_len < ctx.max_sentence_len {
            return Err(ConfigError::InvalidLimit {
                name: "max_piece_len",
                value: ctx.max_piece_len,
                reason: "must not be smaller than max_sentence_len",
            });
        }
        if ctx.max_pieces < 2 {
            return Err(ConfigError::InvalidLimit {
                name: "max_pieces",
                value: ctx.max_pieces,
                reason: "must be at least 2",
            });
        }
        Ok(Humanizer {
            ctx,
            substitute_on_clean: self.substitute_on_clean,
        })
    }
}

static DEFAULT_HUMANIZER: LazyLock<Humanizer> = LazyLock::new(Humanizer::default);

/// [`Humanizer::normalize`] with default limits.
pub fn normalize(text: &str) -> Cow<'_, str> {
    DEFAULT_HUMANIZER.normalize(text)
}

/// [`Humanizer::humanize`] with default limits.
pub fn humanize(text: &str) -> String {
    DEFAULT_HUMANIZER.humanize(text)
}

/// [`Humanizer::clean_only`] with default limits, no substitution.
pub fn clean_only(text: &str) -> Cow<'_, str> {
    DEFAULT_HUMANIZER.clean_only(text)
}

/// Replace every verbose lexicon phrase with its plain equivalent.
pub fn substitute_vocabulary(text: &str) -> Cow<'_, str> {
    DEFAULT_HUMANIZER.substitute_vocabulary(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_context_defaults() {
        let h = Humanizer::builder().build().unwrap();
        assert_eq!(*h.context(), Context::default());
    }

    #[test]
    fn builder_rejects_bad_limits() {
        assert_eq!(
            Humanizer::builder().max_sentence_len(0).build().unwrap_err(),
            ConfigError::InvalidLimit {
                name: "max_sentence_len",
                value: 0,
                reason: "must be at least 1",
            }
        );
        assert!(matches!(
            Humanizer::builder().max_sentence_len(200).build(),
            Err(ConfigError::InvalidLimit { name: "max_piece_len", .. })
        ));
        assert!(matches!(
            Humanizer::builder().max_pieces(1).build(),
            Err(ConfigError::InvalidLimit { name: "max_pieces", value: 1, .. })
        ));
    }

    #[test]
    fn config_error_message() {
        let err = Humanizer::builder().max_pieces(0).build().unwrap_err();
        assert_eq!(err.to_string(), "invalid max_pieces = 0: must be at least 2");
    }

    #[test]
    fn finish_piece_terminates_and_capitalizes() {
        assert_eq!(finish_piece("so  we left ,").as_deref(), Some("So we left."));
        assert_eq!(finish_piece("done!").as_deref(), Some("Done!"));
        assert_eq!(finish_piece("wait.;").as_deref(), Some("Wait."));
        assert_eq!(finish_piece(" . , ").as_deref(), None);
    }

    #[test]
    fn clean_only_substitution_is_opt_in() {
        let plain = Humanizer::default();
        assert_eq!(plain.clean_only("we utilize it"), "We utilize it");

        let fused = Humanizer::builder().substitute_on_clean(true).build().unwrap();
        assert_eq!(fused.clean_only("we utilize it"), "We use it");
    }

    #[test]
    fn untouched_text_stays_borrowed() {
        let text = "Already clean.";
        assert!(matches!(normalize(text), Cow::Borrowed(_)));
        assert!(matches!(substitute_vocabulary(text), Cow::Borrowed(_)));
    }
}
