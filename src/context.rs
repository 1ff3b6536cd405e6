// src/context.rs
// Runtime limits shared by every stage and by the length governor.
// Tiny, Copy, and built once per `Humanizer`.

/// Default upper bound (in characters) before a sentence is split.
pub const DEFAULT_MAX_SENTENCE_LEN: usize = 120;
/// Default upper bound (in characters) for each piece of a punctuation split.
pub const DEFAULT_MAX_PIECE_LEN: usize = 160;
/// Default maximum number of pieces a punctuation split may produce.
pub const DEFAULT_MAX_PIECES: usize = 5;

/// Runtime context passed to every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub max_sentence_len: usize,
    pub max_piece_len: usize,
    pub max_pieces: usize,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self {
            max_sentence_len: DEFAULT_MAX_SENTENCE_LEN,
            max_piece_len: DEFAULT_MAX_PIECE_LEN,
            max_pieces: DEFAULT_MAX_PIECES,
        }
    }
}

impl Context {
    /// Create a context from the defaults and let the caller adjust any field.
    #[inline(always)]
    pub fn with_modified(f: impl FnOnce(&mut Context)) -> Self {
        let mut ctx = Self::default();
        f(&mut ctx);
        ctx
    }
}
