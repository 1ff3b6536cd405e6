//! Length governor: breaks an overlong sentence into shorter ones.
//!
//! Split points are tried in priority order; the first separator producing
//! an acceptable set of pieces wins. When none does, the sentence is cut in
//! half at the middle word that has letters or digits. The governor is the
//! only component allowed to add sentence-terminal punctuation.

use crate::{
    context::Context,
    unicode::{is_sentence_terminal, upper_first},
};
use smallvec::{SmallVec, smallvec};
use tracing::debug;

/// Split points, strongest first.
pub const SEPARATORS: [&str; 5] = [";", ", and ", ", but ", ", which ", ","];

/// Pieces produced for one sentence. Five inline slots cover every
/// punctuation split under the default limits.
pub type Pieces = SmallVec<[String; 5]>;

#[inline]
fn ends_terminal(s: &str) -> bool {
    s.chars().last().is_some_and(is_sentence_terminal)
}

/// Enforce `ctx.max_sentence_len` on a single sentence.
///
/// Short sentences come back as the only element. Otherwise the sentence is
/// split at the first separator from [`SEPARATORS`] that yields between two
/// and `ctx.max_pieces` non-empty pieces, each no longer than
/// `ctx.max_piece_len` characters; every piece but the last is closed with a
/// period. If no separator qualifies, the words are split at the midpoint
/// and both halves are closed with a period, the second one capitalized.
pub fn enforce_limits(sentence: &str, ctx: &Context) -> Pieces {
    let len = sentence.chars().count();
    if len <= ctx.max_sentence_len {
        return smallvec![sentence.to_owned()];
    }

    for sep in SEPARATORS {
        if !sentence.contains(sep) {
            continue;
        }
        if let Some(pieces) = split_at_separator(sentence, sep, ctx) {
            debug!(len, separator = sep, pieces = pieces.len(), "split long sentence");
            return pieces;
        }
    }

    let halves = split_at_midpoint(sentence);
    debug!(len, pieces = halves.len(), "split long sentence at midpoint");
    halves
}

fn split_at_separator(sentence: &str, sep: &str, ctx: &Context) -> Option<Pieces> {
    let parts: SmallVec<[&str; 8]> = sentence
        .split(sep)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 2 || parts.len() > ctx.max_pieces {
        return None;
    }

    let last = parts.len() - 1;
    let pieces: Pieces = parts
        .iter()
        .enumerate()
        .map(|(i, &part)| {
            if ends_terminal(part) {
                return part.to_owned();
            }
            let mut piece = part.trim_end_matches([',', ';', ' ']).to_owned();
            if i < last {
                piece.push('.');
            }
            piece
        })
        .collect();

    pieces
        .iter()
        .all(|piece| piece.chars().count() <= ctx.max_piece_len)
        .then_some(pieces)
}

/// Cut before the middle word that has alphanumeric content, so each half
/// keeps at least one such word.
fn split_at_midpoint(sentence: &str) -> Pieces {
    let words: SmallVec<[&str; 64]> = sentence.split_whitespace().collect();
    let content: SmallVec<[usize; 64]> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
        .map(|(i, _)| i)
        .collect();
    if content.len() < 2 {
        return smallvec![sentence.to_owned()];
    }
    let mid = content[content.len() / 2];

    let mut first = words[..mid]
        .join(" ")
        .trim_end_matches([' ', ',', ';', ':'])
        .to_owned();
    if !ends_terminal(&first) {
        first.push('.');
    }

    let mut second = upper_first(&words[mid..].join(" "));
    if !ends_terminal(&second) {
        second.push('.');
    }

    smallvec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_single_clause() -> String {
        let mut s = "the quick brown fox jumps over the lazy dog ".repeat(5);
        s.truncate(s.trim_end().len());
        s.push('.');
        s
    }

    #[test]
    fn short_sentence_untouched() {
        let ctx = Context::default();
        let pieces = enforce_limits("Short and sweet.", &ctx);
        assert_eq!(pieces.as_slice(), ["Short and sweet."]);
    }

    #[test]
    fn single_clause_falls_back_to_midpoint() {
        let ctx = Context::default();
        let sentence = long_single_clause();
        assert!(sentence.chars().count() > 200);

        let pieces = enforce_limits(&sentence, &ctx);
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.ends_with('.') && !p.ends_with("..")));
        assert!(pieces[1].starts_with("Jumps"));
        assert!(pieces[0].starts_with("the quick"));
    }

    #[test]
    fn semicolon_wins_over_comma() {
        let ctx = Context::default();
        let sentence = format!(
            "{}, still going; {}, and it ends here",
            "a".repeat(60),
            "b".repeat(60)
        );
        let pieces = enforce_limits(&sentence, &ctx);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], format!("{}, still going.", "a".repeat(60)));
        // the last piece is left for the caller to terminate
        assert_eq!(pieces[1], format!("{}, and it ends here", "b".repeat(60)));
    }

    #[test]
    fn too_many_pieces_rejects_separator() {
        let ctx = Context::with_modified(|c| c.max_pieces = 2);
        let clause = "word ".repeat(10);
        let sentence = format!("{clause}; {clause}; {clause}");
        let pieces = enforce_limits(&sentence, &ctx);
        // no other separator present: midpoint split
        assert_eq!(pieces.len(), 2);
        assert!(pieces[1].starts_with("Word"));
    }

    #[test]
    fn oversized_piece_rejects_separator() {
        let ctx = Context::default();
        let sentence = format!("{}; tail", "long ".repeat(40));
        let pieces = enforce_limits(&sentence, &ctx);
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.chars().count() < sentence.chars().count()));
        assert!(pieces[0].ends_with("long."));
    }

    #[test]
    fn terminal_punctuation_is_not_doubled() {
        let ctx = Context::with_modified(|c| c.max_sentence_len = 10);
        let pieces = enforce_limits("Really?; yes, it is", &ctx);
        assert_eq!(pieces.as_slice(), ["Really?", "yes, it is"]);
    }

    #[test]
    fn single_word_is_returned_unchanged() {
        let ctx = Context::with_modified(|c| c.max_sentence_len = 3);
        let pieces = enforce_limits("Supercalifragilistic", &ctx);
        assert_eq!(pieces.as_slice(), ["Supercalifragilistic"]);
    }

    #[test]
    fn midpoint_halves_are_never_empty() {
        let ctx = Context::with_modified(|c| c.max_sentence_len = 1);
        let pieces = enforce_limits("a b", &ctx);
        assert_eq!(pieces.as_slice(), ["a.", "B."]);
    }

    #[test]
    fn midpoint_skips_punctuation_only_words() {
        let ctx = Context::with_modified(|c| c.max_sentence_len = 1);
        let pieces = enforce_limits(", , x y", &ctx);
        assert_eq!(pieces.as_slice(), [", , x.", "Y."]);
    }

    #[test]
    fn fewer_than_two_content_words_are_not_split() {
        let ctx = Context::with_modified(|c| c.max_sentence_len = 1);
        let pieces = enforce_limits("- - word - -", &ctx);
        assert_eq!(pieces.as_slice(), ["- - word - -"]);
    }
}
