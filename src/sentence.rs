//! Sentence segmentation.
//!
//! A boundary is any whitespace run that directly follows `.`, `!` or `?`.
//! Abbreviations such as `Mr.` or `e.g.` are not special-cased and do split.

use crate::unicode::is_sentence_terminal;

/// Split `text` into trimmed, non-empty sentences, terminal punctuation kept.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_sentence_terminal) {
            push_trimmed(&mut sentences, &text[start..i]);
            start = text.len();
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_whitespace() {
                    start = j;
                    break;
                }
                chars.next();
            }
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_then_whitespace() {
        assert_eq!(
            split_sentences("One. Two! Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
    }

    #[test]
    fn needs_whitespace_after_terminal() {
        assert_eq!(split_sentences("3.14 is pi.Really"), vec!["3.14 is pi.Really"]);
    }

    #[test]
    fn paragraph_breaks_count_as_whitespace() {
        assert_eq!(split_sentences("First.\n\nSecond."), vec!["First.", "Second."]);
    }

    #[test]
    fn empty_and_blank() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn trailing_whitespace_is_dropped() {
        assert_eq!(split_sentences("  Done.   "), vec!["Done."]);
    }

    #[test]
    fn abbreviations_split() {
        assert_eq!(
            split_sentences("Ask Mr. Smith."),
            vec!["Ask Mr.", "Smith."]
        );
    }
}
