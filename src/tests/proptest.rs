mod prop_tests {
    use crate::{
        Context, enforce_limits, humanize, normalize, split_sentences,
        stage::{Stage, apply_contractions::ApplyContractions},
    };
    use proptest::prelude::*;
    use std::borrow::Cow;

    proptest! {
        #[test]
        fn normalize_idempotent(s in "[a-zA-Z0-9 ,.;:!?'\"()\\-\n]{0,200}") {
            let once = normalize(&s).into_owned();
            let twice = normalize(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn humanize_output_is_terminated(s in "[a-zA-Z ,.;:!?']{0,300}") {
            let out = humanize(&s);
            for sentence in split_sentences(&out) {
                prop_assert!(
                    sentence.ends_with(['.', '!', '?']),
                    "unterminated sentence {:?} in {:?}",
                    sentence,
                    out
                );
            }
        }

        #[test]
        fn blank_input_gives_empty_output(s in "[ \t\n\r]{0,50}") {
            prop_assert_eq!(humanize(&s), "");
            prop_assert_eq!(normalize(&s), "");
        }

        #[test]
        fn contraction_idempotent(
            s in "((do|not|is|it|I|am|cannot|can|we|are|they|that|don't|IS|NOT) ){0,30}"
        ) {
            let ctx = Context::default();
            let once = ApplyContractions.apply(Cow::Borrowed(s.as_str()), &ctx).into_owned();
            let twice = ApplyContractions.apply(Cow::Borrowed(once.as_str()), &ctx).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn midpoint_split_is_balanced(words in prop::collection::vec("[a-z]{1,8}", 2..60)) {
            let ctx = Context::with_modified(|c| c.max_sentence_len = 1);
            let sentence = words.join(" ");
            let pieces = enforce_limits(&sentence, &ctx);
            prop_assert_eq!(pieces.len(), 2);
            for piece in &pieces {
                prop_assert!(piece.chars().any(|c| c.is_ascii_alphabetic()));
                prop_assert!(piece.ends_with('.'));
            }
        }

        #[test]
        fn humanize_never_panics(s in "\\PC{0,200}") {
            let _ = humanize(&s);
        }
    }
}
