#[cfg(test)]
mod integration_tests {

    use crate::{Humanizer, clean_only, humanize, normalize, split_sentences};

    fn long_single_clause() -> String {
        let mut s = "The quick brown fox jumps over the lazy dog ".repeat(5);
        s.truncate(s.trim_end().len());
        s.push('.');
        s
    }

    #[test]
    fn filler_passive_and_vocabulary() {
        let out = humanize(
            "It should be noted that the system was utilized by the team in order to achieve the objective.",
        );
        assert_eq!(out, "The team did utiliz the system to achieve the goal.");
        assert!(!out.to_lowercase().contains("it should be noted"));
        assert!(!out.contains("in order to"));
    }

    #[test]
    fn letter_runs_are_cut_to_three() {
        assert_eq!(normalize("soooooo good"), "Sooo good");
        assert_eq!(humanize("soooooo good"), "Sooo good.");
    }

    #[test]
    fn long_clause_is_split_in_two() {
        let input = long_single_clause();
        assert!(input.chars().count() >= 200);

        let out = humanize(&input);
        let sentences = split_sentences(&out);
        assert_eq!(sentences.len(), 2);
        assert!(sentences.iter().all(|s| s.ends_with('.')));
        assert!(sentences[1].starts_with("Jumps"));
    }

    #[test]
    fn expanded_negation_is_contracted() {
        assert_eq!(humanize("do not worry"), "Don't worry.");
    }

    #[test]
    fn smart_quotes_and_dashes() {
        assert_eq!(
            clean_only("\u{201C}hello\u{201D} \u{2014} world"),
            "\"hello\" - world"
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(humanize(""), "");
        assert_eq!(normalize(""), "");
        assert_eq!(humanize("   \n\t  "), "");
        assert_eq!(normalize(" \n\n \u{200B} "), "");
    }

    #[test]
    fn sentences_are_rewritten_independently() {
        assert_eq!(
            humanize("Therefore, we left. It is late."),
            "So, we left. It's late."
        );
    }

    #[test]
    fn filler_only_sentence_disappears() {
        assert_eq!(humanize("It should be noted that. We left."), "We left.");
    }

    #[test]
    fn by_agent_passive_becomes_active() {
        assert_eq!(humanize("The cake was eaten by Tom."), "Tom did eate the cake.");
    }

    #[test]
    fn each_passive_clause_in_a_sentence_becomes_active() {
        assert_eq!(
            humanize("The dog was seen by me and the cat was seen by you."),
            "Me did see the dog and You did see the cat."
        );
    }

    #[test]
    fn normalize_settles_hyphen_runs_in_one_pass() {
        for input in ["A-- 0", "a--\t!", "word -- word"] {
            let once = normalize(input).into_owned();
            assert_eq!(normalize(&once), once.as_str(), "`{input}`");
        }
        assert_eq!(normalize("A-- 0"), "A - 0");
    }

    #[test]
    fn paragraphs_join_with_single_space() {
        assert_eq!(humanize("First part.\n\nSecond part"), "First part. Second part.");
    }

    #[test]
    fn custom_limits_split_at_semicolon() {
        let h = Humanizer::builder().max_sentence_len(40).build().unwrap();
        let out = h.humanize(
            "We tried the first route; we tried the second route, and then we went home.",
        );
        assert_eq!(
            out,
            "We tried the first route. We tried the second route, and then we went home."
        );
    }

    #[test]
    fn clean_only_never_rewrites_sentences() {
        let text = "It should be noted that we do not utilize it.";
        assert_eq!(clean_only(text), text);
    }
}
