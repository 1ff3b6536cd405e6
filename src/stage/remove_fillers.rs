use crate::{
    context::Context,
    lexicon::FILLERS,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// `, ,` left behind when the words between two commas vanish
static ORPHAN_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*,)+").expect("valid orphan-comma pattern"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:!?])").expect("valid space-before-punct pattern"));

static COMMA_BEFORE_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",+([.!?])").expect("valid comma-terminal pattern"));

static LEADING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*,\s*").expect("valid leading-comma pattern"));

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid multi-space pattern"));

/// Delete hedging and stock filler phrases, then tidy the punctuation and
/// spacing the deletion leaves behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveFillers;

fn tidy(text: &str) -> String {
    let s = ORPHAN_COMMAS.replace_all(text, ",");
    let s = SPACE_BEFORE_PUNCT.replace_all(&s, "$1");
    let s = COMMA_BEFORE_TERMINAL.replace_all(&s, "$1");
    let s = LEADING_COMMA.replace(&s, "");
    let s = MULTI_SPACE.replace_all(&s, " ");
    s.trim().to_owned()
}

impl Stage for RemoveFillers {
    fn name(&self) -> &'static str {
        "remove_fillers"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        FILLERS.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let removed = changed(FILLERS.replace_all(&text)).map(|s| tidy(&s));
        keep_or(text, removed)
    }
}

impl StageTestConfig for RemoveFillers {
    fn samples() -> &'static [&'static str] {
        &[
            "It should be noted that the plan works.",
            "In many cases, users leave.",
            "We did well, for the most part, overall.",
            "Nothing to remove here.",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "It should be noted that the plan works.",
                "the plan works.",
            ),
            ("In many cases, users leave.", "users leave."),
            (
                "We did well, for the most part, overall.",
                "We did well, overall.",
            ),
            ("We won, at the end of the day.", "We won."),
            ("IT IS WORTH NOTING THAT prices rose.", "prices rose."),
        ]
    }

    fn skip_idempotence_test() -> bool {
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_respected() {
        let c = Context::default();
        assert!(!RemoveFillers.needs_apply("within terms offered", &c));
    }

    #[test]
    fn in_order_to_is_not_a_filler() {
        let c = Context::default();
        assert!(!RemoveFillers.needs_apply("We left in order to rest.", &c));
    }
}
