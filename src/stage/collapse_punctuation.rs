use crate::{
    context::Context,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

static DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid dot-run pattern"));

static BANG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("valid bang-run pattern"));

/// Collapse punctuation runs: `...` → `.`, `!!!` → `!`, `?!?!` → `!`.
///
/// A mixed `!`/`?` run keeps its last mark.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapsePunctuation;

impl Stage for CollapsePunctuation {
    fn name(&self) -> &'static str {
        "collapse_punctuation"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        DOT_RUN.is_match(text) || BANG_RUN.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let dots = changed(DOT_RUN.replace_all(&text, "."));
        let text = keep_or(text, dots);
        let bangs = changed(BANG_RUN.replace_all(&text, |caps: &Captures<'_>| {
            caps[0].chars().last().map(String::from).unwrap_or_default()
        }));
        keep_or(text, bangs)
    }
}

impl StageTestConfig for CollapsePunctuation {
    fn samples() -> &'static [&'static str] {
        &["Wait...", "What?!?!", "No!!!", "a.!.!", "3.14", "fine."]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "done.", "why?", "3.14", "a.b.c", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Wait...", "Wait."),
            ("No!!!", "No!"),
            ("Really??", "Really?"),
            ("What?!?!", "What!"),
            ("Huh!?", "Huh?"),
            ("so.... yes", "so. yes"),
        ]
    }
}
