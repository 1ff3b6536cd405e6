use crate::{
    context::Context,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::starts_upper,
};
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

static AFTER_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.!?])(\s*)(\p{L})").expect("valid sentence-boundary pattern")
});

/// After `.`, `!` or `?`, force exactly one space before the next letter and
/// uppercase that letter: `end.next` → `end. Next`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceCase;

#[inline]
fn is_settled(caps: &Captures<'_>) -> bool {
    &caps[2] == " " && starts_upper(&caps[3])
}

impl Stage for SentenceCase {
    fn name(&self) -> &'static str {
        "sentence_case"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        AFTER_TERMINAL
            .captures_iter(text)
            .any(|caps| !is_settled(&caps))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let fixed = AFTER_TERMINAL.replace_all(&text, |caps: &Captures<'_>| {
            format!("{} {}", &caps[1], caps[3].to_uppercase())
        });
        Cow::Owned(fixed.into_owned())
    }
}

impl StageTestConfig for SentenceCase {
    fn samples() -> &'static [&'static str] {
        &[
            "one.two",
            "one.   two",
            "done! next? last",
            "Already. Fine.",
            "3.14 is pi",
            "ünïcode.ärger",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "One. Two.", "3.14", "end.", "why? Because", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("one.two", "one. Two"),
            ("one.   two", "one. Two"),
            ("done!next?last", "done! Next? Last"),
            ("ok.Fine", "ok. Fine"),
            ("es.über", "es. Über"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(SentenceCase);
    }
}
