use crate::{
    context::Context,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// A run of two or more hyphens, or a single hyphen with whitespace on at
/// least one side, is a dash rather than a compound.
static SPACED_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*-{2,}\s*|\s+-\s*|\s*-\s+").expect("valid spaced-hyphen pattern")
});

static SPACE_BEFORE_CLOSER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+([,;:.!?%)\]])").expect("valid closing-punctuation pattern")
});

/// Spacing repairs inside a paragraph:
/// - a free-standing hyphen, or a run of hyphens, becomes ` - `
/// - whitespace before `, ; : . ! ? % ) ]` is removed
///
/// Hyphens inside words (`well-known`) are left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixSpacing;

impl Stage for FixSpacing {
    fn name(&self) -> &'static str {
        "fix_spacing"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        SPACED_HYPHEN.is_match(text) || SPACE_BEFORE_CLOSER.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let dashed = changed(SPACED_HYPHEN.replace_all(&text, " - "));
        let text = keep_or(text, dashed);
        let tightened = changed(SPACE_BEFORE_CLOSER.replace_all(&text, "$1"));
        keep_or(text, tightened)
    }
}

impl StageTestConfig for FixSpacing {
    fn samples() -> &'static [&'static str] {
        &[
            "well-known fact",
            "wait -what",
            "a  -  b",
            "hello , world !",
            "rate ( 5 % )",
            "a - b",
            "A-- 0",
            "a - --b",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "well-known", "x-ray", "done.", "a, b", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("wait -what", "wait - what"),
            ("wait- what", "wait - what"),
            ("a  -  b", "a - b"),
            ("hello , world !", "hello, world!"),
            ("50 % off", "50% off"),
            ("(see above )", "(see above)"),
            ("end -.", "end -."),
            ("A-- 0", "A - 0"),
            ("a--\t!", "a -!"),
            ("word -- word", "word - word"),
            ("well--known", "well - known"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(FixSpacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphen_runs_settle_in_one_pass() {
        let c = Context::default();
        for input in ["A-- 0", "a--\t!", "word -- word", "x --- y", "a - --b"] {
            let once = FixSpacing.apply(Cow::Borrowed(input), &c).into_owned();
            let twice = FixSpacing.apply(Cow::Borrowed(once.as_str()), &c);
            assert_eq!(twice, once.as_str(), "`{input}` changed again");
        }
    }
}
