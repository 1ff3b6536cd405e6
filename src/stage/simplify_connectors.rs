use crate::{
    context::Context,
    lexicon::CONNECTIVES,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// "for example" running straight into the next word
static BARE_FOR_EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(for\s+example)\s+(\w)").expect("valid for-example pattern")
});

/// Swap formal connectives for plain ones:
/// `therefore`/`thus`/`hence`/`consequently`/`subsequently` → `so`,
/// `in the event that`/`in case` → `if`, `prior to` → `before`.
///
/// An introductory `for example` that runs into the next word also gets its
/// comma: `For example we` → `For example, we`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplifyConnectors;

impl Stage for SimplifyConnectors {
    fn name(&self) -> &'static str {
        "simplify_connectors"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        CONNECTIVES.is_match(text) || BARE_FOR_EXAMPLE.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let plain = changed(CONNECTIVES.replace_all(&text));
        let text = keep_or(text, plain);
        let punctuated = changed(BARE_FOR_EXAMPLE.replace_all(&text, "${1}, ${2}"));
        keep_or(text, punctuated)
    }
}

impl StageTestConfig for SimplifyConnectors {
    fn samples() -> &'static [&'static str] {
        &[
            "Therefore, we stop.",
            "Call me in case it rains.",
            "For example we tried.",
            "For example, we tried.",
            "Plain words only.",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Therefore, we stop.", "So, we stop."),
            ("It rained; thus we left.", "It rained; so we left."),
            ("HENCE the delay.", "SO the delay."),
            ("Call me in case it rains.", "Call me if it rains."),
            ("In the event that it fails, retry.", "If it fails, retry."),
            ("Eat prior to leaving.", "Eat before leaving."),
            ("For example we tried.", "For example, we tried."),
            ("for example\n it works", "for example, it works"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_comma_is_kept_single() {
        let c = Context::default();
        assert!(!SimplifyConnectors.needs_apply("For example, this.", &c));
        assert!(!SimplifyConnectors.needs_apply("See the example.", &c));
    }

    #[test]
    fn partial_words_untouched() {
        let c = Context::default();
        assert!(!SimplifyConnectors.needs_apply("Thusly and thenceforth.", &c));
    }
}
