use crate::{
    context::Context,
    lexicon::CONTRACTION_TABLE,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Contract common two-word forms: `do not` → `don't`, `I am` → `I'm`.
///
/// One left-to-right scan over a longest-first alternation, so a contracted
/// form is never matched again and the pass is idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyContractions;

impl Stage for ApplyContractions {
    fn name(&self) -> &'static str {
        "apply_contractions"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        CONTRACTION_TABLE.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let contracted = changed(CONTRACTION_TABLE.replace_all(&text));
        keep_or(text, contracted)
    }
}

impl StageTestConfig for ApplyContractions {
    fn samples() -> &'static [&'static str] {
        &[
            "do not worry",
            "It is not what we are used to.",
            "I cannot and I can not.",
            "DO NOT ENTER",
            "don't worry",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "don't", "it's fine", "isn't", "donor", "island", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("do not worry", "don't worry"),
            ("Do not worry", "Don't worry"),
            ("DO NOT ENTER", "DON'T ENTER"),
            ("I cannot and I can not.", "I can't and I can't."),
            ("I am sure they are here.", "I'm sure they're here."),
            ("It is not late.", "It's not late."),
            ("We have not seen it.", "We haven't seen it."),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ApplyContractions);
    }
}
