use crate::{
    context::Context,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Unicode Normalization Form KC (Compatibility Composition).
///
/// Folds ligatures, full-width forms, no-break spaces and ellipses into their
/// plain equivalents so that visually identical glyphs compare equal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkcStage;

pub const NFKC: NfkcStage = NfkcStage;

impl Stage for NfkcStage {
    fn name(&self) -> &'static str {
        "nfkc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !ICU4X_NFKC.is_normalized(text)
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let normalized = changed(ICU4X_NFKC.normalize(text.as_ref()));
        keep_or(text, normalized)
    }
}

impl StageTestConfig for NfkcStage {
    fn samples() -> &'static [&'static str] {
        &["café", "naïve", "e\u{0301}", "ﬁle", "①②③", "wait…", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ﬁle", "file"),
            ("e\u{0301}", "é"),
            ("a\u{00A0}b", "a b"),
            ("Ｆｕｌｌ", "Full"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NFKC);
    }
}
