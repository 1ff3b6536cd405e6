use crate::{
    context::Context,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{starts_upper, upper_first},
};
use std::borrow::Cow;

/// Uppercase the very first character of the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizeFirst;

impl Stage for CapitalizeFirst {
    fn name(&self) -> &'static str {
        "capitalize_first"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !starts_upper(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(upper_first(&text))
    }
}

impl StageTestConfig for CapitalizeFirst {
    fn samples() -> &'static [&'static str] {
        &["hello", "Hello", "\"quoted\"", "élan", "1st", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["Hello", "WORLD", "123 go", "\"quoted\"", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello world", "Hello world"), ("élan", "Élan")]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CapitalizeFirst);
    }
}
