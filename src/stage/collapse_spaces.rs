use crate::{context::Context, stage::Stage, testing::stage_contract::StageTestConfig};
use memchr::memmem;
use std::borrow::Cow;

/// Collapse runs of spaces to one and trim the edges.
///
/// Only U+0020 is collapsed; by the time this runs tabs and line breaks
/// inside a paragraph are already spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseSpaces;

impl Stage for CollapseSpaces {
    fn name(&self) -> &'static str {
        "collapse_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memmem::find(text.as_bytes(), b"  ").is_some()
            || text.starts_with(char::is_whitespace)
            || text.ends_with(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev_space = false;
        for c in text.trim().chars() {
            if c == ' ' {
                if !prev_space {
                    out.push(c);
                }
                prev_space = true;
            } else {
                prev_space = false;
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for CollapseSpaces {
    fn samples() -> &'static [&'static str] {
        &["  padded  ", "a    b", "single space", " ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  padded  ", "padded"),
            ("a    b   c", "a b c"),
            ("   ", ""),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CollapseSpaces);
    }
}
