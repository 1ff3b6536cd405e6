use crate::{context::Context, stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Longest run of one ASCII letter that is kept intact.
const MAX_RUN: usize = 3;

/// Cut emphasis runs like `soooooo` down to `sooo`.
///
/// Letters are compared case-insensitively (`NOooooo` is one run) and the
/// first three letters of the run are kept as typed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseRepeats;

#[inline]
fn has_long_run(text: &str) -> bool {
    let mut prev = 0u8;
    let mut run = 0usize;
    for &b in text.as_bytes() {
        if b.is_ascii_alphabetic() {
            let l = b.to_ascii_lowercase();
            if l == prev {
                run += 1;
                if run > MAX_RUN {
                    return true;
                }
            } else {
                prev = l;
                run = 1;
            }
        } else {
            prev = 0;
            run = 0;
        }
    }
    false
}

impl Stage for CollapseRepeats {
    fn name(&self) -> &'static str {
        "collapse_repeats"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        has_long_run(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if !has_long_run(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        let mut run = 0usize;
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                let l = c.to_ascii_lowercase();
                if prev == Some(l) {
                    run += 1;
                } else {
                    prev = Some(l);
                    run = 1;
                }
                if run <= MAX_RUN {
                    out.push(c);
                }
            } else {
                prev = None;
                run = 0;
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for CollapseRepeats {
    fn samples() -> &'static [&'static str] {
        &["soooooo good", "NOoooo", "aaa bbb", "zzzzzz!", "book keeper"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "sooo", "aaa aaa", "book", "1111111", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("soooooo good", "sooo good"),
            ("NOooooo", "NOoo"),
            ("hmmmm...", "hmmm..."),
            ("aaaa bbbbb", "aaa bbb"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CollapseRepeats);
    }
}
