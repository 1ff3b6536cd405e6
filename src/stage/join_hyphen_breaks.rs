use crate::{
    context::Context,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*\n\s*").expect("valid hyphen-break pattern"));

/// Rejoin words split across lines: `infor-\nmation` → `information`.
///
/// The hyphen, the line break and the whitespace around the break are all
/// removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct JoinHyphenBreaks;

impl Stage for JoinHyphenBreaks {
    fn name(&self) -> &'static str {
        "join_hyphen_breaks"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'\n', text.as_bytes()).is_some() && HYPHEN_BREAK.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let joined = changed(HYPHEN_BREAK.replace_all(&text, ""));
        keep_or(text, joined)
    }
}

impl StageTestConfig for JoinHyphenBreaks {
    fn samples() -> &'static [&'static str] {
        &["infor-\nmation", "well-known", "a -\n  b", "no breaks here", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "well-known", "line\nbreak", "dash -", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("infor-\nmation", "information"),
            ("co-\n   operate", "cooperate"),
            ("end -  \n next", "end next"),
        ]
    }
}
