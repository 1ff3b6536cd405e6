use crate::{
    context::Context,
    stage::{Stage, changed, keep_or},
    testing::stage_contract::StageTestConfig,
};
use memchr::{memchr, memmem};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Fast pre-scan: if no '<' appears, text is guaranteed to have no tags
#[inline(always)]
fn contains_tag_start(text: &str) -> bool {
    memchr(b'<', text.as_bytes()).is_some()
}

/// Fast pre-scan: only the two entities below are decoded
#[inline(always)]
fn contains_known_entity(text: &str) -> bool {
    memchr(b'&', text.as_bytes()).is_some()
        && (memmem::find(text.as_bytes(), b"&nbsp;").is_some()
            || memmem::find(text.as_bytes(), b"&amp;").is_some())
}

/// Strips `<...>` tags and decodes `&nbsp;` and `&amp;`.
///
/// Deliberately minimal: any other entity is left as typed. Tags are removed
/// before entities are decoded, so `&amp;lt;b&amp;gt;` never turns into a tag
/// that gets stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripMarkup;

impl Stage for StripMarkup {
    fn name(&self) -> &'static str {
        "strip_markup"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        (contains_tag_start(text) && TAG.is_match(text)) || contains_known_entity(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let text = if contains_tag_start(&text) {
            let stripped = changed(TAG.replace_all(&text, ""));
            keep_or(text, stripped)
        } else {
            text
        };
        if !contains_known_entity(&text) {
            return text;
        }
        Cow::Owned(text.replace("&nbsp;", " ").replace("&amp;", "&"))
    }
}

impl StageTestConfig for StripMarkup {
    fn samples() -> &'static [&'static str] {
        &[
            "<p>Hello</p>",
            "fish &amp; chips",
            "a&nbsp;b",
            "1 < 2 and 3 > 2",
            "&lt;kept&gt;",
            "plain",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "a < b", "x > y", "AT&T", "&lt;", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("<p>Hello</p>", "Hello"),
            ("<a href=\"x\">link</a> text", "link text"),
            ("fish &amp; chips", "fish & chips"),
            ("a&nbsp;b", "a b"),
            ("<br/>line&nbsp;&amp;&nbsp;more", "line & more"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripMarkup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_angle_pair_is_not_a_tag() {
        let c = Context::default();
        assert!(!StripMarkup.needs_apply("a <> b", &c));
    }

    #[test]
    fn other_entities_untouched() {
        let c = Context::default();
        let out = StripMarkup.apply(Cow::Borrowed("&quot;x&quot; &amp; y"), &c);
        assert_eq!(out, "&quot;x&quot; & y");
    }
}
