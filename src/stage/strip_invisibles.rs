//! stage/strip_invisibles.rs
//! Character-level scrub run right after NFKC:
//! - zero-width characters, bidi controls and the BOM are dropped
//! - C0/C1 control characters are dropped (tab and line breaks survive)
//! - `\r\n`, `\r`, NEL, U+2028 and U+2029 become `\n`; tab becomes a space
//! - typographic quotes and dashes become ASCII
//!
//! Dashes are mapped here rather than with the rest of the punctuation so
//! that an em-dash at the end of a line joins like a plain hyphen.

use crate::{
    context::Context,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{
        is_foreign_line_break, is_format_control, is_stray_control, needs_scrub,
        normalize_punctuation_char,
    },
};
use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct StripInvisibles;

impl Stage for StripInvisibles {
    fn name(&self) -> &'static str {
        "strip_invisibles"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(needs_scrub)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if is_format_control(c) || is_stray_control(c) {
                continue;
            }
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push('\n');
                }
                c if is_foreign_line_break(c) => out.push('\n'),
                '\t' => out.push(' '),
                c => out.push(normalize_punctuation_char(c)),
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for StripInvisibles {
    fn samples() -> &'static [&'static str] {
        &[
            "hello\u{200B}world",
            "\u{FEFF}bommed",
            "bell\u{0007}ring",
            "line\r\nbreak\rmore",
            "\u{201C}quoted\u{201D} \u{2014} dash",
            "clean text",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello\u{200B}world", "helloworld"),
            ("join\u{200D}er\u{2060}", "joiner"),
            ("\u{FEFF}text", "text"),
            ("a\u{0000}b\u{007F}c", "abc"),
            ("one\r\ntwo\rthree", "one\ntwo\nthree"),
            ("para\u{2029}graph", "para\ngraph"),
            ("col\tumn", "col umn"),
            ("\u{201C}hello\u{201D}", "\"hello\""),
            ("it\u{2019}s", "it's"),
            ("wait\u{2014}what", "wait-what"),
            ("a \u{2013} b", "a - b"),
        ]
    }
}
