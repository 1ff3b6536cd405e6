use crate::{
    context::Context,
    process::Process,
    profile::Profile,
    stage::Stage,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph-break pattern"));

/// Split text into paragraphs on blank lines, reflow each paragraph onto a
/// single line and run the paragraph profile over it.
///
/// Within a paragraph every line is trimmed and the non-empty lines are
/// joined with single spaces. Paragraphs that end up empty are dropped and
/// the survivors are rejoined with one blank line between them.
pub struct ReflowParagraphs<P: Process> {
    paragraph: Profile<P>,
}

impl<P: Process> ReflowParagraphs<P> {
    pub fn new(paragraph: Profile<P>) -> Self {
        Self { paragraph }
    }

    fn reflow(&self, text: &str, ctx: &Context) -> String {
        let mut out = String::with_capacity(text.len());
        for chunk in PARAGRAPH_BREAK.split(text) {
            let joined = chunk
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            let cleaned = self.paragraph.run(Cow::Owned(joined), ctx);
            if cleaned.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&cleaned);
        }
        out
    }
}

impl<P: Process> Stage for ReflowParagraphs<P> {
    fn name(&self) -> &'static str {
        "reflow_paragraphs"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let out = self.reflow(&text, ctx);
        if out == text.as_ref() {
            text
        } else {
            Cow::Owned(out)
        }
    }
}
