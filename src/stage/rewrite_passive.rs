use crate::{
    context::Context,
    lexicon::data::CLAUSE_BOUNDARIES,
    stage::{Stage, keep_or},
    testing::stage_contract::StageTestConfig,
    unicode::upper_first,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};
use tracing::debug;

static PASSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<subj>\w[\w'\-\s]*?)\s+(?P<aux>was\s+being|were\s+being|is\s+being|are\s+being|has\s+been|have\s+been|had\s+been|was|were|is|are|been|being)\s+(?P<verb>\w+(?:ed|en|n))\s+by\s+(?P<agent>[\w'\-]+(?:\s+[\w'\-]+)*)",
    )
    .expect("valid passive-voice pattern")
});

/// Conservative passive → active rewrite:
/// `<subject> <be> <participle> by <agent>` → `<Agent> did <base> <subject>`.
///
/// Best effort by nature. The base form is derived mechanically (`utilized`
/// → `utiliz`, `taken` → `take`), so irregular verbs come out rough.
///
/// The agent ends before the first preposition or conjunction after its
/// first word, and the subject starts after the last one. Words outside the
/// clause stay where they were, and scanning resumes right after the agent,
/// so `A was seen by B and C was seen by D` rewrites both clauses.
#[derive(Debug, Default, Clone, Copy)]
pub struct RewritePassive;

#[inline]
fn is_clause_boundary(word: &str) -> bool {
    CLAUSE_BOUNDARIES.contains(word.to_lowercase().as_str())
}

#[inline]
fn offset_in(outer: &str, inner: &str) -> usize {
    inner.as_ptr() as usize - outer.as_ptr() as usize
}

/// Strip `-ed` (words longer than three letters), otherwise one final `n`.
pub fn base_form(participle: &str) -> String {
    let lower = participle.to_lowercase();
    if lower.ends_with("ed") && lower.chars().count() > 3 {
        lower[..lower.len() - 2].to_owned()
    } else if lower.ends_with('n') {
        lower[..lower.len() - 1].to_owned()
    } else {
        lower
    }
}

/// Split a greedy agent phrase into the agent proper and the trailing words.
fn split_agent(phrase: &str) -> (&str, &str) {
    let cut = phrase
        .split_whitespace()
        .skip(1)
        .find(|word| is_clause_boundary(word))
        .map(|word| offset_in(phrase, word));
    match cut {
        Some(at) => (phrase[..at].trim_end(), &phrase[at..]),
        None => (phrase, ""),
    }
}

/// Split a lazy subject into the words that lead into the clause (up to and
/// including the last clause-boundary word) and the subject proper.
/// A subject that would end up empty is kept whole.
fn split_subject(phrase: &str) -> (&str, &str) {
    let lead_end = phrase
        .split_whitespace()
        .rfind(|word| is_clause_boundary(word))
        .map(|word| offset_in(phrase, word) + word.len());
    match lead_end {
        Some(end) => {
            let subject = phrase[end..].trim_start();
            if subject.is_empty() {
                ("", phrase)
            } else {
                (&phrase[..phrase.len() - subject.len()], subject)
            }
        }
        None => ("", phrase),
    }
}

fn active_clause(agent: &str, participle: &str, subject: &str) -> String {
    let base = base_form(participle);
    debug!(verb = participle, base = %base, "rewriting passive clause");
    format!("{} did {} {}", upper_first(agent), base, subject.to_lowercase())
}

/// Rewrite every passive clause in one left-to-right scan. `None` when
/// nothing matched.
fn rewrite_all(text: &str) -> Option<String> {
    let mut out: Option<String> = None;
    let mut copied = 0;
    while let Some(caps) = PASSIVE.captures_at(text, copied) {
        let (Some(whole), Some(subj), Some(verb), Some(agent)) = (
            caps.get(0),
            caps.name("subj"),
            caps.name("verb"),
            caps.name("agent"),
        ) else {
            break;
        };
        let (lead, subject) = split_subject(subj.as_str());
        let (agent_proper, _) = split_agent(agent.as_str());

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[copied..whole.start()]);
        buf.push_str(lead);
        buf.push_str(&active_clause(agent_proper, verb.as_str(), subject));
        // the words after the agent proper are scanned again
        copied = agent.start() + agent_proper.len();
    }
    let mut buf = out?;
    buf.push_str(&text[copied..]);
    Some(buf)
}

impl Stage for RewritePassive {
    fn name(&self) -> &'static str {
        "rewrite_passive"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        PASSIVE.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let active = rewrite_all(&text);
        keep_or(text, active)
    }
}

impl StageTestConfig for RewritePassive {
    fn samples() -> &'static [&'static str] {
        &[
            "The cake was eaten by Tom.",
            "The report has been reviewed by the board.",
            "Nothing passive here.",
            "He stood by the door.",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "He stood by the door.", "It was fine.", "Go by bus.", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("The cake was eaten by Tom.", "Tom did eate the cake."),
            (
                "The report has been reviewed by the board.",
                "The board did review the report.",
            ),
            (
                "The letters were written by Anna in Paris.",
                "Anna did writte the letters in Paris.",
            ),
            (
                "the system was utilized by the team in order to win.",
                "The team did utiliz the system in order to win.",
            ),
            ("The car is being driven by Sam.", "Sam did drive the car."),
            (
                "The dog was seen by me and the cat was seen by you.",
                "Me did see the dog and You did see the cat.",
            ),
            ("So the cake was eaten by Tom.", "So Tom did eate the cake."),
        ]
    }

    fn skip_idempotence_test() -> bool {
        true
    }
}
