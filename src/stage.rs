//! Core stage abstraction.
//!
//! Every normalization step and every sentence-rewrite pass is a [`Stage`]: a
//! cheap pre-scan (`needs_apply`) plus an allocation-aware transformation
//! (`apply`). Stages never fail; the pipeline is a total function over text.
//!
//! `apply` takes and returns a `Cow<str>` so that a stage which finds nothing
//! to do hands the caller's buffer straight back. Stages are composed into a
//! [`Process`](crate::process::Process) and named through a
//! [`Profile`](crate::profile::Profile).

pub mod apply_contractions;
pub mod capitalize_first;
pub mod collapse_punctuation;
pub mod collapse_repeats;
pub mod collapse_spaces;
pub mod fix_spacing;
pub mod join_hyphen_breaks;
pub mod normalization;
pub mod reflow_paragraphs;
pub mod remove_fillers;
pub mod rewrite_passive;
pub mod sentence_case;
pub mod simplify_connectors;
pub mod simplify_vocabulary;
pub mod strip_invisibles;
pub mod strip_markup;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation or rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` guarantees `apply` is a no-op.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// Extract the new buffer from a `Regex::replace_all` style result.
///
/// `None` means nothing matched and the original text can be kept as is.
#[inline(always)]
pub(crate) fn changed(result: Cow<'_, str>) -> Option<String> {
    match result {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    }
}

/// Keep `text` untouched unless `replaced` carries a new buffer.
#[inline(always)]
pub(crate) fn keep_or<'a>(text: Cow<'a, str>, replaced: Option<String>) -> Cow<'a, str> {
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}
