use crate::{
    process::Process,
    profile::Profile,
    stage::{
        apply_contractions::ApplyContractions, capitalize_first::CapitalizeFirst,
        collapse_punctuation::CollapsePunctuation, collapse_repeats::CollapseRepeats,
        collapse_spaces::CollapseSpaces, fix_spacing::FixSpacing,
        join_hyphen_breaks::JoinHyphenBreaks, normalization::NFKC,
        reflow_paragraphs::ReflowParagraphs, remove_fillers::RemoveFillers,
        rewrite_passive::RewritePassive, sentence_case::SentenceCase,
        simplify_connectors::SimplifyConnectors, simplify_vocabulary::SimplifyVocabulary,
        strip_invisibles::StripInvisibles, strip_markup::StripMarkup,
    },
};

/// Whole-document normalizer: canonical form, invisibles, hyphen joins,
/// paragraph reflow, leading capital.
pub fn clean() -> Profile<impl Process> {
    Profile::builder("clean")
        .add_stage(NFKC)
        .add_stage(StripInvisibles)
        .add_stage(JoinHyphenBreaks)
        .add_stage(ReflowParagraphs::new(paragraph()))
        .add_stage(CapitalizeFirst)
        .build()
}

/// Cleanup applied to one reflowed paragraph (no newlines inside).
///
/// Order matters: spacing is fixed before punctuation runs are collapsed so
/// that `a . .` ends up as `a.` in a single pass.
pub fn paragraph() -> Profile<impl Process> {
    Profile::builder("paragraph")
        .add_stage(StripMarkup)
        .add_stage(CollapseRepeats)
        .add_stage(FixSpacing)
        .add_stage(CollapsePunctuation)
        .add_stage(SentenceCase)
        .add_stage(CollapseSpaces)
        .build()
}

/// Per-sentence stylistic rewrite, passes in their fixed order.
pub fn rewrite() -> Profile<impl Process> {
    Profile::builder("rewrite")
        .add_stage(RemoveFillers)
        .add_stage(SimplifyConnectors)
        .add_stage(ApplyContractions)
        .add_stage(RewritePassive)
        .add_stage(SimplifyVocabulary)
        .build()
}
