use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " plain text ", "TEST", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: short lowercase ASCII that no stage has reason to touch.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Rewrite passes that can expose a new match by deleting text
    /// (e.g. filler removal) opt out of the idempotence contract.
    fn skip_idempotence_test() -> bool {
        false
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → pass-through samples come back borrowed and unchanged
/// 2. `stage_is_idempotent` → applying twice yields same result as once (opt-out)
/// 3. `needs_apply_is_sound` → `needs_apply == false` implies `apply` is a no-op
/// 4. `handles_empty_string` → empty in, empty out
/// 5. `no_panic_on_mixed_scripts` → survives non-Latin input
/// 6. `expected_transforms` → the stage's own input/output pairs hold
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
        $crate::testing::stage_contract::expected_transforms(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::context::Context;
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx) {
        stage.apply(text, ctx)
    } else {
        text
    }
}

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &input in S::should_pass_through() {
        let text = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(
            text.as_ref(),
            input,
            "stage `{}` altered pass-through sample",
            stage.name()
        );
        assert!(
            matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated by stage `{}` on pass-through sample `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if S::skip_idempotence_test() {
        return;
    }
    let ctx = Context::default();
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input));
    for input in inputs {
        let once = run(stage, Cow::Borrowed(input), &ctx).into_owned();
        let twice = run(stage, Cow::Borrowed(once.as_str()), &ctx).into_owned();
        assert_eq!(
            once,
            twice,
            "stage `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input));
    for input in inputs {
        if stage.needs_apply(input, &ctx) {
            continue;
        }
        // Owned input so that stages which always allocate are not penalised.
        let output = stage.apply(Cow::Owned(input.to_owned()), &ctx);
        assert_eq!(
            output.as_ref(),
            input,
            "stage `{}` claimed no work on `{input}` but apply() changed it",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let result = stage.apply(Cow::Borrowed(""), &ctx);
    assert_eq!(result.as_ref(), "", "stage `{}` invented text", stage.name());
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文. ok? Ünïcödé—stuff"),
        &ctx,
    );
}

#[cfg(test)]
pub fn expected_transforms<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &(input, expected) in S::should_transform() {
        let text = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(
            text.as_ref(),
            expected,
            "stage `{}` produced the wrong output for `{input}`",
            stage.name()
        );
    }
}
