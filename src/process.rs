//! Process abstraction
//! `ChainedProcess` is monomorphised – the compiler knows the concrete type of
//! every stage, so a whole profile compiles down to straight-line calls.
//! Stages run in the order they were added: `previous` first, then `stage`.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;
use tracing::trace;

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        // Fast path: skip if no mutation needed
        if !self.stage.needs_apply(&current, ctx) {
            return current;
        }
        trace!(stage = self.stage.name(), len = current.len(), "applying stage");
        self.stage.apply(current, ctx)
    }
}
