pub mod preset;
use crate::{
    context::Context,
    process::{ChainedProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::borrow::Cow;

/// A named, statically composed sequence of stages.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        self.pipeline.process(text, ctx)
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}
