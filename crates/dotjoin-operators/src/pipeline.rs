//! Stage combinators and the eager pipeline runner.
//!
//! `pipeline![a, b, c]` composes left to right: `a` sees each input first.
//! With no stages it is [`Identity`].

use crate::traits::{Stage, StageExt};

/// Passes every element through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> Stage<T> for Identity {
    type Out = T;

    fn name(&self) -> &'static str {
        "identity"
    }

    fn step(&self, input: T) -> Option<T> {
        Some(input)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapStage<F> {
    f: F,
}

/// Transform every element with `f`.
pub fn map<F>(f: F) -> MapStage<F> {
    MapStage { f }
}

impl<In, Out, F> Stage<In> for MapStage<F>
where
    F: Fn(In) -> Out,
{
    type Out = Out;

    fn name(&self) -> &'static str {
        "map"
    }

    fn step(&self, input: In) -> Option<Out> {
        Some((self.f)(input))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterStage<P> {
    predicate: P,
}

/// Keep only the elements `predicate` accepts.
pub fn filter<P>(predicate: P) -> FilterStage<P> {
    FilterStage { predicate }
}

impl<T, P> Stage<T> for FilterStage<P>
where
    P: Fn(&T) -> bool,
{
    type Out = T;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn step(&self, input: T) -> Option<T> {
        (self.predicate)(&input).then_some(input)
    }
}

/// `first`, then `second`.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<In, A, B> Stage<In> for Then<A, B>
where
    A: Stage<In>,
    B: Stage<A::Out>,
{
    type Out = B::Out;

    fn name(&self) -> &'static str {
        "then"
    }

    fn step(&self, input: In) -> Option<Self::Out> {
        self.first
            .step(input)
            .and_then(|mid| self.second.step(mid))
    }
}

/// Compose stages left to right into a single stage.
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::pipeline::Identity
    };
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipeline::Then::new($first, $crate::pipeline!($($rest),+))
    };
}

/// Apply `stage` to every element of `input`, collecting the survivors.
pub fn run_pipeline<In, S, I>(stage: S, input: I) -> Vec<S::Out>
where
    S: Stage<In>,
    I: IntoIterator<Item = In>,
{
    stage.lazy(input).collect()
}

/// [`run_pipeline`] where a missing collection counts as empty.
pub fn run_pipeline_opt<In, S, I>(stage: S, input: Option<I>) -> Vec<S::Out>
where
    S: Stage<In>,
    I: IntoIterator<Item = In>,
{
    run_pipeline(stage, input.into_iter().flatten())
}
