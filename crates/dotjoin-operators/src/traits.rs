//! Stage trait + common interfaces.
//!
//! A `Stage` maps one upstream element to at most one downstream element.
//! Stages compose with `then` and run either lazily (`lazy`) or eagerly
//! (`pipeline::run_pipeline`).

use dotjoin_core::error::Error as CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("duplicate join key '{key}' in right-hand collection")]
    DuplicateKey { key: String },

    #[error("method '{method}' not found on element {index}")]
    MethodNotFound { method: String, index: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Trait that all pipeline steps implement.
///
/// Invariants:
/// - `step` must be deterministic and must not mutate shared state.
/// - Returning `None` drops the element; it never signals an error.
pub trait Stage<In> {
    type Out;

    /// Human-readable stage name (stable).
    fn name(&self) -> &'static str;

    fn step(&self, input: In) -> Option<Self::Out>;
}

impl<In, S> Stage<In> for &S
where
    S: Stage<In> + ?Sized,
{
    type Out = S::Out;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn step(&self, input: In) -> Option<Self::Out> {
        (**self).step(input)
    }
}

pub trait StageExt<In>: Stage<In> + Sized {
    /// Run `self` first, then feed its output into `next`.
    fn then<S>(self, next: S) -> crate::pipeline::Then<Self, S>
    where
        S: Stage<Self::Out>,
    {
        crate::pipeline::Then::new(self, next)
    }

    /// Apply this stage lazily over `input`.
    fn lazy<I>(self, input: I) -> Staged<I::IntoIter, Self>
    where
        I: IntoIterator<Item = In>,
    {
        Staged {
            input: input.into_iter(),
            stage: self,
        }
    }
}

impl<In, S: Stage<In>> StageExt<In> for S {}

/// Iterator adapter produced by [`StageExt::lazy`].
#[derive(Debug, Clone)]
pub struct Staged<I, S> {
    input: I,
    stage: S,
}

impl<I, S> Iterator for Staged<I, S>
where
    I: Iterator,
    S: Stage<I::Item>,
{
    type Item = S::Out;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.input.by_ref() {
            if let Some(out) = self.stage.step(item) {
                return Some(out);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.input.size_hint().1)
    }
}
