//! Per-iteration metric handlers for an evaluation loop.

pub mod details;
pub mod evaluator;
pub mod iteration;
pub mod regression;

pub use crate::{error::Error, metric::*};
pub use details::*;
pub use evaluator::*;
pub use iteration::*;
pub use regression::*;

/// A stateful metric driven once per iteration.
///
/// ## Lifecycle
///
/// 1. [`reset`](IterationHandler::reset) at the start of a run.
/// 2. [`update`](IterationHandler::update) with each iteration output.
/// 3. [`compute`](IterationHandler::compute) at the end of the run.
pub trait IterationHandler<O> {
    /// The name used as the key of the summary and the details.
    fn name(&self) -> &str;

    /// Clearing the accumulated state and the details of the handler.
    fn reset(
        &mut self,
        details: &mut MetricDetails,
    );

    /// Accumulating the scores of the iteration output.
    fn update(
        &mut self,
        output: O,
        details: &mut MetricDetails,
    ) -> Result<(), Error>;

    /// Summarizing the accumulated scores into a number.
    fn compute(
        &self,
        details: &mut MetricDetails,
    ) -> Result<f64, Error>;
}
