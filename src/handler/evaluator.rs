//! The evaluation loop driving the iteration handlers.

pub use super::*;

use std::{collections::BTreeMap, fmt};

/// The state of one evaluation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationState {
    /// The count of processed iterations.
    pub iteration: u64,
    /// The summary of each handler, keyed by the handler name.
    pub metrics: BTreeMap<String, f64>,
    pub metric_details: MetricDetails,
}

/// Running the iteration handlers over the outputs of an evaluation.
pub struct Evaluator<O> {
    handlers: Vec<Box<dyn IterationHandler<O>>>,
}

impl<O: Clone> Evaluator<O> {
    #[inline]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Attaching a handler.
    ///
    /// It fails if another handler has the same name.
    pub fn attach<H: IterationHandler<O> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<&mut Self, Error> {
        if self.handlers.iter().any(|h| h.name() == handler.name()) {
            return Err(Error::InvalidConfiguration(format!(
                "Duplicate handler name: {:?}",
                handler.name()
            )));
        }

        self.handlers.push(Box::new(handler));
        Ok(self)
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.iter().map(|handler| handler.name())
    }

    /// Running the handlers over the outputs.
    ///
    /// ## Details
    ///
    /// * Every handler is reset before the first output.
    /// * Each output is cloned for every handler.
    /// * The summaries are computed after the last output.
    pub fn run<I: IntoIterator<Item = O>>(
        &mut self,
        outputs: I,
    ) -> Result<EvaluationState, Error> {
        let mut state = EvaluationState::default();

        self.handlers
            .iter_mut()
            .for_each(|handler| handler.reset(&mut state.metric_details));

        for output in outputs {
            for handler in self.handlers.iter_mut() {
                handler.update(output.to_owned(), &mut state.metric_details)?;
            }
            state.iteration += 1;

            #[cfg(debug_assertions)]
            log::debug!(
                target: "regression_metrics::handler",
                "Evaluator::run > iteration {}",
                state.iteration,
            );
        }

        for handler in self.handlers.iter() {
            let summary = handler.compute(&mut state.metric_details)?;
            state.metrics.insert(handler.name().to_owned(), summary);
        }

        log::info!(
            target: "regression_metrics::handler",
            "Evaluator::run > {} iterations: {:?}",
            state.iteration,
            state.metrics,
        );

        Ok(state)
    }
}

impl<O: Clone> Default for Evaluator<O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O> fmt::Debug for Evaluator<O> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field(
                "handlers",
                &self
                    .handlers
                    .iter()
                    .map(|handler| handler.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type Output = (Tensor<NdArray, 2>, Tensor<NdArray, 2>);

    #[test]
    fn run() {
        let device = Default::default();
        let mut evaluator = Evaluator::<Output>::new();
        evaluator
            .attach(mean_squared_error(identity::<NdArray, 2>, &device, true))
            .unwrap()
            .attach(mean_absolute_error(identity::<NdArray, 2>, &device, false))
            .unwrap();

        let outputs = [
            (
                Tensor::from_floats([[0.0, 0.0], [1.0, 1.0]], &device),
                Tensor::from_floats([[2.0, 2.0], [1.0, 1.0]], &device),
            ),
            (
                Tensor::from_floats([[0.0, 0.0]], &device),
                Tensor::from_floats([[1.0, -1.0]], &device),
            ),
        ];
        let state = evaluator.run(outputs).unwrap();

        assert_eq!(state.iteration, 2);
        let summary = state.metrics.get("mse").copied().unwrap_or_default();
        assert!((summary - 5.0 / 3.0).abs() < 1e-6, "summary: {summary:?}");
        assert_eq!(state.metrics.get("mae"), Some(&1.0));
        assert_eq!(
            state.metric_details.get("mse"),
            Some([4.0, 0.0, 1.0].as_slice())
        );
        assert_eq!(state.metric_details.get("mae"), None);
    }

    #[test]
    fn run_twice() {
        let device = Default::default();
        let mut evaluator = Evaluator::<Output>::new();
        evaluator
            .attach(root_mean_squared_error(identity::<NdArray, 2>, &device, true))
            .unwrap();

        let output = || {
            (
                Tensor::from_floats([[0.0, 0.0]], &device),
                Tensor::from_floats([[3.0, 3.0]], &device),
            )
        };
        evaluator.run([output(), output()]).unwrap();
        let state = evaluator.run([output()]).unwrap();

        assert_eq!(state.metrics.get("rmse"), Some(&3.0));
        assert_eq!(state.metric_details.get("rmse"), Some([3.0].as_slice()));
    }

    #[test]
    fn run_without_outputs() {
        let device = Default::default();
        let mut evaluator = Evaluator::<Output>::new();
        evaluator
            .attach(mean_squared_error(identity::<NdArray, 2>, &device, true))
            .unwrap();

        let output = evaluator.run(Vec::new());
        assert!(
            matches!(output, Err(Error::EmptyAccumulator(_))),
            "{output:?}"
        );
    }

    #[test]
    fn attach_duplicate_name() {
        let device = Default::default();
        let mut evaluator = Evaluator::<Output>::new();
        evaluator
            .attach(mean_squared_error(identity::<NdArray, 2>, &device, true))
            .unwrap();

        let output = evaluator
            .attach(mean_squared_error(identity::<NdArray, 2>, &device, false))
            .map(|evaluator| evaluator.names().count());
        assert!(
            matches!(output, Err(Error::InvalidConfiguration(_))),
            "{output:?}"
        );
        assert_eq!(evaluator.names().collect::<Vec<_>>(), vec!["mse"]);
    }
}
