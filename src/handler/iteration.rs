pub use super::*;

use std::{fmt, marker::PhantomData};

/// A regression metric accumulated over the iterations of a run.
///
/// ## Details
///
/// * The metric is forced to [`MetricReduction::None`],
///   so each update accumulates scores with shape `[N, 1]`.
/// * The summary is the mean of all the accumulated non-NaN scores.
pub struct IterationMetric<B: Backend, M, T, O, const D: usize> {
    /// The device where the scores are accumulated.
    pub device: B::Device,
    metric: M,
    name: String,
    /// Mapping an iteration output into `(y_pred, y)`.
    pub output_transform: T,
    pub save_details: bool,
    scores: Vec<Tensor<B, 2>>,
    _output: PhantomData<fn(O)>,
}

#[derive(Config, Debug, PartialEq)]
pub struct IterationMetricConfig {
    /// Defaults to the metric name.
    pub name: Option<String>,

    /// Whether to save the score of every sample into the metric details.
    #[config(default = "true")]
    pub save_details: bool,
}

impl IterationMetricConfig {
    pub fn init<B, M, T, O, const D: usize>(
        &self,
        metric: M,
        output_transform: T,
        device: &B::Device,
    ) -> IterationMetric<B, M, T, O, D>
    where
        B: Backend,
        M: RegressionMetric<B>,
        T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
    {
        let metric = metric.with_reduction(MetricReduction::None);
        let name = self
            .name
            .to_owned()
            .unwrap_or_else(|| metric.name().to_owned());

        IterationMetric {
            device: device.to_owned(),
            metric,
            name,
            output_transform,
            save_details: self.save_details,
            scores: Vec::new(),
            _output: PhantomData,
        }
    }
}

impl Default for IterationMetricConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend, M, T, O, const D: usize> IterationMetric<B, M, T, O, D> {
    /// The accumulated scores with shape `[n, 1]`.
    ///
    /// It is `None` if nothing has been accumulated.
    pub fn scores(&self) -> Option<Tensor<B, 2>> {
        (!self.scores.is_empty())
            .then(|| Tensor::cat(self.scores.to_owned(), 0))
    }

    /// The metric with [`MetricReduction::None`].
    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// The count of accumulated iterations.
    #[inline]
    pub fn count(&self) -> usize {
        self.scores.len()
    }
}

impl<B, M, T, O, const D: usize> IterationHandler<O>
    for IterationMetric<B, M, T, O, D>
where
    B: Backend,
    M: RegressionMetric<B>,
    T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(
        &mut self,
        details: &mut MetricDetails,
    ) {
        self.scores.clear();
        details.remove(&self.name);
    }

    fn update(
        &mut self,
        output: O,
        details: &mut MetricDetails,
    ) -> Result<(), Error> {
        let (y_pred, y) = (self.output_transform)(output);
        let scores = self
            .metric
            .compute(y_pred, y)?
            .value
            .to_device(&self.device);

        #[cfg(debug_assertions)]
        log::debug!(
            target: "regression_metrics::handler",
            "IterationMetric::update > {} {:?}",
            self.name,
            scores.dims(),
        );

        if self.save_details {
            let data = scores.to_owned().into_data();
            details.append(&self.name, data.iter::<f64>());
        }
        self.scores.push(scores);

        Ok(())
    }

    fn compute(
        &self,
        details: &mut MetricDetails,
    ) -> Result<f64, Error> {
        let scores = self
            .scores()
            .ok_or_else(|| Error::EmptyAccumulator(self.name.to_owned()))?;

        if self.save_details {
            details.replace(
                &self.name,
                scores.to_owned().into_data().iter::<f64>().collect(),
            );
        }

        let summary = do_metric_reduction(scores, MetricReduction::Mean);

        log::debug!(
            target: "regression_metrics::handler",
            "IterationMetric::compute > {}: {} over {} scores",
            self.name,
            summary.value_scalar(),
            summary.not_nans_scalar(),
        );

        Ok(summary.value_scalar())
    }
}

impl<B: Backend, M: fmt::Debug, T, O, const D: usize> fmt::Debug
    for IterationMetric<B, M, T, O, D>
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("IterationMetric")
            .field("device", &self.device)
            .field("metric", &self.metric)
            .field("name", &self.name)
            .field("save_details", &self.save_details)
            .field("count", &self.count())
            .finish()
    }
}

/// The output transform passing `(y_pred, y)` through.
#[inline]
pub fn identity<B: Backend, const D: usize>(
    output: (Tensor<B, D>, Tensor<B, D>)
) -> (Tensor<B, D>, Tensor<B, D>) {
    output
}
