//! Root mean squared error (RMSE) metric.

pub use super::*;

/// Computing the root mean squared error (RMSE) of each sample:
///
/// `sqrt(mean((y - y_pred) ^ 2))`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMeanSquaredError {
    pub reduction: MetricReduction,
}

#[derive(Config, Copy, Debug, PartialEq)]
pub struct RootMeanSquaredErrorConfig {
    #[config(default = "MetricReduction::Mean")]
    pub reduction: MetricReduction,
}

impl RootMeanSquaredError {
    pub const NAME: &'static str = "rmse";

    #[inline]
    pub fn init() -> Self {
        RootMeanSquaredErrorConfig::default().init()
    }
}

impl RootMeanSquaredErrorConfig {
    #[inline]
    pub fn init(&self) -> RootMeanSquaredError {
        RootMeanSquaredError {
            reduction: self.reduction,
        }
    }
}

impl Default for RootMeanSquaredErrorConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> RegressionMetric<B> for RootMeanSquaredError {
    #[inline]
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn reduction(&self) -> MetricReduction {
        self.reduction
    }

    #[inline]
    fn with_reduction(
        self,
        reduction: MetricReduction,
    ) -> Self {
        Self { reduction }
    }

    /// NaN inputs yield NaN scores.
    #[inline]
    fn compute_per_sample<const D: usize>(
        &self,
        y_pred: Tensor<B, D>,
        y: Tensor<B, D>,
    ) -> Tensor<B, 2> {
        compute_mean_error(y_pred, y, ErrorFunction::Square).sqrt()
    }
}
