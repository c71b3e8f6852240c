pub use super::*;

/// Computing the mean absolute error (MAE) of each sample:
///
/// `mean(abs(y - y_pred))`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAbsoluteError {
    pub reduction: MetricReduction,
}

#[derive(Config, Copy, Debug, PartialEq)]
pub struct MeanAbsoluteErrorConfig {
    #[config(default = "MetricReduction::Mean")]
    pub reduction: MetricReduction,
}

impl MeanAbsoluteError {
    pub const NAME: &'static str = "mae";

    #[inline]
    pub fn init() -> Self {
        MeanAbsoluteErrorConfig::default().init()
    }
}

impl MeanAbsoluteErrorConfig {
    #[inline]
    pub fn init(&self) -> MeanAbsoluteError {
        MeanAbsoluteError {
            reduction: self.reduction,
        }
    }
}

impl Default for MeanAbsoluteErrorConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> RegressionMetric<B> for MeanAbsoluteError {
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

    #[inline]
    fn compute_per_sample<const D: usize>(
        &self,
        y_pred: Tensor<B, D>,
        y: Tensor<B, D>,
    ) -> Tensor<B, 2> {
        compute_mean_error(y_pred, y, ErrorFunction::Absolute)
    }
}
