//! Regression metrics between the predictions and the targets.
//!
//! The inputs have shape `[N, C, ...]`, where `N` is the batch size,
//! `C` is the channel count and the rest are spatial dimensions.

pub mod mae;
pub mod mse;
pub mod psnr;
pub mod reduction;
pub mod rmse;

pub use crate::error::Error;
pub use burn::{
    config::Config,
    tensor::{backend::Backend, ElementConversion, Tensor},
};
pub use mae::*;
pub use mse::*;
pub use psnr::*;
pub use reduction::*;
pub use rmse::*;

/// A regression metric reduced over each batch.
pub trait RegressionMetric<B: Backend> {
    /// The name used as the key of metric details.
    fn name(&self) -> &'static str;

    /// The reduction applied to the per-sample scores.
    fn reduction(&self) -> MetricReduction;

    /// Replacing the reduction.
    fn with_reduction(
        self,
        reduction: MetricReduction,
    ) -> Self
    where
        Self: Sized;

    /// Computing the score of each sample.
    ///
    /// ## Arguments
    ///
    /// * `y_pred` - The prediction with shape `[N, C, ...]`.
    /// * `y` - The target with the same shape as `y_pred`.
    ///
    /// ## Returns
    ///
    /// The scores with shape `[N, 1]`.
    fn compute_per_sample<const D: usize>(
        &self,
        y_pred: Tensor<B, D>,
        y: Tensor<B, D>,
    ) -> Tensor<B, 2>;

    /// Checking that the inputs have the same shape with at least 2 dimensions.
    fn validate<const D: usize>(
        &self,
        y_pred: &Tensor<B, D>,
        y: &Tensor<B, D>,
    ) -> Result<(), Error> {
        let dims_pred = y_pred.dims();
        let dims = y.dims();

        if dims_pred != dims {
            return Err(Error::ShapeMismatch {
                y_pred: dims_pred.to_vec(),
                y: dims.to_vec(),
            });
        }
        if D < 2 {
            return Err(Error::InsufficientDimensions(D));
        }

        Ok(())
    }

    /// Validating the inputs, computing the per-sample scores
    /// and reducing them by [`reduction`](RegressionMetric::reduction).
    fn compute<const D: usize>(
        &self,
        y_pred: Tensor<B, D>,
        y: Tensor<B, D>,
    ) -> Result<MetricOutput<B>, Error> {
        self.validate(&y_pred, &y)?;

        let scores = self.compute_per_sample(y_pred, y);

        #[cfg(debug_assertions)]
        log::debug!(
            target: "regression_metrics::metric",
            "{}::compute > scores {:?}",
            self.name(),
            scores.dims(),
        );

        Ok(do_metric_reduction(scores, self.reduction()))
    }
}

/// The function applied to each difference `y - y_pred`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorFunction {
    /// `d ^ 2`
    Square,
    /// `|d|`
    Absolute,
}

impl ErrorFunction {
    #[inline]
    pub fn apply<B: Backend, const D: usize>(
        &self,
        difference: Tensor<B, D>,
    ) -> Tensor<B, D> {
        match self {
            Self::Square => difference.powf_scalar(2.0),
            Self::Absolute => difference.abs(),
        }
    }
}

/// Computing the mean error of each sample:
///
/// `mean(f(y - y_pred))` over all dimensions but the first one.
///
/// ## Arguments
///
/// * `y_pred` - The prediction with shape `[N, ...]` where `D >= 2`.
/// * `y` - The target with the same shape as `y_pred`.
///
/// ## Returns
///
/// The mean errors with shape `[N, 1]`.
pub fn compute_mean_error<B: Backend, const D: usize>(
    y_pred: Tensor<B, D>,
    y: Tensor<B, D>,
    function: ErrorFunction,
) -> Tensor<B, 2> {
    function
        .apply(y.sub(y_pred))
        .flatten::<2>(1, D - 1)
        .mean_dim(1)
}
