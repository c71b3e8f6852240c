//! Peak signal-to-noise ratio (PSNR) metric.

pub use super::*;

use burn::tensor::cast::ToElement;
use std::f64::consts::LN_10;

const TARGET: &str = "regression_metrics::metric";

/// Computing the peak signal-to-noise ratio (PSNR) of each sample:
///
/// `20 * log10(max_val) - 10 * log10(MSE)`
///
/// ## Details
///
/// * It relies on [`MSE`](MeanSquaredError).
/// * A sample with zero MSE scores `+inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakSignalToNoiseRatio {
    /// The dynamic range of the inputs, e.g. `255.0` for 8-bit images.
    pub max_val: f64,
    pub reduction: MetricReduction,
}

#[derive(Config, Copy, Debug, PartialEq)]
pub struct PeakSignalToNoiseRatioConfig {
    pub max_val: f64,

    #[config(default = "MetricReduction::Mean")]
    pub reduction: MetricReduction,
}

impl PeakSignalToNoiseRatio {
    pub const NAME: &'static str = "psnr";

    #[inline]
    pub fn init(max_val: f64) -> Result<Self, Error> {
        PeakSignalToNoiseRatioConfig::new(max_val).init()
    }
}

impl PeakSignalToNoiseRatioConfig {
    /// Initialize the metric.
    ///
    /// It fails if `max_val` is not a positive finite number.
    pub fn init(&self) -> Result<PeakSignalToNoiseRatio, Error> {
        if !(self.max_val.is_finite() && self.max_val > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "PSNR max_val should be positive and finite, not {}",
                self.max_val
            )));
        }

        Ok(PeakSignalToNoiseRatio {
            max_val: self.max_val,
            reduction: self.reduction,
        })
    }
}

impl<B: Backend> RegressionMetric<B> for PeakSignalToNoiseRatio {
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
        Self { reduction, ..self }
    }

    fn compute_per_sample<const D: usize>(
        &self,
        y_pred: Tensor<B, D>,
        y: Tensor<B, D>,
    ) -> Tensor<B, 2> {
        let mse = compute_mean_error(y_pred, y, ErrorFunction::Square);

        if log::log_enabled!(target: TARGET, log::Level::Warn)
            && mse.to_owned().equal_elem(0.0).any().into_scalar().to_bool()
        {
            log::warn!(
                target: TARGET,
                "PeakSignalToNoiseRatio::compute_per_sample > zero MSE: +inf",
            );
        }

        // 10 * log10(MSE) = 10 / ln(10) * ln(MSE)
        mse.log()
            .mul_scalar(-10.0 / LN_10)
            .add_scalar(20.0 * self.max_val.log10())
    }
}
