//! Iteration handlers of the regression metrics.

pub use super::*;

/// Accumulating the mean squared error (MSE) of every sample.
pub fn mean_squared_error<B, T, O, const D: usize>(
    output_transform: T,
    device: &B::Device,
    save_details: bool,
) -> IterationMetric<B, MeanSquaredError, T, O, D>
where
    B: Backend,
    T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
{
    IterationMetricConfig::new()
        .with_save_details(save_details)
        .init(MeanSquaredError::init(), output_transform, device)
}

/// Accumulating the mean absolute error (MAE) of every sample.
pub fn mean_absolute_error<B, T, O, const D: usize>(
    output_transform: T,
    device: &B::Device,
    save_details: bool,
) -> IterationMetric<B, MeanAbsoluteError, T, O, D>
where
    B: Backend,
    T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
{
    IterationMetricConfig::new()
        .with_save_details(save_details)
        .init(MeanAbsoluteError::init(), output_transform, device)
}

/// Accumulating the root mean squared error (RMSE) of every sample.
pub fn root_mean_squared_error<B, T, O, const D: usize>(
    output_transform: T,
    device: &B::Device,
    save_details: bool,
) -> IterationMetric<B, RootMeanSquaredError, T, O, D>
where
    B: Backend,
    T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
{
    IterationMetricConfig::new()
        .with_save_details(save_details)
        .init(RootMeanSquaredError::init(), output_transform, device)
}

/// Accumulating the peak signal-to-noise ratio (PSNR) of every sample.
///
/// It fails if `max_val` is not a positive finite number.
pub fn peak_signal_to_noise_ratio<B, T, O, const D: usize>(
    max_val: f64,
    output_transform: T,
    device: &B::Device,
    save_details: bool,
) -> Result<IterationMetric<B, PeakSignalToNoiseRatio, T, O, D>, Error>
where
    B: Backend,
    T: Fn(O) -> (Tensor<B, D>, Tensor<B, D>),
{
    Ok(IterationMetricConfig::new()
        .with_save_details(save_details)
        .init(PeakSignalToNoiseRatio::init(max_val)?, output_transform, device))
}
