//! Mean squared error (MSE) metric.

pub use super::*;

/// Computing the mean squared error (MSE) of each sample:
///
/// `mean((y - y_pred) ^ 2)`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanSquaredError {
    pub reduction: MetricReduction,
}

#[derive(Config, Copy, Debug, PartialEq)]
pub struct MeanSquaredErrorConfig {
    #[config(default = "MetricReduction::Mean")]
    pub reduction: MetricReduction,
}

impl MeanSquaredError {
    pub const NAME: &'static str = "mse";

    #[inline]
    pub fn init() -> Self {
        MeanSquaredErrorConfig::default().init()
    }
}

impl MeanSquaredErrorConfig {
    #[inline]
    pub fn init(&self) -> MeanSquaredError {
        MeanSquaredError {
            reduction: self.reduction,
        }
    }
}

impl Default for MeanSquaredErrorConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> RegressionMetric<B> for MeanSquaredError {
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
        compute_mean_error(y_pred, y, ErrorFunction::Square)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn compute() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = MeanSquaredError::init();

        let y_pred = Tensor::<NdArray, 4>::zeros([1, 3, 256, 256], &device);
        let y = Tensor::<NdArray, 4>::zeros([1, 3, 256, 256], &device);
        let score = metric.compute(y_pred, y).unwrap().value_scalar();
        assert_eq!(score, 0.0);

        let y_pred = Tensor::<NdArray, 4>::zeros([1, 3, 256, 256], &device);
        let y = Tensor::<NdArray, 4>::ones([1, 3, 256, 256], &device);
        let score = metric.compute(y_pred, y).unwrap().value_scalar();
        assert_eq!(score, 1.0);

        let y_pred = Tensor::<NdArray, 4>::ones([1, 1, 2, 2], &device);
        let y = Tensor::<NdArray, 4>::full([1, 1, 2, 2], 3.0, &device);
        let score = metric.compute(y_pred, y).unwrap().value_scalar();
        assert_eq!(score, 4.0);
    }

    #[test]
    fn compute_symmetric() {
        use super::*;
        use burn::{backend::NdArray, tensor::Distribution};

        let device = Default::default();
        let metric = MeanSquaredError::init();

        let input_0 = Tensor::<NdArray, 4>::random(
            [2, 3, 8, 8],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let input_1 = Tensor::<NdArray, 4>::random(
            [2, 3, 8, 8],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let score_0 = metric
            .compute(input_0.to_owned(), input_1.to_owned())
            .unwrap()
            .value_scalar();
        let score_1 = metric.compute(input_1, input_0.to_owned()).unwrap().value_scalar();
        assert_eq!(score_0, score_1);

        let score = metric
            .compute(input_0.to_owned(), input_0)
            .unwrap()
            .value_scalar();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn compute_with_reduction_none() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = MeanSquaredErrorConfig::new()
            .with_reduction(MetricReduction::None)
            .init();

        let y_pred = Tensor::<NdArray, 3>::zeros([3, 1, 2], &device);
        let y = Tensor::<NdArray, 3>::from_floats(
            [[[1.0, 1.0]], [[2.0, 0.0]], [[3.0, 3.0]]],
            &device,
        );
        let output = metric.compute(y_pred, y).unwrap();
        assert_eq!(output.value.dims(), [3, 1]);
        let scores = output.value.into_data().iter::<f32>().collect::<Vec<_>>();
        assert_eq!(scores, vec![1.0, 2.0, 9.0]);
        let not_nans = output.not_nans.into_data().iter::<f32>().collect::<Vec<_>>();
        assert_eq!(not_nans, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn default() {
        use super::*;

        let metric = MeanSquaredError::default();
        assert_eq!(metric.reduction, MetricReduction::Mean);
        assert_eq!(metric, MeanSquaredErrorConfig::default().init());
    }

    #[test]
    fn config_round_trip() {
        use super::*;

        let config = MeanSquaredErrorConfig::new()
            .with_reduction(MetricReduction::MeanBatch);
        let text = config.to_string();
        assert!(text.contains("\"mean_batch\""), "text: {text}");

        let output =
            MeanSquaredErrorConfig::load_binary(text.as_bytes()).unwrap();
        assert_eq!(output, config);
        assert_eq!(output.init().reduction, MetricReduction::MeanBatch);

        let output = MeanSquaredErrorConfig::load_binary(b"{}").unwrap();
        assert_eq!(output.reduction, MetricReduction::Mean);

        let output = MeanSquaredErrorConfig::load_binary(
            br#"{"reduction": "channel_mean"}"#,
        );
        assert!(output.is_err());
    }
}
