//! Batch reduction of per-sample metric scores.

pub use super::*;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The policy to reduce the scores of one batch.
///
/// The scores have shape `[N, C]`, where `N` is the batch size and `C` is the
/// channel count (`1` for the regression metrics).
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricReduction {
    /// Keep the scores as-is.
    None,
    /// Mean over channels, then over samples.
    #[default]
    Mean,
    /// Sum over samples and channels.
    Sum,
    /// Mean over samples.
    MeanBatch,
    /// Sum over samples.
    SumBatch,
    /// Mean over channels.
    MeanChannel,
    /// Sum over channels.
    SumChannel,
}

/// The reduced scores and the count of the non-NaN scores behind them.
///
/// Both tensors keep the reduced dimensions with size `1`:
///
/// | Reduction | Shape |
/// | --- | --- |
/// | `none` | `[N, C]` |
/// | `mean`, `sum` | `[1, 1]` |
/// | `mean_batch`, `sum_batch` | `[1, C]` |
/// | `mean_channel`, `sum_channel` | `[N, 1]` |
#[derive(Clone, Debug)]
pub struct MetricOutput<B: Backend> {
    /// The reduced value.
    pub value: Tensor<B, 2>,
    /// The count of non-NaN scores contributing to each value.
    pub not_nans: Tensor<B, 2>,
}

impl MetricReduction {
    /// All the reductions.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Mean,
        Self::Sum,
        Self::MeanBatch,
        Self::SumBatch,
        Self::MeanChannel,
        Self::SumChannel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::MeanBatch => "mean_batch",
            Self::SumBatch => "sum_batch",
            Self::MeanChannel => "mean_channel",
            Self::SumChannel => "sum_channel",
        }
    }
}

impl fmt::Display for MetricReduction {
    #[inline]
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricReduction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reduction| reduction.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "Unknown metric reduction: {s:?}"
                ))
            })
    }
}

impl<B: Backend> MetricOutput<B> {
    /// The value as a scalar.
    ///
    /// It panics if the value has more than one element.
    #[inline]
    pub fn value_scalar(&self) -> f64 {
        self.value.to_owned().into_scalar().elem()
    }

    /// The count of non-NaN scores as a scalar.
    ///
    /// It panics if the count has more than one element.
    #[inline]
    pub fn not_nans_scalar(&self) -> f64 {
        self.not_nans.to_owned().into_scalar().elem()
    }
}

/// Reducing the scores with shape `[N, C]` by `reduction`.
///
/// ## Details
///
/// * NaN scores are excluded from the sums and counted out of `not_nans`.
/// * A mean over zero non-NaN scores is `0.0`.
/// * `mean` averages the channels of each sample first,
///   then averages the samples having at least one non-NaN channel.
pub fn do_metric_reduction<B: Backend>(
    scores: Tensor<B, 2>,
    reduction: MetricReduction,
) -> MetricOutput<B> {
    let nans = scores.to_owned().is_nan();
    let not_nans = nans.to_owned().bool_not().float();

    // NaN scores are excluded from every reduction but `none`
    let masked = |scores: Tensor<B, 2>| scores.mask_fill(nans, 0.0);

    let (value, not_nans) = match reduction {
        MetricReduction::None => (scores, not_nans),
        MetricReduction::Mean => {
            // [N, 1]
            let not_nans = not_nans.sum_dim(1);
            let value =
                mean_of_sums(masked(scores).sum_dim(1), not_nans.to_owned());
            // [1, 1]
            let not_nans = not_nans.greater_elem(0.0).float().sum_dim(0);
            let value = mean_of_sums(value.sum_dim(0), not_nans.to_owned());
            (value, not_nans)
        },
        MetricReduction::Sum => (
            masked(scores).sum_dim(0).sum_dim(1),
            not_nans.sum_dim(0).sum_dim(1),
        ),
        MetricReduction::MeanBatch => {
            let not_nans = not_nans.sum_dim(0);
            let value =
                mean_of_sums(masked(scores).sum_dim(0), not_nans.to_owned());
            (value, not_nans)
        },
        MetricReduction::SumBatch => {
            (masked(scores).sum_dim(0), not_nans.sum_dim(0))
        },
        MetricReduction::MeanChannel => {
            let not_nans = not_nans.sum_dim(1);
            let value =
                mean_of_sums(masked(scores).sum_dim(1), not_nans.to_owned());
            (value, not_nans)
        },
        MetricReduction::SumChannel => {
            (masked(scores).sum_dim(1), not_nans.sum_dim(1))
        },
    };

    MetricOutput { value, not_nans }
}

/// `sums / counts`, or `0.0` where `counts` is zero.
fn mean_of_sums<B: Backend>(
    sums: Tensor<B, 2>,
    counts: Tensor<B, 2>,
) -> Tensor<B, 2> {
    let empty = counts.to_owned().equal_elem(0.0);
    sums.div(counts).mask_fill(empty, 0.0)
}
