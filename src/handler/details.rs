//! Per-sample metric details of one run.

use std::collections::BTreeMap;

/// The per-sample scores of each metric, keyed by the metric name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricDetails {
    inner: BTreeMap<String, Vec<f64>>,
}

impl MetricDetails {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appending the scores to the entry of `name`.
    pub fn append<I: IntoIterator<Item = f64>>(
        &mut self,
        name: &str,
        scores: I,
    ) -> &mut Self {
        self.inner.entry(name.to_owned()).or_default().extend(scores);
        self
    }

    /// Replacing the entry of `name` with the scores.
    #[inline]
    pub fn replace(
        &mut self,
        name: &str,
        scores: Vec<f64>,
    ) -> Option<Vec<f64>> {
        self.inner.insert(name.to_owned(), scores)
    }

    #[inline]
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&[f64]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    #[inline]
    pub fn remove(
        &mut self,
        name: &str,
    ) -> Option<Vec<f64>> {
        self.inner.remove(name)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.inner
            .iter()
            .map(|(name, scores)| (name.as_str(), scores.as_slice()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
