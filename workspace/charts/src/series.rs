use serde::{Deserialize, Serialize};

/// An ordered sequence of values in their original units.
///
/// Non-finite values are kept as given so validation can report them, but
/// every accessor used by the renderers reads them as `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<f64>);

/// Bounds of a series with a range that is safe to divide by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
    /// `max - min`, or `1.0` when that would be zero. Saturates at
    /// `f64::MAX` when the difference overflows.
    pub range: f64,
}

impl Extent {
    /// Position of `value` between `min` (0.0) and `max` (1.0); always 0.0
    /// for a flat series.
    ///
    /// Works on halved values so that bounds far apart, like `-1e308` and
    /// `1e308`, do not overflow to infinity.
    pub fn fraction(&self, value: f64) -> f64 {
        let half_span = self.max / 2.0 - self.min / 2.0;
        if half_span == 0.0 {
            return 0.0;
        }
        (value / 2.0 - self.min / 2.0) / half_span
    }
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Raw values, exactly as supplied.
    pub fn raw(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index` with non-finite entries read as zero.
    pub fn value(&self, index: usize) -> f64 {
        self.0.get(index).copied().map(sanitize).unwrap_or(0.0)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().map(sanitize)
    }

    pub fn has_non_finite(&self) -> bool {
        self.0.iter().any(|v| !v.is_finite())
    }

    pub fn min(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Sum of the weights with negative entries counted as zero.
    pub fn weight_total(&self) -> f64 {
        self.values().map(|v| v.max(0.0)).sum()
    }

    /// Each weight's part of the whole, negative weights counted as zero.
    /// The parts add up to 1. Empty when no weight is positive.
    ///
    /// Weights are divided by the largest one before they are summed, so the
    /// total stays finite for any finite input.
    pub fn weight_shares(&self) -> Vec<f64> {
        let largest = self.values().fold(0.0, f64::max);
        if largest <= 0.0 {
            return Vec::new();
        }
        let scaled: Vec<f64> = self.values().map(|v| v.max(0.0) / largest).collect();
        let total: f64 = scaled.iter().sum();
        scaled.into_iter().map(|w| w / total).collect()
    }

    pub fn extent(&self) -> Option<Extent> {
        let min = self.min()?;
        let max = self.max()?;
        let span = max - min;
        let range = if span == 0.0 {
            1.0
        } else if span.is_infinite() {
            f64::MAX
        } else {
            span
        };
        Some(Extent { min, max, range })
    }

    pub fn is_flat(&self) -> bool {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => min == max,
            _ => false,
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_substitutes_unit_range_for_flat_series() {
        let series = Series::from([5.0, 5.0, 5.0]);
        let extent = series.extent().unwrap();
        assert_eq!(extent.min, 5.0);
        assert_eq!(extent.max, 5.0);
        assert_eq!(extent.range, 1.0);
        assert!(series.is_flat());
    }

    #[test]
    fn test_extent_of_market_signals() {
        let series = Series::from([30.0, 45.0, 35.0, 55.0, 48.0, 62.0, 58.0, 75.0, 68.0, 82.0, 78.0, 85.0]);
        let extent = series.extent().unwrap();
        assert_eq!(extent.min, 30.0);
        assert_eq!(extent.max, 85.0);
        assert_eq!(extent.range, 55.0);
    }

    #[test]
    fn test_empty_series_has_no_extent() {
        let series = Series::default();
        assert!(series.extent().is_none());
        assert!(!series.is_flat());
        assert_eq!(series.sum(), 0.0);
    }

    #[test]
    fn test_non_finite_values_read_as_zero() {
        let series = Series::from([f64::NAN, 4.0, f64::INFINITY]);
        assert!(series.has_non_finite());
        assert_eq!(series.values().collect::<Vec<_>>(), vec![0.0, 4.0, 0.0]);
        assert_eq!(series.max(), Some(4.0));
        assert_eq!(series.raw().len(), 3);
    }

    #[test]
    fn test_weight_total_ignores_negative_weights() {
        let series = Series::from([10.0, -4.0, 6.0]);
        assert_eq!(series.sum(), 12.0);
        assert_eq!(series.weight_total(), 16.0);
    }

    #[test]
    fn test_weight_shares() {
        let shares = Series::from([10.0, -4.0, 6.0]).weight_shares();
        assert_eq!(shares.len(), 3);
        assert!((shares[0] - 0.625).abs() < 1e-12);
        assert_eq!(shares[1], 0.0);
        assert!((shares[2] - 0.375).abs() < 1e-12);

        assert!(Series::from([0.0, -1.0]).weight_shares().is_empty());
        assert!(Series::default().weight_shares().is_empty());
    }

    #[test]
    fn test_weight_shares_of_huge_values_stay_finite() {
        let shares = Series::from([1e308, 1e308, 5e307]).weight_shares();
        assert!(shares.iter().all(|s| s.is_finite()));
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((shares[0] - 0.4).abs() < 1e-12);
        assert!((shares[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_extent_of_far_apart_bounds() {
        let extent = Series::from([-1e308, 0.0, 1e308]).extent().unwrap();
        assert_eq!(extent.range, f64::MAX);
        assert_eq!(extent.fraction(-1e308), 0.0);
        assert_eq!(extent.fraction(0.0), 0.5);
        assert_eq!(extent.fraction(1e308), 1.0);
    }

    #[test]
    fn test_fraction_of_flat_series_is_zero() {
        let extent = Series::from([5.0, 5.0]).extent().unwrap();
        assert_eq!(extent.fraction(5.0), 0.0);
    }

    #[test]
    fn test_deserializes_from_plain_array() {
        let series: Series = serde_json::from_str("[1.8, 2.0, 1.9, 2.4]").unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series.value(3), 2.4);
        assert_eq!(series.value(10), 0.0);
    }
}
