use crate::error::{ExpDistError, Result};
use crate::layout::FloatLayout;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Empty unit bins added on each side of the observed exponent range.
pub const USED_RANGE_PADDING: i32 = 1;

/// Presentation metadata handed to whatever draws the histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_limits: Option<(f64, f64)>,
}

/// Bin edges with one count per bin.
///
/// Bins are half-open `[edges[i], edges[i + 1])` apart from the last one,
/// which also holds values equal to the final edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    edges: Vec<f64>,
    counts: Vec<u64>,
    labels: Labels,
}

impl HistogramSpec {
    /// Bins `values` against `edges`, which must be strictly increasing and
    /// hold at least two entries. Values outside the edges are not counted.
    pub fn from_edges(edges: Vec<f64>, values: &[i32]) -> Self {
        debug_assert!(edges.len() >= 2);
        debug_assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));

        let mut counts = vec![0_u64; edges.len() - 1];
        for &value in values {
            if let Some(index) = bin_index(&edges, value as f64) {
                counts[index] += 1;
            }
        }
        HistogramSpec {
            edges,
            counts,
            labels: Labels::default(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(lower edge, upper edge, count)` for every bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .iter()
            .tuple_windows()
            .zip(self.counts.iter())
            .map(|((&lo, &hi), &count)| (lo, hi, count))
    }
}

fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    let (&first, &last) = (edges.first()?, edges.last()?);
    if value < first || value > last {
        None
    } else if value == last {
        Some(edges.len() - 2)
    } else {
        Some(edges.partition_point(|&edge| edge <= value) - 1)
    }
}

/// Unit-width edges from `min - padding` to `max + padding` inclusive,
/// always at least one bin wide.
pub fn used_range_edges(min: i32, max: i32, padding: i32) -> Vec<f64> {
    let lower = min - padding;
    let upper = (max + padding).max(lower + 1);
    (lower..=upper).map(f64::from).collect()
}

/// Edges centred on every exponent a normal value of `layout` can hold.
pub fn full_range_edges(layout: FloatLayout) -> Vec<f64> {
    (layout.min_normal_exponent()..=layout.max_normal_exponent() + 1)
        .map(|exp| exp as f64 - 0.5)
        .collect()
}

pub fn used_range_histogram(unbiased: &[i32], padding: i32) -> Result<HistogramSpec> {
    let (min, max) = unbiased
        .iter()
        .copied()
        .minmax()
        .into_option()
        .ok_or(ExpDistError::NoNormalValues)?;
    Ok(HistogramSpec::from_edges(
        used_range_edges(min, max, padding),
        unbiased,
    ))
}

pub fn full_range_histogram(unbiased: &[i32], layout: FloatLayout) -> HistogramSpec {
    HistogramSpec::from_edges(full_range_edges(layout), unbiased)
}

/// Builds the used-range and full-range histograms of `unbiased`.
pub fn build_histograms(
    unbiased: &[i32],
    layout: FloatLayout,
) -> Result<(HistogramSpec, HistogramSpec)> {
    let used = used_range_histogram(unbiased, USED_RANGE_PADDING)?;
    let full = full_range_histogram(unbiased, layout);
    Ok((used, full))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FloatFormat;
    use approx::assert_relative_eq;

    #[test]
    fn used_range_is_padded_by_one() {
        let used = used_range_histogram(&[2, 0, 2, 3], USED_RANGE_PADDING).unwrap();
        assert_eq!(used.edges(), &[-1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(used.counts(), &[0, 1, 0, 2, 1]);
        assert_eq!(used.total(), 4);
    }

    #[test]
    fn used_range_without_padding_closes_last_bin() {
        let used = used_range_histogram(&[5, 6, 6], 0).unwrap();
        assert_eq!(used.edges(), &[5.0, 6.0]);
        assert_eq!(used.counts(), &[3]);
    }

    #[test]
    fn single_value_used_range() {
        let used = used_range_histogram(&[-7], USED_RANGE_PADDING).unwrap();
        assert_eq!(used.edges(), &[-8.0, -7.0, -6.0]);
        assert_eq!(used.counts(), &[0, 1]);

        let unpadded = used_range_histogram(&[-7, -7], 0).unwrap();
        assert_eq!(unpadded.edges(), &[-7.0, -6.0]);
        assert_eq!(unpadded.counts(), &[2]);
    }

    #[test]
    fn used_range_of_nothing_fails() {
        assert!(matches!(
            used_range_histogram(&[], USED_RANGE_PADDING),
            Err(ExpDistError::NoNormalValues)
        ));
    }

    #[test]
    fn full_range_float32_has_254_bins() {
        let edges = full_range_edges(FloatFormat::Float32.layout());
        assert_eq!(edges.len() - 1, 254);
        assert_relative_eq!(edges[0], -126.5);
        assert_relative_eq!(*edges.last().unwrap(), 127.5);
    }

    #[test]
    fn full_range_bins_are_centred_on_exponents() {
        let layout = FloatFormat::Float16.layout();
        let full = full_range_histogram(&[-14, 0, 0, 15], layout);
        assert_eq!(full.counts().len(), 30);
        assert_eq!(full.counts()[0], 1);
        assert_eq!(full.counts()[14], 2);
        assert_eq!(full.counts()[29], 1);
        assert_eq!(full.total(), 4);
    }

    #[test]
    fn bins_iterate_edges_pairwise() {
        let used = used_range_histogram(&[1], USED_RANGE_PADDING).unwrap();
        let bins = used.bins().collect_vec();
        assert_eq!(bins, vec![(0.0, 1.0, 0), (1.0, 2.0, 1)]);
    }
}
