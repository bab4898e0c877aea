use crate::error::{PlotError, Result};
use crate::linspace::Linspace;
use crate::min_and_max;
use log::debug;

/// Equal-width binning of a series.
///
/// Bins are half-open `[lo, hi)`, except the last one which is closed so
/// that the maximum of the series is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into `bins` buckets spanning their observed range.
    /// A constant series gets the range widened by half a unit on each side.
    pub fn new(values: &[f64], bins: usize) -> Result<Histogram> {
        if bins == 0 {
            return Err(PlotError::InvalidRange(String::from(
                "the number of bins must be positive",
            )));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(PlotError::InvalidRange(format!(
                "found non-finite value {}",
                v
            )));
        }
        let (min, max) = min_and_max(values)
            .ok_or_else(|| PlotError::InvalidRange(String::from("no values to bin")))?;
        let (min, max) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let edges: Vec<f64> = Linspace::new(min, max, bins as u64).collect();
        let mut histogram = Histogram {
            edges,
            counts: vec![0; bins],
        };
        for &v in values {
            let slot = histogram.find_slot(v);
            histogram.counts[slot] += 1;
        }
        debug!(
            "histogram edges {:?}, counts {:?}",
            histogram.edges, histogram.counts
        );
        Ok(histogram)
    }

    /// (lower edge, upper edge, count) for each bin
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(e, &c)| (e[0], e[1], c))
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    pub fn top(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    // values are within [first edge, last edge] by construction
    // and the edges are not exact multiples of the step, compare against them
    fn find_slot(&self, v: f64) -> usize {
        let last = self.counts.len() - 1;
        self.edges[1..=last]
            .iter()
            .take_while(|&&upper| v >= upper)
            .count()
    }
}
