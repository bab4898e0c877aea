pub mod cli;
pub mod config;
pub mod error;
pub mod histogram;
pub mod linspace;
pub mod plot;

pub use config::OutputConfig;
pub use error::{PlotError, Result};
pub use plot::{generate_plots, PlotKind};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DEFAULT_OUTPUT_DIR: &str = "/output";

/// 10 x 6 inches at 100 dpi
pub const FIGURE_SIZE: (u32, u32) = (1000, 600);

pub const HISTOGRAM_BINS: usize = 5;

/// The measurements of one plant, one value per observation
#[derive(Debug, Clone, PartialEq)]
pub struct PlantGrowth {
    pub plant: String,
    /// cm, one per week
    pub height: Vec<f64>,
    pub leaf_count: Vec<i64>,
    /// g, its length is independent from the other series
    pub dry_weight: Vec<f64>,
}

impl PlantGrowth {
    pub fn new(
        plant: &str,
        height: Vec<f64>,
        leaf_count: Vec<i64>,
        dry_weight: Vec<f64>,
    ) -> PlantGrowth {
        PlantGrowth {
            plant: String::from(plant),
            height,
            leaf_count,
            dry_weight,
        }
    }
}

impl std::fmt::Display for PlantGrowth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Plant: {}", self.plant)?;
        writeln!(f, "Height data: {} cm", format_series(&self.height))?;
        writeln!(f, "Leaf count data: {}", format_series(&self.leaf_count))?;
        write!(f, "Dry weight data: {} g", format_series(&self.dry_weight))
    }
}

/// `[a, b, c]`, floats always with a decimal point
pub fn format_series<T: std::fmt::Debug>(s: &[T]) -> String {
    let items: Vec<String> = s.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", items.join(", "))
}

/// None for an empty slice; NaN values are never picked as min or max
/// unless they come first.
pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

/// Axis range with 5% of the span added on both sides,
/// or half a unit when all the values are equal.
/// Fails when the padded span does not fit in a f64.
pub fn padded_range(min: f64, max: f64) -> Result<(f64, f64)> {
    let span = max - min;
    let margin = if span > 0. { span / 20. } else { 0.5 };
    let (lo, hi) = (min - margin, max + margin);
    if !(hi - lo).is_finite() {
        return Err(PlotError::InvalidRange(format!(
            "axis range [{}, {}] is too wide to draw",
            min, max
        )));
    }
    Ok((lo, hi))
}
