use crate::config::OutputConfig;
use crate::error::{PlotError, Result};
use crate::histogram::Histogram;
use crate::{min_and_max, padded_range, PlantGrowth, HISTOGRAM_BINS};
use log::debug;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue, SegmentedCoord};
use plotters::coord::types::RangedCoordu32;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const TITLE_FONT: (&str, u32) = ("sans-serif", 28);
const LABEL_FONT: (&str, u32) = ("sans-serif", 18);

/// The three figures produced for each plant, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Scatter,
    Histogram,
    LinePlot,
}

impl PlotKind {
    pub const ALL: [PlotKind; 3] = [PlotKind::Scatter, PlotKind::Histogram, PlotKind::LinePlot];

    pub fn suffix(self) -> &'static str {
        match self {
            PlotKind::Scatter => "scatter",
            PlotKind::Histogram => "histogram",
            PlotKind::LinePlot => "line_plot",
        }
    }

    pub fn file_name(self, plant: &str) -> String {
        format!("{}_{}.png", plant, self.suffix())
    }

    /// used in the confirmation lines
    pub fn description(self) -> &'static str {
        match self {
            PlotKind::Scatter => "Scatter plot",
            PlotKind::Histogram => "Histogram",
            PlotKind::LinePlot => "Line plot",
        }
    }
}

/// "Week 1", "Week 2", ... one per observation
pub fn week_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Week {}", i)).collect()
}

/// Categorical x axis with one segment per week.
fn week_axis(weeks: usize) -> SegmentedCoord<RangedCoordu32> {
    // integer ranges are inclusive: 0..n-1 holds n weeks
    (0u32..weeks.saturating_sub(1) as u32).into_segmented()
}

/// labels sit at segment centers only
fn format_week(labels: &[String], v: &SegmentValue<u32>) -> String {
    match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Acquires a png drawing surface, hands it to `draw` and writes the file.
/// The surface is released when this returns, on success or failure.
fn with_canvas<F>(fout: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    debug!("rendering {}", fout.display());
    let root = BitMapBackend::new(fout, size).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()?;
    Ok(())
}

fn bars(
    histogram: &Histogram,
    style: ShapeStyle,
) -> impl Iterator<Item = Rectangle<(f64, f64)>> + '_ {
    histogram
        .iter()
        .map(move |(l, h, c)| Rectangle::new([(l, 0.), (h, c as f64)], style))
}

fn grid_style() -> ShapeStyle {
    RGBColor(200, 200, 200).stroke_width(1)
}

impl PlantGrowth {
    /// height (x) against leaf count (y), points paired by index;
    /// the two series must have the same length
    pub fn plot_scatter(&self, fout: &Path, size: (u32, u32)) -> Result<()> {
        if self.height.len() != self.leaf_count.len() {
            return Err(PlotError::LengthMismatch {
                x: self.height.len(),
                y: self.leaf_count.len(),
            });
        }
        let (xmin, xmax) = match min_and_max(&self.height[..]) {
            Some((a, b)) => padded_range(a, b)?,
            None => (0., 1.),
        };
        let (ymin, ymax) = match min_and_max(&self.leaf_count[..]) {
            Some((a, b)) => padded_range(a as f64, b as f64)?,
            None => (0., 1.),
        };
        let title = format!("Height vs Leaf Count for {}", self.plant);
        with_canvas(fout, size, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&title, TITLE_FONT)
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
            chart
                .configure_mesh()
                .light_line_style(&TRANSPARENT)
                .bold_line_style(grid_style())
                .label_style(LABEL_FONT)
                .x_desc("Height (cm)")
                .y_desc("Leaf Count")
                .draw()?;
            let points = self
                .height
                .iter()
                .zip(self.leaf_count.iter())
                .map(|(&x, &y)| Circle::new((x, y as f64), 6, BLUE.filled()));
            chart.draw_series(points)?;
            Ok(())
        })
    }

    /// dry weight distribution over `HISTOGRAM_BINS` equal-width bins
    pub fn plot_histogram(&self, fout: &Path, size: (u32, u32)) -> Result<()> {
        let histogram = Histogram::new(&self.dry_weight, HISTOGRAM_BINS)?;
        let (lo, hi) = histogram.range();
        let (xmin, xmax) = padded_range(lo, hi)?;
        let ymax = (histogram.top() as f64 * 1.05).max(1.);
        let title = format!("Histogram of Dry Weight for {}", self.plant);
        with_canvas(fout, size, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&title, TITLE_FONT)
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d(xmin..xmax, 0f64..ymax)?;
            chart
                .configure_mesh()
                .light_line_style(&TRANSPARENT)
                .bold_line_style(grid_style())
                .label_style(LABEL_FONT)
                .x_desc("Dry Weight (g)")
                .y_desc("Frequency")
                .draw()?;
            chart.draw_series(bars(&histogram, GREEN.filled()))?;
            // edges
            chart.draw_series(bars(&histogram, BLACK.stroke_width(1)))?;
            Ok(())
        })
    }

    /// height against the week index, one category per observation
    pub fn plot_line(&self, fout: &Path, size: (u32, u32)) -> Result<()> {
        let labels = week_labels(self.height.len());
        let (ymin, ymax) = match min_and_max(&self.height[..]) {
            Some((a, b)) => padded_range(a, b)?,
            None => (0., 1.),
        };
        let title = format!("{} Height Over Time", self.plant);
        with_canvas(fout, size, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&title, TITLE_FONT)
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d(week_axis(labels.len()), ymin..ymax)?;
            chart
                .configure_mesh()
                .light_line_style(&TRANSPARENT)
                .bold_line_style(grid_style())
                .label_style(LABEL_FONT)
                .x_labels(labels.len())
                .x_label_formatter(&|v| format_week(&labels, v))
                .x_desc("Week")
                .y_desc("Height (cm)")
                .draw()?;
            let points: Vec<(SegmentValue<u32>, f64)> = self
                .height
                .iter()
                .enumerate()
                .map(|(i, &h)| (SegmentValue::CenterOf(i as u32), h))
                .collect();
            chart.draw_series(LineSeries::new(points.clone(), RED.stroke_width(2)))?;
            chart.draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, 5, RED.filled())),
            )?;
            Ok(())
        })
    }
}

/// Echoes the inputs, then writes scatter, histogram and line plot in this
/// order under `config.output_dir`, overwriting older files.
/// The first failure aborts the run; the files written before it stay.
pub fn generate_plots(data: &PlantGrowth, config: &OutputConfig) -> Result<Vec<PathBuf>> {
    println!("{}", data);
    let mut written = Vec::with_capacity(PlotKind::ALL.len());
    for &kind in PlotKind::ALL.iter() {
        let fout = config.path_for(&data.plant, kind);
        match kind {
            PlotKind::Scatter => data.plot_scatter(&fout, config.size)?,
            PlotKind::Histogram => data.plot_histogram(&fout, config.size)?,
            PlotKind::LinePlot => data.plot_line(&fout, config.size)?,
        }
        debug!("wrote {}", fout.display());
        written.push(fout);
    }
    println!("Generated plots for {}:", data.plant);
    for &kind in PlotKind::ALL.iter() {
        println!(
            "{} saved as {}",
            kind.description(),
            kind.file_name(&data.plant)
        );
    }
    Ok(written)
}
