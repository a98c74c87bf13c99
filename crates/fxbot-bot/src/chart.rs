//! Chart rendering for historical rate series
//!
//! Draws a dark-themed 1200x600 PNG line chart of a [`RateSeries`] into a
//! temp file that disappears once the photo upload is done.

use plotters::prelude::*;
use std::path::Path;
use tempfile::NamedTempFile;

use fxbot_rates::{RatePoint, RateSeries};

use crate::error::{BotError, Result};

/// Chart size in pixels
const CHART_SIZE: (u32, u32) = (1200, 600);

/// Series line and marker color
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Near-black chart background
const BACKGROUND: RGBColor = RGBColor(18, 18, 18);

fn chart_err<E: std::fmt::Display>(e: E) -> BotError {
    BotError::ChartError(e.to_string())
}

/// Render a series chart into a fresh temp file
///
/// The PNG vanishes when the returned guard drops, so callers keep it
/// alive until the upload has finished.
pub fn render_series_png(series: &RateSeries, base: &str, target: &str) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix("fxbot-chart-")
        .suffix(".png")
        .tempfile()?;
    render_series_chart(file.path(), series, base, target)?;
    Ok(file)
}

/// Render a series chart as a PNG at `path`
pub fn render_series_chart(
    path: &Path,
    series: &RateSeries,
    base: &str,
    target: &str,
) -> Result<()> {
    if series.is_empty() {
        return Err(BotError::ChartError("cannot chart an empty series".to_string()));
    }

    let points = series.points();
    let rates = series.rates();
    let (y_min, y_max) = padded_bounds(&rates);
    // A single point still needs a non-degenerate x span
    let x_max = (points.len() as i32 - 1).max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&BACKGROUND).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Exchange Rate: {base} to {target}"),
            ("sans-serif", 28).into_font().color(&WHITE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(format!("Rate ({base} to {target})"))
        .x_labels(points.len().min(12))
        .x_label_formatter(&|x| date_label(points, *x))
        .y_label_formatter(&|y| format!("{y:.4}"))
        .axis_style(&WHITE.mix(0.8))
        .label_style(("sans-serif", 16).into_font().color(&WHITE))
        .light_line_style(&WHITE.mix(0.1))
        .bold_line_style(&WHITE.mix(0.2))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            rates.iter().enumerate().map(|(i, rate)| (i as i32, *rate)),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(format!("{base}/{target}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

    chart
        .draw_series(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| Circle::new((i as i32, point.rate), 4, LINE_COLOR.filled())),
        )
        .map_err(chart_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&BACKGROUND.mix(0.8))
        .border_style(&WHITE.mix(0.5))
        .label_font(("sans-serif", 16).into_font().color(&WHITE))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// MM-DD label for the observation at an x-axis position
fn date_label(points: &[RatePoint], x: i32) -> String {
    if x < 0 {
        return String::new();
    }
    points
        .get(x as usize)
        .map(|point| point.date.format("%m-%d").to_string())
        .unwrap_or_default()
}

/// Y-axis bounds with headroom; the span stays positive even for flat series
fn padded_bounds(rates: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for rate in rates {
        min = min.min(*rate);
        max = max.max(*rate);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.05).max(0.01)
    };
    (min - pad, max + pad)
}
