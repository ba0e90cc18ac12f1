// File: crates/docgen/src/weather.rs
// Summary: 2x2 weather/usage dashboard: two scatter+trend panels, monthly bars, hourly line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figure_core::{linear_fit, pearson, theme, Annotation, Axis, Color, Figure, Panel, Series, TickSpec};
use figure_core::types::{FIG_HEIGHT_IN, FIG_WIDTH_IN};

use crate::synth::{self, WeatherSamples};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Illustrative average daily rides per month.
pub const MONTHLY_RIDES: [f64; 12] = [
    800.0, 850.0, 1200.0, 1500.0, 1800.0, 2000.0, 2200.0, 2100.0, 1800.0, 1400.0, 1000.0, 900.0,
];

/// Illustrative average rides per hour of day (0-23).
pub const HOURLY_RIDES: [f64; 24] = [
    50.0, 30.0, 20.0, 15.0, 25.0, 80.0, 200.0, 350.0, 400.0, 300.0, 250.0, 300.0,
    350.0, 300.0, 250.0, 300.0, 400.0, 500.0, 450.0, 300.0, 200.0, 150.0, 100.0, 70.0,
];

/// Render the weather-correlation dashboard into `out_dir` and return the
/// written path. `out_dir` must already exist.
pub fn generate_weather_chart(out_dir: &Path) -> Result<PathBuf> {
    let samples = synth::weather_samples(synth::SEED)?;

    let temperature_panel = correlation_panel(
        "Temperature vs Ridership Correlation",
        "Average Temperature (\u{b0}F)",
        &samples.temperature,
        &samples,
        theme::RED,
    );
    let precipitation_panel = correlation_panel(
        "Precipitation vs Ridership Correlation",
        "Precipitation (inches)",
        &samples.precipitation,
        &samples,
        theme::BLUE,
    );

    let mut fig = Figure::new(FIG_WIDTH_IN, FIG_HEIGHT_IN)
        .with_suptitle("Bike Rental Analytics: Weather Impact & Usage Patterns");
    fig.grid_2x2([
        temperature_panel,
        precipitation_panel,
        monthly_panel(),
        hourly_panel(),
    ]);

    let out = out_dir.join(crate::WEATHER_FILE);
    fig.save_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    Ok(out)
}

/// Scatter of `xs` against ridership with a dashed trend line and a
/// Pearson-coefficient overlay.
fn correlation_panel(
    title: &str,
    x_label: &str,
    xs: &[f64],
    samples: &WeatherSamples,
    color: Color,
) -> Panel {
    let ys = &samples.ridership;

    let mut panel = Panel::new(title);
    panel.x_axis = Axis::fit_with_margin(x_label, xs, 0.05);
    panel.y_axis = Axis::fit_with_margin("Daily Rides", ys, 0.05);
    panel.x_ticks = TickSpec::Auto(6);

    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    panel.add_series(
        Series::scatter(points)
            .with_color(color)
            .with_alpha(0.6)
            .with_marker_radius(16.0),
    );

    // Degree-1 fit drawn across the sampled x extent.
    let (slope, intercept) = linear_fit(xs, ys);
    let x_lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    panel.add_series(
        Series::line(vec![
            (x_lo, slope * x_lo + intercept),
            (x_hi, slope * x_hi + intercept),
        ])
        .with_color(color)
        .with_alpha(0.8)
        .with_stroke_width(8.0)
        .dashed(),
    );

    let r = pearson(xs, ys);
    panel.add_annotation(Annotation::new(format!("Correlation: {:.2}", r), 0.05, 0.95));
    panel
}

fn monthly_panel() -> Panel {
    let mut panel = Panel::new("Seasonal Ridership Patterns");
    panel.x_axis = Axis::new("Month", -0.6, 11.6);
    let y_max = MONTHLY_RIDES.iter().copied().fold(0.0f64, f64::max);
    panel.y_axis = Axis::new("Average Daily Rides", 0.0, y_max * 1.05);
    panel.x_ticks = TickSpec::Labels(MONTHS.iter().map(|m| m.to_string()).collect());
    panel.add_series(
        Series::bar(&MONTHLY_RIDES)
            .with_color(theme::SKY_BLUE)
            .with_alpha(0.7),
    );
    panel
}

fn hourly_panel() -> Panel {
    let mut panel = Panel::new("Hourly Ridership Patterns");
    panel.x_axis = Axis::new("Hour of Day", -0.5, 23.5);
    panel.y_axis = Axis::fit_with_margin("Average Rides", &HOURLY_RIDES, 0.05);
    // Tick every third hour, as on the original dashboard.
    panel.x_ticks = TickSpec::Values((0..24).step_by(3).map(|h| h as f64).collect());

    let data: Vec<(f64, f64)> = HOURLY_RIDES
        .iter()
        .enumerate()
        .map(|(h, &v)| (h as f64, v))
        .collect();
    panel.add_series(
        Series::line(data)
            .with_color(theme::GREEN)
            .with_stroke_width(8.0)
            .with_marker_radius(8.0),
    );
    panel
}
