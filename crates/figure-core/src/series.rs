// File: crates/figure-core/src/series.rs
// Summary: Series model for scatter, line, and bar data with per-series style.

use skia_safe as skia;

use crate::theme;

#[derive(Clone, Copy, Debug)]
pub enum SeriesKind {
    Scatter,
    Line,
    Bar,
}

#[derive(Clone)]
pub struct Series {
    pub kind: SeriesKind,
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    /// Fill/stroke opacity in [0, 1].
    pub alpha: f32,
    /// Marker radius in pixels; 0 disables markers on Line series.
    pub marker_radius: f32,
    pub stroke_width: f32,
    /// Dashed stroke for Line series (trend lines).
    pub dashed: bool,
    /// Bar width as a fraction of one category slot.
    pub bar_width: f64,
}

impl Series {
    pub fn new(kind: SeriesKind, data: Vec<(f64, f64)>) -> Self {
        Self {
            kind,
            data_xy: data,
            color: theme::BLACK,
            alpha: 1.0,
            marker_radius: 0.0,
            stroke_width: 2.0,
            dashed: false,
            bar_width: 0.8,
        }
    }

    pub fn scatter(data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(SeriesKind::Scatter, data);
        s.marker_radius = 10.0;
        s
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::new(SeriesKind::Line, data)
    }

    pub fn bar(values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self::new(SeriesKind::Bar, data)
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius.max(0.0);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.1);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    /// Effective draw color with the series alpha applied.
    pub fn paint_color(&self) -> skia::Color {
        theme::with_alpha(self.color, self.alpha)
    }
}
