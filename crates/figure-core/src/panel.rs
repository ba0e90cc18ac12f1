// File: crates/figure-core/src/panel.rs
// Summary: One subplot: axes, grid, ticks, series rendering, and annotation overlays.

use skia_safe as skia;

use crate::axis::Axis;
use crate::grid::{format_tick, linspace};
use crate::series::{Series, SeriesKind};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{pt_to_px, Insets, RectI32};

/// X-axis tick placement.
#[derive(Clone)]
pub enum TickSpec {
    /// `n` evenly spaced numeric ticks across the axis range.
    Auto(usize),
    /// Ticks at explicit data values, labeled numerically.
    Values(Vec<f64>),
    /// Category labels centered at integer positions 0..len.
    Labels(Vec<String>),
}

/// Text overlay anchored in axes-fraction coordinates (0,0 = bottom-left
/// of the plot area, 1,1 = top-right), drawn in a rounded background box.
#[derive(Clone)]
pub struct Annotation {
    pub text: String,
    pub fx: f64,
    pub fy: f64,
    pub font_pt: f32,
}

impl Annotation {
    pub fn new(text: impl Into<String>, fx: f64, fy: f64) -> Self {
        Self { text: text.into(), fx, fy, font_pt: 10.0 }
    }
}

pub struct Panel {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: TickSpec,
    pub y_tick_count: usize,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: Axis::new("", 0.0, 1.0),
            y_axis: Axis::new("", 0.0, 1.0),
            x_ticks: TickSpec::Auto(6),
            y_tick_count: 6,
            series: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Render into `rect` (the panel cell including label margins).
    pub fn draw(&self, canvas: &skia::Canvas, theme: &Theme, shaper: &TextShaper, rect: RectI32) {
        let plot = rect.inset(&Insets::default());
        let l = plot.left as f32;
        let t = plot.top as f32;
        let r = plot.right as f32;
        let b = plot.bottom as f32;

        let xspan = self.x_axis.span();
        let yspan = self.y_axis.span();
        let sx = |x: f64| -> f32 { l + ((x - self.x_axis.min) / xspan) as f32 * (r - l) };
        let sy = |y: f64| -> f32 { b - ((y - self.y_axis.min) / yspan) as f32 * (b - t) };

        let x_tick_values = self.x_tick_values();
        let y_tick_values = linspace(self.y_axis.min, self.y_axis.max, self.y_tick_count);

        self.draw_grid(canvas, theme, &x_tick_values, &y_tick_values, &sx, &sy, l, t, r, b);

        for s in &self.series {
            match s.kind {
                SeriesKind::Scatter => draw_scatter(canvas, s, &sx, &sy),
                SeriesKind::Line => draw_line(canvas, s, &sx, &sy),
                SeriesKind::Bar => draw_bars(canvas, s, &sx, &sy, self.y_axis.min.max(0.0)),
            }
        }

        self.draw_frame(canvas, theme, l, t, r, b);
        self.draw_ticks(canvas, theme, shaper, &x_tick_values, &y_tick_values, &sx, &sy, l, b);
        self.draw_labels(canvas, theme, shaper, l, t, r, b);
        self.draw_annotations(canvas, theme, shaper, l, t, r, b);
    }

    fn x_tick_values(&self) -> Vec<f64> {
        match &self.x_ticks {
            TickSpec::Auto(n) => linspace(self.x_axis.min, self.x_axis.max, (*n).max(2)),
            TickSpec::Values(vs) => vs.clone(),
            TickSpec::Labels(ls) => (0..ls.len()).map(|i| i as f64).collect(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_grid(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        x_ticks: &[f64],
        y_ticks: &[f64],
        sx: &impl Fn(f64) -> f32,
        sy: &impl Fn(f64) -> f32,
        l: f32,
        t: f32,
        r: f32,
        b: f32,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_color(theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(2.0);

        for &xv in x_ticks {
            let x = sx(xv);
            if x >= l - 0.5 && x <= r + 0.5 {
                canvas.draw_line((x, t), (x, b), &paint);
            }
        }
        for &yv in y_ticks {
            let y = sy(yv);
            if y >= t - 0.5 && y <= b + 0.5 {
                canvas.draw_line((l, y), (r, y), &paint);
            }
        }
    }

    fn draw_frame(&self, canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
        let mut paint = skia::Paint::default();
        paint.set_color(theme.frame);
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(3.0);
        canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_ticks(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        shaper: &TextShaper,
        x_ticks: &[f64],
        y_ticks: &[f64],
        sx: &impl Fn(f64) -> f32,
        sy: &impl Fn(f64) -> f32,
        l: f32,
        b: f32,
    ) {
        let size = pt_to_px(10.0);

        match &self.x_ticks {
            TickSpec::Labels(labels) => {
                for (i, label) in labels.iter().enumerate() {
                    shaper.draw_centered(canvas, label, sx(i as f64), b + size * 1.3, size, theme.tick_label, false);
                }
            }
            _ => {
                for &xv in x_ticks {
                    let label = format_tick(xv, self.x_axis.span());
                    shaper.draw_centered(canvas, &label, sx(xv), b + size * 1.3, size, theme.tick_label, false);
                }
            }
        }

        for &yv in y_ticks {
            let label = format_tick(yv, self.y_axis.span());
            let w = shaper.measure_width(&label, size, false);
            shaper.draw_left(canvas, &label, l - w - size * 0.5, sy(yv) + size * 0.35, size, theme.tick_label, false);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        shaper: &TextShaper,
        l: f32,
        t: f32,
        r: f32,
        b: f32,
    ) {
        let label_size = pt_to_px(10.0);
        let title_size = pt_to_px(12.0);
        let cx = (l + r) * 0.5;

        if !self.x_axis.label.is_empty() {
            shaper.draw_centered(canvas, &self.x_axis.label, cx, b + label_size * 3.0, label_size, theme.axis_label, false);
        }
        if !self.y_axis.label.is_empty() {
            // Rotated 90° counter-clockwise along the left margin.
            let w = shaper.measure_width(&self.y_axis.label, label_size, false);
            let cy = (t + b) * 0.5;
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(l - label_size * 4.2, cy)));
            shaper.draw_left(canvas, &self.y_axis.label, l - label_size * 4.2 - w * 0.5, cy, label_size, theme.axis_label, false);
            canvas.restore();
        }
        if !self.title.is_empty() {
            shaper.draw_centered(canvas, &self.title, cx, t - title_size * 0.6, title_size, theme.title, false);
        }
    }

    fn draw_annotations(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        shaper: &TextShaper,
        l: f32,
        t: f32,
        r: f32,
        b: f32,
    ) {
        for a in &self.annotations {
            let size = pt_to_px(a.font_pt);
            let x = l + a.fx as f32 * (r - l);
            let y = b - a.fy as f32 * (b - t);
            let w = shaper.measure_width(&a.text, size, false);
            let pad = size * 0.4;

            let rect = skia::Rect::from_ltrb(x - pad, y - pad, x + w + pad, y + size * 1.2 + pad);
            let rrect = skia::RRect::new_rect_xy(rect, size * 0.35, size * 0.35);

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(theme.annotation_bg);
            canvas.draw_rrect(rrect, &fill);

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(2.0);
            stroke.set_color(theme.annotation_border);
            canvas.draw_rrect(rrect, &stroke);

            shaper.draw_left(canvas, &a.text, x, y + size, size, theme.axis_label, false);
        }
    }
}

// ---- series draw helpers ----------------------------------------------------

fn draw_scatter(canvas: &skia::Canvas, series: &Series, sx: &impl Fn(f64) -> f32, sy: &impl Fn(f64) -> f32) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(series.paint_color());

    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx(x), sy(y)), series.marker_radius.max(1.0), &paint);
    }
}

fn draw_line(canvas: &skia::Canvas, series: &Series, sx: &impl Fn(f64) -> f32, sy: &impl Fn(f64) -> f32) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(x0), sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(series.paint_color());
    if series.dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&[24.0, 16.0], 0.0));
    }
    canvas.draw_path(&path, &stroke);

    if series.marker_radius > 0.0 {
        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_style(skia::paint::Style::Fill);
        marker.set_color(series.paint_color());
        for &(x, y) in data {
            canvas.draw_circle((sx(x), sy(y)), series.marker_radius, &marker);
        }
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    series: &Series,
    sx: &impl Fn(f64) -> f32,
    sy: &impl Fn(f64) -> f32,
    baseline: f64,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(series.paint_color());

    let half = series.bar_width * 0.5;
    let y0 = sy(baseline);
    for &(x, y) in &series.data_xy {
        let left = sx(x - half);
        let right = sx(x + half);
        let top = sy(y);
        let rect = skia::Rect::from_ltrb(left, top.min(y0), right, top.max(y0));
        canvas.draw_rect(rect, &paint);
    }
}
