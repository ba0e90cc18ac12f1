// File: crates/figure-core/src/diagram.rs
// Summary: Normalized-coordinate diagram page: rounded entity boxes, labeled arrows, text blocks.

use skia_safe as skia;

use crate::error::RenderError;
use crate::text::TextShaper;
use crate::theme::{self, Theme};
use crate::types::pt_to_px;

/// One centered text line inside an entity box, at a fixed diagram-space y.
#[derive(Clone)]
pub struct FieldLine {
    pub y: f64,
    pub text: String,
}

impl FieldLine {
    pub fn new(y: f64, text: impl Into<String>) -> Self {
        Self { y, text: text.into() }
    }
}

/// A rounded, filled entity box with a bold header and field lines.
#[derive(Clone)]
pub struct EntityBoxSpec {
    /// Lower-left corner in diagram coordinates.
    pub origin: (f64, f64),
    pub size: (f64, f64),
    pub fill: skia::Color,
    pub header: String,
    pub header_at: (f64, f64),
    pub fields: Vec<FieldLine>,
}

/// A straight arrow with a filled head and a bold label.
#[derive(Clone)]
pub struct ArrowSpec {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub label: String,
    pub label_at: (f64, f64),
}

#[derive(Clone)]
struct TextBlock {
    at: (f64, f64),
    lines: Vec<String>,
}

/// A page addressed in a normalized coordinate space (y up), rendered to PNG.
pub struct DiagramPage {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    x_max: f64,
    y_max: f64,
    title: Option<(String, (f64, f64))>,
    boxes: Vec<EntityBoxSpec>,
    arrows: Vec<ArrowSpec>,
    blocks: Vec<TextBlock>,
}

impl DiagramPage {
    /// Page of `width` x `height` pixels addressed as [0, x_max] x [0, y_max]
    /// with the y axis pointing up.
    pub fn new(width: i32, height: i32, x_max: f64, y_max: f64) -> Self {
        Self {
            width,
            height,
            theme: Theme::report(),
            x_max: x_max.max(1e-9),
            y_max: y_max.max(1e-9),
            title: None,
            boxes: Vec::new(),
            arrows: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Bold centered page title at a diagram-space position.
    pub fn set_title(&mut self, text: impl Into<String>, at: (f64, f64)) {
        self.title = Some((text.into(), at));
    }

    pub fn add_entity_box(&mut self, spec: EntityBoxSpec) {
        self.boxes.push(spec);
    }

    pub fn add_arrow(&mut self, spec: ArrowSpec) {
        self.arrows.push(spec);
    }

    /// Left-anchored multi-line text block in a rounded light-gray box;
    /// `at` is the top-left corner of the text in diagram coordinates.
    pub fn add_text_block(&mut self, at: (f64, f64), lines: &[&str]) {
        self.blocks.push(TextBlock { at, lines: lines.iter().map(|s| s.to_string()).collect() });
    }

    #[inline]
    fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (
            (x / self.x_max) as f32 * self.width as f32,
            (1.0 - y / self.y_max) as f32 * self.height as f32,
        )
    }

    /// Pixel length of one diagram-space unit along x.
    #[inline]
    fn unit_px(&self) -> f32 {
        self.width as f32 / self.x_max as f32
    }

    /// Render the page to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or(RenderError::Surface { width: self.width, height: self.height })?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        let shaper = TextShaper::new();

        if let Some((text, (x, y))) = &self.title {
            let (px, py) = self.to_px(*x, *y);
            shaper.draw_centered(canvas, text, px, py, pt_to_px(16.0), self.theme.title, true);
        }

        for b in &self.boxes {
            self.draw_entity_box(canvas, &shaper, b);
        }
        for a in &self.arrows {
            self.draw_arrow(canvas, &shaper, a);
        }
        for t in &self.blocks {
            self.draw_text_block(canvas, &shaper, t);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG at `path`. The parent directory must already
    /// exist; a missing directory fails before any file is created.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw_entity_box(&self, canvas: &skia::Canvas, shaper: &TextShaper, spec: &EntityBoxSpec) {
        let (x0, y0) = spec.origin;
        let (w, h) = spec.size;
        let (left, bottom) = self.to_px(x0, y0);
        let (right, top) = self.to_px(x0 + w, y0 + h);
        let radius = self.unit_px() * 0.1;
        let rrect = skia::RRect::new_rect_xy(skia::Rect::from_ltrb(left, top, right, bottom), radius, radius);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(spec.fill);
        canvas.draw_rrect(rrect, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(6.0);
        stroke.set_color(theme::BLACK);
        canvas.draw_rrect(rrect, &stroke);

        let (hx, hy) = self.to_px(spec.header_at.0, spec.header_at.1);
        shaper.draw_centered(canvas, &spec.header, hx, hy, pt_to_px(12.0), self.theme.title, true);

        let cx = x0 + w * 0.5;
        for field in &spec.fields {
            let (fx, fy) = self.to_px(cx, field.y);
            shaper.draw_centered(canvas, &field.text, fx, fy, pt_to_px(9.0), self.theme.axis_label, false);
        }
    }

    fn draw_arrow(&self, canvas: &skia::Canvas, shaper: &TextShaper, spec: &ArrowSpec) {
        let (x0, y0) = self.to_px(spec.from.0, spec.from.1);
        let (x1, y1) = self.to_px(spec.to.0, spec.to.1);

        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt().max(1e-3);
        let (ux, uy) = (dx / len, dy / len);

        let head_len = self.unit_px() * 0.15;
        let head_half = self.unit_px() * 0.08;

        // Shaft stops where the head begins.
        let bx = x1 - ux * head_len;
        let by = y1 - uy * head_len;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(6.0);
        stroke.set_color(theme::BLACK);
        canvas.draw_line((x0, y0), (bx, by), &stroke);

        let (px, py) = (-uy, ux);
        let mut head = skia::Path::new();
        head.move_to((x1, y1));
        head.line_to((bx + px * head_half, by + py * head_half));
        head.line_to((bx - px * head_half, by - py * head_half));
        head.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme::BLACK);
        canvas.draw_path(&head, &fill);

        let (lx, ly) = self.to_px(spec.label_at.0, spec.label_at.1);
        shaper.draw_centered(canvas, &spec.label, lx, ly, pt_to_px(10.0), self.theme.title, true);
    }

    fn draw_text_block(&self, canvas: &skia::Canvas, shaper: &TextShaper, block: &TextBlock) {
        let size = pt_to_px(10.0);
        let line_height = size * 1.6;
        let (x, y) = self.to_px(block.at.0, block.at.1);

        let mut max_w = 0.0f32;
        for line in &block.lines {
            max_w = max_w.max(shaper.measure_width(line, size, false));
        }
        let pad = size * 0.9;
        let h = line_height * block.lines.len() as f32;
        let rect = skia::Rect::from_ltrb(x - pad, y - pad, x + max_w + pad, y + h + pad);
        let rrect = skia::RRect::new_rect_xy(rect, size * 0.5, size * 0.5);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme::with_alpha(theme::LIGHT_GRAY, 0.8));
        canvas.draw_rrect(rrect, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(self.theme.annotation_border);
        canvas.draw_rrect(rrect, &stroke);

        let refs: Vec<&str> = block.lines.iter().map(|s| s.as_str()).collect();
        shaper.draw_block_left(canvas, &refs, x, y, size, line_height, self.theme.axis_label, false);
    }
}
