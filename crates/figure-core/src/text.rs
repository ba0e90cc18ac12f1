// File: crates/figure-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment and weight helpers.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with (x, y) at the left end of the text baseline.
    pub fn draw_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let mut p = self.layout(text, size, color, bold);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with (x, y) at the horizontal center of the text baseline.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let w = self.measure_width(text, size, bold);
        self.draw_left(canvas, text, x - w * 0.5, y, size, color, bold);
    }

    /// Draw consecutive lines top-down from (x, y), left-aligned, returning
    /// the total block height.
    pub fn draw_block_left(
        &self,
        canvas: &skia::Canvas,
        lines: &[&str],
        x: f32,
        y: f32,
        size: f32,
        line_height: f32,
        color: skia::Color,
        bold: bool,
    ) -> f32 {
        let mut cy = y + size;
        for line in lines {
            self.draw_left(canvas, line, x, cy, size, color, bold);
            cy += line_height;
        }
        line_height * lines.len() as f32
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
