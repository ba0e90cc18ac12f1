// File: crates/figure-core/src/theme.rs
// Summary: Report (light) theme and the named fill colors used by the doc images.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub annotation_bg: skia::Color,
    pub annotation_border: skia::Color,
}

impl Theme {
    /// White-background palette for README/report images.
    pub fn report() -> Self {
        Self {
            name: "report",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(76, 128, 128, 128), // gray at alpha 0.3
            frame: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick_label: skia::Color::from_argb(255, 60, 60, 60),
            title: skia::Color::from_argb(255, 10, 10, 10),
            annotation_bg: skia::Color::from_argb(204, 255, 255, 255),
            annotation_border: skia::Color::from_argb(255, 120, 120, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::report()
    }
}

/// Opaque color from RGB components.
pub const fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// Apply an alpha in [0, 1] to a color.
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}

// Named fills matching the documentation images.
pub const LIGHT_BLUE: skia::Color = rgb(173, 216, 230);
pub const LIGHT_GREEN: skia::Color = rgb(144, 238, 144);
pub const LIGHT_CORAL: skia::Color = rgb(240, 128, 128);
pub const LIGHT_YELLOW: skia::Color = rgb(255, 255, 224);
pub const LIGHT_GRAY: skia::Color = rgb(211, 211, 211);
pub const SKY_BLUE: skia::Color = rgb(135, 206, 235);
pub const RED: skia::Color = rgb(255, 0, 0);
pub const BLUE: skia::Color = rgb(0, 0, 255);
pub const GREEN: skia::Color = rgb(0, 128, 0);
pub const BLACK: skia::Color = rgb(0, 0, 0);
