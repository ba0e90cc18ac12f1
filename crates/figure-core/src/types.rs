// File: crates/figure-core/src/types.rs
// Summary: Shared constants (DPI, default figure size, paddings) and pixel math.

/// Raster resolution in dots per inch. Output pixel dimensions are
/// figure inches multiplied by this.
pub const DPI: f32 = 300.0;

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 14.0;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 10.0;

/// Convert a font size in points (1/72 in) to device pixels at `DPI`.
#[inline]
pub fn pt_to_px(pt: f32) -> f32 {
    pt * DPI / 72.0
}

/// Convert a figure dimension in inches to device pixels at `DPI`.
#[inline]
pub fn in_to_px(inches: f32) -> i32 {
    (inches * DPI).round() as i32
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Room for tick labels and axis titles at 300 DPI.
        Self::new(260, 60, 120, 200)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`, clamping to a degenerate rect if the insets
    /// exceed the available space.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }
}
