// File: crates/figure-core/src/figure.rs
// Summary: Figure composition and headless PNG rendering using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::RenderError;
use crate::panel::Panel;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{in_to_px, pt_to_px, RectI32};

pub struct Figure {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub suptitle: Option<String>,
    cells: Vec<(RectI32, Panel)>,
}

impl Figure {
    /// Figure sized in inches, rasterized at `types::DPI`.
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            width: in_to_px(width_in),
            height: in_to_px(height_in),
            theme: Theme::report(),
            suptitle: None,
            cells: Vec::new(),
        }
    }

    pub fn with_suptitle(mut self, title: impl Into<String>) -> Self {
        self.suptitle = Some(title.into());
        self
    }

    /// Place a panel at an explicit pixel rectangle.
    pub fn add_panel_at(&mut self, rect: RectI32, panel: Panel) {
        self.cells.push((rect, panel));
    }

    /// Lay out four panels in a 2x2 grid, reserving a band at the top for
    /// the suptitle when one is set.
    pub fn grid_2x2(&mut self, panels: [Panel; 4]) {
        let top_band = if self.suptitle.is_some() {
            (pt_to_px(16.0) * 2.2) as i32
        } else {
            0
        };
        let cell_w = self.width / 2;
        let cell_h = (self.height - top_band) / 2;

        for (i, panel) in panels.into_iter().enumerate() {
            let row = (i / 2) as i32;
            let col = (i % 2) as i32;
            let rect = RectI32::from_ltwh(col * cell_w, top_band + row * cell_h, cell_w, cell_h);
            self.cells.push((rect, panel));
        }
    }

    /// Render the figure to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or(RenderError::Surface { width: self.width, height: self.height })?;
        let canvas = surface.canvas();

        canvas.clear(self.theme.background);

        let shaper = TextShaper::new();

        if let Some(title) = &self.suptitle {
            let size = pt_to_px(16.0);
            shaper.draw_centered(canvas, title, self.width as f32 * 0.5, size * 1.5, size, self.theme.title, true);
        }

        for (rect, panel) in &self.cells {
            panel.draw(canvas, &self.theme, &shaper, *rect);
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
}
