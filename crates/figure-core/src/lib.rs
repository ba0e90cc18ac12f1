// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports public API for figure, panel, and diagram rendering.

pub mod axis;
pub mod diagram;
pub mod error;
pub mod figure;
pub mod grid;
pub mod panel;
pub mod series;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;

pub use skia_safe::Color;

pub use axis::Axis;
pub use diagram::{ArrowSpec, DiagramPage, EntityBoxSpec, FieldLine};
pub use error::RenderError;
pub use figure::Figure;
pub use panel::{Annotation, Panel, TickSpec};
pub use series::{Series, SeriesKind};
pub use stats::{linear_fit, pearson};
pub use text::TextShaper;
pub use theme::Theme;
