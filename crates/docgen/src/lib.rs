// File: crates/docgen/src/lib.rs
// Summary: Library entry point; exposes the two image generators and output constants.

pub mod schema;
pub mod synth;
pub mod weather;

/// Output directory, relative to the working directory. It must exist
/// before the generators run; they never create it.
pub const IMAGES_DIR: &str = "images";

pub const SCHEMA_FILE: &str = "schema_diagram.png";
pub const WEATHER_FILE: &str = "weather_correlation.png";
