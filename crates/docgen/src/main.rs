// File: crates/docgen/src/main.rs
// Summary: Entry point; renders the schema diagram and the weather dashboard sequentially.

use std::path::Path;

use anyhow::Result;

fn main() -> Result<()> {
    println!("Generating images for the bike rental analytics project...");

    // The output directory is a caller responsibility; a missing directory
    // aborts the run before any file is written.
    let out_dir = Path::new(docgen::IMAGES_DIR);

    let schema = docgen::schema::generate_schema_diagram(out_dir)?;
    println!("Created database schema diagram: {}", schema.display());

    let weather = docgen::weather::generate_weather_chart(out_dir)?;
    println!("Created weather correlation chart: {}", weather.display());

    println!("All images generated successfully.");
    Ok(())
}
