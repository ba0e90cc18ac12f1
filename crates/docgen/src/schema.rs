// File: crates/docgen/src/schema.rs
// Summary: Database schema diagram: four entity boxes, three relationship arrows, stats block.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figure_core::diagram::{ArrowSpec, DiagramPage, EntityBoxSpec, FieldLine};
use figure_core::theme;
use figure_core::types::{in_to_px, FIG_HEIGHT_IN, FIG_WIDTH_IN};

/// Render the schema diagram into `out_dir` and return the written path.
/// `out_dir` must already exist.
///
/// All geometry, colors, and field lists below are fixed presentation
/// constants for the README; nothing is introspected from a live schema.
pub fn generate_schema_diagram(out_dir: &Path) -> Result<PathBuf> {
    let mut page = DiagramPage::new(in_to_px(FIG_WIDTH_IN), in_to_px(FIG_HEIGHT_IN), 10.0, 10.0);
    page.set_title("Bike Rental Analytics Database Schema", (5.0, 9.5));

    page.add_entity_box(EntityBoxSpec {
        origin: (0.5, 7.0),
        size: (2.5, 1.5),
        fill: theme::LIGHT_BLUE,
        header: "STATIONS".into(),
        header_at: (1.75, 8.25),
        fields: vec![
            FieldLine::new(7.8, "station_id (PK)"),
            FieldLine::new(7.5, "station_name"),
            FieldLine::new(7.2, "latitude, longitude"),
        ],
    });

    page.add_entity_box(EntityBoxSpec {
        origin: (4.0, 7.0),
        size: (2.5, 1.5),
        fill: theme::LIGHT_GREEN,
        header: "WEATHER".into(),
        header_at: (5.25, 8.25),
        fields: vec![
            FieldLine::new(7.8, "weather_id (PK)"),
            FieldLine::new(7.5, "date, avg_temp"),
            FieldLine::new(7.2, "precipitation, wind"),
        ],
    });

    page.add_entity_box(EntityBoxSpec {
        origin: (2.0, 4.0),
        size: (3.5, 2.0),
        fill: theme::LIGHT_CORAL,
        header: "RIDES".into(),
        header_at: (3.75, 5.5),
        fields: vec![
            FieldLine::new(5.1, "ride_id (PK)"),
            FieldLine::new(4.8, "start_time, stop_time"),
            FieldLine::new(4.5, "start_station_id (FK)"),
            FieldLine::new(4.2, "end_station_id (FK)"),
            FieldLine::new(3.9, "user_type, age"),
        ],
    });

    page.add_entity_box(EntityBoxSpec {
        origin: (6.5, 4.0),
        size: (2.5, 2.0),
        fill: theme::LIGHT_YELLOW,
        header: "ANALYTICS VIEWS".into(),
        header_at: (7.75, 5.5),
        fields: vec![
            FieldLine::new(5.1, "daily_weather_rides"),
            FieldLine::new(4.8, "hourly_patterns"),
            FieldLine::new(4.5, "station_utilization"),
            FieldLine::new(4.2, "monthly_kpi_summary"),
        ],
    });

    // Stations -> Rides
    page.add_arrow(ArrowSpec {
        from: (1.75, 7.0),
        to: (4.25, 6.5),
        label: "1:N".into(),
        label_at: (2.5, 6.2),
    });
    // Weather -> Rides
    page.add_arrow(ArrowSpec {
        from: (5.25, 7.0),
        to: (5.75, 6.5),
        label: "1:N".into(),
        label_at: (4.5, 6.2),
    });
    // Rides -> Views
    page.add_arrow(ArrowSpec {
        from: (5.5, 5.0),
        to: (6.3, 5.0),
        label: "Source".into(),
        label_at: (6.2, 5.2),
    });

    page.add_text_block(
        (1.0, 2.0),
        &[
            "Database Statistics:",
            "\u{2022} 3 Normalized Tables",
            "\u{2022} 6 Analytics Views",
            "\u{2022} 247,111 Bike Trips",
            "\u{2022} 102 Unique Stations",
            "\u{2022} 366 Weather Records",
            "\u{2022} 6 Performance Indexes",
        ],
    );

    let out = out_dir.join(crate::SCHEMA_FILE);
    page.save_png(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    Ok(out)
}
