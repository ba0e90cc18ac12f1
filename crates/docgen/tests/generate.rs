// File: crates/docgen/tests/generate.rs
// Purpose: End-to-end image generation into a pre-created directory, plus
// the missing-directory failure contract.

use std::path::PathBuf;

use docgen::weather::{HOURLY_RIDES, MONTHLY_RIDES, MONTHS};

#[test]
fn generates_both_images() {
    let out_dir = PathBuf::from("target/test_out/images");
    std::fs::create_dir_all(&out_dir).expect("create output dir");

    let schema = docgen::schema::generate_schema_diagram(&out_dir).expect("schema diagram");
    let weather = docgen::weather::generate_weather_chart(&out_dir).expect("weather chart");

    assert_eq!(schema, out_dir.join(docgen::SCHEMA_FILE));
    assert_eq!(weather, out_dir.join(docgen::WEATHER_FILE));

    for path in [&schema, &weather] {
        let bytes = std::fs::read(path).expect("read output");
        assert!(!bytes.is_empty(), "{} should be non-empty", path.display());
        let img = image::load_from_memory(&bytes).expect("valid PNG");
        // 14in x 10in at 300 DPI
        assert_eq!((img.width(), img.height()), (4200, 3000));
    }
}

#[test]
fn missing_output_dir_fails_without_partial_file() {
    let out_dir = PathBuf::from("target/test_out/missing_images");
    std::fs::remove_dir_all(&out_dir).ok();

    assert!(docgen::schema::generate_schema_diagram(&out_dir).is_err());
    assert!(docgen::weather::generate_weather_chart(&out_dir).is_err());
    assert!(!out_dir.join(docgen::SCHEMA_FILE).exists());
    assert!(!out_dir.join(docgen::WEATHER_FILE).exists());
}

#[test]
fn literal_arrays_match_their_labels() {
    assert_eq!(MONTHS.len(), 12);
    assert_eq!(MONTHLY_RIDES.len(), 12);
    assert_eq!(HOURLY_RIDES.len(), 24);
}
