// File: crates/figure-core/tests/smoke.rs
// Purpose: Basic end-to-end figure render smoke test writing a PNG.

use figure_core::{Annotation, Axis, Figure, Panel, Series, TickSpec};

#[test]
fn render_smoke_png() {
    let mut panel = Panel::new("Smoke");
    panel.x_axis = Axis::new("X", 0.0, 4.0);
    panel.y_axis = Axis::new("Y", 0.0, 4.0);
    panel.add_series(Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]));
    panel.add_annotation(Annotation::new("note", 0.05, 0.95));
    panel.x_ticks = TickSpec::Auto(5);

    let mut b = Panel::new("Bars");
    b.x_axis = Axis::new("", -0.5, 2.5);
    b.y_axis = Axis::new("", 0.0, 3.0);
    b.x_ticks = TickSpec::Labels(vec!["a".into(), "b".into(), "c".into()]);
    b.add_series(Series::bar(&[1.0, 3.0, 2.0]));

    let mut fig = Figure::new(7.0, 5.0).with_suptitle("Smoke Figure");
    fig.grid_2x2([panel, b, Panel::new(""), Panel::new("")]);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    fig.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Decodes to the requested raster dimensions (7in x 5in at 300 DPI)
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), 2100);
    assert_eq!(img.height(), 1500);
}

#[test]
fn save_fails_without_parent_dir() {
    let fig = Figure::new(2.0, 2.0);
    let out = std::path::PathBuf::from("target/test_out/no_such_dir/fig.png");
    // Ancestor may linger from an earlier run
    std::fs::remove_dir_all(out.parent().unwrap()).ok();

    let err = fig.save_png(&out);
    assert!(err.is_err(), "missing parent directory must fail");
    assert!(!out.exists(), "no partial file may be left behind");
}
