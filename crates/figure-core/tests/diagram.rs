// File: crates/figure-core/tests/diagram.rs
// Purpose: Diagram page smoke test: boxes, arrows, and text block render to a valid PNG.

use figure_core::diagram::{ArrowSpec, DiagramPage, EntityBoxSpec, FieldLine};
use figure_core::theme;

#[test]
fn diagram_page_renders_png() {
    let mut page = DiagramPage::new(1400, 1000, 10.0, 10.0);
    page.set_title("Test Schema", (5.0, 9.5));

    page.add_entity_box(EntityBoxSpec {
        origin: (0.5, 7.0),
        size: (2.5, 1.5),
        fill: theme::LIGHT_BLUE,
        header: "THINGS".into(),
        header_at: (1.75, 8.25),
        fields: vec![FieldLine::new(7.8, "thing_id (PK)"), FieldLine::new(7.5, "name")],
    });
    page.add_arrow(ArrowSpec {
        from: (1.75, 7.0),
        to: (4.25, 6.5),
        label: "1:N".into(),
        label_at: (2.5, 6.2),
    });
    page.add_text_block((1.0, 2.0), &["Stats:", "- 2 rows"]);

    let bytes = page.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1400, 1000));
}

#[test]
fn save_fails_without_parent_dir() {
    let page = DiagramPage::new(200, 200, 10.0, 10.0);
    let out = std::path::PathBuf::from("target/test_out/no_such_diagram_dir/page.png");
    std::fs::remove_dir_all(out.parent().unwrap()).ok();

    assert!(page.save_png(&out).is_err());
    assert!(!out.exists());
}
