use std::fs;
use std::path::PathBuf;

use story_arcs::api::{
    DatasetSummary, ExportOptions, Theme, export_catalog, render_compare_svg,
    render_correlation_svg, render_film_svg,
};
use story_arcs::core::Viewport;
use story_arcs::dataset::Film;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("story-arcs-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn settled_film_snapshot_contains_chart_text() {
    let options = ExportOptions::new("unused");
    let svg = render_film_svg(Film::Inception, &options).expect("svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("ACT II ⟶"));
    assert!(svg.contains("+10 Elation"));
    assert!(svg.contains("<circle"));
}

#[test]
fn early_snapshot_has_no_indicator_dot() {
    let options = ExportOptions::new("unused").with_elapsed_ms(Some(0.0));
    let svg = render_film_svg(Film::Memento, &options).expect("svg");
    assert!(!svg.contains("<circle"));
}

#[test]
fn light_theme_and_custom_viewport_apply_to_every_view() {
    let options = ExportOptions::new("unused")
        .with_theme(Theme::Light)
        .with_viewport(Viewport::new(900, 450));
    let background = Theme::Light.palette().background.to_css();

    for svg in [
        render_film_svg(Film::Dunkirk, &options).expect("film"),
        render_compare_svg(Film::Dunkirk, &options).expect("compare"),
        render_correlation_svg(&options).expect("correlation"),
    ] {
        assert!(svg.contains("width='900' height='450'"));
        assert!(svg.contains(&format!("fill='{background}'/>")));
    }
}

#[test]
fn correlation_snapshot_labels_every_film() {
    let svg = render_correlation_svg(&ExportOptions::new("unused")).expect("svg");
    for film in Film::ALL {
        assert!(svg.contains(film.title()), "missing {}", film.title());
    }
    assert!(svg.contains("ARC DEVIATION (RMSD)"));
}

#[test]
fn single_film_export_writes_four_files() {
    let dir = scratch_dir("single");
    let options = ExportOptions::new(&dir).with_only(Some(Film::TheDarkKnight));
    let summary = export_catalog(&options).expect("export");

    let expected = [
        dir.join("films").join("the-dark-knight.svg"),
        dir.join("compare.svg"),
        dir.join("correlation.svg"),
        dir.join("report.json"),
    ];
    assert_eq!(summary.files_written, expected);
    for path in &expected {
        assert!(path.is_file(), "missing {}", path.display());
    }

    let report = fs::read_to_string(dir.join("report.json")).expect("read report");
    let parsed = DatasetSummary::from_json_compat_str(&report).expect("parse report");
    assert_eq!(parsed.film_count, 12);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn full_export_writes_one_snapshot_per_film() {
    let dir = scratch_dir("full");
    let summary = export_catalog(&ExportOptions::new(&dir)).expect("export");
    assert_eq!(summary.files_written.len(), Film::ALL.len() + 3);
    for film in Film::ALL {
        let path = dir.join("films").join(format!("{}.svg", film.slug()));
        assert!(path.is_file(), "missing {}", path.display());
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_destination_reports_backend_error() {
    let dir = scratch_dir("blocked");
    fs::create_dir_all(dir.parent().expect("temp parent")).expect("temp dir");
    fs::write(&dir, "not a directory").expect("placeholder file");

    let err = export_catalog(&ExportOptions::new(&dir)).expect_err("cannot create dir");
    assert!(matches!(err, story_arcs::ArcError::Backend(_)));
    let _ = fs::remove_file(&dir);
}
