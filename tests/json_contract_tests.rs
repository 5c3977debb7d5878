use approx::assert_relative_eq;
use story_arcs::api::{
    CORRELATION_REPORT_JSON_SCHEMA_V1, CorrelationReport, DATASET_SUMMARY_JSON_SCHEMA_V1,
    DatasetSummary,
};
use story_arcs::dataset::{BASELINE_ARC, Film};
use story_arcs::error::ArcError;

fn assert_reports_match(left: &CorrelationReport, right: &CorrelationReport) {
    assert_eq!(left.len(), right.len());
    for (a, b) in left.iter().zip(right.iter()) {
        assert_eq!(a.film, b.film);
        assert_relative_eq!(a.rmsd, b.rmsd, max_relative = 1e-12);
        assert_relative_eq!(a.revenue_usd, b.revenue_usd, max_relative = 1e-12);
    }
    match (left.fit, right.fit) {
        (Some(a), Some(b)) => {
            assert_relative_eq!(a.slope, b.slope, max_relative = 1e-12);
            assert_relative_eq!(a.intercept, b.intercept, max_relative = 1e-12);
        }
        (None, None) => {}
        other => panic!("fit mismatch: {other:?}"),
    }
}

#[test]
fn correlation_contract_carries_schema_version() {
    let report = CorrelationReport::for_catalog();
    let json = report.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(CORRELATION_REPORT_JSON_SCHEMA_V1))
    );
    assert!(value["report"]["entries"]["Inception"].is_object());
    assert_eq!(value["report"]["entries"]["Inception"]["film"], "Inception");
}

#[test]
fn correlation_parser_accepts_bare_and_versioned_payloads() {
    let report = CorrelationReport::compute(&[Film::Memento, Film::Tenet], &BASELINE_ARC);

    let bare = report.to_json_pretty().expect("bare");
    let parsed = CorrelationReport::from_json_compat_str(&bare).expect("parse bare");
    assert_reports_match(&parsed, &report);

    let versioned = report.to_json_contract_v1_pretty().expect("contract");
    let parsed = CorrelationReport::from_json_compat_str(&versioned).expect("parse contract");
    assert_reports_match(&parsed, &report);
    let titles: Vec<&str> = parsed.entries.keys().map(String::as_str).collect();
    assert_eq!(titles, ["Memento", "Tenet"]);
}

#[test]
fn correlation_parser_rejects_unknown_schema_and_garbage() {
    let json = CorrelationReport::for_catalog()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);
    let err = CorrelationReport::from_json_compat_str(&json).expect_err("unsupported version");
    assert!(matches!(err, ArcError::InvalidData(message) if message.contains("7")));

    assert!(CorrelationReport::from_json_compat_str("{not json").is_err());
}

#[test]
fn dataset_summary_reflects_catalog_shape() {
    let summary = DatasetSummary::for_catalog();
    assert_eq!(summary.film_count, 12);
    assert_eq!(summary.beats_per_film, 24);
    assert_eq!(summary.total_points, 288);
    assert_eq!(summary.baseline_points, 24);
    assert!(summary.valence_min >= -10.0 && summary.valence_min < 0.0);
    assert!(summary.valence_max <= 10.0 && summary.valence_max > 0.0);
    assert_eq!(summary.correlation.len(), 12);

    let highlights = summary.highlights();
    assert_eq!(
        highlights[0],
        "12 films, 24 beats each, 288 data points in total."
    );
    assert!(highlights[1].starts_with("Valence ranges from -"));
    assert!(highlights.iter().any(|line| line.starts_with("Pearson r")));
}

#[test]
fn empty_summary_has_no_trend_highlights() {
    let summary = DatasetSummary::compute(&[], &BASELINE_ARC);
    assert_eq!(summary.film_count, 0);
    assert_eq!(summary.beats_per_film, 0);
    assert_eq!(summary.highlights().len(), 2);
}

#[test]
fn dataset_summary_contract_round_trips() {
    let summary = DatasetSummary::for_catalog();
    let json = summary.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(DATASET_SUMMARY_JSON_SCHEMA_V1))
    );
    assert_eq!(value["summary"]["total_points"], 288);

    let parsed = DatasetSummary::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.film_count, summary.film_count);
    assert_eq!(parsed.total_points, summary.total_points);
    assert_relative_eq!(parsed.valence_min, summary.valence_min);
    assert_reports_match(&parsed.correlation, &summary.correlation);

    let bare = serde_json::to_string(&summary).expect("bare");
    let parsed = DatasetSummary::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed.baseline_points, 24);
}
