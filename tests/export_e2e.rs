// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use unesco_scrape::config::options::{AppOptions, ExportFormat, PageSource};
use unesco_scrape::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("unesco_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn offline_opts() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.source = PageSource::File(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/heritage_page.html"),
    );
    opts.export.open_browser = false;
    opts
}

#[test]
fn csv_artifact_has_column_contract() {
    let dir = tmp_dir("csv");
    let mut opts = offline_opts();
    opts.export.format = ExportFormat::Csv;
    opts.export.set_path(&format!("{}/", dir.join("nested").display()));

    let summary = runner::run(&opts, None).unwrap();
    let path = summary.artifact.path;
    assert!(path.ends_with("nested/sites_unesco_france.csv"));
    assert!(summary.artifact.markers.is_none());

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Site,Region,Type,Annee,Coordonnees_brutes,Latitude,Longitude")
    );
    assert_eq!(lines.clone().count(), 6);
    // Comma inside the raw coordinates forces quoting
    assert!(text.contains("Naturel,1983,\"42° 20′ 0″ N, 8° 39′ 0″ E\","));
    // Unknown year stays empty
    assert!(text.contains("Cathédrale de Chartres,Centre-Val de Loire,Culturel,,"));
}

#[test]
fn tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let mut opts = offline_opts();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path(dir.join("sites.tsv").to_str().unwrap());

    let summary = runner::run(&opts, None).unwrap();
    let text = fs::read_to_string(summary.artifact.path).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with("Mont-Saint-Michelet sa baie\tNormandie\tCulturel\t1979\t"));
}

#[test]
fn map_artifact_counts_markers() {
    let dir = tmp_dir("map");
    let mut opts = offline_opts();
    opts.export.set_path(dir.join("carte.html").to_str().unwrap());

    let summary = runner::run(&opts, None).unwrap();
    assert!(summary.opened.is_none());
    let markers = summary.artifact.markers.unwrap();
    assert_eq!(markers.placed + markers.skipped, summary.dataset.len());
    assert_eq!(markers.skipped, 0);

    let html = fs::read_to_string(&summary.artifact.path).unwrap();
    assert!(html.contains("L.map('map')"));
    assert!(html.contains("Total : 6 sites"));
}

#[test]
fn failed_pipeline_writes_nothing() {
    let dir = tmp_dir("fail");
    let mut opts = offline_opts();
    opts.fetch.source = PageSource::File(dir.join("missing.html"));
    opts.export.set_path(dir.join("carte.html").to_str().unwrap());

    assert!(runner::run(&opts, None).is_err());
    assert!(!dir.join("carte.html").exists());
}
