// tests/extract.rs
use std::path::PathBuf;

use unesco_scrape::config::options::{AppOptions, ExtractOptions, PageSource, TablePick};
use unesco_scrape::core::html::parse_document;
use unesco_scrape::error::{LocateError, PipelineError};
use unesco_scrape::site::Category;
use unesco_scrape::specs::heritage;
use unesco_scrape::{collect_sites, GeoPoint};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/heritage_page.html")
}

fn fixture() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

#[test]
fn second_wikitable_rows_are_extracted() {
    let doc = parse_document(&fixture());
    let opts = ExtractOptions::default();
    let table = heritage::locate(&doc, &opts).unwrap();
    let out = heritage::extract(table, &opts).unwrap();

    assert_eq!(out.records.len(), 6);
    assert_eq!(out.skipped, 1);

    let first = &out.records[0];
    assert_eq!(first.name, "Mont-Saint-Michelet sa baie");
    assert_eq!(first.region, "Normandie");
    assert_eq!(first.inscription_year, Some(1979));
    assert_eq!(first.category, Category::Cultural);
    assert_eq!(first.raw_coordinate_text, "48° 38′ 8″ N, 1° 30′ 39″ O");

    let mixed = &out.records[2];
    assert_eq!(mixed.category, Category::Mixed);
    assert_eq!(mixed.inscription_year, Some(1997));

    assert_eq!(out.records[4].raw_coordinate_text, "-21.417, 165.5");
    assert_eq!(out.records[5].inscription_year, None);
}

#[test]
fn header_locator_agrees_with_positional_one() {
    let doc = parse_document(&fixture());
    let by_header = ExtractOptions { pick: TablePick::WithHeader(s("Coordonnées")), ..Default::default() };
    let a = heritage::extract(heritage::locate(&doc, &by_header).unwrap(), &by_header).unwrap();
    let b = heritage::extract(heritage::locate(&doc, &ExtractOptions::default()).unwrap(), &by_header).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_table_page_is_structure_not_found() {
    let doc = parse_document(r#"<table class="wikitable"><tr><th>x</th></tr></table>"#);
    let err = heritage::locate(&doc, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, LocateError::TooFewTables { found: 1, .. }));
}

#[test]
fn whole_pipeline_from_saved_page() {
    let mut opts = AppOptions::default();
    opts.fetch.source = PageSource::File(fixture_path());

    let ds = collect_sites(&opts, None).unwrap();
    let sum = ds.summary();
    assert_eq!((sum.total, sum.parsed, sum.imputed), (6, 4, 2));
    assert!(ds.iter().all(|r| r.point().is_some()));

    let vauban = ds.iter().find(|r| r.name == "Fortifications de Vauban").unwrap();
    assert!(vauban.is_imputed());
    assert_eq!(vauban.point(), Some(GeoPoint::new(50.40, 2.71)));

    let msm = &ds.records()[0];
    assert!(msm.longitude().unwrap() < 0.0);
}

#[test]
fn inline_styles_stay_out_of_fields() {
    let page = r#"
        <table class="wikitable"><tr><th>Résumé</th></tr></table>
        <table class="wikitable">
          <tr><th>Site</th><th>Région</th><th>Année</th><th>Critères</th><th>Type</th><th>Coordonnées</th></tr>
          <tr>
            <td><style>.mw-parser-output .x{margin:0.5em 1.2em}</style>Vauban</td>
            <td>Plusieurs régions</td><td>2008</td><td>(i)</td><td>Culturel</td>
            <td><style>.geo{margin:0.5em 1.2em}</style>Site en série</td>
          </tr>
        </table>
    "#;
    let doc = parse_document(page);
    let opts = ExtractOptions::default();
    let out = heritage::extract(heritage::locate(&doc, &opts).unwrap(), &opts).unwrap();
    assert_eq!(out.records[0].name, "Vauban");
    assert_eq!(out.records[0].raw_coordinate_text, "Site en série");

    let ds = unesco_scrape::assemble(out.records, &AppOptions::default().assemble);
    let sum = ds.summary();
    assert_eq!((sum.total, sum.parsed, sum.imputed), (1, 0, 1));
    assert_eq!(ds.records()[0].point(), Some(GeoPoint::new(50.40, 2.71)));
}

#[test]
fn empty_page_file_is_structure_failure() {
    let dir = std::env::temp_dir().join("unesco_scrape_extract_empty");
    std::fs::create_dir_all(&dir).unwrap();
    let page = dir.join("empty.html");
    std::fs::write(&page, "").unwrap();

    let mut opts = AppOptions::default();
    opts.fetch.source = PageSource::File(page);
    assert!(matches!(collect_sites(&opts, None), Err(PipelineError::StructureNotFound(_))));
}

fn s(v: &str) -> String {
    v.to_string()
}
