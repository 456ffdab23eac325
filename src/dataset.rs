// src/dataset.rs
//
// Dataset assembly: coordinate normalization per record, then one shared
// fallback point for whatever is still missing. After `assemble` the record
// set is read-only; presentation gets `&Dataset` and nothing else.

use crate::config::options::AssembleOptions;
use crate::data::StringTable;
use crate::geo::{self, GeoPoint};
use crate::site::{Location, SiteRecord};

/// Column contract of the exported table.
pub const COLUMNS: [&str; 7] = [
    "Site",
    "Region",
    "Type",
    "Annee",
    "Coordonnees_brutes",
    "Latitude",
    "Longitude",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblySummary {
    pub total: usize,
    /// Records whose raw text parsed.
    pub parsed: usize,
    /// Records that received the fallback point.
    pub imputed: usize,
    /// Parsed points beyond ±90° / ±180°. Kept as parsed, only counted.
    pub out_of_range: usize,
}

impl AssemblySummary {
    pub fn failed(&self) -> usize {
        self.total - self.parsed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<SiteRecord>,
    summary: AssemblySummary,
}

/// Parse every record's raw text. Failures leave no point and keep the
/// reason. Returns how many parsed.
pub fn normalize_coordinates(records: &mut [SiteRecord]) -> usize {
    let mut parsed = 0;
    for r in records.iter_mut() {
        match geo::parse(&r.raw_coordinate_text) {
            Ok(p) => {
                r.location = Some(Location::Parsed(p));
                r.coord_error = None;
                parsed += 1;
            }
            Err(e) => {
                logd!("Coords: `{}` → {}", r.name, e);
                r.location = None;
                r.coord_error = Some(e);
            }
        }
    }
    parsed
}

/// Give every record without a point the same fallback. Returns how many.
pub fn impute_missing(records: &mut [SiteRecord], fallback: GeoPoint) -> usize {
    let mut imputed = 0;
    for r in records.iter_mut().filter(|r| r.location.is_none()) {
        r.location = Some(Location::Imputed(fallback));
        imputed += 1;
    }
    imputed
}

pub fn assemble(mut records: Vec<SiteRecord>, opts: &AssembleOptions) -> Dataset {
    let total = records.len();
    let parsed = normalize_coordinates(&mut records);
    logf!("Coords: {parsed} sites with valid coordinates, {} without", total - parsed);

    let out_of_range = records
        .iter()
        .filter_map(|r| r.point())
        .filter(|p| !p.is_physical())
        .count();
    if out_of_range > 0 {
        logw!("Coords: {out_of_range} parsed points lie outside ±90° / ±180°");
    }

    let imputed = impute_missing(&mut records, opts.fallback);
    if imputed > 0 {
        logf!("Coords: {imputed} imputed with fallback ({})", opts.fallback);
    }

    Dataset {
        records,
        summary: AssemblySummary { total, parsed, imputed, out_of_range },
    }
}

impl Dataset {
    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SiteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> AssemblySummary {
        self.summary
    }

    /// String table with the `COLUMNS` contract. Missing year → empty cell.
    pub fn to_table(&self) -> StringTable {
        StringTable {
            headers: Some(COLUMNS.iter().map(|c| s!(*c)).collect()),
            rows: self.records.iter().map(record_row).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SiteRecord;
    type IntoIter = std::slice::Iter<'a, SiteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn record_row(r: &SiteRecord) -> Vec<String> {
    let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    vec![
        r.name.clone(),
        r.region.clone(),
        s!(r.category.label()),
        r.inscription_year.map(|y| y.to_string()).unwrap_or_default(),
        r.raw_coordinate_text.clone(),
        opt(r.latitude()),
        opt(r.longitude()),
    ]
}
