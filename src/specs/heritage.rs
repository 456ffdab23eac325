// src/specs/heritage.rs
//
// The "Liste du patrimoine mondial en France" page: one wikitable per
// listing, the first being a summary. Data rows:
//   0 Site | 1 Région | 2 Année | 3 Critères | 4 Type | 5 Coordonnées | ...

use scraper::{ElementRef, Html};

use crate::config::consts::{COL_COORDS, COL_NAME, COL_REGION, COL_TYPE, COL_YEAR, COORD_LINK_SELECTOR};
use crate::config::options::{ExtractOptions, TablePick};
use crate::core::html::{has_class, selector, spaced_text_of, text_of};
use crate::core::sanitize::first_year;
use crate::error::{ExtractError, LocateError};
use crate::site::{Category, SiteRecord};

/// Strategy for picking the data table out of a parsed page.
pub trait TableLocator {
    fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>, LocateError>;
}

/// N-th table (0-based, document order) carrying a class. Positional: it
/// trusts the page layout, not the content.
pub struct NthTableByClass {
    pub class: String,
    pub index: usize,
}

impl TableLocator for NthTableByClass {
    fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>, LocateError> {
        let tables = tables_with_class(doc, &self.class)?;
        let found = tables.len();
        tables.into_iter().nth(self.index).ok_or(LocateError::TooFewTables {
            class: self.class.clone(),
            wanted: self.index + 1,
            found,
        })
    }
}

/// First table of the class whose header row mentions a label
/// (case-insensitive).
pub struct TableWithHeader {
    pub class: String,
    pub header: String,
}

impl TableLocator for TableWithHeader {
    fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>, LocateError> {
        let tr = selector("tr").map_err(LocateError::Selector)?;
        let th = selector("th").map_err(LocateError::Selector)?;
        let wanted = self.header.to_lowercase();

        tables_with_class(doc, &self.class)?
            .into_iter()
            .find(|t| {
                t.select(&tr).next().is_some_and(|row| {
                    row.select(&th)
                        .any(|h| spaced_text_of(h).to_lowercase().contains(&wanted))
                })
            })
            .ok_or_else(|| LocateError::NoHeaderMatch {
                class: self.class.clone(),
                header: self.header.clone(),
            })
    }
}

pub fn locator_for(opts: &ExtractOptions) -> Box<dyn TableLocator> {
    match &opts.pick {
        TablePick::Nth(index) => Box::new(NthTableByClass {
            class: opts.table_class.clone(),
            index: *index,
        }),
        TablePick::WithHeader(header) => Box::new(TableWithHeader {
            class: opts.table_class.clone(),
            header: header.clone(),
        }),
    }
}

/// Locate the data table using the configured strategy.
pub fn locate<'a>(doc: &'a Html, opts: &ExtractOptions) -> Result<ElementRef<'a>, LocateError> {
    let table = locator_for(opts).locate(doc)?;
    logd!("Locate: table with class `{}` found", opts.table_class);
    Ok(table)
}

fn tables_with_class<'a>(doc: &'a Html, class: &str) -> Result<Vec<ElementRef<'a>>, LocateError> {
    let table = selector("table").map_err(LocateError::Selector)?;
    Ok(doc.select(&table).filter(|t| has_class(*t, class)).collect())
}

/// Rows read from one table. Skipped rows are only counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub records: Vec<SiteRecord>,
    /// Short rows plus rows without a site name.
    pub skipped: usize,
}

/// Read every data row of the table (the first row is the header).
///
/// Rows with fewer cells than required, or with a blank name cell (an image
/// alone, say), are skipped. A broken selector fails the whole table: no
/// partial results.
pub fn extract(table: ElementRef<'_>, opts: &ExtractOptions) -> Result<Extraction, ExtractError> {
    let tr = selector("tr").map_err(ExtractError::Selector)?;
    let td = selector("td").map_err(ExtractError::Selector)?;
    let link = selector(COORD_LINK_SELECTOR).map_err(ExtractError::Selector)?;

    // Never below what the column layout needs
    let min_cells = opts.min_cells.max(COL_COORDS + 1);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, row) in table.select(&tr).enumerate().skip(1) {
        let cells: Vec<ElementRef> = row.select(&td).collect();
        if cells.len() < min_cells {
            skipped += 1;
            continue;
        }

        let name = text_of(cells[COL_NAME]);
        if name.is_empty() {
            logd!("Extract: row {} has no site name, skipped", i + 1);
            skipped += 1;
            continue;
        }
        let region = text_of(cells[COL_REGION]);
        let year = first_year(&text_of(cells[COL_YEAR]));
        let category = Category::from_cell(&text_of(cells[COL_TYPE]));

        // Prefer the geohack link text; the cell may carry extra notes
        let coord_cell = cells[COL_COORDS];
        let raw_coords = match coord_cell.select(&link).next() {
            Some(a) => text_of(a),
            None => text_of(coord_cell),
        };

        records.push(SiteRecord::new(name, region, year, category, raw_coords));
    }

    logf!("Extract: kept={} skipped={}", records.len(), skipped);
    Ok(Extraction { records, skipped })
}
