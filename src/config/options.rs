// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::geo::GeoPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub assemble: AssembleOptions,
    pub export: ExportOptions,
    pub map: MapOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            extract: ExtractOptions::default(),
            assemble: AssembleOptions::default(),
            export: ExportOptions::default(),
            map: MapOptions::default(),
        }
    }
}

/// Where the page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    Remote(String),
    /// Saved copy of the page, for offline runs and fixtures.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: PageSource,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: PageSource::Remote(s!(SOURCE_URL)),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TablePick {
    /// N-th table (0-based) carrying the class, in document order.
    Nth(usize),
    /// First table of the class whose header row mentions this label.
    WithHeader(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub table_class: String,
    pub pick: TablePick,
    pub min_cells: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            table_class: s!(TABLE_CLASS),
            pick: TablePick::Nth(TABLE_INDEX),
            min_cells: MIN_CELLS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssembleOptions {
    pub fallback: GeoPoint,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self { fallback: DEFAULT_FALLBACK }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Map,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Map, ExportFormat::Csv, ExportFormat::Tsv];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Map => "Map (HTML)",
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Map => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for tabular formats; the map has none.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Map => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    pub fn default_file(&self) -> &'static str {
        match self {
            ExportFormat::Map => DEFAULT_MAP_FILE,
            ExportFormat::Csv => DEFAULT_CSV_FILE,
            ExportFormat::Tsv => DEFAULT_TSV_FILE,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "map" | "html" => Some(ExportFormat::Map),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: Option<PathBuf>,
    pub include_headers: bool,
    pub open_browser: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Map,
            out_path: None,
            include_headers: true,
            open_browser: true,
        }
    }
}

impl ExportOptions {
    /// Resolved artifact path. Unset → default file name for the format,
    /// directory-like → default file name inside it.
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            None => PathBuf::from(self.format.default_file()),
            Some(p) if p.is_dir() || crate::file::looks_like_dir_hint(p) => {
                p.join(self.format.default_file())
            }
            Some(p) => p.clone(),
        }
    }

    /// Set from user text (CLI flag or GUI field). Blank resets to default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() {
            None
        } else {
            Some(PathBuf::from(crate::file::normalize_separators(s)))
        };
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: u8,
    pub tiles_url: String,
    pub tiles_attribution: String,
    pub title: String,
    /// Skip markers that fall outside the French territories.
    pub france_only: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            tiles_url: s!(MAP_TILES_URL),
            tiles_attribution: s!(MAP_TILES_ATTRIBUTION),
            title: s!(MAP_TITLE),
            france_only: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from(DEFAULT_MAP_FILE));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from(DEFAULT_TSV_FILE));
        assert!(export.is_default_path());
    }

    #[test]
    fn dir_hint_gets_default_file_name() {
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Csv;
        export.set_path("out/");
        assert!(export.out_path().ends_with(DEFAULT_CSV_FILE));
        export.set_path("   ");
        assert!(export.is_default_path());
    }

    #[test]
    fn format_parse_accepts_aliases() {
        assert_eq!(ExportFormat::parse("HTML"), Some(ExportFormat::Map));
        assert_eq!(ExportFormat::parse("tsv"), Some(ExportFormat::Tsv));
        assert_eq!(ExportFormat::parse("json"), None);
    }
}
