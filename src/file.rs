// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::StringTable;
use crate::error::ExportError;

/// Write the table as CSV/TSV based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &StringTable) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    // The map format has no delimiter; callers route it to report::map
    let sep = export.format.delimiter().unwrap_or(',');

    let contents = to_export_string(&table.headers, &table.rows, export.include_headers, sep);
    write_text(&path, &contents)?;
    logf!("Export: {} rows → {}", table.row_count(), path.display());
    Ok(path)
}

/// Ensure the parent dir exists, then create/truncate and write.
pub fn write_text(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out/carte.html")));
    }

    #[test]
    fn file_in_the_way_is_not_a_directory() {
        let dir = std::env::temp_dir().join("unesco_scrape_file_in_the_way");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_text(&blocker.join("carte.html"), "<html></html>").unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory(p) if p == blocker));
    }
}
