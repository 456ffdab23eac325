// src/runner.rs
use std::path::PathBuf;

use url::Url;

use crate::{
    config::options::{AppOptions, ExportFormat},
    dataset::Dataset,
    error::{ExportError, RunError},
    file::write_export,
    progress::{reborrow, Progress, Stage},
    report::{open_in_browser, write_map},
    scrape::{self, collect_sites},
};

/// Map marker accounting for a map artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerCounts {
    pub placed: usize,
    pub skipped: usize,
}

/// The single artifact a run produced.
#[derive(Clone, Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Present for the map format only.
    pub markers: Option<MarkerCounts>,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub dataset: Dataset,
    pub artifact: ExportOutcome,
    /// Set when the browser accepted the artifact URL.
    pub opened: Option<Url>,
}

/// Top-level runner: collect, write the artifact, optionally open it.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape::STAGES + 1);
    }
    let result = run_inner(opts, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_inner(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let dataset = collect_sites(opts, reborrow(progress))?;

    let artifact = export_dataset(&dataset, opts)?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Export, &artifact.path.display().to_string());
    }

    let opened = if opts.export.open_browser && artifact.format == ExportFormat::Map {
        match open_in_browser(&artifact.path) {
            Ok(url) => Some(url),
            Err(e) => {
                // The artifact is on disk; the run still succeeded
                logw!("Browser: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Could not open browser: {e}"));
                }
                None
            }
        }
    } else {
        None
    };

    Ok(RunSummary { dataset, artifact, opened })
}

/// Write the configured artifact for an already assembled dataset.
/// Used by the runner and by the GUI export action.
pub fn export_dataset(ds: &Dataset, opts: &AppOptions) -> Result<ExportOutcome, ExportError> {
    let format = opts.export.format;
    match format {
        ExportFormat::Map => {
            let path = opts.export.out_path();
            let render = write_map(ds, &opts.map, &path)?;
            logf!("Export: map → {}", path.display());
            Ok(ExportOutcome {
                path,
                format,
                markers: Some(MarkerCounts { placed: render.placed, skipped: render.skipped }),
            })
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let path = write_export(&opts.export, &ds.to_table())?;
            Ok(ExportOutcome { path, format, markers: None })
        }
    }
}
