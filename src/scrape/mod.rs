// src/scrape/mod.rs
//
// Fetch → locate → extract → assemble. One page, one table, one pass.
// Any stage failure ends the run; nothing partial is returned.

use crate::{
    config::options::AppOptions,
    core::{html::parse_document, net::fetch_page},
    dataset::{self, Dataset},
    error::PipelineError,
    progress::{Progress, Stage},
    specs::heritage,
};

/// Stages `collect_sites` reports.
pub const STAGES: usize = 4;

/// Run the pipeline up to a read-only dataset.
pub fn collect_sites(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, PipelineError> {
    let result = collect_inner(opts, &mut progress);
    if let Err(e) = &result {
        loge!("Pipeline: {e}");
        if let Some(p) = progress.as_deref_mut() {
            p.fail(&e.to_string());
        }
    }
    result
}

fn collect_inner(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Dataset, PipelineError> {
    let mut stage_done = |stage: Stage, detail: String| {
        logd!("Stage {stage}: {detail}");
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done(stage, &detail);
        }
    };

    let body = fetch_page(&opts.fetch)?;
    stage_done(Stage::Fetch, format!("{} bytes", body.len()));

    let doc = parse_document(&body);
    let table = heritage::locate(&doc, &opts.extract)?;
    stage_done(Stage::Locate, s!("data table found"));

    let extraction = heritage::extract(table, &opts.extract)?;
    stage_done(
        Stage::Extract,
        format!("{} rows ({} skipped)", extraction.records.len(), extraction.skipped),
    );

    let ds = dataset::assemble(extraction.records, &opts.assemble);
    let sum = ds.summary();
    stage_done(
        Stage::Assemble,
        format!("{} sites, {} parsed, {} imputed", sum.total, sum.parsed, sum.imputed),
    );

    Ok(ds)
}
