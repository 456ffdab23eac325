// src/gui/actions/fetch.rs
use crate::{gui::app::App, gui::progress::GuiProgress, progress::Progress, scrape};

pub fn fetch(app: &mut App) {
    logf!("Fetch: Begin source={:?}", app.state.options.fetch.source);

    let mut prog = GuiProgress::new(app.status.clone());
    prog.begin(scrape::STAGES);

    // Synchronous: the UI freezes for the duration of one request
    let result = scrape::collect_sites(&app.state.options, Some(&mut prog));
    prog.finish();

    match result {
        Ok(ds) => {
            let sum = ds.summary();
            logf!("Fetch: OK sites={} parsed={} imputed={}", sum.total, sum.parsed, sum.imputed);
            app.status(format!(
                "Loaded {} sites ({} with coordinates, {} imputed)",
                sum.total, sum.parsed, sum.imputed
            ));
            app.dataset = Some(ds);
            app.last_export = None;
            app.rebuild_view();
        }
        Err(e) => {
            loge!("Fetch: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
