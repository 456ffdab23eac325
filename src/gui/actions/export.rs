// src/gui/actions/export.rs
use crate::{
    config::options::ExportFormat,
    gui::app::App,
    report::open_in_browser,
    runner::export_dataset,
};

/// Write the configured artifact for the loaded dataset.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let Some(ds) = app.dataset.as_ref() else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export (fetch first)");
        return;
    };

    let msg = match export_dataset(ds, &app.state.options) {
        Ok(outcome) => {
            let msg = match outcome.markers {
                Some(m) => format!(
                    "Exported {} ({} markers, {} outside France)",
                    outcome.path.display(),
                    m.placed,
                    m.skipped
                ),
                None => format!("Exported {}", outcome.path.display()),
            };
            app.last_export = Some(outcome);
            msg
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };

    // mutate app only after the dataset borrow is gone
    app.status(msg);
}

/// Open the last map export, writing the default map first if there is none.
pub fn open_map(app: &mut App) {
    let existing = app
        .last_export
        .as_ref()
        .filter(|o| o.format == ExportFormat::Map)
        .map(|o| o.path.clone());

    let path = match existing {
        Some(p) => p,
        None => {
            let Some(ds) = app.dataset.as_ref() else {
                app.status("No map yet (fetch first)");
                return;
            };
            let mut opts = app.state.options.clone();
            if opts.export.format != ExportFormat::Map {
                opts.export.format = ExportFormat::Map;
                opts.export.set_path("");
            }
            match export_dataset(ds, &opts) {
                Ok(outcome) => outcome.path,
                Err(e) => {
                    loge!("Map: Error: {e}");
                    app.status(format!("Map error: {e}"));
                    return;
                }
            }
        }
    };

    match open_in_browser(&path) {
        Ok(url) => app.status(format!("Opened {url}")),
        Err(e) => {
            logw!("Browser: {e}");
            app.status(format!("Map written to {} but could not be opened: {e}", path.display()));
        }
    }
}
