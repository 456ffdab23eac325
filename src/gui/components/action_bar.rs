// src/gui/components/action_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, gui::actions, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_data = app.dataset.is_some();

    ui.horizontal(|ui| {
        if ui.button("Fetch").clicked() {
            actions::fetch(app);
        }
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(has_data, egui::Button::new("Open map")).clicked() {
            actions::open_map(app);
        }
    });

    // --- Format + Include headers ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        for fmt in ExportFormat::ALL {
            ui.selectable_value(&mut export.format, fmt, fmt.label());
        }

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // Default path and the user hasn't typed: follow the new extension
            if !app.out_path_dirty && export.is_default_path() {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format (default path)");
            }
        }

        ui.add_enabled_ui(export.format != ExportFormat::Map, |ui| {
            let before = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });
    });

    // --- Output field + map / view toggles ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(320.0));
        if resp.changed() {
            app.out_path_dirty = true;
        }

        let map = &mut app.state.options.map;
        let mut all_markers = !map.france_only;
        if ui.checkbox(&mut all_markers, "Markers outside France").changed() {
            map.france_only = !all_markers;
            logf!("UI: france_only → {}", map.france_only);
        }

        let before = app.state.gui.show_raw_coords;
        ui.checkbox(&mut app.state.gui.show_raw_coords, "Raw coordinates column");
        if app.state.gui.show_raw_coords != before {
            app.rebuild_view();
        }
    });
}
