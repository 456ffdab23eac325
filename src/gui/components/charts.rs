// src/gui/components/charts.rs
//
// Horizontal bar charts over the loaded dataset, drawn with the painter.

use eframe::egui::{self, Color32, RichText};

use crate::config::consts::TOP_REGIONS;
use crate::gui::app::App;
use crate::stats;

const BAR_H: f32 = 16.0;
const LABEL_W: f32 = 220.0;
const BAR_MAX_W: f32 = 360.0;
const BAR_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.dataset.as_ref() else {
        ui.label("No data loaded.");
        return;
    };

    let sum = stats::summary(ds);
    let asm = ds.summary();
    ui.label(format!(
        "{} sites · {} geolocated ({} imputed) · {} regions · {} types",
        sum.sites, sum.geolocated, asm.imputed, sum.regions, sum.categories
    ));
    ui.separator();

    egui::ScrollArea::vertical().id_salt("charts_scroll").show(ui, |ui| {
        let regions: Vec<_> = stats::region_counts(ds, TOP_REGIONS)
            .into_iter()
            .map(|(r, n)| (r, n, BAR_COLOR))
            .collect();
        bar_chart(ui, &format!("Top {TOP_REGIONS} regions"), &regions);

        let decades: Vec<_> = stats::decade_counts(ds)
            .into_iter()
            .map(|(d, n)| (format!("{d}s"), n, BAR_COLOR))
            .collect();
        bar_chart(ui, "Inscriptions per decade", &decades);

        let types: Vec<_> = stats::category_counts(ds)
            .into_iter()
            .map(|(c, n)| (s!(c.label()), n, hex(c.color())))
            .collect();
        bar_chart(ui, "Sites per type", &types);
    });
}

fn bar_chart(ui: &mut egui::Ui, title: &str, bars: &[(String, usize, Color32)]) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).strong());

    let max = bars.iter().map(|(_, n, _)| *n).max().unwrap_or(0).max(1);
    for (label, n, color) in bars {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_W, BAR_H], egui::Label::new(label.as_str()).truncate());
            let w = BAR_MAX_W * (*n as f32) / (max as f32);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(w.max(1.0), BAR_H), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            ui.label(n.to_string());
        });
    }
}

fn hex(code: &str) -> Color32 {
    Color32::from_hex(code).unwrap_or(Color32::GRAY)
}
