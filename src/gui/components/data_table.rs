// src/gui/components/data_table.rs
//
// Draws the Sites table from app.view. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const WIDTHS: [f32; 7] = [260.0, 160.0, 70.0, 50.0, 200.0, 80.0, 80.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = &app.view;
    let cols = view.header_count();
    if view.rows.is_empty() {
        ui.label("No data loaded.");
    }

    // Rows line up with dataset records; imputed points are drawn weak
    let imputed: Vec<bool> = app
        .dataset
        .as_ref()
        .map(|ds| ds.iter().map(|r| r.is_imputed()).collect())
        .unwrap_or_default();
    let coord_cols = cols.saturating_sub(2)..cols;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("sites_table", cols));
    for ci in 0..cols {
        // Raw coordinates (4) may be hidden; later widths shift left
        let src = if cols < WIDTHS.len() && ci >= 4 { ci + 1 } else { ci };
        let w = WIDTHS.get(src).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let label = view
                        .headers
                        .as_ref()
                        .and_then(|h| h.get(ci).cloned())
                        .unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.rows.len(), |mut row| {
                let ri = row.index();
                let weak = imputed.get(ri).copied().unwrap_or(false);
                for ci in 0..cols {
                    row.col(|ui| {
                        let cell = view.rows[ri].get(ci).map(String::as_str).unwrap_or("");
                        let text = RichText::new(cell);
                        if weak && coord_cols.contains(&ci) {
                            ui.label(text.italics().weak())
                                .on_hover_text("Imputed: no single point for this site");
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
