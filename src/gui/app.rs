// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, Tab},
    data::StringTable,
    dataset::{Dataset, COLUMNS},
    runner::ExportOutcome,
};

use super::components;

pub const APP_TITLE: &str = "UNESCO Scraper";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // assembled data of the last successful fetch
    pub dataset: Option<Dataset>,
    // what the Sites table shows
    pub view: StringTable,

    pub last_export: Option<ExportOutcome>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: source={:?}", state.options.fetch.source);

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            dataset: None,
            view: StringTable::default(),
            last_export: None,
            status: Arc::new(Mutex::new(s!("Idle. Press Fetch to load the list."))),
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the table view from the dataset and the display toggles.
    pub fn rebuild_view(&mut self) {
        let full = match &self.dataset {
            Some(ds) => ds.to_table(),
            None => StringTable {
                headers: Some(COLUMNS.iter().map(|c| s!(*c)).collect()),
                rows: Vec::new(),
            },
        };
        self.view = if self.state.gui.show_raw_coords {
            full
        } else {
            match full.column_index("Coordonnees_brutes") {
                Some(ix) => full.without_column(ix),
                None => full,
            }
        };
        logd!("View: rows={} cols={}", self.view.row_count(), self.view.header_count());
    }

    /// Push the text field into ExportOptions if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            match self.state.gui.tab {
                Tab::Sites => components::data_table::draw(ui, self),
                Tab::Charts => components::charts::draw(ui, self),
            }
        });
    }
}
