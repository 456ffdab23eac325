// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    failed: bool,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, failed: false }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = false;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage, detail: &str) {
        self.done += 1;
        self.set_status(format!("{stage}: {detail} ({}/{})", self.done, self.total));
    }
    fn fail(&mut self, err: &str) {
        self.failed = true;
        self.set_status(format!("Error: {err}"));
    }
    fn finish(&mut self) {
        // keep the failure text on screen
        if self.failed {
            return;
        }
        if self.total == 0 {
            self.set_status(s!("Done")); // no counts if we never began
        } else {
            self.set_status(format!("Done ({}/{})", self.done, self.total));
        }
    }
}
