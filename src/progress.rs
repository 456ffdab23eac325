// src/progress.rs
use std::fmt;

/// Pipeline stages, in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Locate,
    Extract,
    Assemble,
    Export,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Locate => "locate table",
            Stage::Extract => "extract rows",
            Stage::Assemble => "assemble",
            Stage::Export => "export",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages that will run.
    fn begin(&mut self, _stages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One stage finished; `detail` is a short summary ("49 rows").
    fn stage_done(&mut self, _stage: Stage, _detail: &str) {}

    /// The run stopped on a terminal error.
    fn fail(&mut self, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Reborrow an optional sink for a nested call.
pub fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

/// Prints stage lines to stderr (CLI).
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, stages: usize) {
        self.total = stages;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn stage_done(&mut self, stage: Stage, detail: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {stage}: {detail}", self.done, self.total);
    }

    fn fail(&mut self, err: &str) {
        eprintln!("Failed: {err}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records everything it is told.
    #[derive(Default)]
    pub struct Recorder {
        pub begun: Option<usize>,
        pub stages: Vec<(Stage, String)>,
        pub lines: Vec<String>,
        pub failure: Option<String>,
        pub finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, stages: usize) {
            self.begun = Some(stages);
        }
        fn log(&mut self, msg: &str) {
            self.lines.push(s!(msg));
        }
        fn stage_done(&mut self, stage: Stage, detail: &str) {
            self.stages.push((stage, s!(detail)));
        }
        fn fail(&mut self, err: &str) {
            self.failure = Some(s!(err));
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }
}
