// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{fetch,export,open_map}.

mod export; // src/gui/actions/export.rs
mod fetch;  // src/gui/actions/fetch.rs

pub use export::{export, open_map};
pub use fetch::fetch;
