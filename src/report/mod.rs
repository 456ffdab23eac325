// src/report/mod.rs
//! Presentation of an assembled dataset: the Leaflet map artifact and the
//! hand-off to the system browser.

pub mod browser;
pub mod map;

pub use browser::{file_url, open_in_browser};
pub use map::{render_map, write_map, MapRender};
