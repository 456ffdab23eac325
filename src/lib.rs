// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod geo;
pub mod site;
pub mod specs;

pub mod csv;
pub mod data;
pub mod dataset;
pub mod file;
pub mod gui;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod stats;

pub use dataset::{assemble, Dataset};
pub use error::{PipelineError, RunError};
pub use geo::GeoPoint;
pub use scrape::collect_sites;
pub use site::{Category, SiteRecord};
