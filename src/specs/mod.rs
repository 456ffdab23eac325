// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. A spec encodes *where the ground
//! truth lives in the HTML* and *how to read it robustly*.
//!
//! ## What lives here
//! - **Table locating**: which of the page's tables holds the data
//!   (`TableLocator` strategies).
//! - **Row extraction**: cell positions, keyword matching and the
//!   skip/abort policy for malformed rows.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **coordinate normalization**
//!   (`geo::coords`, applied by `dataset::assemble`).
//! - **Presentation**: statistics, map and export read the assembled
//!   `Dataset` elsewhere.
//!
//! ## Typical call chain
//! ```text
//! GUI / runner → scrape::collect_sites → core::net::fetch_page
//!                                      → specs::heritage::{locate, extract}
//!                                      → dataset::assemble
//! ```
//!
//! ## Conventions & invariants
//! - Cell text is "strip each fragment, concatenate", so values match what a
//!   reader sees without footnote spacing noise.
//! - Short rows are skipped silently (merged/rowspan rows); any other
//!   surprise fails the whole table rather than returning partial data.
//!
//! ## Testing notes
//! - Specs are testable **offline** against saved fixtures
//!   (`tests/fixtures/`).
pub mod heritage;
