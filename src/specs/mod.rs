// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec owns one remote page
//! and encodes *where the ground truth lives in the HTML* and *how to
//! extract it*: positional table selection, header conventions, column
//! labels, lenient numeric coercion.
//!
//! Parsing is pure (`parse_document(&str)`) and offline-testable; the
//! one-line `fetch()` wrappers bolt on the network. Everything downstream
//! (aggregation, name fixes, the join) lives in `pipeline`, not here, so
//! a source-page layout change touches only the spec that reads it.
pub mod federations;
pub mod population;
