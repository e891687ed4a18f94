//! Bootstrap-styled HTML table rendering utilities
//!
//! This crate builds the markup for a Bootstrap data table (header row,
//! data rows, style class toggles, responsive wrapper) from in-memory
//! string data and renders it to a single markup string.
//!
//! # Features
//!
//! - **Table Assembly**: header and append-only data rows, with short rows
//!   padded to the widest row seen so far
//! - **Style Toggles**: `table-striped`, `table-bordered`, `table-hover`,
//!   `table-condensed` and a `table-responsive` wrapper, plus custom
//!   classes on the table and on individual rows
//! - **Ordered Configuration**: flags and the table id can be applied from
//!   an insertion-ordered [`TableConfig`] mapping, which also deserializes
//!   from a plain JSON object
//! - **Stable Output**: rendering is pure; repeated calls return
//!   byte-identical markup
//!
//! # Example
//!
//! ```rust
//! use bootstrap_tables::Table;
//!
//! let mut table = Table::new();
//! table.set_header(["Name", "Email"]);
//! table.add_row(["Alice", "alice@example.com"]);
//! table.add_row_with_classes(["Bob"], ["muted"]);
//!
//! let html = table.render();
//! assert!(html.starts_with("<table "));
//! ```
//!
//! # Escaping
//!
//! Cell values and class names are interpolated into the markup verbatim.
//! Callers rendering untrusted input must escape it before handing it to
//! this crate.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod line;
pub mod table;

// Re-exports for convenience
pub use config::{ConfigValue, TableConfig};
pub use error::{Result, TableError};
pub use line::{Line, LineKind};
pub use table::Table;
