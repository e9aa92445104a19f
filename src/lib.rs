//! Core library for the hr-json-export command line application.
//!
//! The tool reshapes four HR spreadsheet exports (employee roster, PTO
//! balances, PTO requests, contact directory) into JSON documents for
//! downstream dashboards. IO adapters live under [`io`], the output records
//! in [`model`], the per-export mapping in [`build`], and the run
//! orchestration in [`convert`]. [`normalize`], [`coerce`] and [`columns`]
//! hold the shared field rules every builder relies on.

pub mod build;
pub mod coerce;
pub mod columns;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod model;
pub mod normalize;

pub use columns::ColumnPolicy;
pub use config::{ConvertConfig, Lane};
pub use error::{Result, ToolError};
