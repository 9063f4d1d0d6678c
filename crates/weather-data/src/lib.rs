//! Data ingestion and reporting for weather summaries.
//!
//! Responsible for reading daily temperature CSV files into typed records and
//! rendering the overview and per-day reports from them.

pub mod reader;
pub mod summary;

pub use weather_core as core;
