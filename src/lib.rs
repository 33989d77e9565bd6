//! # Player Compare
//!
//! Stat comparison core for football player profiles.
//!
//! ## Architecture
//!
//! - **models**: Player records, the stat catalogue, comparison sets
//! - **calculate**: Derived metrics, normalization, winner resolution, view assembly
//! - **export**: Comparison snapshot documents and their filenames
//! - **share**: Host capabilities (file sink, share sheet, clipboard) and share flow
//! - **storage**: JSONL record input and directory file sink
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod export;
pub mod models;
pub mod share;
pub mod storage;

pub use models::*;
