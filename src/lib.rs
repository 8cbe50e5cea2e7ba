//! Séjour - Terminal-based finance tracker for students living abroad
//!
//! This library provides the core functionality for the Séjour finance
//! tracker: transactions, recurring income sources, subscriptions, shared
//! expenses, an emergency fund, and monthly reports built on top of them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, subscriptions, fund, etc.)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (validation + persistence)
//! - `reports`: Pure aggregation over in-memory record lists
//! - `display`: Terminal table and report formatting
//! - `export`: CSV/JSON/YAML data export
//! - `cli`: Command handlers bridging clap to the services
//!
//! Aggregation is deliberately isolated: the functions in `reports` take
//! fully-materialized slices and return values, so the numbers on the
//! dashboard are unit-testable without touching storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use sejour::config::{paths::SejourPaths, settings::Settings};
//!
//! let paths = SejourPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SejourError;
