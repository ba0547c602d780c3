//! covers-cli library
//!
//! This crate provides the core functionality for the `covers-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The binary archives one New York Times front-page scan per invocation:
//!
//! - [`fetcher`] - Builds the dated source URL and downloads the scan, retrying with linear backoff
//! - [`publisher`] - Generates a container SAS and uploads the scan to Azure Blob Storage
//! - [`config`] - Run configuration: defaults, optional `covers.toml` overrides, account secret
//! - [`models`] - The cover date and its URL/blob-name formats
//! - [`errors`] - Error types used throughout the application
//! - [`constants`] - Compile-time defaults (account, container, source URL, retry step)
//! - [`utils`] - Formatting helpers for the run summary log
//!
//! ## Example Usage
//!
//! One run is a single fetch followed by a single upload:
//!
//! ```no_run
//! use covers_cli::config::AppConfig;
//! use covers_cli::models::CoverDate;
//! use covers_cli::{fetcher, publisher};
//!
//! # async fn example() -> covers_cli::errors::AppResult<()> {
//! let config = AppConfig::load()?;
//! let date = CoverDate::today();
//!
//! let client = reqwest::Client::new();
//! let page = fetcher::fetch_cover(&client, &config.resolved, date).await?;
//!
//! let container = publisher::authenticate(&config).await?;
//! publisher::upload_cover(&container, &date.blob_name(), page).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod publisher;
pub mod utils;
