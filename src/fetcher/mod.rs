//! Download of the daily front-page scan.
//!
//! This module builds the dated source URL and retrieves the scan bytes,
//! retrying failed attempts with a linearly increasing delay until the server
//! answers 200. The main entry point is [`fetch_cover`].

mod retry;
mod source;

// Re-export public API
pub use retry::fetch_cover;
pub use source::{cover_url, AttemptError};
