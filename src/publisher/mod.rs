//! Upload of the cover bytes to the storage container.
//!
//! Authorization mirrors the container-SAS flow: a time-windowed signature is
//! generated from the account key, and the upload runs against a client that
//! only ever holds the SAS, not the key. The entry points are
//! [`authenticate`] and [`upload_cover`].

mod sas;
mod upload;

// Re-export public API
pub use sas::authenticate;
pub use upload::upload_cover;
