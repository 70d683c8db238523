//! Remote configuration client for the camera monitoring device.
//!
//! Fetches the device's configuration over its HTTP API, reflects it into
//! an editable form session, validates edits, and persists them back,
//! keeping a last-known-good baseline to support reset.

pub mod api;
pub mod app_config;
pub mod cli;
pub mod common;
pub mod config_loader;
pub mod core;
pub mod device_config;
pub mod errors;
pub mod form;
pub mod operations;
