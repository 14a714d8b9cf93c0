//! # Pilot New Year
//!
//! A single-page web service that tells when the piloted New Year arrives
//! for a given year.
//!
//! ## Features
//! - Deterministic calculation from a fixed Europe/Moscow epoch
//! - Form-encoded `POST /` answered with an `ok`-tagged JSON payload
//! - HTML page with an in-page request history for every other method
//! - Health and liveness endpoints

/// Configuration management and environment variables
pub mod config;
/// The calculation, time zone binding and health service
pub mod services;
/// Utility functions for datetime, validation, and logging
pub mod utils;
/// HTTP routing, handlers, and response types
pub mod web;
