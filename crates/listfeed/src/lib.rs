//! listfeed library
//!
//! This module exports the driver's configuration and pipeline for use in
//! integration tests and as a library.

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::run;
