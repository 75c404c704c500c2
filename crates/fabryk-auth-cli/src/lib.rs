//! # fabryk-auth-cli
//!
//! Command-line helpers around `fabryk-auth-widget`:
//! - Resolve the post-logout URL from a host configuration file
//! - Normalize widget JSON into a session record
//! - Show where the configuration file is looked up

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
