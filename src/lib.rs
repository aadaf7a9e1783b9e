//! # everybot-helpers
//!
//! Stateless helpers shared by the everybot web application.
//!
//! ## Modules
//!
//! - `random` - Random digit strings (OS CSPRNG) and letter strings
//! - `empty` - "Is this value absent, zero or empty" across value kinds
//! - `fs` - File writes, existence/permission checks, directory creation
//! - `archive` - Appending files to zip archives
//! - `http` - Single proxied GET with rate-limit detection
//! - `upload` - Date-partitioned storage for uploaded files
//! - `timeutil` - Duration formatting and timezone helpers
//! - `args` - Argument list helpers
//! - `config` - Helper configuration from env or TOML
//! - `app` - Logging and error plumbing for the CLI
pub mod app;
pub mod archive;
pub mod args;
pub mod config;
pub mod empty;
pub mod error;
pub mod fs;
pub mod http;
pub mod random;
pub mod timeutil;
pub mod upload;


pub use empty::{empty, Empty};
pub use error::{Error, Result};
pub use random::{random_digits, random_string};
