//! reqopt - a functional-options builder for HTTP requests
//!
//! This crate assembles a request descriptor (address, headers, cookies,
//! body) and a client descriptor (timeout, transport, TLS) from an ordered
//! list of option mutators, then hands the result to reqwest as a
//! constructed-but-unsent client/request pair. It never sends anything
//! itself.

pub mod builder;
pub mod config;
pub mod cookie;
pub mod error;
pub mod http;
pub mod logging;
pub mod options;

pub use builder::{Builder, OptionFn};
pub use error::{ReqoptError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
