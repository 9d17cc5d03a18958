//! wp-content: profile-driven command line client for a WordPress site's
//! content API.
//!
//! Layers, innermost first:
//! - [`domain`]: entities and flag normalization
//! - [`application`]: profile loading, client construction, post operations
//! - [`infrastructure`]: filesystem and HTTP client implementations, DI container
//! - [`cli`]: argument parsing, routing and output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
