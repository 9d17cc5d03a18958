//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, ContentClient, ...)
//! but are themselves concrete structs, not traits.

mod client_factory;
mod posts;
mod profile;

pub use client_factory::ClientFactory;
pub use posts::{BulkDeleteOutcome, PostService};
pub use profile::{ProfileService, DEFAULT_PROFILE};
