//! Domain layer: entities and flag normalization
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod envfile;
pub mod error;
pub mod params;

pub use entities::*;
pub use envfile::ClientEnvFile;
pub use error::{DomainError, DomainResult};
pub use params::{parse_id_list, parse_list_query, parse_number};
