//! Process exit codes

/// Successful termination (including help)
pub const OK: i32 = 0;

/// Remote operation failed (network error, API rejection)
pub const FAILURE: i32 = 1;

/// Usage or configuration error (bad arguments, missing profile or credentials)
pub const USAGE: i32 = 2;
