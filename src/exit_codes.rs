//! Exit code constants for the prompter CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Build failure (missing parameters, undefined flags, cycles, missing files)
//! - 3: Configuration error (invalid or duplicate template mappings)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable input/output file.
pub const USER_ERROR: i32 = 1;

/// Build failure: the template graph could not be resolved.
pub const BUILD_FAILURE: i32 = 2;

/// Configuration error: the mapping table or config file is invalid.
pub const CONFIG_ERROR: i32 = 3;
