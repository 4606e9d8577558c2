//! Exit code constants for the dragonsmith CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable answers or vars file)
//! - 2: Template failure (template missing, unresolved placeholders)
//! - 3: I/O failure while reading or writing artifacts
//! - 130: Cancelled by the operator (interrupt or end of input)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid input files.
pub const USER_ERROR: i32 = 1;

/// Template failure: template not found or strict rendering left tokens behind.
pub const TEMPLATE_FAILURE: i32 = 2;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 3;

/// Operator interrupted the run.
pub const CANCELLED: i32 = 130;
