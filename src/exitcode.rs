//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, with or without clues collected
pub const OK: i32 = 0;

/// Internal software error (e.g. a broken mansion map)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
