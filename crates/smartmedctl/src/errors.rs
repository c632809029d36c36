//! Exit status for smartmedctl

use smartmed_common::Error;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the patient profile fails validation
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Exit code when the reference tables cannot be loaded
pub const EXIT_DATA_UNAVAILABLE: i32 = 3;

/// Exit code for a failed command, from the library error underneath it
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<Error>()
        .map(Error::exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}

/// Short error class recorded in the invocation log
pub fn error_code_for(error: &anyhow::Error) -> &'static str {
    match exit_code_for(error) {
        EXIT_INVALID_INPUT => "INVALID_INPUT",
        EXIT_DATA_UNAVAILABLE => "DATA_UNAVAILABLE",
        _ => "GENERAL_ERROR",
    }
}
