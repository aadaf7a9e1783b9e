//! Error handling utilities

use crate::error::Error;
use tracing::error;

const GENERAL_ERROR: i32 = 1;
const ARGUMENT_ERROR: i32 = 2;

/// Report a fatal error and exit.
///
/// `verbose >= 1` prints the whole error chain.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

/// Exit code for an error: configuration and input mistakes are argument
/// errors, everything else is general.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    let is_argument_error = error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<Error>(),
            Some(
                Error::Config(_)
                    | Error::Toml(_)
                    | Error::InvalidProxy { .. }
                    | Error::InvalidUrl(_)
                    | Error::InvalidPath(_)
            )
        )
    });

    if is_argument_error {
        ARGUMENT_ERROR
    } else {
        GENERAL_ERROR
    }
}
