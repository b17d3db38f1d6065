//=========================================================================
// Errors
//=========================================================================
//
// The only failure a holder models is "object already exists", and it is
// normally resolved silently. The strict spawn path and the log writer's
// file output are the two places that surface errors.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== SingletonError ======================================================

/// Errors surfaced by singleton holders and their collaborators.
#[derive(Debug, Error)]
pub enum SingletonError {
    /// A strict spawn found the slot already occupied by a live instance.
    #[error("singleton {type_name} already exists")]
    AlreadyExists {
        /// Name of the singleton type whose slot is occupied.
        type_name: &'static str,
    },

    /// Writing buffered log lines to their file failed.
    #[error("log writer I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SingletonError>;

//=== Tests ===============================================================
