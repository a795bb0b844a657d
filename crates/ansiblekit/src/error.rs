//! Error types for Ansible helper operations.
//!
//! The surface is deliberately small: filesystem failures while generating
//! input files, and a single uniform variant for "the subprocess could not
//! be started". A missing `ansible-playbook` binary is not an error —
//! [`crate::ansible_installed`] reports it as a plain boolean.

use thiserror::Error;

/// Errors that can occur while generating Ansible inputs or launching runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Directory creation or file write failed while generating input files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `ansible-playbook` could not be launched (missing, not executable, ...).
    ///
    /// A non-zero exit from a playbook run is *not* reported through this
    /// variant; the caller inspects the returned exit status instead.
    #[error("error executing `ansible-playbook`: {source}")]
    Launch {
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for Ansible helper operations.
pub type Result<T> = std::result::Result<T, Error>;
