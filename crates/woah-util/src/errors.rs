use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all woah operations.
#[derive(Debug, Error, Diagnostic)]
pub enum WoahError {
    /// A template repository URL could not be parsed.
    #[error("Invalid repository URL: {url}")]
    #[diagnostic(help(
        "Expected a form like https://host/owner/name, git@host:owner/name.git or git://host/owner/name"
    ))]
    InvalidUrl { url: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type WoahResult<T> = miette::Result<T>;
