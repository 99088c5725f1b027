use thiserror::Error;

/// Parse outcomes that terminate the invocation before an `Arguments` record
/// is produced. Both map to exit code 1 at the process boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `-h`/`--help` was supplied; the caller prints the usage text.
    #[error("help requested")]
    HelpRequested,

    /// A value-taking option appeared as the last token on the command line.
    #[error("missing required value for option {0}")]
    MissingValue(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
