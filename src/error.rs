use thiserror::Error;

/// Fatal failures of a load run.
///
/// Per-record delivery failures are not errors: they are reported as
/// [`Delivery`](crate::domain::delivery::Delivery) values and the run continues.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),
    #[error("Could not decode archive entry '{entry}': {source}")]
    DecodeError {
        entry: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
