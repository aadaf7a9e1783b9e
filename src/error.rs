use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid proxy URL {url}: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered 429 Too Many Requests.
    #[error("Rate limited by {url}")]
    RateLimited { url: String },

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Random source failure: {0}")]
    Randomness(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// Whether a later identical call could succeed.
    ///
    /// Nothing in this crate retries on its own; callers that want to back
    /// off on throttling or transient network faults can ask here.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } => true,
            Error::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
