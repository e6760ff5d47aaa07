pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid diagram config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid session snapshot: {message}")]
    InvalidSnapshot { message: String },

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
