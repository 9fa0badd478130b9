use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown index alias: {0}")]
    UnknownAlias(String),

    #[error("Search request failed: {0}")]
    Network(String),

    #[error("Unexpected search response: {0}")]
    Decode(String),

    #[error("Invalid result count: {0:?}")]
    InvalidCount(String),
}

pub type Result<T> = std::result::Result<T, Error>;
