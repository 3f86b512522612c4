use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Index {index} out of range for {len} contacts")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
