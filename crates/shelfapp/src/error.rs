use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Product code \"{0}\" already exists")]
    DuplicateCode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
