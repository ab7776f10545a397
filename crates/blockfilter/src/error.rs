use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Row decoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockError>;
