use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarIdError {
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("empty catalog: no stars survived ingest filtering")]
    EmptyCatalog,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StarIdError>;
