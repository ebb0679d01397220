use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {axis} coordinate: {value:?}")]
    InvalidCoordinate { axis: &'static str, value: String },
    #[error("node id must be negative, got {0}")]
    NonNegativeId(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
