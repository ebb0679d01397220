use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("initial node id must not be positive, got {0}")]
    InvalidInitialId(i64),
    #[error("node id space exhausted after {last}")]
    IdsExhausted { last: i64 },
}
