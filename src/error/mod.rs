#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shape mismatch between y_pred {y_pred:?} and y {y:?}")]
    ShapeMismatch { y_pred: Vec<usize>, y: Vec<usize> },

    #[error(
        "Insufficient dimensions: {0} (channel or spatial dimensions required)"
    )]
    InsufficientDimensions(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Empty accumulator: {0} has no scores to compute")]
    EmptyAccumulator(String),
}
