use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing error: {0}")]
    Drawing(String),

    #[error("x and y must be the same size, got {x} heights and {y} leaf counts")]
    LengthMismatch { x: usize, y: usize },

    #[error("invalid histogram range: {0}")]
    InvalidRange(String),
}

/// plotters errors are generic over the backend, keep only their message
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
