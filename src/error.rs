use thiserror::Error;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid zoom factor: {factor} (must be finite and > 0)")]
    InvalidZoomFactor { factor: f64 },
}
