use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Scale must be greater than 0, got: {scale}")]
    ZeroScale { scale: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Processing error: {0}")]
    Toolkit(#[from] depthkit::Error),
}
