/// Errors returned by the edge detection stages.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    #[error("kernel size must be odd and positive (got {size})")]
    InvalidKernelSize { size: usize },
    #[error("invalid detector parameters: {0}")]
    InvalidParams(String),
    #[error("degenerate image: {0}")]
    DegenerateImage(&'static str),
    #[error("kernel of size {kernel} does not fit a {width}x{height} image")]
    KernelTooLarge {
        kernel: usize,
        width: usize,
        height: usize,
    },
    #[error("expected {expected} channel(s), found {found}")]
    ChannelMismatch { expected: usize, found: usize },
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, EdgeError>;
