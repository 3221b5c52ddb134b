use crate::{InferError, Quadrant};
use phonetag_base::TensorError;
use phonetag_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum SegmentError {
    /// Tensor length differs from `size * size * classes`.
    ShapeMismatch { expected: usize, got: usize },
    InvalidHighlightClass { class: usize, num_classes: usize },
    InvalidPalette(String),
    /// A quadrant worker panicked or failed. Sibling workers were joined first.
    DecodeTaskFailure { quadrant: Quadrant, message: String },
    /// The session returned no tensor under the configured output name.
    MissingOutput(String),
    Inference(InferError),
    Image(ImageError),
    Tensor(TensorError),
    Config(String),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} scores, got {got}")
            }
            SegmentError::InvalidHighlightClass { class, num_classes } => write!(
                f,
                "highlight class {class} out of range for {num_classes} classes"
            ),
            SegmentError::InvalidPalette(msg) => write!(f, "invalid palette: {msg}"),
            SegmentError::DecodeTaskFailure { quadrant, message } => {
                write!(f, "decode task failed in {quadrant} quadrant: {message}")
            }
            SegmentError::MissingOutput(name) => {
                write!(f, "inference produced no output tensor named {name:?}")
            }
            SegmentError::Inference(err) => write!(f, "inference error: {err}"),
            SegmentError::Image(err) => write!(f, "image error: {err}"),
            SegmentError::Tensor(err) => write!(f, "tensor error: {err}"),
            SegmentError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for SegmentError {}

impl From<InferError> for SegmentError {
    fn from(err: InferError) -> Self {
        SegmentError::Inference(err)
    }
}

impl From<ImageError> for SegmentError {
    fn from(err: ImageError) -> Self {
        SegmentError::Image(err)
    }
}

impl From<TensorError> for SegmentError {
    fn from(err: TensorError) -> Self {
        SegmentError::Tensor(err)
    }
}
