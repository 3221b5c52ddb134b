use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Encode(String),
    Shape(String),
    Tensor(phonetag_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Shape(msg) => write!(f, "shape error: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Encode(err.to_string())
    }
}

impl From<phonetag_base::TensorError> for ImageError {
    fn from(err: phonetag_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
