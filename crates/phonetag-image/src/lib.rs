//! Pixel and image types for segmentation masks.
//!
//! Masks are row-major grids of packed `Argb` colors. Camera frames enter as
//! HWC `Tensor<u8>` RGB buffers and are normalized into `Tensor<f32>` before
//! inference.

pub mod argb;
pub mod error;
pub mod mask;
pub mod normalize;
pub mod png;

pub use argb::Argb;
pub use error::ImageError;
pub use mask::MaskImage;
pub use normalize::{NormalizedImage, normalize};
pub use png::{encode_png, encode_png_async};
