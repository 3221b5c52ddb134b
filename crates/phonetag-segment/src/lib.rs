//! Semantic segmentation mask decoding.
//!
//! An inference [`Session`] turns a normalized camera frame into a
//! `[size, size, classes]` probability tensor; the decoder reduces it to a
//! [`MaskImage`](phonetag_image::MaskImage) by taking the per-pixel arg-max
//! on four scoped threads, one per image quadrant.

pub mod config;
pub mod decoder;
pub mod error;
pub mod executor;
pub mod palette;
pub mod quadrant;
pub mod report;
pub mod session;

pub use config::SegmenterConfig;
pub use decoder::{ClassMap, ClassScore, Segmentation, argmax, decode, segment};
pub use error::SegmentError;
pub use executor::{DECODE_THREADS, ModelExecutionResult, SegmentationExecutor};
pub use palette::{ClassPalette, HIGHLIGHT_COLOR, LABELS, NUM_CLASSES, PERSON_CLASS};
pub use quadrant::{Quadrant, QuadrantMut, split_quadrants};
pub use report::ExecutionReport;
pub use session::{InferError, Session};
