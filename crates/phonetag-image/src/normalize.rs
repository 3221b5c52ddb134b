use crate::ImageError;
use phonetag_base::Tensor;

/// HWC f32 tensor with every channel mapped through `(v - mean) / std`.
pub type NormalizedImage = Tensor<f32>;

/// Normalizes an HWC RGB frame for inference.
///
/// The frame must be a `[height, width, 3]` tensor. Scaling the frame to the
/// model's input size happens upstream.
pub fn normalize(frame: &Tensor<u8>, mean: f32, std: f32) -> Result<NormalizedImage, ImageError> {
    if frame.ndim() != 3 || frame.shape[2] != 3 {
        return Err(ImageError::Shape(format!(
            "expected [H, W, 3] RGB frame, got {:?}",
            frame.shape
        )));
    }
    if std == 0.0 {
        return Err(ImageError::Shape("normalization std must be non-zero".to_string()));
    }

    let data = frame
        .data
        .iter()
        .map(|&v| (v as f32 - mean) / std)
        .collect();
    Ok(Tensor::new(frame.shape.clone(), data)?)
}
