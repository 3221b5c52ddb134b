use crate::{ImageError, MaskImage};
use crates_image::ImageEncoder;

fn encode_png_inner(mask: &MaskImage) -> Result<Vec<u8>, ImageError> {
    let rgba = mask.to_rgba8();
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &rgba,
            mask.width() as u32,
            mask.height() as u32,
            crates_image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encodes a mask as an RGBA PNG, alpha channel preserved.
///
/// # Errors
///
/// Returns `ImageError::Encode` for empty masks or encoder failures.
pub fn encode_png(mask: &MaskImage) -> Result<Vec<u8>, ImageError> {
    if mask.width() == 0 || mask.height() == 0 {
        return Err(ImageError::Encode("cannot encode an empty mask".to_string()));
    }
    encode_png_inner(mask)
}

/// Same as [`encode_png`], on tokio's blocking thread pool.
pub async fn encode_png_async(mask: MaskImage) -> Result<Vec<u8>, ImageError> {
    tokio::task::spawn_blocking(move || encode_png(&mask))
        .await
        .map_err(|e| ImageError::Encode(e.to_string()))?
}
