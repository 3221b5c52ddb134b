use phonetag_image::{Argb, ImageError, MaskImage, encode_png, encode_png_async};

fn sample_mask() -> MaskImage {
    let mut mask = MaskImage::transparent(4, 4);
    mask.set_pixel(1, 1, Argb::new(0xFF, 0xFF, 0, 0));
    mask.set_pixel(3, 3, Argb::new(0xFF, 0xFF, 0, 0));
    mask
}

#[test]
fn test_encode_png_signature() {
    let bytes = encode_png(&sample_mask()).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn test_encode_png_preserves_alpha() {
    let bytes = encode_png(&sample_mask()).unwrap();
    let decoded = crates_image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(decoded.dimensions(), (4, 4));
    assert_eq!(decoded.get_pixel(1, 1).0, [0xFF, 0, 0, 0xFF]);
    assert_eq!(decoded.get_pixel(3, 3).0, [0xFF, 0, 0, 0xFF]);
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
}

#[test]
fn test_encode_png_empty_mask() {
    let result = encode_png(&MaskImage::transparent(0, 0));
    assert!(matches!(result, Err(ImageError::Encode(_))));
}

#[tokio::test]
async fn test_encode_png_async_matches_sync() {
    let sync_bytes = encode_png(&sample_mask()).unwrap();
    let async_bytes = encode_png_async(sample_mask()).await.unwrap();
    assert_eq!(sync_bytes, async_bytes);
}
