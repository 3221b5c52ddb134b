use crate::{Argb, ImageError};

/// Row-major grid of `Argb` pixels; pixel `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskImage {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl MaskImage {
    /// A fully transparent image, the initial state of every decode.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Argb::TRANSPARENT; width * height],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Argb>) -> Result<Self, ImageError> {
        if pixels.len() != width * height {
            return Err(ImageError::Shape(format!(
                "{}x{} mask needs {} pixels, got {}",
                width,
                height,
                width * height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Returns false when `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Argb) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] = color;
        true
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    pub fn count_where(&self, predicate: impl Fn(Argb) -> bool) -> usize {
        self.pixels.iter().filter(|&&p| predicate(p)).count()
    }

    pub fn is_fully_transparent(&self) -> bool {
        self.pixels.iter().all(|p| p.is_transparent())
    }

    /// Flattens to RGBA bytes, four per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba()).collect()
    }
}
