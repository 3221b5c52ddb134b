use crate::{ClassPalette, QuadrantMut, SegmentError, split_quadrants};
use phonetag_base::tensor::element_count;
use phonetag_image::{Argb, MaskImage};
use std::any::Any;
use std::thread;
use std::time::Instant;

/// Winning class of one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScore {
    pub class: usize,
    pub score: f32,
}

/// Arg-max over one pixel's class scores.
///
/// Class 0 starts as the winner and a later class replaces it only with a
/// strictly greater score, so ties go to the lower index. A NaN never wins
/// over the current maximum.
///
/// # Panics
///
/// Panics if `scores` is empty.
pub fn argmax(scores: &[f32]) -> ClassScore {
    let mut best = ClassScore {
        class: 0,
        score: scores[0],
    };
    for (class, &score) in scores.iter().enumerate().skip(1) {
        if score > best.score {
            best = ClassScore { class, score };
        }
    }
    best
}

/// Per-pixel winning class, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    size: usize,
    classes: Vec<u8>,
}

impl ClassMap {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn class_at(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.classes[y * self.size + x] as usize)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.classes
    }

    /// Distinct classes present, ascending.
    pub fn classes_found(&self) -> Vec<usize> {
        let mut seen = [false; 256];
        for &class in &self.classes {
            seen[class as usize] = true;
        }
        seen.iter()
            .enumerate()
            .filter_map(|(class, &present)| present.then_some(class))
            .collect()
    }
}

/// Output of [`segment`]: the rendered mask plus the class map behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub mask: MaskImage,
    pub classes: ClassMap,
}

impl Segmentation {
    pub fn classes_found(&self) -> Vec<usize> {
        self.classes.classes_found()
    }

    /// Labels of every non-background class present, `"class N"` when unlabelled.
    pub fn items_found(&self, palette: &ClassPalette) -> Vec<String> {
        self.classes_found()
            .into_iter()
            .filter(|&class| class != 0)
            .map(|class| {
                palette
                    .label(class)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("class {class}"))
            })
            .collect()
    }
}

/// Decodes a `[size, size, classes]` score tensor into a mask image.
///
/// Only pixels whose winning class is `highlight_class` are drawn (in that
/// class's palette color); every other pixel stays transparent.
pub fn decode(
    tensor: &[f32],
    size: usize,
    palette: &ClassPalette,
    highlight_class: usize,
) -> Result<MaskImage, SegmentError> {
    segment(tensor, size, palette, highlight_class).map(|s| s.mask)
}

/// Like [`decode`], also returning the winning class of every pixel.
///
/// # Errors
///
/// `InvalidHighlightClass` if `highlight_class` is not a palette index,
/// `ShapeMismatch` if `size` is zero or the tensor is not exactly
/// `size * size * palette.len()` long, `DecodeTaskFailure` if a quadrant
/// worker fails. No partial image is ever returned.
pub fn segment(
    tensor: &[f32],
    size: usize,
    palette: &ClassPalette,
    highlight_class: usize,
) -> Result<Segmentation, SegmentError> {
    let num_classes = palette.len();
    let highlight_color = palette
        .color(highlight_class)
        .ok_or(SegmentError::InvalidHighlightClass {
            class: highlight_class,
            num_classes,
        })?;

    // an unrepresentable element count can never match the tensor
    let expected = element_count(&[size, size, num_classes]).map_err(|_| {
        SegmentError::ShapeMismatch {
            expected: usize::MAX,
            got: tensor.len(),
        }
    })?;
    if size == 0 || tensor.len() != expected {
        return Err(SegmentError::ShapeMismatch {
            expected,
            got: tensor.len(),
        });
    }

    let start = Instant::now();
    let mut mask = MaskImage::transparent(size, size);
    let mut classes = vec![0u8; size * size];

    run_quadrants(mask.pixels_mut(), &mut classes, size, |pixels, labels| {
        decode_quadrant(
            tensor,
            size,
            num_classes,
            highlight_class,
            highlight_color,
            pixels,
            labels,
        )
    })?;

    log::debug!(
        "decoded {}x{} mask ({} classes) in {:?}",
        size,
        size,
        num_classes,
        start.elapsed()
    );

    Ok(Segmentation {
        mask,
        classes: ClassMap { size, classes },
    })
}

fn decode_quadrant(
    tensor: &[f32],
    size: usize,
    num_classes: usize,
    highlight_class: usize,
    highlight_color: Argb,
    mut pixels: QuadrantMut<'_, Argb>,
    mut labels: QuadrantMut<'_, u8>,
) -> Result<(), SegmentError> {
    let quadrant = pixels.quadrant();
    let x0 = pixels.x_range().start;

    for ((y, pixel_row), (_, label_row)) in pixels.rows_mut().zip(labels.rows_mut()) {
        for (i, (pixel, label)) in pixel_row.iter_mut().zip(label_row.iter_mut()).enumerate() {
            let x = x0 + i;
            let offset = (y * size + x) * num_classes;
            let scores = tensor.get(offset..offset + num_classes).ok_or_else(|| {
                SegmentError::DecodeTaskFailure {
                    quadrant,
                    message: format!("scores for pixel ({x}, {y}) out of bounds"),
                }
            })?;

            let winner = argmax(scores);
            *label = winner.class as u8;
            if winner.class == highlight_class {
                *pixel = highlight_color;
            }
        }
    }
    Ok(())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Runs `task` once per quadrant on four scoped threads.
///
/// Both buffers are physically split so each thread owns its region. Every
/// spawned thread is joined before returning, and the first failure in
/// [`Quadrant::ALL`](crate::Quadrant::ALL) order is reported.
fn run_quadrants<F>(
    pixels: &mut [Argb],
    labels: &mut [u8],
    size: usize,
    task: F,
) -> Result<(), SegmentError>
where
    F: Fn(QuadrantMut<'_, Argb>, QuadrantMut<'_, u8>) -> Result<(), SegmentError> + Sync,
{
    let pixel_quadrants = split_quadrants(pixels, size);
    let label_quadrants = split_quadrants(labels, size);
    let task = &task;

    thread::scope(|scope| {
        let handles: Vec<_> = pixel_quadrants
            .into_iter()
            .zip(label_quadrants)
            .map(|(pixels, labels)| {
                let quadrant = pixels.quadrant();
                let handle = thread::Builder::new()
                    .name(format!("mask-{quadrant}"))
                    .spawn_scoped(scope, move || task(pixels, labels));
                (quadrant, handle)
            })
            .collect();

        let mut first_error = None;
        for (quadrant, handle) in handles {
            let outcome = match handle {
                Ok(handle) => handle.join().unwrap_or_else(|payload| {
                    Err(SegmentError::DecodeTaskFailure {
                        quadrant,
                        message: panic_message(payload),
                    })
                }),
                Err(e) => Err(SegmentError::DecodeTaskFailure {
                    quadrant,
                    message: format!("failed to spawn worker: {e}"),
                }),
            };
            if let Err(err) = outcome {
                log::warn!("mask decode failed in {} quadrant: {}", quadrant, err);
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })
}
