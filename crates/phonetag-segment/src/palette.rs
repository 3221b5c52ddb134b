use crate::SegmentError;
use phonetag_image::Argb;

/// PASCAL VOC labels produced by the DeepLab v3 model, in class order.
pub const LABELS: [&str; 21] = [
    "background",
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "dining table",
    "dog",
    "horse",
    "motorbike",
    "person",
    "potted plant",
    "sheep",
    "sofa",
    "train",
    "tv",
];

pub const NUM_CLASSES: usize = LABELS.len();
pub const PERSON_CLASS: usize = 15;

/// Opaque red.
pub const HIGHLIGHT_COLOR: Argb = Argb::new(0xFF, 0xFF, 0x00, 0x00);

const CLASS_ALPHA: u8 = 200;

/// Cosmetic color for a non-highlight class; spread by a multiplicative hash.
fn class_color(class: usize) -> Argb {
    let h = (class as u32).wrapping_mul(0x9E37_79B1);
    Argb::new(CLASS_ALPHA, (h >> 24) as u8, (h >> 16) as u8, (h >> 8) as u8)
}

/// Class index to color. Class indices are stored as `u8`, so at most 256 classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPalette {
    colors: Vec<Argb>,
    labels: Option<Vec<String>>,
}

impl ClassPalette {
    pub const MAX_CLASSES: usize = u8::MAX as usize + 1;

    pub fn new(colors: Vec<Argb>) -> Result<Self, SegmentError> {
        if colors.is_empty() || colors.len() > Self::MAX_CLASSES {
            return Err(SegmentError::InvalidPalette(format!(
                "palette must hold 1..={} colors, got {}",
                Self::MAX_CLASSES,
                colors.len()
            )));
        }
        Ok(Self {
            colors,
            labels: None,
        })
    }

    /// Background transparent, `highlight_class` in [`HIGHLIGHT_COLOR`], every
    /// other class a fixed semi-transparent color.
    pub fn generated(num_classes: usize, highlight_class: usize) -> Result<Self, SegmentError> {
        if highlight_class >= num_classes {
            return Err(SegmentError::InvalidHighlightClass {
                class: highlight_class,
                num_classes,
            });
        }
        let mut colors: Vec<Argb> = (0..num_classes).map(class_color).collect();
        colors[0] = Argb::TRANSPARENT;
        colors[highlight_class] = HIGHLIGHT_COLOR;
        Self::new(colors)
    }

    /// The 21-class DeepLab palette with "person" highlighted.
    pub fn deeplab() -> Result<Self, SegmentError> {
        Self::generated(NUM_CLASSES, PERSON_CLASS)?.with_labels(LABELS)
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Result<Self, SegmentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.colors.len() {
            return Err(SegmentError::InvalidPalette(format!(
                "{} labels for {} classes",
                labels.len(),
                self.colors.len()
            )));
        }
        self.labels = Some(labels);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, class: usize) -> Option<Argb> {
        self.colors.get(class).copied()
    }

    pub fn label(&self, class: usize) -> Option<&str> {
        self.labels.as_ref()?.get(class).map(String::as_str)
    }
}
