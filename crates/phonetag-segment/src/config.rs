use crate::{ClassPalette, LABELS, NUM_CLASSES, PERSON_CLASS, SegmentError};
use phonetag_base::tensor::element_count;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one segmentation model. Missing JSON fields take the
/// DeepLab v3 257x257 defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub image_size: usize,
    pub num_classes: usize,
    pub highlight_class: usize,
    pub image_mean: f32,
    pub image_std: f32,
    pub input_name: String,
    pub output_name: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            image_size: 257,
            num_classes: NUM_CLASSES,
            highlight_class: PERSON_CLASS,
            image_mean: 127.5,
            image_std: 127.5,
            input_name: "input".to_string(),
            output_name: "output".to_string(),
        }
    }
}

impl SegmenterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SegmentError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SegmentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SegmentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SegmentError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.image_size == 0 {
            return Err(SegmentError::Config("image_size must be non-zero".to_string()));
        }
        if self.num_classes == 0 {
            return Err(SegmentError::Config("num_classes must be non-zero".to_string()));
        }
        if self.highlight_class >= self.num_classes {
            return Err(SegmentError::InvalidHighlightClass {
                class: self.highlight_class,
                num_classes: self.num_classes,
            });
        }
        if self.image_std == 0.0 {
            return Err(SegmentError::Config("image_std must be non-zero".to_string()));
        }
        self.output_len()?;
        Ok(())
    }

    /// Generated palette for this class count, labelled when it matches [`LABELS`].
    pub fn palette(&self) -> Result<ClassPalette, SegmentError> {
        let palette = ClassPalette::generated(self.num_classes, self.highlight_class)?;
        if self.num_classes == LABELS.len() {
            return palette.with_labels(LABELS);
        }
        Ok(palette)
    }

    /// Number of f32 scores in one inference output.
    pub fn output_len(&self) -> Result<usize, SegmentError> {
        element_count(&[self.image_size, self.image_size, self.num_classes]).map_err(|_| {
            SegmentError::Config(format!(
                "{0}x{0}x{1} output does not fit in memory",
                self.image_size, self.num_classes
            ))
        })
    }
}
