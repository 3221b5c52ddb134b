use crate::{ClassPalette, ExecutionReport, SegmentError, SegmenterConfig, Session, segment};
use phonetag_base::Tensor;
use phonetag_image::{ImageError, MaskImage, normalize};
use std::time::Instant;

/// Worker threads used by the mask decoder, one per quadrant.
pub const DECODE_THREADS: usize = 4;

/// What the renderer receives for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelExecutionResult {
    pub mask: MaskImage,
    pub execution_log: String,
    pub items_found: Vec<String>,
}

/// Runs normalize, inference and mask decoding for camera frames.
pub struct SegmentationExecutor<S: Session> {
    session: S,
    config: SegmenterConfig,
    palette: ClassPalette,
}

impl<S: Session> SegmentationExecutor<S> {
    pub fn new(session: S, config: SegmenterConfig) -> Result<Self, SegmentError> {
        config.validate()?;
        let palette = config.palette()?;
        log::info!(
            "segmentation executor ready: {}x{} input, {} classes, highlight class {}",
            config.image_size,
            config.image_size,
            config.num_classes,
            config.highlight_class
        );
        Ok(Self {
            session,
            config,
            palette,
        })
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn palette(&self) -> &ClassPalette {
        &self.palette
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Segments one `[image_size, image_size, 3]` RGB frame.
    ///
    /// Never fails: on error the mask is fully transparent and the log
    /// carries the error message.
    pub fn execute(&mut self, frame: &Tensor<u8>) -> ModelExecutionResult {
        match self.try_execute(frame) {
            Ok(result) => result,
            Err(err) => {
                let message = format!("something went wrong: {err}");
                log::error!("{}", message);
                ModelExecutionResult {
                    mask: MaskImage::transparent(self.config.image_size, self.config.image_size),
                    execution_log: message,
                    items_found: Vec::new(),
                }
            }
        }
    }

    pub fn try_execute(&mut self, frame: &Tensor<u8>) -> Result<ModelExecutionResult, SegmentError> {
        let size = self.config.image_size;
        let started = Instant::now();

        if frame.ndim() != 3 || frame.shape[0] != size || frame.shape[1] != size {
            return Err(SegmentError::Image(ImageError::Shape(format!(
                "frame shape {:?} does not match model input {}x{}",
                frame.shape, size, size
            ))));
        }
        let input = normalize(frame, self.config.image_mean, self.config.image_std)?;
        let preprocess = started.elapsed();

        let inference_started = Instant::now();
        let mut outputs = self
            .session
            .run(&[(self.config.input_name.as_str(), input)])?;
        let inference = inference_started.elapsed();

        let output = outputs
            .remove(&self.config.output_name)
            .ok_or_else(|| SegmentError::MissingOutput(self.config.output_name.clone()))?;

        let decode_started = Instant::now();
        let segmentation = segment(&output.data, size, &self.palette, self.config.highlight_class)?;
        let decode = decode_started.elapsed();

        let items_found = segmentation.items_found(&self.palette);

        let report = ExecutionReport {
            image_size: size,
            threads: DECODE_THREADS,
            preprocess,
            inference,
            decode,
            total: started.elapsed(),
            items_found: items_found.clone(),
        };
        log::debug!("Total time execution {} ms", report.total.as_millis());

        Ok(ModelExecutionResult {
            mask: segmentation.mask,
            execution_log: report.to_string(),
            items_found,
        })
    }
}
