use std::fmt;
use std::time::Duration;

/// Timing summary handed to the renderer with every mask.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionReport {
    pub image_size: usize,
    pub threads: usize,
    pub preprocess: Duration,
    pub inference: Duration,
    pub decode: Duration,
    pub total: Duration,
    pub items_found: Vec<String>,
}

impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input Image Size: {0} x {0}", self.image_size)?;
        writeln!(f, "Number of threads: {}", self.threads)?;
        writeln!(f, "Pre-process execution time: {} ms", self.preprocess.as_millis())?;
        writeln!(f, "Model execution time: {} ms", self.inference.as_millis())?;
        writeln!(f, "Mask flatten time: {} ms", self.decode.as_millis())?;
        writeln!(f, "Full execution time: {} ms", self.total.as_millis())?;
        if self.items_found.is_empty() {
            writeln!(f, "Items found: none")
        } else {
            writeln!(f, "Items found: {}", self.items_found.join(", "))
        }
    }
}
