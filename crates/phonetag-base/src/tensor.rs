use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense row-major tensor. The last axis varies fastest.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Product of all dimensions, or `ShapeOverflow` if it does not fit in usize.
pub fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    shape.iter().try_fold(1usize, |product, &dim| {
        product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)
    })
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let product = element_count(&shape)?;
        if product != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: product,
                got: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let product = element_count(&shape)?;
        let data = vec![T::default(); product];
        Ok(Self { shape, data })
    }
}

impl Tensor<f32> {
    /// Builds an f32 tensor from a packed little-endian byte buffer.
    ///
    /// The byte length must be exactly four times the shape product.
    pub fn from_le_bytes(shape: Vec<usize>, bytes: &[u8]) -> Result<Self, TensorError> {
        let product = element_count(&shape)?;
        let expected_bytes = product
            .checked_mul(4)
            .ok_or(TensorError::ShapeOverflow)?;
        if bytes.len() != expected_bytes {
            return Err(TensorError::ShapeMismatch {
                expected: product,
                got: bytes.len() / 4,
            });
        }

        let data = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(Self { shape, data })
    }
}
