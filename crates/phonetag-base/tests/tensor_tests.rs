use phonetag_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.ndim(), 2);
    assert_eq!(tensor.len(), 6);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 6,
            got: 3
        }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<u8>::zeros(vec![4, 4, 3]).unwrap();
    assert_eq!(tensor.len(), 48);
    assert!(tensor.data.iter().all(|&v| v == 0));
}

#[test]
fn test_tensor_is_empty() {
    assert!(Tensor::<f32>::new(vec![0], vec![]).unwrap().is_empty());
    assert!(!Tensor::new(vec![1], vec![1.0f32]).unwrap().is_empty());
}

#[test]
fn test_tensor_from_le_bytes() {
    let mut bytes = Vec::new();
    for v in [0.5f32, -1.0, 2.25, 8.0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    let tensor = Tensor::from_le_bytes(vec![2, 2], &bytes).unwrap();
    assert_eq!(tensor.data, vec![0.5, -1.0, 2.25, 8.0]);
}

#[test]
fn test_tensor_from_le_bytes_wrong_length() {
    let bytes = vec![0u8; 12];
    let result = Tensor::from_le_bytes(vec![2, 2], &bytes);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 4,
            got: 3
        }
    );
}

#[test]
fn test_tensor_from_le_bytes_ragged_length() {
    let bytes = vec![0u8; 7];
    assert!(Tensor::from_le_bytes(vec![2], &bytes).is_err());
}

#[test]
fn test_tensor_debug_omits_data() {
    let tensor = Tensor::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let debug_str = format!("{:?}", tensor);
    assert!(debug_str.contains("shape"));
    assert!(debug_str.contains("len: 4"));
}

#[test]
fn test_tensor_error_display() {
    let err = TensorError::ShapeMismatch {
        expected: 10,
        got: 5,
    };
    assert_eq!(
        err.to_string(),
        "shape mismatch: expected 10 elements, got 5"
    );
}
