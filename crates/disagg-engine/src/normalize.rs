//! Matrix normalization.

use disagg_core::errors::NormalizeError;

use crate::matrix::DisaggregationMatrix;

fn check_factor(factor: f64) -> Result<(), NormalizeError> {
    if factor == 0.0 {
        return Err(NormalizeError::DivideByZero);
    }
    if !factor.is_finite() {
        return Err(NormalizeError::NonFiniteFactor { factor });
    }
    Ok(())
}

/// Divide every cell by `factor`, in place.
///
/// The matrix is left untouched when the factor is rejected.
pub fn normalize(matrix: &mut DisaggregationMatrix, factor: f64) -> Result<(), NormalizeError> {
    check_factor(factor)?;
    for cell in matrix.cells_mut() {
        *cell /= factor;
    }
    Ok(())
}

/// Like `normalize`, but returns a new matrix and leaves `matrix` as is.
pub fn normalized(
    matrix: &DisaggregationMatrix,
    factor: f64,
) -> Result<DisaggregationMatrix, NormalizeError> {
    let mut copy = matrix.clone();
    normalize(&mut copy, factor)?;
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> DisaggregationMatrix {
        let mut m = DisaggregationMatrix::zeros([1, 2, 1, 1, 1]);
        m[[0, 0, 0, 0, 0]] = 0.5;
        m[[0, 1, 0, 0, 0]] = 3.0;
        m
    }

    #[test]
    fn test_halves_every_cell() {
        let mut m = matrix();
        normalize(&mut m, 2.0).unwrap();
        assert_eq!(m.cells(), &[0.25, 1.5]);
    }

    #[test]
    fn test_zero_factor() {
        let mut m = matrix();
        assert_eq!(normalize(&mut m, 0.0), Err(NormalizeError::DivideByZero));
        assert_eq!(normalize(&mut m, -0.0), Err(NormalizeError::DivideByZero));
        assert_eq!(m, matrix());
    }

    #[test]
    fn test_non_finite_factor() {
        let mut m = matrix();
        assert!(matches!(
            normalize(&mut m, f64::NAN),
            Err(NormalizeError::NonFiniteFactor { .. })
        ));
        assert!(normalize(&mut m, f64::INFINITY).is_err());
    }

    #[test]
    fn test_normalized_leaves_source() {
        let m = matrix();
        let half = normalized(&m, 2.0).unwrap();
        assert_eq!(m.cells(), &[0.5, 3.0]);
        assert_eq!(half.cells(), &[0.25, 1.5]);
    }
}
