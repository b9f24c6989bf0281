//! Argument checks performed by the wrappers before touching any buffer.
//!
//! Each check either passes or returns the first violation found; nothing is
//! converted or copied until every check of a call has passed.
use std::cmp::max;
use super::band::BandShape;
use super::error::{Error, Result};
use super::utils::try_cast;

/// Convert a dimension to a LAPACK integer.
pub fn lapack_int(name: &'static str, value: usize) -> Result<i32> {
    try_cast(value).ok_or_else(|| {
        debug!("{} = {} does not fit in a LAPACK integer", name, value);
        Error::InvalidDimension(name, value)
    })
}

fn leading_dim(name: &'static str, value: usize, min: usize) -> Result<i32> {
    if value < min {
        debug!("{} = {} is below the minimum of {}", name, value, min);
        return Err(Error::InvalidLeadingDimension(name, value, min));
    }
    lapack_int(name, value)
}

/// Require `len >= min`.
pub fn vec_len(name: &'static str, len: usize, min: usize) -> Result<()> {
    if len < min {
        debug!("len({}) = {} is below the minimum of {}", name, len, min);
        return Err(Error::InsufficientBuffer(name, len, min));
    }
    Ok(())
}

/// Require `len == expected`, as LAPACK does for pivot vectors.
pub fn exact_len(name: &'static str, len: usize, expected: usize)
                 -> Result<()> {
    if len != expected {
        debug!("len({}) = {} differs from {}", name, len, expected);
        return Err(Error::InvalidDimension(name, len));
    }
    Ok(())
}

/// Client band stride must hold a full row of `kd + 1` slots.
pub fn band_stride(name: &'static str, shape: BandShape, stride: usize)
                   -> Result<i32> {
    leading_dim(name, stride, shape.width())
}

/// Row-major general stride must hold a full row of `ncols` entries.
pub fn general_stride(name: &'static str, ncols: usize, stride: usize)
                      -> Result<i32> {
    leading_dim(name, stride, max(1, ncols))
}

/// Client band buffer must reach the last referenced slot.
pub fn band_buffer(name: &'static str, shape: BandShape, len: usize,
                   stride: usize) -> Result<()> {
    vec_len(name, len, shape.client_len(stride))
}

/// Row-major `nrows`×`ncols` buffer must reach its last entry.
pub fn general_buffer(name: &'static str, nrows: usize, ncols: usize,
                      len: usize, stride: usize) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        return Ok(());
    }
    vec_len(name, len, (nrows - 1) * stride + ncols)
}

/// Dimensions of a band call that LAPACK will see.
pub fn band_dims(shape: BandShape) -> Result<(i32, i32)> {
    Ok((lapack_int("n", shape.n)?, lapack_int("kd", shape.kd)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::band::Uplo;

    #[test]
    fn band_checks() {
        let shape = BandShape::new(Uplo::Upper, 6, 2);
        assert_eq!(band_stride("ldab", shape, 3), Ok(3));
        assert_eq!(band_stride("ldab", shape, 2),
                   Err(Error::InvalidLeadingDimension("ldab", 2, 3)));
        assert_eq!(band_buffer("ab", shape, 18, 3), Ok(()));
        assert_eq!(band_buffer("ab", shape, 17, 4),
                   Err(Error::InsufficientBuffer("ab", 17, 23)));
        assert_eq!(band_buffer("ab", BandShape::new(Uplo::Lower, 0, 2), 0, 3),
                   Ok(()));
    }

    #[test]
    fn general_checks() {
        assert_eq!(general_stride("lda", 0, 1), Ok(1));
        assert_eq!(general_stride("lda", 2, usize::MAX),
                   Err(Error::InvalidDimension("lda", usize::MAX)));
        assert_eq!(general_stride("lda", 0, 0),
                   Err(Error::InvalidLeadingDimension("lda", 0, 1)));
        assert_eq!(general_buffer("a", 3, 2, 6, 2), Ok(()));
        assert_eq!(general_buffer("a", 3, 2, 6, 3),
                   Err(Error::InsufficientBuffer("a", 6, 8)));
        assert_eq!(general_buffer("a", 0, 2, 0, 3), Ok(()));
        assert_eq!(exact_len("ipiv", 3, 4),
                   Err(Error::InvalidDimension("ipiv", 3)));
    }

    #[test]
    fn dims_must_fit() {
        assert_eq!(lapack_int("n", 10), Ok(10));
        assert_eq!(lapack_int("n", usize::MAX),
                   Err(Error::InvalidDimension("n", usize::MAX)));
    }
}
