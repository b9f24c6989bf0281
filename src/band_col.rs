//! Conversion between the client band layout and the Fortran (column-major)
//! band layout.
//!
//! In Fortran order each column of the full matrix occupies `kd + 1`
//! consecutive slots (plus padding up to the column stride), with the main
//! diagonal in slot `kd` for `Upper` and slot `0` for `Lower`.  For `n = 6`,
//! `kd = 2`, `Upper`, the buffer reads
//!
//! ```text
//! [* * a00 | * a01 a11 | a02 a12 a22 | a13 a23 a33 | a24 a34 a44 | a35 a45 a55]
//! ```
use super::band::{BandShape, Uplo};

/// Convert the client-form band matrix `src` (row stride `src_stride`) into
/// column-major band storage `dst` (column stride `dst_stride`).
pub fn to_col_major<T: Copy>(
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    src_stride: usize,
    dst: &mut [T],
    dst_stride: usize,
) {
    let shape = BandShape::new(uplo, n, kd);
    for i in 0 .. n {
        let row = &src[i * src_stride ..];
        for jb in shape.row_offsets(i) {
            let j = match uplo {
                Uplo::Upper => i + jb,
                Uplo::Lower => i + jb - kd,
            };
            dst[kd - jb + j * dst_stride] = row[jb];
        }
    }
}

/// Convert column-major band storage `src` (column stride `src_stride`)
/// back into the client form `dst` (row stride `dst_stride`).
///
/// Inverse of [`to_col_major`](fn.to_col_major.html).
pub fn to_row_major<T: Copy>(
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    src_stride: usize,
    dst: &mut [T],
    dst_stride: usize,
) {
    let shape = BandShape::new(uplo, n, kd);
    for j in 0 .. n {
        let col = &src[j * src_stride ..];
        for ib in shape.col_offsets(j) {
            let i = match uplo {
                Uplo::Upper => j + ib - kd,
                Uplo::Lower => j + ib,
            };
            dst[i * dst_stride + kd - ib] = col[ib];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: f64 = -1.0;

    #[test]
    fn upper_example() {
        let a = [
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
            10.0, 11.0, 12.0,
            13.0, 14.0, X,
            15.0, X, X,
        ];
        let b = [
            X, X, 1.0,
            X, 2.0, 4.0,
            3.0, 5.0, 7.0,
            6.0, 8.0, 10.0,
            9.0, 11.0, 13.0,
            12.0, 14.0, 15.0,
        ];
        let mut got = [X; 18];
        to_col_major(Uplo::Upper, 6, 2, &a, 3, &mut got, 3);
        assert_eq!(&got[..], &b[..]);

        let mut got = [X; 18];
        to_row_major(Uplo::Upper, 6, 2, &b, 3, &mut got, 3);
        assert_eq!(&got[..], &a[..]);
    }

    #[test]
    fn lower_example() {
        let a = [
            X, X, 1.0,
            X, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
            10.0, 11.0, 12.0,
            13.0, 14.0, 15.0,
        ];
        let b = [
            1.0, 2.0, 4.0,
            3.0, 5.0, 7.0,
            6.0, 8.0, 10.0,
            9.0, 11.0, 13.0,
            12.0, 14.0, X,
            15.0, X, X,
        ];
        let mut got = [X; 18];
        to_col_major(Uplo::Lower, 6, 2, &a, 3, &mut got, 3);
        assert_eq!(&got[..], &b[..]);

        let mut got = [X; 18];
        to_row_major(Uplo::Lower, 6, 2, &b, 3, &mut got, 3);
        assert_eq!(&got[..], &a[..]);
    }

    #[test]
    fn padded_column_stride() {
        // upper, n = 3, kd = 1, column stride 4
        let a = [1, 2, 3, 4, 5, 0];
        let mut b = [0; 12];
        to_col_major(Uplo::Upper, 3, 1, &a, 2, &mut b, 4);
        assert_eq!(b, [0, 1, 0, 0, 2, 3, 0, 0, 4, 5, 0, 0]);
        let mut c = [0; 6];
        to_row_major(Uplo::Upper, 3, 1, &b, 4, &mut c, 2);
        assert_eq!(c, a);
    }
}
