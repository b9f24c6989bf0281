//! Conversion between the client band layout and the LAPACKE row-major band
//! layout.
//!
//! LAPACKE's row-major band storage is the transpose of the Fortran band
//! array: each row holds one diagonal, indexed by column.  Library row
//! `kd - jb` holds the diagonal that sits at client offset `jb` (upper), so
//! the main diagonal ends up in the last row for `Upper` and the first row
//! for `Lower`.  See the [`band`](../band/index.html) module for a picture.
//!
//! Only slots inside the band are read or written.
use super::band::{BandShape, Uplo};

/// Convert the client-form band matrix `src` (row stride `src_stride`) into
/// the diagonal-major library form `dst` (diagonal stride `dst_stride`).
///
/// Panics if either slice is too short for the given shape and strides.
pub fn to_library_form<T: Copy>(
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    src_stride: usize,
    dst: &mut [T],
    dst_stride: usize,
) {
    let shape = BandShape::new(uplo, n, kd);
    match uplo {
        Uplo::Upper => {
            for i in 0 .. n {
                let row = &src[i * src_stride ..];
                for jb in shape.row_offsets(i) {
                    let j = i + jb;
                    dst[(kd - jb) * dst_stride + j] = row[jb];
                }
            }
        }
        Uplo::Lower => {
            for i in 0 .. n {
                let row = &src[i * src_stride ..];
                for jb in shape.row_offsets(i) {
                    let j = i + jb - kd;
                    dst[(kd - jb) * dst_stride + j] = row[jb];
                }
            }
        }
    }
}

/// Convert the diagonal-major library form `src` (diagonal stride
/// `src_stride`) back into the client form `dst` (row stride `dst_stride`).
///
/// Inverse of [`to_library_form`](fn.to_library_form.html).
pub fn to_client_form<T: Copy>(
    uplo: Uplo,
    n: usize,
    kd: usize,
    src: &[T],
    src_stride: usize,
    dst: &mut [T],
    dst_stride: usize,
) {
    let shape = BandShape::new(uplo, n, kd);
    match uplo {
        Uplo::Upper => {
            for j in 0 .. n {
                for ib in shape.col_offsets(j) {
                    let i = j + ib - kd;
                    dst[i * dst_stride + kd - ib] = src[ib * src_stride + j];
                }
            }
        }
        Uplo::Lower => {
            for j in 0 .. n {
                for ib in shape.col_offsets(j) {
                    let i = j + ib;
                    dst[i * dst_stride + kd - ib] = src[ib * src_stride + j];
                }
            }
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
            X, X, 3.0, 6.0, 9.0, 12.0,
            X, 2.0, 5.0, 8.0, 11.0, 14.0,
            1.0, 4.0, 7.0, 10.0, 13.0, 15.0,
        ];
        let mut got = [X; 18];
        to_library_form(Uplo::Upper, 6, 2, &a, 3, &mut got, 6);
        assert_eq!(&got[..], &b[..]);

        let mut got = [X; 18];
        to_client_form(Uplo::Upper, 6, 2, &b, 6, &mut got, 3);
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
            1.0, 3.0, 6.0, 9.0, 12.0, 15.0,
            2.0, 5.0, 8.0, 11.0, 14.0, X,
            4.0, 7.0, 10.0, 13.0, X, X,
        ];
        let mut got = [X; 18];
        to_library_form(Uplo::Lower, 6, 2, &a, 3, &mut got, 6);
        assert_eq!(&got[..], &b[..]);

        let mut got = [X; 18];
        to_client_form(Uplo::Lower, 6, 2, &b, 6, &mut got, 3);
        assert_eq!(&got[..], &a[..]);
    }

    #[test]
    fn diagonal_only() {
        let a = [1, 2, 3, 4];
        for &uplo in &[Uplo::Upper, Uplo::Lower] {
            let mut b = [0; 4];
            to_library_form(uplo, 4, 0, &a, 1, &mut b, 4);
            assert_eq!(b, a);
            let mut c = [0; 4];
            to_client_form(uplo, 4, 0, &b, 4, &mut c, 1);
            assert_eq!(c, a);
        }
    }

    #[test]
    fn empty_matrix_touches_nothing() {
        let a: [i32; 0] = [];
        let mut b = [7; 3];
        to_library_form(Uplo::Upper, 0, 2, &a, 3, &mut b, 1);
        to_library_form(Uplo::Lower, 0, 2, &a, 3, &mut b, 1);
        assert_eq!(b, [7; 3]);
        let mut c: [i32; 0] = [];
        to_client_form(Uplo::Lower, 0, 2, &b, 1, &mut c, 3);
    }
}
