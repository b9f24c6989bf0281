//! Geometry of triangular and symmetric band matrices.
//!
//! An n×n band matrix with `kd` off-diagonals only stores the `kd + 1`
//! diagonals on one side of (and including) the main diagonal.  The helpers
//! here describe which slots of each storage form hold those diagonals.
//!
//! For `n = 6`, `kd = 2` the client form (row-major, one row of `kd + 1`
//! slots per matrix row) looks like
//!
//! ```text
//! Upper:              Lower:
//!  a00  a01  a02        *    *   a00
//!  a11  a12  a13        *   a10  a11
//!  a22  a23  a24       a20  a21  a22
//!  a33  a34  a35       a31  a32  a33
//!  a44  a45   *        a42  a43  a44
//!  a55   *    *        a53  a54  a55
//! ```
//!
//! and both library forms hold the same matrix one diagonal per row (or per
//! column, for the Fortran order):
//!
//! ```text
//! Upper:                          Lower:
//!   *   *  a02 a13 a24 a35        a00 a11 a22 a33 a44 a55
//!   *  a01 a12 a23 a34 a45        a10 a21 a32 a43 a54  *
//!  a00 a11 a22 a33 a44 a55        a20 a31 a42 a53  *   *
//! ```
//!
//! Slots marked `*` are never referenced.
use std::cmp::{max, min};
use std::fmt;
use std::ops::Range;

/// Which triangle of the matrix is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Uplo {
    Upper,
    Lower,
}

impl Default for Uplo {
    fn default() -> Self {
        Uplo::Upper
    }
}

impl Uplo {
    /// Character code understood by LAPACK.
    pub fn to_u8(self) -> u8 {
        match self {
            Uplo::Upper => b'U',
            Uplo::Lower => b'L',
        }
    }

    /// Accepts either case, like LAPACK's `lsame`.
    pub fn from_u8(c: u8) -> Option<Self> {
        match c {
            b'U' | b'u' => Some(Uplo::Upper),
            b'L' | b'l' => Some(Uplo::Lower),
            _ => None,
        }
    }
}

impl fmt::Display for Uplo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_u8() as char)
    }
}

/// Dimensions of an n×n band matrix with `kd` super- (`Upper`) or
/// sub-diagonals (`Lower`).
///
/// `kd` may exceed `n`; the extra diagonals simply fall outside the matrix
/// and are never addressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
pub struct BandShape {
    pub uplo: Uplo,
    pub n: usize,
    pub kd: usize,
}

impl BandShape {
    pub fn new(uplo: Uplo, n: usize, kd: usize) -> Self {
        Self { uplo, n, kd }
    }

    /// Number of slots per client row, which is also the number of library
    /// diagonals.
    pub fn width(self) -> usize {
        self.kd + 1
    }

    /// Range of client offsets `jb` in row `i` that hold matrix entries.
    ///
    /// The entry at offset `jb` lies in column `i + jb` (upper) or
    /// `i + jb - kd` (lower).
    pub fn row_offsets(self, i: usize) -> Range<usize> {
        debug_assert!(i < self.n);
        match self.uplo {
            Uplo::Upper => 0 .. min(self.n - i, self.kd + 1),
            Uplo::Lower => self.kd.saturating_sub(i) .. self.kd + 1,
        }
    }

    /// Range of library diagonal slots `ib` in column `j` that hold matrix
    /// entries.
    ///
    /// The entry at slot `ib` lies in row `j + ib - kd` (upper) or `j + ib`
    /// (lower).
    pub fn col_offsets(self, j: usize) -> Range<usize> {
        debug_assert!(j < self.n);
        match self.uplo {
            Uplo::Upper => self.kd.saturating_sub(j) .. self.kd + 1,
            Uplo::Lower => 0 .. min(self.n - j, self.kd + 1),
        }
    }

    /// Whether entry `(i, j)` of the full matrix lies inside the band.
    pub fn contains(self, i: usize, j: usize) -> bool {
        if i >= self.n || j >= self.n {
            return false;
        }
        match self.uplo {
            Uplo::Upper => i <= j && j - i <= self.kd,
            Uplo::Lower => j <= i && i - j <= self.kd,
        }
    }

    /// Number of diagonals that actually intersect the matrix, counting the
    /// main diagonal.
    pub fn num_diags(self) -> usize {
        min(self.kd + 1, self.n)
    }

    /// Number of stored entries.
    pub fn num_elems(self) -> usize {
        // main diagonal has n entries, the d-th off-diagonal n - d
        let k = self.num_diags();
        k * self.n - k * k.saturating_sub(1) / 2
    }

    /// Minimal length of a client-form buffer with row stride `stride`.
    pub fn client_len(self, stride: usize) -> usize {
        if self.n == 0 {
            0
        } else {
            (self.n - 1) * stride + self.kd + 1
        }
    }

    /// Minimal leading dimension of the diagonal-major library form.
    pub fn library_stride(self) -> usize {
        max(1, self.n)
    }

    /// Minimal length of a diagonal-major library buffer with stride
    /// `stride`.
    pub fn library_len(self, stride: usize) -> usize {
        (self.kd + 1) * stride
    }

    /// Minimal length of a column-major library buffer with column stride
    /// `stride`.
    pub fn col_major_len(self, stride: usize) -> usize {
        if self.n == 0 {
            0
        } else {
            (self.n - 1) * stride + self.kd + 1
        }
    }

    /// Position of entry `(i, j)` in a client buffer with row stride
    /// `stride`.  Only meaningful if `contains(i, j)`.
    pub fn client_index(self, i: usize, j: usize, stride: usize) -> usize {
        match self.uplo {
            Uplo::Upper => i * stride + (j - i),
            Uplo::Lower => i * stride + (self.kd + j - i),
        }
    }

    /// Position of entry `(i, j)` in a diagonal-major library buffer with
    /// stride `stride`.  Only meaningful if `contains(i, j)`.
    pub fn library_index(self, i: usize, j: usize, stride: usize) -> usize {
        match self.uplo {
            Uplo::Upper => (self.kd + i - j) * stride + j,
            Uplo::Lower => (i - j) * stride + j,
        }
    }

    /// Position of entry `(i, j)` in a column-major library buffer with
    /// column stride `stride`.  Only meaningful if `contains(i, j)`.
    pub fn col_major_index(self, i: usize, j: usize, stride: usize) -> usize {
        match self.uplo {
            Uplo::Upper => self.kd + i - j + j * stride,
            Uplo::Lower => i - j + j * stride,
        }
    }

    /// Full-matrix coordinates of every stored entry, row by row.
    pub fn entries(self) -> impl Iterator<Item = (usize, usize)> {
        let shape = self;
        (0 .. self.n).flat_map(move |i| {
            shape.row_offsets(i).map(move |jb| match shape.uplo {
                Uplo::Upper => (i, i + jb),
                Uplo::Lower => (i, i + jb - shape.kd),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_containment() {
        for &uplo in &[Uplo::Upper, Uplo::Lower] {
            for n in 0 .. 7 {
                for kd in 0 .. 9 {
                    let shape = BandShape::new(uplo, n, kd);
                    let mut count = 0;
                    for (i, j) in shape.entries() {
                        assert!(shape.contains(i, j), "{:?} {:?}", shape, (i, j));
                        count += 1;
                    }
                    let expected = (0 .. n)
                        .flat_map(|i| (0 .. n).map(move |j| (i, j)))
                        .filter(|&(i, j)| shape.contains(i, j))
                        .count();
                    assert_eq!(count, expected);
                    assert_eq!(shape.num_elems(), expected);
                }
            }
        }
    }

    #[test]
    fn row_and_col_offsets_agree() {
        let shape = BandShape::new(Uplo::Upper, 6, 2);
        assert_eq!(shape.row_offsets(0), 0 .. 3);
        assert_eq!(shape.row_offsets(4), 0 .. 2);
        assert_eq!(shape.row_offsets(5), 0 .. 1);
        assert_eq!(shape.col_offsets(0), 2 .. 3);
        assert_eq!(shape.col_offsets(1), 1 .. 3);
        assert_eq!(shape.col_offsets(5), 0 .. 3);

        let shape = BandShape::new(Uplo::Lower, 6, 2);
        assert_eq!(shape.row_offsets(0), 2 .. 3);
        assert_eq!(shape.row_offsets(1), 1 .. 3);
        assert_eq!(shape.row_offsets(5), 0 .. 3);
        assert_eq!(shape.col_offsets(0), 0 .. 3);
        assert_eq!(shape.col_offsets(4), 0 .. 2);
        assert_eq!(shape.col_offsets(5), 0 .. 1);
    }

    #[test]
    fn sizes() {
        let shape = BandShape::new(Uplo::Lower, 6, 2);
        assert_eq!(shape.num_elems(), 15);
        assert_eq!(shape.client_len(3), 18);
        assert_eq!(shape.library_stride(), 6);
        assert_eq!(shape.library_len(6), 18);

        let empty = BandShape::new(Uplo::Upper, 0, 3);
        assert_eq!(empty.num_elems(), 0);
        assert_eq!(empty.client_len(4), 0);
        assert_eq!(empty.library_stride(), 1);
        assert_eq!(empty.library_len(1), 4);

        let full = BandShape::new(Uplo::Upper, 4, 10);
        assert_eq!(full.num_elems(), 10);
    }

    #[test]
    fn indices() {
        // entry a13 of the n = 6, kd = 2 examples
        let upper = BandShape::new(Uplo::Upper, 6, 2);
        assert_eq!(upper.client_index(1, 3, 3), 5);
        assert_eq!(upper.library_index(1, 3, 6), 3);
        assert_eq!(upper.col_major_index(1, 3, 3), 9);
        // entry a31
        let lower = BandShape::new(Uplo::Lower, 6, 2);
        assert_eq!(lower.client_index(3, 1, 3), 9);
        assert_eq!(lower.library_index(3, 1, 6), 13);
        assert_eq!(lower.col_major_index(3, 1, 3), 5);
    }

    #[test]
    fn uplo_codes() {
        assert_eq!(Uplo::Upper.to_u8(), b'U');
        assert_eq!(Uplo::from_u8(b'l'), Some(Uplo::Lower));
        assert_eq!(Uplo::from_u8(b'X'), None);
        assert_eq!(Uplo::Lower.to_string(), "L");
    }
}
