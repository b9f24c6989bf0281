//! Safe wrappers over LAPACKE for row-major, zero-based callers.
//!
//! Every wrapper validates its arguments first, converts band matrices and
//! index vectors into the layout the native routine expects, calls it, and
//! converts whatever the routine overwrote back into client form.  Nothing is
//! touched if validation fails.
use std::cmp::{max, min};
use std::fmt::Debug;
use lapacke::{self, Layout};
use num::Float;
use super::{band_col, band_tri, pivot, validate};
use super::band::{BandShape, Uplo};
use super::error::{Error, Result};
use super::scratch::Scratch;
use super::utils::cast;

/// Whether to apply the matrix, its transpose, or its conjugate transpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trans {
    No,
    Trans,
    ConjTrans,
}

impl Default for Trans {
    fn default() -> Self {
        Trans::No
    }
}

impl Trans {
    pub fn to_u8(self) -> u8 {
        match self {
            Trans::No => b'N',
            Trans::Trans => b'T',
            Trans::ConjTrans => b'C',
        }
    }
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diag {
    NonUnit,
    Unit,
}

impl Default for Diag {
    fn default() -> Self {
        Diag::NonUnit
    }
}

impl Diag {
    pub fn to_u8(self) -> u8 {
        match self {
            Diag::NonUnit => b'N',
            Diag::Unit => b'U',
        }
    }
}

/// What `gebal` does to a general matrix before an eigenvalue computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Balance {
    None,
    Permute,
    Scale,
    Both,
}

impl Default for Balance {
    fn default() -> Self {
        Balance::Both
    }
}

impl Balance {
    pub fn to_u8(self) -> u8 {
        match self {
            Balance::None => b'N',
            Balance::Permute => b'P',
            Balance::Scale => b'S',
            Balance::Both => b'B',
        }
    }
}

/// Which eigenvectors `gebak` back-transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Left => b'L',
            Side::Right => b'R',
        }
    }
}

/// Raw LAPACKE entry points for one element type.
pub trait Lapack: Float + Debug {
    unsafe fn pbtrf(layout: Layout, uplo: u8, n: i32, kd: i32,
                    ab: &mut [Self], ldab: i32) -> i32;

    unsafe fn pbtrs(layout: Layout, uplo: u8, n: i32, kd: i32, nrhs: i32,
                    ab: &[Self], ldab: i32, b: &mut [Self], ldb: i32) -> i32;

    unsafe fn pbcon(layout: Layout, uplo: u8, n: i32, kd: i32,
                    ab: &[Self], ldab: i32, anorm: Self,
                    rcond: &mut Self) -> i32;

    unsafe fn tbtrs(layout: Layout, uplo: u8, trans: u8, diag: u8,
                    n: i32, kd: i32, nrhs: i32, ab: &[Self], ldab: i32,
                    b: &mut [Self], ldb: i32) -> i32;

    unsafe fn getrf(layout: Layout, m: i32, n: i32, a: &mut [Self], lda: i32,
                    ipiv: &mut [i32]) -> i32;

    unsafe fn getrs(layout: Layout, trans: u8, n: i32, nrhs: i32,
                    a: &[Self], lda: i32, ipiv: &[i32],
                    b: &mut [Self], ldb: i32) -> i32;

    unsafe fn laswp(layout: Layout, n: i32, a: &mut [Self], lda: i32,
                    k1: i32, k2: i32, ipiv: &[i32], incx: i32) -> i32;

    unsafe fn lapmr(layout: Layout, forwrd: i32, m: i32, n: i32,
                    x: &mut [Self], ldx: i32, k: &mut [i32]) -> i32;

    unsafe fn lapmt(layout: Layout, forwrd: i32, m: i32, n: i32,
                    x: &mut [Self], ldx: i32, k: &mut [i32]) -> i32;

    unsafe fn pstrf(layout: Layout, uplo: u8, n: i32, a: &mut [Self],
                    lda: i32, piv: &mut [i32], rank: &mut i32,
                    tol: Self) -> i32;

    unsafe fn geqp3(layout: Layout, m: i32, n: i32, a: &mut [Self], lda: i32,
                    jpvt: &mut [i32], tau: &mut [Self]) -> i32;

    unsafe fn getri(layout: Layout, n: i32, a: &mut [Self], lda: i32,
                    ipiv: &[i32]) -> i32;

    unsafe fn gebal(layout: Layout, job: u8, n: i32, a: &mut [Self],
                    lda: i32, ilo: &mut i32, ihi: &mut i32,
                    scale: &mut [Self]) -> i32;

    unsafe fn gebak(layout: Layout, job: u8, side: u8, n: i32, ilo: i32,
                    ihi: i32, scale: &[Self], m: i32, v: &mut [Self],
                    ldv: i32) -> i32;

    unsafe fn trexc(layout: Layout, compq: u8, n: i32, t: &mut [Self],
                    ldt: i32, q: &mut [Self], ldq: i32, ifst: &mut i32,
                    ilst: &mut i32) -> i32;
}

macro_rules! impl_lapack {
    ($t:ty, $pbtrf:ident, $pbtrs:ident, $pbcon:ident, $tbtrs:ident,
     $getrf:ident, $getrs:ident, $laswp:ident, $lapmr:ident, $lapmt:ident,
     $pstrf:ident, $geqp3:ident, $getri:ident, $gebal:ident,
     $gebak:ident, $trexc:ident) => {
        impl Lapack for $t {
            unsafe fn pbtrf(layout: Layout, uplo: u8, n: i32, kd: i32,
                            ab: &mut [Self], ldab: i32) -> i32 {
                lapacke::$pbtrf(layout, uplo, n, kd, ab, ldab)
            }

            unsafe fn pbtrs(layout: Layout, uplo: u8, n: i32, kd: i32,
                            nrhs: i32, ab: &[Self], ldab: i32,
                            b: &mut [Self], ldb: i32) -> i32 {
                lapacke::$pbtrs(layout, uplo, n, kd, nrhs, ab, ldab, b, ldb)
            }

            unsafe fn pbcon(layout: Layout, uplo: u8, n: i32, kd: i32,
                            ab: &[Self], ldab: i32, anorm: Self,
                            rcond: &mut Self) -> i32 {
                lapacke::$pbcon(layout, uplo, n, kd, ab, ldab, anorm, rcond)
            }

            unsafe fn tbtrs(layout: Layout, uplo: u8, trans: u8, diag: u8,
                            n: i32, kd: i32, nrhs: i32, ab: &[Self],
                            ldab: i32, b: &mut [Self], ldb: i32) -> i32 {
                lapacke::$tbtrs(layout, uplo, trans, diag, n, kd, nrhs,
                                ab, ldab, b, ldb)
            }

            unsafe fn getrf(layout: Layout, m: i32, n: i32, a: &mut [Self],
                            lda: i32, ipiv: &mut [i32]) -> i32 {
                lapacke::$getrf(layout, m, n, a, lda, ipiv)
            }

            unsafe fn getrs(layout: Layout, trans: u8, n: i32, nrhs: i32,
                            a: &[Self], lda: i32, ipiv: &[i32],
                            b: &mut [Self], ldb: i32) -> i32 {
                lapacke::$getrs(layout, trans, n, nrhs, a, lda, ipiv, b, ldb)
            }

            unsafe fn laswp(layout: Layout, n: i32, a: &mut [Self], lda: i32,
                            k1: i32, k2: i32, ipiv: &[i32], incx: i32) -> i32 {
                lapacke::$laswp(layout, n, a, lda, k1, k2, ipiv, incx)
            }

            unsafe fn lapmr(layout: Layout, forwrd: i32, m: i32, n: i32,
                            x: &mut [Self], ldx: i32, k: &mut [i32]) -> i32 {
                lapacke::$lapmr(layout, forwrd, m, n, x, ldx, k)
            }

            unsafe fn lapmt(layout: Layout, forwrd: i32, m: i32, n: i32,
                            x: &mut [Self], ldx: i32, k: &mut [i32]) -> i32 {
                lapacke::$lapmt(layout, forwrd, m, n, x, ldx, k)
            }

            unsafe fn pstrf(layout: Layout, uplo: u8, n: i32, a: &mut [Self],
                            lda: i32, piv: &mut [i32], rank: &mut i32,
                            tol: Self) -> i32 {
                lapacke::$pstrf(layout, uplo, n, a, lda, piv, rank, tol)
            }

            unsafe fn geqp3(layout: Layout, m: i32, n: i32, a: &mut [Self],
                            lda: i32, jpvt: &mut [i32],
                            tau: &mut [Self]) -> i32 {
                lapacke::$geqp3(layout, m, n, a, lda, jpvt, tau)
            }

            unsafe fn getri(layout: Layout, n: i32, a: &mut [Self], lda: i32,
                            ipiv: &[i32]) -> i32 {
                lapacke::$getri(layout, n, a, lda, ipiv)
            }

            unsafe fn gebal(layout: Layout, job: u8, n: i32, a: &mut [Self],
                            lda: i32, ilo: &mut i32, ihi: &mut i32,
                            scale: &mut [Self]) -> i32 {
                lapacke::$gebal(layout, job, n, a, lda, ilo, ihi, scale)
            }

            unsafe fn gebak(layout: Layout, job: u8, side: u8, n: i32,
                            ilo: i32, ihi: i32, scale: &[Self], m: i32,
                            v: &mut [Self], ldv: i32) -> i32 {
                lapacke::$gebak(layout, job, side, n, ilo, ihi, scale, m,
                                v, ldv)
            }

            unsafe fn trexc(layout: Layout, compq: u8, n: i32, t: &mut [Self],
                            ldt: i32, q: &mut [Self], ldq: i32,
                            ifst: &mut i32, ilst: &mut i32) -> i32 {
                lapacke::$trexc(layout, compq, n, t, ldt, q, ldq, ifst, ilst)
            }
        }
    }
}

impl_lapack!(f32, spbtrf, spbtrs, spbcon, stbtrs, sgetrf, sgetrs, slaswp,
             slapmr, slapmt, spstrf, sgeqp3, sgetri, sgebal, sgebak, strexc);
impl_lapack!(f64, dpbtrf, dpbtrs, dpbcon, dtbtrs, dgetrf, dgetrs, dlaswp,
             dlapmr, dlapmt, dpstrf, dgeqp3, dgetri, dgebal, dgebak, dtrexc);

/// Negative `info` means LAPACK rejected an argument, which the checks in
/// front of every call are supposed to rule out.
fn check_info(routine: &'static str, info: i32) -> Result<i32> {
    if info < 0 {
        debug!("{}: illegal value in argument {}", routine, -info);
        return Err(Error::Lapack(info));
    }
    if info > 0 {
        debug!("{}: info = {}", routine, info);
    }
    Ok(info)
}

/// Checks the n×nrhs right-hand side shared by the solvers.
fn check_rhs<T>(n: usize, nrhs: usize, b: &[T], ldb: usize)
                -> Result<(i32, i32)> {
    let nrhs_ = validate::lapack_int("nrhs", nrhs)?;
    let ldb_ = validate::general_stride("ldb", nrhs, ldb)?;
    validate::general_buffer("b", n, nrhs, b.len(), ldb)?;
    Ok((nrhs_, ldb_))
}

/// Holds the scratch buffers reused across wrapper calls.
///
/// A `Driver` is cheap to create; keeping one around merely avoids
/// reallocating the library-form copies on every call.
#[derive(Clone, Debug, Default)]
pub struct Driver<T> {
    data: Scratch<T>,
    index: Scratch<i32>,
}

impl<T: Lapack> Driver<T> {
    pub fn new() -> Self {
        Self { data: Scratch::new(), index: Scratch::new() }
    }

    /// Cholesky factorization of a symmetric positive definite band matrix,
    /// in place.  Returns `false` if the matrix is not positive definite.
    ///
    /// `ab` holds the client form with row stride `ldab ≥ kd + 1`.  On
    /// return it holds `U` (upper) or `L` (lower) in the same layout.
    pub fn pbtrf(&mut self, uplo: Uplo, n: usize, kd: usize, ab: &mut [T],
                 ldab: usize) -> Result<bool> {
        let shape = BandShape::new(uplo, n, kd);
        let (n_, kd_) = validate::band_dims(shape)?;
        validate::band_stride("ldab", shape, ldab)?;
        if n == 0 {
            return Ok(true);
        }
        validate::band_buffer("ab", shape, ab.len(), ldab)?;

        let ld = shape.library_stride();
        let conv = self.data.band(shape);
        band_tri::to_library_form(uplo, n, kd, ab, ldab, conv, ld);
        let info = check_info("pbtrf", unsafe {
            T::pbtrf(Layout::RowMajor, uplo.to_u8(), n_, kd_, conv, cast(ld))
        })?;
        band_tri::to_client_form(uplo, n, kd, conv, ld, ab, ldab);
        Ok(info == 0)
    }

    /// Same as [`pbtrf`](#method.pbtrf), but hands LAPACK the Fortran
    /// (column-major) band layout instead of the LAPACKE row-major one.
    pub fn pbtrf_col_major(&mut self, uplo: Uplo, n: usize, kd: usize,
                           ab: &mut [T], ldab: usize) -> Result<bool> {
        let shape = BandShape::new(uplo, n, kd);
        let (n_, kd_) = validate::band_dims(shape)?;
        validate::band_stride("ldab", shape, ldab)?;
        if n == 0 {
            return Ok(true);
        }
        validate::band_buffer("ab", shape, ab.len(), ldab)?;

        let ld = shape.width();
        let ld_ = validate::lapack_int("ldab", ld)?;
        let conv = self.data.band_col_major(shape);
        band_col::to_col_major(uplo, n, kd, ab, ldab, conv, ld);
        let info = check_info("pbtrf", unsafe {
            T::pbtrf(Layout::ColumnMajor, uplo.to_u8(), n_, kd_, conv, ld_)
        })?;
        band_col::to_row_major(uplo, n, kd, conv, ld, ab, ldab);
        Ok(info == 0)
    }

    /// Solve `A X = B` given the band Cholesky factor computed by
    /// [`pbtrf`](#method.pbtrf).  `b` (n×nrhs, row stride `ldb`) is
    /// overwritten with `X`.
    pub fn pbtrs(&mut self, uplo: Uplo, n: usize, kd: usize, nrhs: usize,
                 ab: &[T], ldab: usize, b: &mut [T], ldb: usize)
                 -> Result<()> {
        let shape = BandShape::new(uplo, n, kd);
        let (n_, kd_) = validate::band_dims(shape)?;
        validate::band_stride("ldab", shape, ldab)?;
        let (nrhs_, ldb_) = check_rhs(n, nrhs, b, ldb)?;
        if n == 0 || nrhs == 0 {
            return Ok(());
        }
        validate::band_buffer("ab", shape, ab.len(), ldab)?;

        let ld = shape.library_stride();
        let conv = self.data.band(shape);
        band_tri::to_library_form(uplo, n, kd, ab, ldab, conv, ld);
        check_info("pbtrs", unsafe {
            T::pbtrs(Layout::RowMajor, uplo.to_u8(), n_, kd_, nrhs_,
                     conv, cast(ld), b, ldb_)
        })?;
        Ok(())
    }

    /// Reciprocal condition number estimate (1-norm) of a band matrix from
    /// its Cholesky factor.  `anorm` is the 1-norm of the original matrix.
    pub fn pbcon(&mut self, uplo: Uplo, n: usize, kd: usize, ab: &[T],
                 ldab: usize, anorm: T) -> Result<T> {
        let shape = BandShape::new(uplo, n, kd);
        let (n_, kd_) = validate::band_dims(shape)?;
        validate::band_stride("ldab", shape, ldab)?;
        if anorm.is_nan() || anorm < T::zero() {
            debug!("pbcon: anorm = {:?}", anorm);
            return Err(Error::InvalidValue("anorm"));
        }
        if n == 0 {
            return Ok(T::one());
        }
        validate::band_buffer("ab", shape, ab.len(), ldab)?;

        let ld = shape.library_stride();
        let conv = self.data.band(shape);
        band_tri::to_library_form(uplo, n, kd, ab, ldab, conv, ld);
        let mut rcond = T::zero();
        check_info("pbcon", unsafe {
            T::pbcon(Layout::RowMajor, uplo.to_u8(), n_, kd_, conv, cast(ld),
                     anorm, &mut rcond)
        })?;
        Ok(rcond)
    }

    /// Solve `op(A) X = B` for a triangular band matrix `A`.  Returns
    /// `false` (leaving `b` untouched) if `A` is singular.
    pub fn tbtrs(&mut self, uplo: Uplo, trans: Trans, diag: Diag, n: usize,
                 kd: usize, nrhs: usize, a: &[T], lda: usize, b: &mut [T],
                 ldb: usize) -> Result<bool> {
        let shape = BandShape::new(uplo, n, kd);
        let (n_, kd_) = validate::band_dims(shape)?;
        validate::band_stride("lda", shape, lda)?;
        let (nrhs_, ldb_) = check_rhs(n, nrhs, b, ldb)?;
        if n == 0 {
            return Ok(true);
        }
        validate::band_buffer("a", shape, a.len(), lda)?;

        let ld = shape.library_stride();
        let conv = self.data.band(shape);
        band_tri::to_library_form(uplo, n, kd, a, lda, conv, ld);
        let info = check_info("tbtrs", unsafe {
            T::tbtrs(Layout::RowMajor, uplo.to_u8(), trans.to_u8(),
                     diag.to_u8(), n_, kd_, nrhs_, conv, cast(ld),
                     b, ldb_)
        })?;
        Ok(info == 0)
    }

    /// LU factorization `A = P L U` of the m×n matrix `a`, in place.
    ///
    /// `ipiv` must have length `min(m, n)` and receives zero-based row
    /// interchanges.  Returns `false` if `U` is exactly singular.
    pub fn getrf(&mut self, m: usize, n: usize, a: &mut [T], lda: usize,
                 ipiv: &mut [usize]) -> Result<bool> {
        let m_ = validate::lapack_int("m", m)?;
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        let mn = min(m, n);
        if mn == 0 {
            return Ok(true);
        }
        validate::general_buffer("a", m, n, a.len(), lda)?;
        validate::exact_len("ipiv", ipiv.len(), mn)?;

        let raw = self.index.take(mn);
        let info = check_info("getrf", unsafe {
            T::getrf(Layout::RowMajor, m_, n_, a, lda_, raw)
        })?;
        pivot::to_zero_based("ipiv", raw, ipiv)?;
        Ok(info == 0)
    }

    /// Solve `op(A) X = B` using the LU factorization from
    /// [`getrf`](#method.getrf).
    pub fn getrs(&mut self, trans: Trans, n: usize, nrhs: usize, a: &[T],
                 lda: usize, ipiv: &[usize], b: &mut [T], ldb: usize)
                 -> Result<()> {
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        let (nrhs_, ldb_) = check_rhs(n, nrhs, b, ldb)?;
        if n == 0 || nrhs == 0 {
            return Ok(());
        }
        validate::general_buffer("a", n, n, a.len(), lda)?;
        validate::exact_len("ipiv", ipiv.len(), n)?;
        pivot::check_bounds("ipiv", ipiv, n)?;

        let raw = self.index.take(n);
        pivot::to_one_based("ipiv", ipiv, raw)?;
        check_info("getrs", unsafe {
            T::getrs(Layout::RowMajor, trans.to_u8(), n_, nrhs_, a,
                     lda_, raw, b, ldb_)
        })?;
        Ok(())
    }

    /// Apply the row interchanges `ipiv[k1 ..= k2]` to the n columns of
    /// `a`, in increasing order if `forward`, else in decreasing order.
    ///
    /// Row `k` is swapped with row `ipiv[k]`; all indices are zero-based.
    pub fn laswp(&mut self, n: usize, a: &mut [T], lda: usize, k1: usize,
                 k2: usize, ipiv: &[usize], forward: bool) -> Result<()> {
        let n_ = validate::lapack_int("n", n)?;
        if k1 > k2 {
            debug!("laswp: k1 = {} > k2 = {}", k1, k2);
            return Err(Error::InvalidDimension("k1", k1));
        }
        let k2_ = pivot::one_based(k2)
            .ok_or(Error::InvalidDimension("k2", k2))?;
        let len = cast::<i32, usize>(k2_);
        let lda_ = validate::general_stride("lda", n, lda)?;
        validate::exact_len("ipiv", ipiv.len(), len)?;
        if n == 0 {
            return Ok(());
        }
        // rows touched: k1 ..= k2 and their partners
        let nrows = ipiv[k1 ..].iter()
            .fold(len, |acc, &p| max(acc, p.saturating_add(1)));
        validate::general_buffer("a", nrows, n, a.len(), lda)?;

        let raw = self.index.take(len);
        pivot::to_one_based("ipiv", ipiv, raw)?;
        check_info("laswp", unsafe {
            T::laswp(Layout::RowMajor, n_, a, lda_, cast(k1 + 1), k2_,
                     raw, if forward { 1 } else { -1 })
        })?;
        Ok(())
    }

    /// Rearrange the rows of the m×n matrix `x` by the permutation `k`.
    ///
    /// If `forward`, row `k[i]` moves to row `i`; otherwise row `i` moves to
    /// row `k[i]`.
    pub fn lapmr(&mut self, forward: bool, m: usize, n: usize, x: &mut [T],
                 ldx: usize, k: &[usize]) -> Result<()> {
        let m_ = validate::lapack_int("m", m)?;
        let n_ = validate::lapack_int("n", n)?;
        let ldx_ = validate::general_stride("ldx", n, ldx)?;
        if m == 0 || n == 0 {
            return Ok(());
        }
        validate::general_buffer("x", m, n, x.len(), ldx)?;
        validate::exact_len("k", k.len(), m)?;
        pivot::check_permutation("k", k)?;
        if m == 1 {
            return Ok(());
        }

        let raw = self.index.take(m);
        pivot::to_one_based("k", k, raw)?;
        check_info("lapmr", unsafe {
            T::lapmr(Layout::RowMajor, forward as i32, m_, n_, x, ldx_,
                     raw)
        })?;
        Ok(())
    }

    /// Rearrange the columns of the m×n matrix `x` by the permutation `k`.
    ///
    /// If `forward`, column `k[j]` moves to column `j`; otherwise column `j`
    /// moves to column `k[j]`.
    pub fn lapmt(&mut self, forward: bool, m: usize, n: usize, x: &mut [T],
                 ldx: usize, k: &[usize]) -> Result<()> {
        let m_ = validate::lapack_int("m", m)?;
        let n_ = validate::lapack_int("n", n)?;
        let ldx_ = validate::general_stride("ldx", n, ldx)?;
        if m == 0 || n == 0 {
            return Ok(());
        }
        validate::general_buffer("x", m, n, x.len(), ldx)?;
        validate::exact_len("k", k.len(), n)?;
        pivot::check_permutation("k", k)?;
        if n == 1 {
            return Ok(());
        }

        let raw = self.index.take(n);
        pivot::to_one_based("k", k, raw)?;
        check_info("lapmt", unsafe {
            T::lapmt(Layout::RowMajor, forward as i32, m_, n_, x, ldx_,
                     raw)
        })?;
        Ok(())
    }

    /// Cholesky factorization with complete pivoting of a positive
    /// semidefinite matrix, `Pᵀ A P = Uᵀ U` or `L Lᵀ`.
    ///
    /// `piv` receives the zero-based permutation.  Returns the computed
    /// rank and whether the factorization ran to completion (`false` if `A`
    /// is rank deficient or indefinite).
    pub fn pstrf(&mut self, uplo: Uplo, n: usize, a: &mut [T], lda: usize,
                 piv: &mut [usize], tol: T) -> Result<(usize, bool)> {
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        if tol.is_nan() {
            debug!("pstrf: tol = {:?}", tol);
            return Err(Error::InvalidValue("tol"));
        }
        if n == 0 {
            return Ok((0, true));
        }
        validate::general_buffer("a", n, n, a.len(), lda)?;
        validate::exact_len("piv", piv.len(), n)?;

        let raw = self.index.take(n);
        let mut rank = 0;
        let info = check_info("pstrf", unsafe {
            T::pstrf(Layout::RowMajor, uplo.to_u8(), n_, a, lda_, raw,
                     &mut rank, tol)
        })?;
        pivot::to_zero_based("piv", raw, piv)?;
        let rank: usize = cast(rank);
        Ok((rank, info == 0))
    }

    /// QR factorization with column pivoting, `A P = Q R`.
    ///
    /// On entry `jpvt[j] = Some(_)` marks column `j` as a leading column and
    /// `None` as a free column.  On return `jpvt[j] = Some(k)` means column
    /// `j` of `A P` was column `k` of `A`.  `tau` must hold at least
    /// `min(m, n)` entries.
    pub fn geqp3(&mut self, m: usize, n: usize, a: &mut [T], lda: usize,
                 jpvt: &mut [Option<usize>], tau: &mut [T]) -> Result<()> {
        let m_ = validate::lapack_int("m", m)?;
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        let mn = min(m, n);
        if mn == 0 {
            return Ok(());
        }
        validate::general_buffer("a", m, n, a.len(), lda)?;
        validate::exact_len("jpvt", jpvt.len(), n)?;
        validate::vec_len("tau", tau.len(), mn)?;

        let raw = self.index.take(n);
        pivot::jpvt_to_one_based("jpvt", jpvt, raw)?;
        check_info("geqp3", unsafe {
            T::geqp3(Layout::RowMajor, m_, n_, a, lda_, raw, tau)
        })?;
        pivot::jpvt_to_zero_based("jpvt", raw, jpvt)?;
        Ok(())
    }

    /// Inverse of an n×n matrix from the LU factorization computed by
    /// [`getrf`](#method.getrf), in place.  Returns `false` (leaving `a`
    /// untouched) if the factor `U` is singular.
    pub fn getri(&mut self, n: usize, a: &mut [T], lda: usize,
                 ipiv: &[usize]) -> Result<bool> {
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        if n == 0 {
            return Ok(true);
        }
        validate::general_buffer("a", n, n, a.len(), lda)?;
        validate::exact_len("ipiv", ipiv.len(), n)?;
        pivot::check_bounds("ipiv", ipiv, n)?;

        let raw = self.index.take(n);
        pivot::to_one_based("ipiv", ipiv, raw)?;
        let info = check_info("getri", unsafe {
            T::getri(Layout::RowMajor, n_, a, lda_, raw)
        })?;
        Ok(info == 0)
    }

    /// Balance the n×n matrix `a` in place and return `(ilo, ihi)`.
    ///
    /// On return `scale[j]` is the row that row `j` was swapped with for
    /// `j < ilo` or `j > ihi`, and the scaling factor applied to row `j`
    /// otherwise.  All indices are zero-based; for `n = 0` the result is
    /// `(0, 0)`.
    pub fn gebal(&mut self, job: Balance, n: usize, a: &mut [T], lda: usize,
                 scale: &mut [T]) -> Result<(usize, usize)> {
        let n_ = validate::lapack_int("n", n)?;
        let lda_ = validate::general_stride("lda", n, lda)?;
        if n == 0 {
            return Ok((0, 0));
        }
        validate::general_buffer("a", n, n, a.len(), lda)?;
        validate::exact_len("scale", scale.len(), n)?;

        let mut ilo = 0;
        let mut ihi = 0;
        check_info("gebal", unsafe {
            T::gebal(Layout::RowMajor, job.to_u8(), n_, a, lda_,
                     &mut ilo, &mut ihi, scale)
        })?;
        let ilo = pivot::zero_based(ilo).ok_or(Error::Lapack(ilo))?;
        let ihi = pivot::zero_based(ihi).ok_or(Error::Lapack(ihi))?;
        pivot::scale_to_zero_based(scale, ilo, ihi);
        Ok((ilo, ihi))
    }

    /// Undo the balancing described by `(job, ilo, ihi, scale)` from
    /// [`gebal`](#method.gebal) on the n×m eigenvector matrix `v`.
    ///
    /// `scale` is not modified.
    pub fn gebak(&mut self, job: Balance, side: Side, n: usize, ilo: usize,
                 ihi: usize, scale: &[T], m: usize, v: &mut [T], ldv: usize)
                 -> Result<()> {
        let n_ = validate::lapack_int("n", n)?;
        let m_ = validate::lapack_int("m", m)?;
        let ldv_ = validate::general_stride("ldv", m, ldv)?;
        if n == 0 || m == 0 {
            return Ok(());
        }
        if ilo >= n {
            debug!("gebak: ilo = {} with n = {}", ilo, n);
            return Err(Error::InvalidDimension("ilo", ilo));
        }
        if ihi < ilo || ihi >= n {
            debug!("gebak: ihi = {} with ilo = {}, n = {}", ihi, ilo, n);
            return Err(Error::InvalidDimension("ihi", ihi));
        }
        validate::vec_len("scale", scale.len(), n)?;
        validate::general_buffer("v", n, m, v.len(), ldv)?;
        pivot::check_scale("scale", &scale[.. n], ilo, ihi)?;
        if job == Balance::None {
            return Ok(());
        }

        let conv = self.data.take(n);
        conv.copy_from_slice(&scale[.. n]);
        pivot::scale_to_one_based(conv, ilo, ihi);
        check_info("gebak", unsafe {
            T::gebak(Layout::RowMajor, job.to_u8(), side.to_u8(), n_,
                     cast(ilo + 1), cast(ihi + 1), conv, m_, v, ldv_)
        })?;
        Ok(())
    }

    /// Move the diagonal block of the real Schur form `t` that starts at
    /// row `ifst` so that it starts at row `ilst`, updating the Schur
    /// vectors `q` (matrix and row stride) if given.
    ///
    /// Returns the adjusted `(ifst, ilst)` and `false` if two blocks were
    /// too close to swap, in which case `t` is only partly reordered.
    pub fn trexc(&mut self, n: usize, t: &mut [T], ldt: usize,
                 q: Option<(&mut [T], usize)>, ifst: usize, ilst: usize)
                 -> Result<(usize, usize, bool)> {
        let n_ = validate::lapack_int("n", n)?;
        let ldt_ = validate::general_stride("ldt", n, ldt)?;
        if n == 0 {
            return Ok((ifst, ilst, true));
        }
        if ifst >= n {
            return Err(Error::InvalidDimension("ifst", ifst));
        }
        if ilst >= n {
            return Err(Error::InvalidDimension("ilst", ilst));
        }
        validate::general_buffer("t", n, n, t.len(), ldt)?;
        let mut unused = [T::zero()];
        let (compq, q, ldq_) = match q {
            Some((q, ldq)) => {
                let ldq_ = validate::general_stride("ldq", n, ldq)?;
                validate::general_buffer("q", n, n, q.len(), ldq)?;
                (b'V', q, ldq_)
            }
            None => (b'N', &mut unused[..], n_),
        };
        if n == 1 {
            return Ok((ifst, ilst, true));
        }

        let mut ifst_ = cast(ifst + 1);
        let mut ilst_ = cast(ilst + 1);
        let info = check_info("trexc", unsafe {
            T::trexc(Layout::RowMajor, compq, n_, t, ldt_, q, ldq_,
                     &mut ifst_, &mut ilst_)
        })?;
        let ifst = pivot::zero_based(ifst_).ok_or(Error::Lapack(ifst_))?;
        let ilst = pivot::zero_based(ilst_).ok_or(Error::Lapack(ilst_))?;
        Ok((ifst, ilst, info == 0))
    }
}
