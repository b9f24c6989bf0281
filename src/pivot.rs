//! Translation of pivot and permutation vectors between zero-based client
//! indices and one-based LAPACK indices.
use std::cmp::min;
use num::Float;
use super::error::{Error, Result};
use super::utils::try_cast;

/// `k + 1` as a LAPACK integer, if it fits.
pub fn one_based(k: usize) -> Option<i32> {
    k.checked_add(1).and_then(try_cast)
}

/// `k - 1`, if `k` is at least one.
pub fn zero_based(k: i32) -> Option<usize> {
    try_cast::<i32, usize>(k).and_then(|k| k.checked_sub(1))
}

/// `dst[i] = src[i] + 1`.
///
/// Fails with `IndexOutOfRange` if an entry does not fit in a LAPACK
/// integer.  `dst` must be at least as long as `src`.
pub fn to_one_based(name: &'static str, src: &[usize], dst: &mut [i32])
                    -> Result<()> {
    for (pos, (&k, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
        *d = one_based(k).ok_or(Error::IndexOutOfRange(name, pos))?;
    }
    Ok(())
}

/// `dst[i] = src[i] - 1`.
///
/// Fails with `IndexOutOfRange` if an entry is less than one.
pub fn to_zero_based(name: &'static str, src: &[i32], dst: &mut [usize])
                     -> Result<()> {
    for (pos, (&k, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
        *d = zero_based(k).ok_or(Error::IndexOutOfRange(name, pos))?;
    }
    Ok(())
}

pub fn one_based_vec(name: &'static str, src: &[usize]) -> Result<Vec<i32>> {
    let mut dst = vec![0; src.len()];
    to_one_based(name, src, &mut dst)?;
    Ok(dst)
}

pub fn zero_based_vec(name: &'static str, src: &[i32]) -> Result<Vec<usize>> {
    let mut dst = vec![0; src.len()];
    to_zero_based(name, src, &mut dst)?;
    Ok(dst)
}

/// Column pivots for QR with pivoting.  `None` marks a free column, which
/// LAPACK encodes as `0`.
pub fn jpvt_to_one_based(name: &'static str, src: &[Option<usize>],
                         dst: &mut [i32]) -> Result<()> {
    for (pos, (&k, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
        *d = match k {
            None => 0,
            Some(k) => k.checked_add(1)
                .and_then(try_cast)
                .ok_or(Error::IndexOutOfRange(name, pos))?,
        };
    }
    Ok(())
}

/// Inverse of [`jpvt_to_one_based`](fn.jpvt_to_one_based.html).  Negative
/// entries are rejected.
pub fn jpvt_to_zero_based(name: &'static str, src: &[i32],
                          dst: &mut [Option<usize>]) -> Result<()> {
    for (pos, (&k, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
        let k: usize = try_cast(k).ok_or(Error::IndexOutOfRange(name, pos))?;
        *d = k.checked_sub(1);
    }
    Ok(())
}

/// Check that every entry of `src` lies in `0 .. bound`.
pub fn check_bounds(name: &'static str, src: &[usize], bound: usize)
                    -> Result<()> {
    match src.iter().position(|&k| k >= bound) {
        Some(pos) => Err(Error::IndexOutOfRange(name, pos)),
        None => Ok(()),
    }
}

/// Slots of a balancing `scale` vector that hold row indices rather than
/// scaling factors: `0 .. ilo` and `ihi + 1 .. n`.
fn permuted_slots(n: usize, ilo: usize, ihi: usize)
                  -> impl Iterator<Item = usize> {
    (0 .. min(ilo, n)).chain(ihi.saturating_add(1) .. n)
}

/// Shift the permutation entries of `scale` from zero- to one-based.
pub fn scale_to_one_based<T: Float>(scale: &mut [T], ilo: usize, ihi: usize) {
    for j in permuted_slots(scale.len(), ilo, ihi) {
        scale[j] = scale[j] + T::one();
    }
}

/// Shift the permutation entries of `scale` from one- to zero-based.
pub fn scale_to_zero_based<T: Float>(scale: &mut [T], ilo: usize, ihi: usize) {
    for j in permuted_slots(scale.len(), ilo, ihi) {
        scale[j] = scale[j] - T::one();
    }
}

/// Check that every permutation entry of `scale` is a whole number in
/// `0 .. scale.len()`.
pub fn check_scale<T: Float>(name: &'static str, scale: &[T], ilo: usize,
                             ihi: usize) -> Result<()> {
    let n = scale.len();
    for j in permuted_slots(n, ilo, ihi) {
        let x = scale[j];
        match x.to_usize() {
            Some(k) if k < n && x.fract() == T::zero() => {}
            _ => return Err(Error::IndexOutOfRange(name, j)),
        }
    }
    Ok(())
}

/// Check that `src` is a permutation of `0 .. src.len()`.
pub fn check_permutation(name: &'static str, src: &[usize]) -> Result<()> {
    let mut seen = vec![false; src.len()];
    for (pos, &k) in src.iter().enumerate() {
        match seen.get_mut(k) {
            Some(s) if !*s => *s = true,
            _ => return Err(Error::IndexOutOfRange(name, pos)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let ipiv = [2, 1, 4, 3, 4];
        let one = one_based_vec("ipiv", &ipiv).unwrap();
        assert_eq!(one, [3, 2, 5, 4, 5]);
        assert_eq!(zero_based_vec("ipiv", &one).unwrap(), ipiv);

        // starting from what LAPACK hands back
        let raw = [1, 3, 3, 6, 5, i32::MAX];
        let zero = zero_based_vec("ipiv", &raw).unwrap();
        assert_eq!(zero[.. 5], [0, 2, 2, 5, 4]);
        assert_eq!(one_based_vec("ipiv", &zero).unwrap(), raw);
    }

    #[test]
    fn scalars() {
        assert_eq!(one_based(0), Some(1));
        assert_eq!(one_based(i32::MAX as usize), None);
        assert_eq!(zero_based(1), Some(0));
        assert_eq!(zero_based(0), None);
        assert_eq!(zero_based(-5), None);
    }

    #[test]
    fn balancing_scale() {
        // n = 5, ilo = 1, ihi = 2: slots 0, 3, 4 are row indices
        let mut scale = [4.0, 0.5, 2.0, 1.0, 3.0];
        check_scale("scale", &scale, 1, 2).unwrap();
        scale_to_one_based(&mut scale, 1, 2);
        assert_eq!(scale, [5.0, 0.5, 2.0, 2.0, 4.0]);
        scale_to_zero_based(&mut scale, 1, 2);
        assert_eq!(scale, [4.0, 0.5, 2.0, 1.0, 3.0]);

        // nothing permuted
        let mut scale = [0.25f32, 8.0];
        scale_to_one_based(&mut scale, 0, 1);
        assert_eq!(scale, [0.25, 8.0]);

        assert_eq!(check_scale("scale", &[0.0, 1.0, 5.0], 0, 1),
                   Err(Error::IndexOutOfRange("scale", 2)));
        assert_eq!(check_scale("scale", &[1.5, 1.0, 0.0], 1, 2),
                   Err(Error::IndexOutOfRange("scale", 0)));
        assert_eq!(check_scale("scale", &[-1.0, 1.0], 1, 1),
                   Err(Error::IndexOutOfRange("scale", 0)));
        assert_eq!(check_scale("scale", &[::std::f64::NAN], 1, 0),
                   Err(Error::IndexOutOfRange("scale", 0)));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(zero_based_vec("ipiv", &[1, 0, 2]),
                   Err(Error::IndexOutOfRange("ipiv", 1)));
        assert_eq!(zero_based_vec("ipiv", &[-3]),
                   Err(Error::IndexOutOfRange("ipiv", 0)));
        assert_eq!(one_based_vec("k", &[0, usize::MAX]),
                   Err(Error::IndexOutOfRange("k", 1)));
        assert_eq!(check_bounds("k", &[0, 2, 3], 3),
                   Err(Error::IndexOutOfRange("k", 2)));
        assert_eq!(check_bounds("k", &[0, 2, 1], 3), Ok(()));
        assert_eq!(check_permutation("k", &[2, 0, 1]), Ok(()));
        assert_eq!(check_permutation("k", &[2, 0, 2]),
                   Err(Error::IndexOutOfRange("k", 2)));
        assert_eq!(check_permutation("k", &[0, 3, 1]),
                   Err(Error::IndexOutOfRange("k", 1)));
    }

    #[test]
    fn free_columns() {
        let jpvt = [Some(2), None, Some(0)];
        let mut raw = [9; 3];
        jpvt_to_one_based("jpvt", &jpvt, &mut raw).unwrap();
        assert_eq!(raw, [3, 0, 1]);
        let mut back = [Some(7); 3];
        jpvt_to_zero_based("jpvt", &raw, &mut back).unwrap();
        assert_eq!(back, jpvt);
        assert_eq!(jpvt_to_zero_based("jpvt", &[-1], &mut back),
                   Err(Error::IndexOutOfRange("jpvt", 0)));
    }
}
