/// Check that two client-form band buffers agree on every slot inside the
/// band.  Slots outside the band are ignored.
///
/// ```
/// #[macro_use]
/// extern crate lapbridge;
///
/// use lapbridge::band::{BandShape, Uplo};
///
/// fn main() {
///     let shape = BandShape::new(Uplo::Upper, 2, 1);
///     assert_band_eq!(shape, 2, [1, 2, 3, 0], [1, 2, 3, 9]);
/// }
/// ```
#[macro_export]
macro_rules! assert_band_eq {
    ($shape:expr, $stride:expr, $left:expr, $right:expr) => {
        let shape = $shape;
        let stride = $stride;
        let left = &$left;
        let right = &$right;
        for (i, j) in shape.entries() {
            let k = shape.client_index(i, j, stride);
            assert!(left[k] == right[k],
                    "entry ({}, {}) differs: {:?} != {:?} in {:?}",
                    i, j, left[k], right[k], shape)
        }
    }
}
