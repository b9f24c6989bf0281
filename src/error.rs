//! Errors reported at the wrapper boundary.
//!
//! The layout converters themselves never fail; everything here is detected
//! up front, before any conversion or native call takes place.

quick_error! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        /// A dimension does not fit in a LAPACK integer, or is inconsistent
        /// with another dimension of the same call.
        InvalidDimension(name: &'static str, value: usize) {
            display("invalid dimension: {} = {}", name, value)
        }
        /// A leading dimension (stride) is smaller than the shape requires.
        InvalidLeadingDimension(name: &'static str, value: usize, min: usize) {
            display("invalid leading dimension: {} = {} < {}", name, value, min)
        }
        /// A buffer is shorter than the shape implies.
        InsufficientBuffer(name: &'static str, len: usize, min: usize) {
            display("insufficient buffer: len({}) = {} < {}", name, len, min)
        }
        /// A scalar argument lies outside its domain (e.g. a negative norm).
        InvalidValue(name: &'static str) {
            display("invalid value: {}", name)
        }
        /// A pivot or permutation entry cannot be translated between index
        /// bases.
        IndexOutOfRange(name: &'static str, pos: usize) {
            display("index out of range: {}[{}]", name, pos)
        }
        /// The native routine rejected argument number `-info`.
        Lapack(info: i32) {
            display("illegal value in argument {} of LAPACK routine", -info)
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
