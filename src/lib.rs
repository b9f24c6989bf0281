//! Row-major, zero-based access to LAPACKE.
//!
//! The native library expects column-major (or LAPACKE's transposed
//! row-major) band layouts and one-based pivot indices, while callers hold
//! row-major band rows and zero-based indices.  The modules here bridge the
//! two:
//!
//! - [`band_tri`](band_tri/index.html) and [`band_col`](band_col/index.html)
//!   convert band matrices between the client layout and the two library
//!   layouts;
//! - [`pivot`](pivot/index.html) shifts index vectors between bases;
//! - [`linalg`](linalg/index.html) (feature `netlib`) wraps the LAPACK
//!   routines that need either conversion.
extern crate conv;
#[cfg(feature = "netlib")]
extern crate lapacke;
#[macro_use]
extern crate log;
#[cfg(feature = "netlib")]
extern crate netlib_src;
extern crate num;
#[macro_use]
extern crate quick_error;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

pub mod band;
pub mod band_col;
pub mod band_tri;
pub mod error;
#[cfg(feature = "netlib")]
pub mod linalg;
pub mod pivot;
pub mod scratch;
pub mod utils;
pub mod validate;

pub use band::{BandShape, Uplo};
pub use error::{Error, Result};
