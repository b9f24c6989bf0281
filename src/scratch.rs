//! Reusable scratch space for library-form copies.
use num::Zero;
use super::band::BandShape;

/// Growable buffer handed out to one wrapper call at a time.
///
/// Every request zero-fills the returned slice, so unreferenced corner slots
/// of a band layout never carry data over from a previous call.
#[derive(Clone, Debug, Default)]
pub struct Scratch<T> {
    buf: Vec<T>,
}

impl<T: Clone + Zero> Scratch<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Zero-filled slice of length `len`.
    pub fn take(&mut self, len: usize) -> &mut [T] {
        if self.buf.len() < len {
            trace!("growing scratch from {} (capacity {}) to {}",
                   self.buf.len(), self.capacity(), len);
            self.buf.resize(len, T::zero());
        }
        let s = &mut self.buf[.. len];
        for x in s.iter_mut() {
            *x = T::zero();
        }
        s
    }

    /// Diagonal-major library buffer for `shape`, with stride
    /// `shape.library_stride()`.
    pub fn band(&mut self, shape: BandShape) -> &mut [T] {
        let len = shape.library_len(shape.library_stride());
        self.take(len)
    }

    /// Column-major library buffer for `shape`, with column stride
    /// `shape.width()`.
    pub fn band_col_major(&mut self, shape: BandShape) -> &mut [T] {
        let len = shape.col_major_len(shape.width());
        self.take(len)
    }
}
