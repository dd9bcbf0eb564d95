/// Core traits for Reel Player

/// Source of randomness for "play random"
///
/// Injected into the player so tests can supply a deterministic stub.
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
