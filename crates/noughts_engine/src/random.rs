//! Randomness seam for opponent move selection.

/// Source of index draws for the opponent.
///
/// Every [`rand::Rng`] is a source. Tests can implement this directly to
/// script the exact draws.
pub trait RandomSource {
    /// Draws an index for `bound` choices (`bound > 0`).
    ///
    /// Values at or above `bound` are allowed; callers reduce them modulo
    /// `bound`.
    fn draw(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn draw(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
