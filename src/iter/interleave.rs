//! Round-robin interleaving of several corpora.

/// Interleaves elements from several corpora round-robin:
/// `a_1, b_1, c_1, a_2, b_2, c_2, ...`.
///
/// Exhausted corpora are skipped instead of producing gaps, so shorter
/// corpora simply drop out of the rotation (zip-longest semantics without
/// fill values).
pub fn interleave<C>(corpora: C) -> Interleave<<C::Item as IntoIterator>::IntoIter>
where
    C: IntoIterator,
    C::Item: IntoIterator,
{
    Interleave {
        iters: corpora.into_iter().map(IntoIterator::into_iter).collect(),
        cursor: 0,
    }
}

/// Round-robin interleaving iterator. See [interleave].
pub struct Interleave<I: Iterator> {
    iters: Vec<I>,
    cursor: usize,
}

impl<I: Iterator> Iterator for Interleave<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.iters.is_empty() {
            if self.cursor >= self.iters.len() {
                self.cursor = 0;
            }
            match self.iters[self.cursor].next() {
                Some(el) => {
                    self.cursor += 1;
                    return Some(el);
                }
                // drop the exhausted corpus out of the rotation.
                // Vec::remove keeps the relative order of the others.
                None => {
                    self.iters.remove(self.cursor);
                }
            }
        }
        None
    }
}
