//! Independent random sampling of corpus elements.
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::Error;

/// Keeps each element of `corpus` independently with probability `p`.
///
/// Fails with [Error::InvalidProbability] unless `0 <= p <= 1`.
pub fn sample<I>(corpus: I, p: f64) -> Result<Sample<I::IntoIter, ThreadRng>, Error>
where
    I: IntoIterator,
{
    Sample::with_rng(corpus, p, rand::thread_rng())
}

/// Bernoulli sampling iterator. See [sample].
pub struct Sample<I: Iterator, R: Rng> {
    source: I,
    keep: Bernoulli,
    rng: R,
}

impl<I: Iterator, R: Rng> Sample<I, R> {
    /// Same as [sample], with a caller-provided RNG.
    pub fn with_rng<S>(corpus: S, p: f64, rng: R) -> Result<Self, Error>
    where
        S: IntoIterator<IntoIter = I>,
    {
        let keep = Bernoulli::new(p).map_err(|_| Error::InvalidProbability(p))?;
        Ok(Self {
            source: corpus.into_iter(),
            keep,
            rng,
        })
    }
}

impl<I: Iterator, R: Rng> Iterator for Sample<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let el = self.source.next()?;
            if self.keep.sample(&mut self.rng) {
                return Some(el);
            }
        }
    }
}
