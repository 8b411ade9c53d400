//! Reservoir-based streaming shuffle.
use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;

/// Shuffles a finite source into a uniformly random permutation.
///
/// The source is fully materialized, so it must be finite and must know its
/// own length (`ExactSizeIterator`). For unbounded or length-less sources,
/// use [ReservoirShuffle] with an explicit capacity.
pub fn shuffle<I>(source: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    shuffle_with(source, &mut rand::thread_rng())
}

/// Same as [shuffle], with a caller-provided RNG.
pub fn shuffle_with<I, R>(source: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: Rng,
{
    let mut items: Vec<_> = source.into_iter().collect();
    items.shuffle(rng);
    items
}

/// Shorthand for [ReservoirShuffle::new].
pub fn shuffle_bounded<I>(
    source: I,
    capacity: usize,
) -> Result<ReservoirShuffle<I::IntoIter, ThreadRng>, Error>
where
    I: IntoIterator,
{
    ReservoirShuffle::new(source, capacity)
}

/// Lazy shuffling adapter with bounded auxiliary memory.
///
/// Keeps a queue of `capacity` pending elements. While the source has more
/// elements, a uniformly random slot of the queue is emitted and replaced
/// with the next source element. Once the source runs dry, the remaining
/// queue is shuffled one last time and drained in that order.
///
/// Every source element is emitted exactly once. The ordering is *not* a
/// perfectly uniform permutation for sources longer than the capacity:
/// early elements have a higher chance of being emitted early. This bias is
/// inherent to single-pass bounded-memory shuffling and shrinks as the
/// capacity grows. `capacity = 1` degenerates to the original order;
/// `capacity >= source length` is equivalent to a full [shuffle].
pub struct ReservoirShuffle<I: Iterator, R: Rng> {
    source: I,
    queue: Vec<I::Item>,
    rng: R,
    draining: bool,
}

impl<I: Iterator> ReservoirShuffle<I, ThreadRng> {
    /// Builds a shuffler over `source` with the given queue capacity.
    ///
    /// Pulls up to `capacity` elements from the source immediately.
    /// Fails with [Error::InvalidCapacity] if `capacity` is 0.
    pub fn new<S>(source: S, capacity: usize) -> Result<Self, Error>
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_rng(source, capacity, rand::thread_rng())
    }
}

impl<I: Iterator, R: Rng> ReservoirShuffle<I, R> {
    /// Same as [ReservoirShuffle::new], with a caller-provided RNG.
    pub fn with_rng<S>(source: S, capacity: usize, rng: R) -> Result<Self, Error>
    where
        S: IntoIterator<IntoIter = I>,
    {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let mut source = source.into_iter();
        let queue: Vec<_> = source.by_ref().take(capacity).collect();
        debug!("filled shuffling queue with {} elements", queue.len());

        Ok(Self {
            source,
            queue,
            rng,
            draining: false,
        })
    }
}

impl<I: Iterator, R: Rng> Iterator for ReservoirShuffle<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.draining {
            if let Some(replacement) = self.source.next() {
                let i = self.rng.gen_range(0..self.queue.len());
                return Some(std::mem::replace(&mut self.queue[i], replacement));
            }
            // source exhausted: shuffle what is left and drain it.
            // reversed so that pop() yields the shuffled order front-first.
            self.queue.shuffle(&mut self.rng);
            self.queue.reverse();
            self.draining = true;
        }
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower + self.queue.len(),
            upper.map(|u| u + self.queue.len()),
        )
    }
}
