/*! Bounded-memory shuffling of lazy sequences.

[ReservoirShuffle] keeps a fixed-size queue of pending elements and emits
random slots from it, so arbitrarily long (even unbounded) sources can be
shuffled in O(capacity) memory. [shuffle] is the finite-source counterpart:
it materializes the whole source and performs a uniform permutation.

!*/
mod reservoir;

pub use reservoir::shuffle;
pub use reservoir::shuffle_bounded;
pub use reservoir::shuffle_with;
pub use reservoir::ReservoirShuffle;
