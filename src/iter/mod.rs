/*! Corpus iteration adapters.

Small adapters for reshaping corpora that are consumed as lazy sequences:
staggered stepping ([step]), round-robin interleaving of several corpora
([interleave]) and independent random sampling ([sample]).

!*/
mod interleave;
mod sample;
mod step;

pub use interleave::interleave;
pub use interleave::Interleave;
pub use sample::sample;
pub use sample::Sample;
pub use step::step;
