//! BIO ↔ BIOLU tag-sequence transducers.
//!
//! Both directions are lazy and single-pass. BIO → BIOLU needs one token of
//! lookahead to tell whether a span continues; BIOLU → BIO only needs the
//! previous tag to validate transition legality. The first illegal
//! transition ends the stream: the error is yielded once, then the iterator
//! fuses. Elements yielded before the error remain valid.
use crate::error::{Error, TagSequenceError};

use super::{Bio, Biolu};

/// Converts a BIO tag sequence into its BIOLU equivalent.
///
/// Fails on `I` directly after `O` (an inside tag needs an open span).
/// The last tag of the sequence is classified as if followed by `O`.
pub fn bio_to_biolu<I>(tags: I) -> BioToBiolu<I::IntoIter>
where
    I: IntoIterator<Item = Bio>,
{
    BioToBiolu {
        source: tags.into_iter(),
        lookahead: None,
        position: 0,
        primed: false,
        failed: false,
    }
}

/// Converts a BIOLU tag sequence back into BIO.
///
/// Validates each tag against its predecessor: inside/last tags need an
/// open span, begin/unit/outside tags need a closed one. Unit tags open
/// (and close) a single-token span, so they map to `B`.
pub fn biolu_to_bio<I>(tags: I) -> BioluToBio<I::IntoIter>
where
    I: IntoIterator<Item = Biolu>,
{
    BioluToBio {
        source: tags.into_iter(),
        previous: None,
        position: 0,
        failed: false,
    }
}

/// Lazy BIO → BIOLU transducer. See [bio_to_biolu].
pub struct BioToBiolu<I: Iterator<Item = Bio>> {
    source: I,
    lookahead: Option<Bio>,
    position: usize,
    primed: bool,
    failed: bool,
}

impl<I: Iterator<Item = Bio>> Iterator for BioToBiolu<I> {
    type Item = Result<Biolu, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if !self.primed {
            self.lookahead = self.source.next();
            self.primed = true;
        }

        let current = self.lookahead.take()?;
        self.lookahead = self.source.next();
        let position = self.position;
        self.position += 1;

        let out = match (current, self.lookahead) {
            (Bio::O, Some(Bio::I)) => {
                self.failed = true;
                let err = TagSequenceError::illegal_after(position + 1, "I", Some("O"));
                return Some(Err(err.into()));
            }
            (Bio::O, _) => Biolu::O,
            // span continues iff the next tag is inside
            (Bio::B, Some(Bio::I)) => Biolu::B,
            (Bio::B, _) => Biolu::U,
            (Bio::I, Some(Bio::I)) => Biolu::I,
            (Bio::I, _) => Biolu::L,
        };
        Some(Ok(out))
    }
}

/// Lazy BIOLU → BIO transducer. See [biolu_to_bio].
pub struct BioluToBio<I: Iterator<Item = Biolu>> {
    source: I,
    previous: Option<Biolu>,
    position: usize,
    failed: bool,
}

impl<I: Iterator<Item = Biolu>> Iterator for BioluToBio<I> {
    type Item = Result<Bio, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let current = self.source.next()?;
        let position = self.position;
        self.position += 1;
        let previous = self.previous.replace(current);

        let legal = match current {
            Biolu::O | Biolu::B => matches!(
                previous,
                None | Some(Biolu::L) | Some(Biolu::U) | Some(Biolu::O)
            ),
            Biolu::I | Biolu::L => matches!(previous, Some(Biolu::B) | Some(Biolu::I)),
            Biolu::U => matches!(
                previous,
                None | Some(Biolu::L) | Some(Biolu::O) | Some(Biolu::U)
            ),
        };
        if !legal {
            self.failed = true;
            let err = TagSequenceError::illegal_after(
                position,
                current.symbol(),
                previous.map(|p| p.symbol()),
            );
            return Some(Err(err.into()));
        }

        let out = match current {
            Biolu::O => Bio::O,
            Biolu::B | Biolu::U => Bio::B,
            Biolu::I | Biolu::L => Bio::I,
        };
        Some(Ok(out))
    }
}
