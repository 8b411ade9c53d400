/*! NER tag schemes and scheme conversion.

Sequence-labeling tags come in two closed alphabets here:
- [Bio]: `B`egin / `I`nside / `O`utside,
- [Biolu]: BIO extended with `L`ast and `U`nit for explicit span ends and
  single-token spans.

[bio_to_biolu] and [biolu_to_bio] convert lazily between the two, validating
transition legality as they go. [pos] holds the compiled-in Universal POS
classification tables.

!*/
mod convert;
pub mod pos;
mod scheme;

pub use convert::bio_to_biolu;
pub use convert::biolu_to_bio;
pub use convert::BioToBiolu;
pub use convert::BioluToBio;
pub use scheme::parse_bio;
pub use scheme::parse_biolu;
pub use scheme::Bio;
pub use scheme::Biolu;
