//! # textflow
//!
//! Streaming utilities for natural-language corpus workflows: bounded-memory
//! shuffling of lazy sequences, corpus iteration adapters, and conversion
//! between the BIO and BIOLU tag schemes used in sequence labeling.
//!
//! This crate can be used as a library, or through the `textflow` binary to
//! shuffle, sample, or tag-convert line-oriented files.
//!
//! ```rust
//! use textflow::shuffling::shuffle_bounded;
//! use textflow::tagging::{bio_to_biolu, Bio, Biolu};
//!
//! // shuffle an unbounded stream in constant memory
//! let some: Vec<u64> = shuffle_bounded(0u64.., 100).unwrap().take(10).collect();
//! assert_eq!(some.len(), 10);
//!
//! // convert a BIO tag sequence to BIOLU
//! let tags = vec![Bio::O, Bio::B, Bio::I, Bio::O, Bio::B];
//! let biolu: Result<Vec<Biolu>, _> = bio_to_biolu(tags).collect();
//! assert_eq!(
//!     biolu.unwrap(),
//!     vec![Biolu::O, Biolu::B, Biolu::L, Biolu::O, Biolu::U]
//! );
//! ```
pub mod error;
pub mod iter;
pub mod shuffling;
pub mod tagging;
