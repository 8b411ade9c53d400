//! Cross-module properties: conservation and uniformity of the shuffles,
//! BIO/BIOLU round-tripping and error behavior.
use std::collections::HashMap;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use textflow::error::Error;
use textflow::shuffling::{shuffle, shuffle_bounded, shuffle_with, ReservoirShuffle};
use textflow::tagging::{bio_to_biolu, biolu_to_bio, Bio, Biolu};

const TRIALS: usize = 24_000;

/// Chi-square statistic of observed permutation counts against the uniform
/// distribution over the 24 permutations of a 4-element sequence.
fn chi_square(counts: &HashMap<Vec<u32>, usize>) -> f64 {
    let expected = TRIALS as f64 / 24.0;
    // permutations that never showed up still contribute their full
    // expected count to the statistic
    let mut stat = (24.0 - counts.len() as f64) * expected;
    for &count in counts.values() {
        let diff = count as f64 - expected;
        stat += diff * diff / expected;
    }
    stat
}

// under uniformity the statistic has mean 23 (degrees of freedom);
// 100 corresponds to a p-value below 1e-10
const CHI_SQUARE_BOUND: f64 = 100.0;

#[test]
fn conservation_across_capacities() {
    let src: Vec<u32> = (0..20).collect();
    for capacity in 1..=25 {
        let mut out: Vec<_> = shuffle_bounded(src.clone(), capacity).unwrap().collect();
        assert_eq!(out.len(), src.len(), "capacity {}", capacity);
        out.sort_unstable();
        assert_eq!(out, src, "capacity {}", capacity);
    }
}

#[test]
fn capacity_one_is_original_order() {
    let src: Vec<u32> = (0..100).collect();
    let out: Vec<_> = shuffle_bounded(src.clone(), 1).unwrap().collect();
    assert_eq!(out, src);
}

#[test]
fn full_shuffle_is_uniform() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut counts = HashMap::new();
    for _ in 0..TRIALS {
        let perm = shuffle_with(vec![1u32, 2, 3, 4], &mut rng);
        *counts.entry(perm).or_insert(0usize) += 1;
    }
    assert_eq!(counts.len(), 24, "all permutations reachable");
    let stat = chi_square(&counts);
    assert!(stat < CHI_SQUARE_BOUND, "chi-square statistic {}", stat);
}

#[test]
fn reservoir_at_full_capacity_is_uniform() {
    let mut rng = StdRng::seed_from_u64(0xB10B);
    let mut counts = HashMap::new();
    for _ in 0..TRIALS {
        let perm: Vec<u32> = ReservoirShuffle::with_rng(vec![1u32, 2, 3, 4], 4, &mut rng)
            .unwrap()
            .collect();
        *counts.entry(perm).or_insert(0usize) += 1;
    }
    assert_eq!(counts.len(), 24, "all permutations reachable");
    let stat = chi_square(&counts);
    assert!(stat < CHI_SQUARE_BOUND, "chi-square statistic {}", stat);
}

#[test]
fn empty_inputs() {
    let shuffled: Vec<u32> = shuffle_bounded(Vec::new(), 5).unwrap().collect();
    assert!(shuffled.is_empty());
    assert!(shuffle(Vec::<u32>::new()).is_empty());

    let biolu: Result<Vec<Biolu>, Error> = bio_to_biolu(Vec::new()).collect();
    assert!(biolu.unwrap().is_empty());
    let bio: Result<Vec<Bio>, Error> = biolu_to_bio(Vec::new()).collect();
    assert!(bio.unwrap().is_empty());
}

#[test]
fn bio_to_biolu_reference_sequence() {
    use Bio::*;
    let out: Result<Vec<_>, Error> = bio_to_biolu(vec![O, B, I, O, B]).collect();
    assert_eq!(
        out.unwrap(),
        vec![Biolu::O, Biolu::B, Biolu::L, Biolu::O, Biolu::U]
    );
}

#[test]
fn round_trip_over_all_valid_bio_sequences() {
    // every BIO sequence of length 6 with no leading I and no I after O
    let mut checked = 0usize;
    let all_sequences = std::iter::repeat([Bio::O, Bio::B, Bio::I])
        .take(6)
        .multi_cartesian_product();
    for seq in all_sequences {
        let valid = seq
            .iter()
            .scan(None, |prev, &tag| {
                let ok = tag != Bio::I || matches!(*prev, Some(Bio::B) | Some(Bio::I));
                *prev = Some(tag);
                Some(ok)
            })
            .all(|ok| ok);
        if !valid {
            continue;
        }
        checked += 1;

        let biolu: Vec<Biolu> = bio_to_biolu(seq.clone())
            .collect::<Result<_, Error>>()
            .unwrap();
        let back: Vec<Bio> = biolu_to_bio(biolu).collect::<Result<_, Error>>().unwrap();
        assert_eq!(back, seq);
    }
    assert!(checked > 100, "checked only {} sequences", checked);
}

#[test]
fn illegal_bio_sequence_errors() {
    use Bio::*;
    let out: Vec<_> = bio_to_biolu(vec![O, I]).collect();
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], Err(Error::TagSequence(_))));
}

#[test]
fn illegal_biolu_sequence_errors() {
    let out: Vec<_> = biolu_to_bio(vec![Biolu::I]).collect();
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], Err(Error::TagSequence(_))));
}

/// A unit tag opens a single-token span, so it must map back to `B`.
/// (The historical behavior of mapping `U` to `L` breaks round-tripping
/// and produces a tag outside the BIO alphabet.)
#[test]
fn unit_tag_maps_to_begin() {
    let out: Vec<Bio> = biolu_to_bio(vec![Biolu::O, Biolu::U, Biolu::O])
        .collect::<Result<_, Error>>()
        .unwrap();
    assert_eq!(out, vec![Bio::O, Bio::B, Bio::O]);
}
