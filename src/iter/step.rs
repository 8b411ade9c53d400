//! Staggered stepping through a re-iterable corpus.
use crate::error::Error;

/// Steps through `corpus`, yielding every `step`th element, over several
/// passes with increasing offsets.
///
/// Pass `i` starts at offset `(i + start) % step`. With the default
/// `repeat = step` passes, every element of the corpus is yielded exactly
/// once, grouped by offset: `x_0, x_step, x_2step, ..., x_1, x_1+step, ...`.
/// With `repeat = 1` the result is a plain every-`step`th subsample of
/// roughly `len / step` elements.
///
/// The corpus must be re-iterable since each pass starts over, hence the
/// `Clone` bound on the source.
///
/// Fails with [Error::InvalidStep] if `step` is 0.
pub fn step<C>(
    corpus: C,
    step: usize,
    repeat: Option<usize>,
    start: usize,
) -> Result<impl Iterator<Item = C::Item>, Error>
where
    C: IntoIterator + Clone,
{
    if step == 0 {
        return Err(Error::InvalidStep(step));
    }
    let repeat = repeat.unwrap_or(step);

    Ok((0..repeat).flat_map(move |i| {
        let offset = (i + start) % step;
        corpus.clone().into_iter().skip(offset).step_by(step)
    }))
}

#[cfg(test)]
mod tests {
    use super::step;
    use crate::error::Error;

    #[test]
    fn zero_step_is_rejected() {
        assert!(matches!(
            step(vec![1, 2, 3], 0, None, 0),
            Err(Error::InvalidStep(0))
        ));
    }

    #[test]
    fn step_one_is_identity() {
        let out: Vec<_> = step(vec![1, 2, 3, 4], 1, None, 0).unwrap().collect();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn single_pass_subsamples() {
        let corpus: Vec<u32> = (0..10).collect();
        let out: Vec<_> = step(corpus, 3, Some(1), 0).unwrap().collect();
        assert_eq!(out, vec![0, 3, 6, 9]);
    }

    #[test]
    fn full_repeat_covers_all_elements_staggered() {
        let corpus: Vec<u32> = (0..7).collect();
        let out: Vec<_> = step(corpus, 3, None, 0).unwrap().collect();
        assert_eq!(out, vec![0, 3, 6, 1, 4, 2, 5]);
    }

    #[test]
    fn start_shifts_the_first_offset() {
        let corpus: Vec<u32> = (0..6).collect();
        let out: Vec<_> = step(corpus, 2, Some(1), 1).unwrap().collect();
        assert_eq!(out, vec![1, 3, 5]);
    }

    #[test]
    fn empty_corpus() {
        let out: Vec<u32> = step(Vec::new(), 4, None, 0).unwrap().collect();
        assert!(out.is_empty());
    }
}
