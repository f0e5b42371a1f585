use tracing::trace;

use crate::random::BoundedRandom;

/// Fisher-Yates (Knuth) shuffle, walking from the last index down to 1 and
/// swapping each slot with a randomly chosen slot at or before it.
///
/// Exactly `len - 1` draws are made (none for empty or single-element
/// slices), with bounds `len, len - 1, ..., 2` in that order. The slice is
/// returned for convenience.
pub fn shuffle<'a, T, R: BoundedRandom>(array: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..array.len()).rev() {
        let j = rng.bounded_draw(i + 1);
        trace!("Swapping positions {i} and {j}.");
        array.swap(i, j);
    }
    array
}

#[cfg(test)]
mod tests {
    use crate::random::{BoundedRandom, Lcg};
    use crate::shuffle::shuffle;

    /// Always draws zero, remembering every bound it was asked for.
    #[derive(Default)]
    struct RecordingRandom {
        bounds: Vec<usize>,
    }

    impl BoundedRandom for RecordingRandom {
        fn bounded_draw(&mut self, upper_bound: usize) -> usize {
            self.bounds.push(upper_bound);
            0
        }
    }

    fn sorted(mut values: Vec<i64>) -> Vec<i64> {
        values.sort();
        values
    }

    #[test]
    fn test_shuffle_two_elements_works() {
        let mut values = vec![10, 20];
        shuffle(&mut values, &mut Lcg::new(1));
        assert_eq!(values, vec![20, 10]);
    }

    #[test]
    fn test_shuffle_three_elements_works() {
        let mut values = vec![5, 10, 15];
        shuffle(&mut values, &mut Lcg::new(0));
        assert_eq!(values, vec![10, 15, 5]);
    }

    #[test]
    fn test_shuffle_longer_sequences_works() {
        let mut values = vec![1, 2, 3, 4, 5];
        shuffle(&mut values, &mut Lcg::new(42));
        assert_eq!(values, vec![2, 4, 5, 1, 3]);

        let mut values = vec![-3, 0, 7, 7, 100, -42];
        shuffle(&mut values, &mut Lcg::new(12345));
        assert_eq!(values, vec![0, 7, 7, -42, -3, 100]);
    }

    #[test]
    fn test_shuffle_returns_same_slice() {
        let mut values = vec![5, 10, 15];
        let returned = shuffle(&mut values, &mut Lcg::new(0));
        assert_eq!(returned, &[10, 15, 5]);
    }

    #[test]
    fn test_shuffle_empty_and_single_make_no_draws() {
        let mut rng = Lcg::new(3);
        let mut empty: Vec<i64> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);

        assert_eq!(rng, Lcg::new(3));
    }

    #[test]
    fn test_shuffle_draw_bounds_descend() {
        let mut rng = RecordingRandom::default();
        shuffle(&mut [1, 2, 3, 4, 5], &mut rng);
        assert_eq!(rng.bounds, vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_shuffle_consumes_one_draw_per_position_but_first() {
        for len in 0..20usize {
            let mut values: Vec<usize> = (0..len).collect();
            let mut rng = Lcg::new(len as u64);
            let mut expected = rng.clone();
            for _ in 0..len.saturating_sub(1) {
                expected.next_u32();
            }
            shuffle(&mut values, &mut rng);
            assert_eq!(rng, expected, "length {len}");
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let original: Vec<i64> = vec![3, -1, 4, 1, -5, 9, 2, 6, 5, 3, 5];
        for seed in 0..50 {
            let mut values = original.clone();
            shuffle(&mut values, &mut Lcg::new(seed));
            assert_eq!(sorted(values), sorted(original.clone()));
        }
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let original: Vec<i64> = (0..100).collect();
        let mut first = original.clone();
        let mut second = original.clone();
        shuffle(&mut first, &mut Lcg::new(2024));
        shuffle(&mut second, &mut Lcg::new(2024));
        assert_eq!(first, second);
        assert_ne!(first, original);
    }
}
