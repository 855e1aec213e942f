//! Random, duplicate-free selection of records.

use rand::prelude::*;

/// Number of records shown on the home page.
pub const DEFAULT_COUNT: usize = 6;

/// Draws up to `count` distinct items, uniformly.
pub fn sample<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    sample_with(&mut rand::thread_rng(), items, count)
}

/// Same as [`sample`], with a caller-provided RNG.
///
/// Items are picked by position, without replacement: the result holds
/// `min(count, items.len())` elements and never the same position twice.
pub fn sample_with<T, R>(rng: &mut R, items: &[T], count: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    items.choose_multiple(rng, count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn sample_size() {
        let items = (0..20).collect::<Vec<u32>>();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 0..25 {
                let res = sample_with(&mut rng, &items, count);

                assert_eq!(res.len(), count.min(items.len()));
                let unique = res.iter().collect::<HashSet<_>>();
                assert_eq!(unique.len(), res.len(), "duplicate in {res:?}");
                assert!(res.iter().all(|item| items.contains(item)));
            }
        }
    }

    #[test]
    fn small_collection() {
        let items = vec!['a', 'b', 'c'];

        let mut res = sample(&items, DEFAULT_COUNT);
        res.sort_unstable();

        assert_eq!(res, items);
    }

    #[test]
    fn zero_count() {
        assert!(sample(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn empty_collection() {
        assert!(sample::<u8>(&[], DEFAULT_COUNT).is_empty());
    }

    #[test]
    fn every_item_can_be_drawn() {
        let items = (0..10).collect::<Vec<u32>>();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.extend(sample_with(&mut rng, &items, 2));
        }

        assert_eq!(seen.len(), items.len());
    }
}
