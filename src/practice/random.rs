extern crate rand;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A `Send` generator for fetches that run on spawned tasks.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}
pub fn choose_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_has_no_choice() {
        let empty: [u8; 0] = [];
        assert_eq!(choose_with(&empty, &mut entropy_rng()), None);
    }

    #[test]
    fn choice_comes_from_the_slice() {
        let items = ["two-sum", "add-two-numbers", "valid-parentheses"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let picked = choose_with(&items, &mut rng).unwrap();
            assert!(items.contains(picked));
        }
    }
}
