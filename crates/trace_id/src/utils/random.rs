use rand::Rng;
use rand::distr::Alphanumeric;

/// Random string of exactly `len` characters drawn uniformly from
/// `[0-9A-Za-z]`. A length of zero yields the empty string.
pub fn random_alphanumeric(len: usize) -> String {
    random_alphanumeric_with(&mut rand::rng(), len)
}

/// Same as [`random_alphanumeric`], drawing from the provided RNG so
/// callers can seed for reproducible output.
pub fn random_alphanumeric_with<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn exact_length_and_alphabet() {
        for len in [1, 6, 8, 32] {
            let s = random_alphanumeric(len);
            assert_eq!(s.len(), len);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn zero_length_yields_empty_string() {
        assert_eq!(random_alphanumeric(0), "");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = random_alphanumeric_with(&mut StdRng::seed_from_u64(42), 8);
        let b = random_alphanumeric_with(&mut StdRng::seed_from_u64(42), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = random_alphanumeric_with(&mut StdRng::seed_from_u64(1), 32);
        let b = random_alphanumeric_with(&mut StdRng::seed_from_u64(2), 32);
        assert_ne!(a, b);
    }
}
