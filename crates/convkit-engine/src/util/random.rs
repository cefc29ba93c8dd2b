use RandomSource::{Fixed, Seeded, System};

/// A source of random bytes.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// The operating system's cryptographically secure generator.
    #[default]
    System,

    /// Deterministic pseudo-random stream. Only for testing and benchmarking.
    Seeded(fastrand::Rng),

    /// Repeats the given bytes. Only for testing.
    Fixed(Vec<u8>),
}

impl RandomSource {
    pub fn new_seeded(seed: u64) -> RandomSource {
        Seeded(fastrand::Rng::with_seed(seed))
    }

    pub fn new_fixed(bytes: &[u8]) -> RandomSource {
        assert!(!bytes.is_empty(), "fixed random source needs at least one byte");
        Fixed(bytes.to_vec())
    }

    /// Fills `buf` with random bytes.
    pub fn fill(&mut self, buf: &mut [u8]) {
        match self {
            System => aws_lc_rs::rand::fill(buf).expect("should be infallible"),
            Seeded(rng) => rng.fill(buf),
            Fixed(bytes) => {
                for (dst, src) in buf.iter_mut().zip(bytes.iter().cycle()) {
                    *dst = *src;
                }
            }
        }
    }

    pub fn random_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut val = [0u8; N];
        self.fill(&mut val);
        val
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_produces_different_values() {
        let mut source = RandomSource::default();
        let a = source.random_bytes::<32>();
        let b = source.random_bytes::<32>();
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut s1 = RandomSource::new_seeded(42);
        let mut s2 = RandomSource::new_seeded(42);
        assert_eq!(s1.random_bytes::<16>(), s2.random_bytes::<16>());

        let mut s3 = RandomSource::new_seeded(43);
        assert_ne!(s1.random_bytes::<16>(), s3.random_bytes::<16>());
    }

    #[test]
    fn fixed_source_cycles() {
        let mut source = RandomSource::new_fixed(&[1, 2, 3]);
        assert_eq!(source.random_bytes::<5>(), [1, 2, 3, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "at least one byte")]
    fn empty_fixed_source_panics() {
        RandomSource::new_fixed(&[]);
    }
}
