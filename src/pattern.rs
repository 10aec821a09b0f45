use rand::{rngs::SmallRng, RngCore, SeedableRng};

use crate::encoding::minimal_be_bytes;

/// Produces the content of one dummy file.
pub trait Pattern {
    /// Returns exactly `size` bytes.
    fn generate(&mut self, size: usize) -> Vec<u8>;

    /// Whether repeated calls with the same size return the same bytes, so a
    /// caller may reuse one buffer for a whole size group.
    fn is_deterministic(&self) -> bool {
        false
    }
}

/// First `size` bytes of the infinite repetition of `seed`, i.e.
/// `out[i] == seed[i % seed.len()]`. An empty seed yields an empty buffer.
pub fn repeat_to_len(seed: &[u8], size: usize) -> Vec<u8> {
    seed.iter().copied().cycle().take(size).collect()
}

pub struct RandomPattern {
    rng: SmallRng,
}

impl RandomPattern {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for RandomPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RandomPattern {
    fn generate(&mut self, size: usize) -> Vec<u8> {
        let mut buf = vec![0u8; size];
        self.rng.fill_bytes(&mut buf);
        buf
    }
}

pub struct FixedPattern {
    seed: Vec<u8>,
}

impl FixedPattern {
    /// `seed` is the already-encoded value; an empty seed is treated as a
    /// single zero byte.
    pub fn new(seed: Vec<u8>) -> Self {
        let seed = if seed.is_empty() { vec![0] } else { seed };
        Self { seed }
    }

    pub fn from_value(value: u128) -> Self {
        Self::new(minimal_be_bytes(value))
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed
    }
}

impl Pattern for FixedPattern {
    fn generate(&mut self, size: usize) -> Vec<u8> {
        repeat_to_len(&self.seed, size)
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

/// Walks `start` toward `end` inclusive, one step at a time, concatenating the
/// minimal big-endian encoding of every visited value.
pub struct SequentialPattern {
    start: u128,
    end: u128,
}

impl SequentialPattern {
    pub fn new(start: u128, end: u128) -> Self {
        Self { start, end }
    }

    /// The concatenated walk before repetition. At most `size` values are
    /// visited and the walk stops once `size` bytes are collected, so the
    /// result is shorter than `size + 16` bytes.
    pub fn seed(&self, size: usize) -> Vec<u8> {
        if size == 0 {
            return Vec::new();
        }
        let limit = size as u128 - 1;
        let values: Box<dyn Iterator<Item = u128>> = if self.start <= self.end {
            let end = self.end.min(self.start.saturating_add(limit));
            Box::new(self.start..=end)
        } else {
            let end = self.end.max(self.start.saturating_sub(limit));
            Box::new((end..=self.start).rev())
        };
        let mut seed = Vec::with_capacity(size);
        for value in values {
            seed.extend_from_slice(&minimal_be_bytes(value));
            if seed.len() >= size {
                break;
            }
        }
        seed
    }
}

impl Pattern for SequentialPattern {
    fn generate(&mut self, size: usize) -> Vec<u8> {
        let mut seed = self.seed(size);
        if seed.len() >= size {
            seed.truncate(size);
            return seed;
        }
        repeat_to_len(&seed, size)
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetition_is_periodic() {
        let seed = [1u8, 2, 3];
        for size in 1..20 {
            let out = repeat_to_len(&seed, size);
            assert_eq!(out.len(), size);
            for (i, b) in out.iter().enumerate() {
                assert_eq!(*b, seed[i % seed.len()]);
            }
        }
    }

    #[test]
    fn repetition_truncates_short_targets() {
        assert_eq!(repeat_to_len(&[9, 8, 7, 6], 2), vec![9, 8]);
    }

    #[test]
    fn fixed_two_byte_value() {
        let mut p = FixedPattern::from_value(0x09AB);
        assert_eq!(p.generate(5), vec![0x09, 0xAB, 0x09, 0xAB, 0x09]);
    }

    #[test]
    fn fixed_zero_is_one_byte() {
        let mut p = FixedPattern::from_value(0);
        assert_eq!(p.seed(), &[0]);
        assert_eq!(p.generate(3), vec![0, 0, 0]);
    }

    #[test]
    fn fixed_matches_periodic_law() {
        let mut p = FixedPattern::new(vec![0xDE, 0xAD, 0xBE]);
        for size in [1, 2, 3, 4, 7, 64, 1000] {
            let out = p.generate(size);
            assert_eq!(out.len(), size);
            assert!(out.iter().enumerate().all(|(i, b)| *b == p.seed()[i % 3]));
        }
    }

    #[test]
    fn sequential_full_byte_range() {
        let mut p = SequentialPattern::new(0, 255);
        let expected: Vec<u8> = (0..=255u8).collect();
        assert_eq!(p.generate(256), expected);
    }

    #[test]
    fn sequential_descending_truncated() {
        let mut p = SequentialPattern::new(255, 0);
        assert_eq!(p.generate(2), vec![0xFF, 0xFE]);
    }

    #[test]
    fn sequential_short_range_repeats() {
        let mut p = SequentialPattern::new(0xFF, 0x00);
        let out = p.generate(300);
        assert_eq!(out.len(), 300);
        assert_eq!(&out[..3], &[0xFF, 0xFE, 0xFD]);
        assert_eq!(out[255], 0x00);
        assert_eq!(out[256], 0xFF);
    }

    #[test]
    fn sequential_single_value() {
        let mut p = SequentialPattern::new(7, 7);
        assert_eq!(p.generate(4), vec![7, 7, 7, 7]);
    }

    #[test]
    fn sequential_mixed_widths() {
        let mut p = SequentialPattern::new(0xFE, 0x101);
        assert_eq!(p.seed(100), vec![0xFE, 0xFF, 0x01, 0x00, 0x01, 0x01]);
        assert_eq!(p.generate(8), vec![0xFE, 0xFF, 0x01, 0x00, 0x01, 0x01, 0xFE, 0xFF]);
    }

    #[test]
    fn sequential_clamps_long_walks() {
        let p = SequentialPattern::new(0, u128::MAX);
        assert_eq!(p.seed(10), (0..10u8).collect::<Vec<_>>());
        let p = SequentialPattern::new(u128::MAX, 0);
        assert_eq!(p.seed(2).len(), 16);
    }

    #[test]
    fn sequential_seed_stays_near_target_size() {
        let down = SequentialPattern::new(u128::MAX, 0);
        let up = SequentialPattern::new(u128::MAX - 0xFFFF, u128::MAX);
        for size in [1, 15, 16, 17, 1000, 65_537] {
            assert!(down.seed(size).len() < size + 16);
            assert!(up.seed(size).len() < size + 16);
        }
        let mut down = down;
        let out = down.generate(40);
        assert_eq!(out.len(), 40);
        assert_eq!(&out[..16], &[0xFF; 16]);
        let mut second = [0xFF; 16];
        second[15] = 0xFE;
        assert_eq!(&out[16..32], &second);
    }

    #[test]
    fn deterministic_patterns() {
        assert!(!RandomPattern::new().is_deterministic());
        assert!(FixedPattern::from_value(1).is_deterministic());
        assert!(SequentialPattern::new(0, 1).is_deterministic());
    }

    #[test]
    fn sequential_length_is_exact() {
        for (start, end) in [(0, 0), (0, 3), (0x1000, 0x0FF0), (5, 70_000)] {
            let mut p = SequentialPattern::new(start, end);
            for size in [1, 2, 3, 17, 513] {
                assert_eq!(p.generate(size).len(), size);
            }
        }
    }

    #[test]
    fn random_has_requested_length() {
        let mut p = RandomPattern::new();
        assert_eq!(p.generate(0).len(), 0);
        assert_eq!(p.generate(4096).len(), 4096);
    }
}
