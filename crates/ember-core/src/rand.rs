//! Seedable xorshift32 PRNG, small enough to not need a crate

use std::time::{SystemTime, UNIX_EPOCH};

pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the wall clock, for hosts that want a different show each run
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0x2545_F491);
        Self::new(nanos ^ 0xDEAD_BEEF)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns an integer in [min, max], both ends inclusive
    pub fn int_range(&mut self, min: usize, max: usize) -> usize {
        let span = max - min + 1;
        // next_f32 can round up to exactly 1.0 at the top of the u32 range
        min + ((self.next_f32() * span as f32) as usize).min(span - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = XorShiftRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn rng_int_range_inclusive() {
        let mut rng = XorShiftRng::new(7);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..2000 {
            let v = rng.int_range(2, 5);
            assert!((2..=5).contains(&v));
            saw_min |= v == 2;
            saw_max |= v == 5;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn rng_deterministic_under_seed() {
        let mut a = XorShiftRng::new(123);
        let mut b = XorShiftRng::new(123);
        for _ in 0..100 {
            assert_eq!(a.next_f32().to_bits(), b.next_f32().to_bits());
        }
    }

    #[test]
    fn rng_zero_seed_is_remapped() {
        // xorshift with state 0 would be stuck at 0 forever
        let mut rng = XorShiftRng::new(0);
        assert!((0..10).any(|_| rng.next_f32() > 0.0));
    }
}
