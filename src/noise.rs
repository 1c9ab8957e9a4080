// Coordinate hashes for tile texturing and scene grain. Changing any
// coefficient changes the committed fixtures.

use crate::common::{PixelCoord, Seed};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinearHash {
    pub x_mul: u32,
    pub x_seed_mul: u32,
    pub y_mul: u32,
    pub y_seed_mul: u32,
    pub seed_mul: u32,
    pub modulus: u32, // must be non-zero
}

impl LinearHash {
    pub const fn new(x_mul: u32, y_mul: u32, modulus: u32) -> Self {
        LinearHash {
            x_mul,
            x_seed_mul: 0,
            y_mul,
            y_seed_mul: 0,
            seed_mul: 0,
            modulus,
        }
    }

    // (x*(x_mul + x_seed_mul*s) + y*(y_mul + y_seed_mul*s) + seed_mul*s) mod modulus
    pub const fn seeded(
        x_mul: u32,
        x_seed_mul: u32,
        y_mul: u32,
        y_seed_mul: u32,
        seed_mul: u32,
        modulus: u32,
    ) -> Self {
        LinearHash {
            x_mul,
            x_seed_mul,
            y_mul,
            y_seed_mul,
            seed_mul,
            modulus,
        }
    }

    pub const fn with_seed_offset(self, seed_mul: u32) -> Self {
        LinearHash { seed_mul, ..self }
    }

    // In [0, modulus) for any input, negative coordinates included.
    pub fn sample(&self, x: PixelCoord, y: PixelCoord, seed: Seed) -> u32 {
        let seed = seed as i64;
        let kx = self.x_mul as i64 + self.x_seed_mul as i64 * seed;
        let ky = self.y_mul as i64 + self.y_seed_mul as i64 * seed;
        let sum = x as i64 * kx + y as i64 * ky + self.seed_mul as i64 * seed;
        sum.rem_euclid(self.modulus as i64) as u32
    }

    pub fn hits(&self, x: PixelCoord, y: PixelCoord, seed: Seed) -> bool {
        self.sample(x, y, seed) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hash() {
        let h = LinearHash::new(17, 19, 23);
        assert_eq!(h.sample(0, 0, 0), 0);
        assert_eq!(h.sample(1, 1, 0), 36 % 23);
        assert!(h.hits(0, 0, 5));
    }

    #[test]
    fn seed_terms() {
        let h = LinearHash::seeded(11, 1, 7, 2, 13, 37);
        // x*(11+3) + y*(7+6) + 39
        assert_eq!(h.sample(2, 1, 3), (28 + 13 + 39) % 37);
    }

    #[test]
    fn sample_stays_in_range() {
        let h = LinearHash::seeded(5, 1, 11, 2, 23, 43);
        for seed in 0..10 {
            for y in -20..20 {
                for x in -20..20 {
                    assert!(h.sample(x, y, seed) < 43);
                }
            }
        }
    }

    #[test]
    fn seed_offset_only_shifts() {
        let base = LinearHash::new(1, 1, 11);
        let shifted = base.with_seed_offset(1);
        assert_eq!(shifted.sample(3, 4, 0), base.sample(3, 4, 0));
        assert_eq!(shifted.sample(3, 4, 2), (3 + 4 + 2) % 11);
    }
}
