//! Base-position sampling for the particle cloud.
//!
//! Positions are drawn from a flattened box: full width on x, 45 % of the
//! width on y (shifted slightly upward), and 80 % of the width on z. The
//! random source is injected so a fixed seed yields the same cloud.
//!
//! ```ignore
//! use mote::spawn::SpawnVolume;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let bases = SpawnVolume::new(3.0).sample_many(&mut rng, 2500);
//! ```

use glam::Vec3;
use rand::Rng;

/// Vertical extent relative to `area`.
const Y_SCALE: f32 = 0.45;
/// Vertical center offset: y is drawn from `r - 0.4`, not `r - 0.5`.
const Y_SHIFT: f32 = 0.4;
/// Depth extent relative to `area`.
const Z_SCALE: f32 = 0.8;

/// A flattened box centered near the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnVolume {
    /// Edge length along x.
    pub area: f32,
}

impl SpawnVolume {
    /// Create a volume with the given edge length along x.
    pub fn new(area: f32) -> Self {
        Self { area }
    }

    /// Draw one position.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let x = (rng.gen::<f32>() - 0.5) * self.area;
        let y = (rng.gen::<f32>() - Y_SHIFT) * (self.area * Y_SCALE);
        let z = (rng.gen::<f32>() - 0.5) * self.area * Z_SCALE;
        Vec3::new(x, y, z)
    }

    /// Draw `count` positions in order.
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Vec3> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Smallest corner of the volume (inclusive).
    pub fn min(&self) -> Vec3 {
        Vec3::new(
            -0.5 * self.area,
            -Y_SHIFT * (self.area * Y_SCALE),
            -0.5 * self.area * Z_SCALE,
        )
    }

    /// Largest corner of the volume (exclusive).
    pub fn max(&self) -> Vec3 {
        Vec3::new(
            0.5 * self.area,
            (1.0 - Y_SHIFT) * (self.area * Y_SCALE),
            0.5 * self.area * Z_SCALE,
        )
    }
}
