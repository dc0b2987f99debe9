//! Fixed-size particle storage.

use glam::Vec3;

use crate::breathing::Breathing;

/// Base and current positions of every particle.
///
/// Both buffers are allocated once. Base positions never change; current
/// positions are rewritten from the base positions on every [`breathe`](Self::breathe),
/// so no frame depends on the previous one.
#[derive(Debug, Clone)]
pub struct ParticleField {
    base: Vec<Vec3>,
    current: Vec<Vec3>,
    dirty: bool,
}

impl ParticleField {
    /// Create a field whose current positions start at the base positions.
    pub fn from_base(base: Vec<Vec3>) -> Self {
        let current = base.clone();
        Self {
            base,
            current,
            dirty: true,
        }
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Immutable base positions.
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    /// Positions as of the last [`breathe`](Self::breathe).
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Whether current positions changed since the renderer last consumed them.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark current positions as uploaded.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Recompute every current position for time `t`.
    pub fn breathe(&mut self, breathing: &Breathing, t: f64) {
        for (i, (current, base)) in self.current.iter_mut().zip(&self.base).enumerate() {
            *current = breathing.displace(*base, t, i);
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    fn field() -> ParticleField {
        ParticleField::from_base(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.5, 0.25, 0.75),
            Vec3::ZERO,
        ])
    }

    #[test]
    fn test_new_field_is_dirty_and_at_base() {
        let f = field();
        assert_eq!(f.len(), 3);
        assert!(f.is_dirty());
        assert_eq!(f.positions(), f.base_positions());
    }

    #[test]
    fn test_breathe_is_stateless() {
        let breathing = Breathing::from_config(&FieldConfig::default());
        let mut a = field();
        let mut b = field();

        // a visits other frames first, b jumps straight to t = 7
        for t in [0.5, 1.0, 3.25, 100.0] {
            a.breathe(&breathing, t);
        }
        a.breathe(&breathing, 7.0);
        b.breathe(&breathing, 7.0);

        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.base_positions(), field().base_positions());
    }

    #[test]
    fn test_origin_particle_never_moves() {
        let breathing = Breathing::from_config(&FieldConfig::default());
        let mut f = field();
        f.breathe(&breathing, 1.7);
        assert_eq!(f.positions()[2], Vec3::ZERO);
    }

    #[test]
    fn test_dirty_flag_cycle() {
        let breathing = Breathing::from_config(&FieldConfig::default());
        let mut f = field();
        f.mark_clean();
        assert!(!f.is_dirty());
        f.breathe(&breathing, 0.0);
        assert!(f.is_dirty());
    }
}
