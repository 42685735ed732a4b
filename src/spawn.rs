//! Spatial sampling for particle and ornament placement.
//!
//! Every record in the scene owns two fixed endpoints: a scatter position
//! drawn from a solid sphere and a tree position drawn from a cone. The
//! samplers here produce those endpoints plus the per-record scalars
//! (size, phase, speed) the animators consume.

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Sampling context for one record.
///
/// Carries the record's index, the total build count, and an owned RNG so
/// that records can be generated independently:
///
/// ```ignore
/// let particles: Vec<FoliageParticle> = (0..count)
///     .map(|i| {
///         let mut ctx = SpawnContext::new(i, count);
///         FoliageParticle {
///             scatter_pos: ctx.scatter_position(SCATTER_RADIUS),
///             tree_pos: ctx.tree_position(CONE_HEIGHT, CONE_RADIUS, 0.2),
///             phase: ctx.random(),
///             size: ctx.random_range(0.2, 0.8),
///         }
///     })
///     .collect();
/// ```
pub struct SpawnContext {
    /// Index of the record being built (0 to count-1).
    pub index: u32,
    /// Total number of records being built.
    pub count: u32,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a sampling context for one record.
    pub fn new(index: u32, count: u32) -> Self {
        // Seed per index so records are independent within a build,
        // but different each program execution
        let seed = index as u64
            ^ (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42));

        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized position in the build (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.index as f32 / self.count as f32
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    // ========== Shape samplers ==========

    /// Random point inside a solid sphere of the given radius.
    ///
    /// Uniform by volume: the polar angle comes from `acos(2v - 1)` so
    /// points do not bunch at the poles, and the radius takes a cube root
    /// so they do not bunch at the center.
    pub fn scatter_position(&mut self, radius: f32) -> Vec3 {
        let theta = self.rng.gen_range(0.0..TAU);
        let phi = (2.0 * self.rng.gen::<f32>() - 1.0).acos();
        let r = radius * self.rng.gen::<f32>().cbrt();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Random point inside an apex-up cone, vertically centered at the
    /// origin.
    ///
    /// The cone tapers linearly: at normalized height `h` the cross-section
    /// radius is `(1 - h) * base_radius`. `randomness` trades how the
    /// cross-section fills: at 0.0 the radial offset is an area-uniform
    /// disk sample (`r * sqrt(u)`), at 1.0 it collapses to the rim, biasing
    /// samples toward a thin shell. The apex (`h -> 1`) is safe because the
    /// offset multiplies the shrinking radius rather than dividing by it.
    pub fn tree_position(&mut self, height: f32, base_radius: f32, randomness: f32) -> Vec3 {
        let h = self.rng.gen::<f32>();
        let r = (1.0 - h) * base_radius;
        let theta = self.rng.gen_range(0.0..TAU);
        let r_offset = r * self.rng.gen::<f32>().sqrt() * (1.0 - randomness) + r * randomness;

        Vec3::new(
            r_offset * theta.cos(),
            h * height - height / 2.0,
            r_offset * theta.sin(),
        )
    }

    /// Deterministic point on a spiral winding up the cone surface.
    ///
    /// Distributes the build evenly along `turns` half-revolutions from
    /// base to apex. Useful for garland-style layouts.
    pub fn spiral_position(&self, height: f32, base_radius: f32, turns: f32) -> Vec3 {
        let h = self.progress();
        let angle = h * std::f32::consts::PI * turns;
        let r = (1.0 - h) * base_radius;

        Vec3::new(r * angle.cos(), h * height - height / 2.0, r * angle.sin())
    }
}

/// Push a cone sample outward along its horizontal radial direction.
///
/// Used so ornaments sit slightly outside the foliage volume. A sample on
/// the vertical axis has no radial direction; fall back to +X rather than
/// let a NaN reach the instance buffer.
pub fn push_outward(point: Vec3, distance: f32) -> Vec3 {
    let horizontal = Vec3::new(point.x, 0.0, point.z);
    let dir = if horizontal.length_squared() > 1e-8 {
        horizontal.normalize()
    } else {
        Vec3::X
    };
    point + dir * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_position_inside_radius() {
        let mut ctx = SpawnContext::new(0, 1);
        for _ in 0..1000 {
            let pos = ctx.scatter_position(15.0);
            assert!(pos.length() <= 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_scatter_position_volume_uniform() {
        // (distance/R)^3 should be approximately uniform on [0,1]; check the
        // mean, which is 0.5 for a uniform variate.
        let mut ctx = SpawnContext::new(0, 1);
        let n = 20_000;
        let mean: f32 = (0..n)
            .map(|_| {
                let d = ctx.scatter_position(15.0).length() / 15.0;
                d * d * d
            })
            .sum::<f32>()
            / n as f32;
        assert!((mean - 0.5).abs() < 0.02, "cubed radius mean {}", mean);
    }

    #[test]
    fn test_tree_position_within_taper() {
        let mut ctx = SpawnContext::new(0, 1);
        for _ in 0..1000 {
            let pos = ctx.tree_position(12.0, 5.0, 0.2);
            assert!(pos.y >= -6.0 - 1e-3 && pos.y <= 6.0 + 1e-3);

            let h = (pos.y + 6.0) / 12.0;
            let max_r = (1.0 - h) * 5.0;
            let horizontal = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!(
                horizontal <= max_r + 1e-3,
                "r {} exceeds taper {}",
                horizontal,
                max_r
            );
        }
    }

    #[test]
    fn test_tree_position_shell_bias_at_full_randomness() {
        // randomness = 1.0 pins every sample to the taper rim.
        let mut ctx = SpawnContext::new(0, 1);
        for _ in 0..200 {
            let pos = ctx.tree_position(12.0, 5.0, 1.0);
            let h = (pos.y + 6.0) / 12.0;
            let max_r = (1.0 - h) * 5.0;
            let horizontal = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!((horizontal - max_r).abs() < 1e-3);
        }
    }

    #[test]
    fn test_spiral_position_endpoints() {
        let base = SpawnContext::new(0, 100).spiral_position(12.0, 5.0, 15.0);
        assert!((base.y + 6.0).abs() < 1e-4);
        assert!(((base.x * base.x + base.z * base.z).sqrt() - 5.0).abs() < 1e-3);

        let near_apex = SpawnContext::new(99, 100).spiral_position(12.0, 5.0, 15.0);
        assert!(near_apex.y > 5.0);
    }

    #[test]
    fn test_push_outward_moves_radially() {
        let p = push_outward(Vec3::new(3.0, 2.0, 4.0), 0.4);
        let before = (3.0f32 * 3.0 + 4.0 * 4.0).sqrt();
        let after = (p.x * p.x + p.z * p.z).sqrt();
        assert!((after - before - 0.4).abs() < 1e-5);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_push_outward_axis_fallback() {
        // A sample exactly on the vertical axis must not produce NaN.
        let p = push_outward(Vec3::new(0.0, 5.0, 0.0), 0.4);
        assert!(p.is_finite());
        assert!((p.x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_progress_zero_count() {
        let ctx = SpawnContext::new(0, 0);
        assert_eq!(ctx.progress(), 0.0);
    }
}
