//! The topper: a single star that crowns the assembled tree.

use crate::easing::lerp;
use crate::scene::{Mode, SceneConfig};
use crate::spawn::SpawnContext;
use crate::Vec3;
use glam::{Mat4, Quat, Vec2};
use std::f32::consts::PI;

/// Rate constant for the position lerp. Faster than the ornaments so the
/// star snaps onto the tree quickly.
const POSITION_RATE: f32 = 2.5;

/// Rate constant for leveling the tilt once assembled.
const LEVEL_RATE: f32 = 3.0;

/// Outline of a star polygon in the XY plane, first point up.
///
/// Returns `2 * points` vertices alternating between the outer and inner
/// radius, wound counter-clockwise.
pub fn star_outline(points: u32, outer_radius: f32, inner_radius: f32) -> Vec<Vec2> {
    let angle_offset = -PI / 2.0;
    (0..points * 2)
        .map(|i| {
            let angle = i as f32 * PI / points as f32 + angle_offset;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// Singleton topper state: fixed endpoints, mutable rendered transform.
pub struct Topper {
    /// Endpoint above the cone apex.
    pub crown_pos: Vec3,
    /// Endpoint inside the scatter sphere.
    pub scatter_pos: Vec3,
    /// Current rendered position.
    pub position: Vec3,
    /// Current rendered rotation (Euler XYZ, radians).
    pub rotation: Vec3,
}

impl Topper {
    /// Create the topper with a crown point slightly above the cone apex
    /// and one fresh scatter sample.
    pub fn new(config: &SceneConfig) -> Self {
        let mut ctx = SpawnContext::new(0, 1);
        let scatter_pos = ctx.scatter_position(config.scatter_radius);
        let crown_pos = Vec3::new(0.0, config.cone_height / 2.0 + 0.2, 0.0);

        Self {
            crown_pos,
            scatter_pos,
            position: scatter_pos,
            rotation: Vec3::ZERO,
        }
    }

    /// Advance the topper one frame.
    ///
    /// Position approaches the active endpoint with a delta-scaled lerp.
    /// Assembled: slow spin about Y while any tilt decays back to level.
    /// Dispersed: constant-rate tumble on all three axes.
    pub fn update(&mut self, mode: Mode, delta: f32) {
        let target = match mode {
            Mode::Assembled => self.crown_pos,
            Mode::Dispersed => self.scatter_pos,
        };
        let t = (delta * POSITION_RATE).min(1.0);
        self.position = self.position.lerp(target, t);

        match mode {
            Mode::Assembled => {
                self.rotation.y += delta * 0.5;
                let level = (delta * LEVEL_RATE).min(1.0);
                self.rotation.x = lerp(self.rotation.x, 0.0, level);
                self.rotation.z = lerp(self.rotation.z, 0.0, level);
            }
            Mode::Dispersed => {
                self.rotation.x += delta;
                self.rotation.y += delta * 0.5;
                self.rotation.z += delta * 0.8;
            }
        }
    }

    /// Model matrix for the current rendered transform.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}
