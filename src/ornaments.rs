//! Ornament instances: discrete decorations pulled between the scatter
//! cloud and the surface of the tree.
//!
//! Unlike foliage, each ornament carries persistent rendered state
//! (position and rotation) mutated in place every frame by a
//! fixed-fraction exponential approach toward the active endpoint.

use crate::easing::approach;
use crate::palette::OrnamentColor;
use crate::scene::{Mode, SceneConfig};
use crate::shader::OrnamentInstance;
use crate::spawn::{push_outward, SpawnContext};
use crate::Vec3;
use glam::{Mat4, Quat};
use std::f32::consts::PI;

/// Fraction of the remaining distance covered per frame.
///
/// Deliberately not delta-scaled: convergence speed follows the frame
/// rate. See DESIGN.md before changing this.
const LERP_FACTOR: f32 = 0.04;

/// Ornament mesh shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    /// Round bauble.
    Sphere,
    /// Gift box.
    Box,
}

/// One ornament. Endpoints and decoration are fixed at build time;
/// `position` and `rotation` advance every frame.
#[derive(Debug, Clone, Copy)]
pub struct Ornament {
    /// Endpoint inside the scatter sphere.
    pub scatter_pos: Vec3,
    /// Endpoint on the tree, pushed outward past the foliage surface.
    pub tree_pos: Vec3,
    /// Uniform scale, constant for the ornament's lifetime.
    pub scale: f32,
    /// Assigned categorical color.
    pub color: OrnamentColor,
    /// Individual speed multiplier for the position approach and bobbing.
    pub speed: f32,
    /// Current rendered position.
    pub position: Vec3,
    /// Current rendered rotation (Euler XYZ, radians).
    pub rotation: Vec3,
}

/// A homogeneous set of ornaments sharing one mesh shape.
pub struct OrnamentSet {
    kind: OrnamentKind,
    ornaments: Vec<Ornament>,
}

impl OrnamentSet {
    /// Build `count` fresh ornaments of the given shape.
    pub fn new(count: u32, kind: OrnamentKind, config: &SceneConfig) -> Self {
        let ornaments = (0..count)
            .map(|i| {
                let mut ctx = SpawnContext::new(i, count);
                let scatter_pos = ctx.scatter_position(config.scatter_radius);
                let raw = ctx.tree_position(
                    config.cone_height,
                    config.cone_radius,
                    config.ornament_randomness,
                );
                let tree_pos = push_outward(raw, config.ornament_push_out);

                let mut color = OrnamentColor::pick(ctx.random());
                // Boxes lean toward metallic gold
                if kind == OrnamentKind::Box && ctx.random() > 0.5 {
                    color = OrnamentColor::MetallicGold;
                }

                Ornament {
                    scatter_pos,
                    tree_pos,
                    scale: ctx.random_range(0.15, 0.55),
                    color,
                    speed: ctx.random_range(0.5, 1.0),
                    position: scatter_pos,
                    rotation: Vec3::new(ctx.random() * PI, ctx.random() * PI, 0.0),
                }
            })
            .collect();

        Self { kind, ornaments }
    }

    /// The mesh shape this set renders with.
    pub fn kind(&self) -> OrnamentKind {
        self.kind
    }

    /// Number of ornaments in the set.
    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    /// True when the set holds no ornaments.
    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    /// The ornament records.
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    /// Advance every ornament one frame.
    ///
    /// Positions approach the active endpoint by a fixed fraction scaled by
    /// the instance speed. Dispersed ornaments drift on a vertical sine bob
    /// and tumble slowly; assembled ornaments shimmer about Y with a much
    /// smaller bob.
    pub fn update(&mut self, mode: Mode, time: f32) {
        for (i, o) in self.ornaments.iter_mut().enumerate() {
            let target = match mode {
                Mode::Assembled => o.tree_pos,
                Mode::Dispersed => o.scatter_pos,
            };
            o.position = approach(o.position, target, LERP_FACTOR * o.speed);

            match mode {
                Mode::Dispersed => {
                    o.position.y += (time * o.speed + i as f32).sin() * 0.02;
                    o.rotation.x += 0.01;
                    o.rotation.z += 0.01;
                }
                Mode::Assembled => {
                    o.rotation.y += 0.01;
                    o.position.y += (time * 2.0 + i as f32).sin() * 0.002;
                }
            }
        }
    }

    /// Convert the current rendered state to the GPU instance layout.
    pub fn instances(&self) -> Vec<OrnamentInstance> {
        self.ornaments
            .iter()
            .map(|o| {
                let rotation = Quat::from_euler(
                    glam::EulerRot::XYZ,
                    o.rotation.x,
                    o.rotation.y,
                    o.rotation.z,
                );
                let model = Mat4::from_scale_rotation_translation(
                    Vec3::splat(o.scale),
                    rotation,
                    o.position,
                );
                OrnamentInstance {
                    model: model.to_cols_array_2d(),
                    color: o.color.rgb().to_array(),
                    _pad: 0.0,
                }
            })
            .collect()
    }
}
