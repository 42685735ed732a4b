//! The foliage particle field: the body of the tree.
//!
//! Each particle stores two fixed endpoints and two scalars; the rendered
//! position is never stored. The vertex shader recomputes it every frame
//! from the global progress scalar, and [`FoliageField::rendered_position`]
//! mirrors that math on the CPU for tests and readback.

use crate::easing::{damp, lerp, smoothstep};
use crate::palette::SPARKLE_THRESHOLD;
use crate::scene::{Mode, SceneConfig};
use crate::shader::FoliageVertex;
use crate::spawn::SpawnContext;
use crate::Vec3;

/// Exponential rate constant for the global progress scalar.
const PROGRESS_LAMBDA: f32 = 1.2;

/// Breathing amplitude when fully dispersed.
const BREATH_DISPERSED: f32 = 0.5;

/// Breathing amplitude when fully assembled.
const BREATH_ASSEMBLED: f32 = 0.08;

/// One foliage particle. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct FoliageParticle {
    /// Endpoint inside the scatter sphere.
    pub scatter_pos: Vec3,
    /// Endpoint inside the tree cone.
    pub tree_pos: Vec3,
    /// Random scalar in [0, 1): time offset for breathing and sparkle
    /// selector (values at or above the sparkle threshold render bright).
    pub phase: f32,
    /// Point size scalar.
    pub size: f32,
}

impl FoliageParticle {
    /// Whether this particle renders in the bright sparkle color.
    pub fn is_sparkle(&self) -> bool {
        self.phase >= SPARKLE_THRESHOLD
    }
}

/// The particle field plus its single piece of animated state: the global
/// progress scalar in [0, 1] blending scatter (0) toward tree (1).
pub struct FoliageField {
    particles: Vec<FoliageParticle>,
    progress: f32,
}

impl FoliageField {
    /// Build a field of `config.foliage_count` fresh particles.
    pub fn new(config: &SceneConfig) -> Self {
        let count = config.foliage_count;
        let particles = (0..count)
            .map(|i| {
                let mut ctx = SpawnContext::new(i, count);
                let tree_pos = ctx.tree_position(
                    config.cone_height,
                    config.cone_radius,
                    config.foliage_randomness,
                );
                let scatter_pos = ctx.scatter_position(config.scatter_radius);
                FoliageParticle {
                    scatter_pos,
                    tree_pos,
                    phase: ctx.random(),
                    size: ctx.random_range(0.2, 0.8),
                }
            })
            .collect();

        Self {
            particles,
            progress: 0.0,
        }
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The particle records.
    pub fn particles(&self) -> &[FoliageParticle] {
        &self.particles
    }

    /// Raw progress scalar in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress after the perceptual smoothstep ease, as the shader sees it.
    pub fn eased_progress(&self) -> f32 {
        smoothstep(self.progress)
    }

    /// Advance the progress scalar toward the mode's target.
    pub fn update(&mut self, mode: Mode, delta: f32) {
        let target = match mode {
            Mode::Assembled => 1.0,
            Mode::Dispersed => 0.0,
        };
        self.progress = damp(self.progress, target, PROGRESS_LAMBDA, delta);
    }

    /// CPU mirror of the vertex shader's position math.
    ///
    /// Blends the particle's endpoints by the eased progress and layers the
    /// per-axis breathing displacement, whose amplitude shrinks as the tree
    /// assembles.
    pub fn rendered_position(&self, index: usize, time: f32) -> Vec3 {
        let p = &self.particles[index];
        let eased = smoothstep(self.progress);
        let base = p.scatter_pos.lerp(p.tree_pos, eased);

        let amp = lerp(BREATH_DISPERSED, BREATH_ASSEMBLED, eased);
        let offset = p.phase * 10.0;
        let breath = Vec3::new(
            (time * 1.0 + offset).sin(),
            (time * 0.8 + offset).cos(),
            (time * 1.2 + offset).sin(),
        ) * amp;

        base + breath
    }

    /// Convert the field to its GPU vertex layout.
    ///
    /// Called once per (re)build; the buffer contents never change
    /// afterwards because all per-frame motion lives in the shader.
    pub fn vertices(&self) -> Vec<FoliageVertex> {
        self.particles
            .iter()
            .map(|p| FoliageVertex {
                scatter_pos: p.scatter_pos.to_array(),
                phase: p.phase,
                tree_pos: p.tree_pos.to_array(),
                size: p.size,
            })
            .collect()
    }
}
