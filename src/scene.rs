//! Scene aggregate: configuration, the mode flag, and the three animated
//! groups (foliage field, ornament sets, topper).

use crate::foliage::FoliageField;
use crate::ornaments::{OrnamentKind, OrnamentSet};
use crate::star::Topper;

/// The two target configurations of the scene.
///
/// There is no intermediate state; the in-between look is a continuous
/// function of each group's interpolation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tree cone.
    #[default]
    Assembled,
    /// Scattered cloud.
    Dispersed,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Assembled => Mode::Dispersed,
            Mode::Dispersed => Mode::Assembled,
        }
    }
}

/// Geometry and population settings for a scene build.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    /// Number of foliage particles.
    pub foliage_count: u32,
    /// Number of box ornaments.
    pub box_count: u32,
    /// Number of sphere ornaments.
    pub sphere_count: u32,
    /// Radius of the scatter sphere.
    pub scatter_radius: f32,
    /// Height of the tree cone.
    pub cone_height: f32,
    /// Base radius of the tree cone.
    pub cone_radius: f32,
    /// Cone fill randomness for foliage (volume-filling).
    pub foliage_randomness: f32,
    /// Cone fill randomness for ornaments (looser, more surface-hugging).
    pub ornament_randomness: f32,
    /// Outward push applied to ornament tree positions.
    pub ornament_push_out: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            foliage_count: 5000,
            box_count: 150,
            sphere_count: 250,
            scatter_radius: 15.0,
            cone_height: 12.0,
            cone_radius: 5.0,
            foliage_randomness: 0.2,
            ornament_randomness: 0.1,
            ornament_push_out: 0.4,
        }
    }
}

impl SceneConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of foliage particles.
    pub fn with_foliage_count(mut self, count: u32) -> Self {
        self.foliage_count = count;
        self
    }

    /// Set the ornament populations.
    pub fn with_ornament_counts(mut self, boxes: u32, spheres: u32) -> Self {
        self.box_count = boxes;
        self.sphere_count = spheres;
        self
    }

    /// Set the scatter sphere radius.
    pub fn with_scatter_radius(mut self, radius: f32) -> Self {
        self.scatter_radius = radius;
        self
    }

    /// Set the tree cone dimensions.
    pub fn with_cone(mut self, height: f32, base_radius: f32) -> Self {
        self.cone_height = height;
        self.cone_radius = base_radius;
        self
    }
}

/// The full animated scene.
///
/// The scene does not own the mode: the hosting layer passes it into
/// [`Scene::advance`] each frame, so the core stays a function of
/// `(records, mode, time, delta)`.
pub struct Scene {
    config: SceneConfig,
    /// The particle field forming the body of the tree.
    pub foliage: FoliageField,
    /// Gift-box ornaments.
    pub boxes: OrnamentSet,
    /// Bauble ornaments.
    pub spheres: OrnamentSet,
    /// The star topper.
    pub topper: Topper,
}

impl Scene {
    /// Build a scene from the given configuration.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            foliage: FoliageField::new(&config),
            boxes: OrnamentSet::new(config.box_count, OrnamentKind::Box, &config),
            spheres: OrnamentSet::new(config.sphere_count, OrnamentKind::Sphere, &config),
            topper: Topper::new(&config),
            config,
        }
    }

    /// The configuration this scene was built with.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Advance every group one frame.
    pub fn advance(&mut self, mode: Mode, elapsed: f32, delta: f32) {
        self.foliage.update(mode, delta);
        self.boxes.update(mode, elapsed);
        self.spheres.update(mode, elapsed);
        self.topper.update(mode, delta);
    }

    /// Rebuild the foliage field at a new count.
    ///
    /// Discards every existing particle; no continuity is preserved.
    pub fn set_foliage_count(&mut self, count: u32) {
        self.config.foliage_count = count;
        self.foliage = FoliageField::new(&self.config);
    }

    /// Rebuild both ornament sets at new counts.
    pub fn set_ornament_counts(&mut self, boxes: u32, spheres: u32) {
        self.config.box_count = boxes;
        self.config.sphere_count = spheres;
        self.boxes = OrnamentSet::new(boxes, OrnamentKind::Box, &self.config);
        self.spheres = OrnamentSet::new(spheres, OrnamentKind::Sphere, &self.config);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Assembled.toggled(), Mode::Dispersed);
        assert_eq!(Mode::Dispersed.toggled(), Mode::Assembled);
        assert_eq!(Mode::default(), Mode::Assembled);
    }

    #[test]
    fn test_scene_populations_follow_config() {
        let scene = Scene::new(
            SceneConfig::new()
                .with_foliage_count(100)
                .with_ornament_counts(5, 8),
        );
        assert_eq!(scene.foliage.len(), 100);
        assert_eq!(scene.boxes.len(), 5);
        assert_eq!(scene.spheres.len(), 8);
        assert_eq!(scene.boxes.kind(), OrnamentKind::Box);
        assert_eq!(scene.spheres.kind(), OrnamentKind::Sphere);
    }

    #[test]
    fn test_resize_rebuilds() {
        let mut scene = Scene::new(SceneConfig::new().with_foliage_count(10));
        scene.set_foliage_count(25);
        assert_eq!(scene.foliage.len(), 25);
        assert_eq!(scene.config().foliage_count, 25);

        scene.set_ornament_counts(3, 4);
        assert_eq!(scene.boxes.len(), 3);
        assert_eq!(scene.spheres.len(), 4);
    }

    #[test]
    fn test_advance_moves_all_groups() {
        let mut scene = Scene::new(
            SceneConfig::new()
                .with_foliage_count(16)
                .with_ornament_counts(4, 4),
        );
        let before = scene.boxes.ornaments()[0].position;
        for frame in 0..120 {
            scene.advance(Mode::Assembled, frame as f32 / 60.0, 1.0 / 60.0);
        }
        assert!(scene.foliage.progress() > 0.5);
        assert_ne!(scene.boxes.ornaments()[0].position, before);
    }

    #[test]
    fn test_empty_scene_advances() {
        let mut scene = Scene::new(
            SceneConfig::new()
                .with_foliage_count(0)
                .with_ornament_counts(0, 0),
        );
        scene.advance(Mode::Dispersed, 0.0, 1.0 / 60.0);
        assert!(scene.foliage.is_empty());
        assert!(scene.boxes.is_empty());
        assert!(scene.spheres.is_empty());
    }
}
