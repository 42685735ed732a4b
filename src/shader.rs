//! GPU-facing data layouts and WGSL sources.
//!
//! Every struct here is `#[repr(C)]` + `Pod` and must stay byte-compatible
//! with the matching WGSL declarations in the `.wgsl` files.

use bytemuck::{Pod, Zeroable};

/// Render shader for the foliage point field.
pub const FOLIAGE_SOURCE: &str = include_str!("foliage.wgsl");

/// Render shader for instanced ornament meshes.
pub const ORNAMENT_SOURCE: &str = include_str!("ornament.wgsl");

/// Render shader for the topper mesh.
pub const STAR_SOURCE: &str = include_str!("star.wgsl");

/// Per-particle vertex data for the foliage pipeline. Uploaded once per
/// (re)build; all motion is computed in the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FoliageVertex {
    pub scatter_pos: [f32; 3],
    pub phase: f32,
    pub tree_pos: [f32; 3],
    pub size: f32,
}

/// Per-instance data for the ornament pipeline. Rewritten every frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct OrnamentInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Interleaved mesh vertex for the ornament and topper pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Frame-global uniforms shared by all three pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 3],
    pub time: f32,
    pub camera_up: [f32; 3],
    pub progress: f32,
    pub color_base: [f32; 3],
    pub _pad0: f32,
    pub color_sparkle: [f32; 3],
    pub _pad1: f32,
}

/// Model transform + color for the topper pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes_match_wgsl() {
        assert_eq!(std::mem::size_of::<FoliageVertex>(), 32);
        assert_eq!(std::mem::size_of::<OrnamentInstance>(), 80);
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 128);
        assert_eq!(std::mem::size_of::<ModelUniforms>(), 80);
    }
}
