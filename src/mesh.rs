//! Procedural triangle meshes for the ornament and topper pipelines.

use crate::shader::MeshVertex;
use crate::star::star_outline;
use glam::{Vec2, Vec3};

/// A triangle mesh ready for upload: interleaved vertices plus indices.
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

fn vertex(position: Vec3, normal: Vec3) -> MeshVertex {
    MeshVertex {
        position: position.to_array(),
        normal: normal.to_array(),
    }
}

/// Axis-aligned unit cube (half extent 0.5) with flat face normals.
pub fn cube() -> Mesh {
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        // (normal, tangent u, tangent v)
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        let center = normal * 0.5;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            vertices.push(vertex(center + u * su + v * sv, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// Latitude/longitude sphere of radius 1 with smooth normals.
pub fn uv_sphere(rings: u32, segments: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let phi = ring as f32 / rings as f32 * std::f32::consts::PI;
        for segment in 0..=segments {
            let theta = segment as f32 / segments as f32 * std::f32::consts::TAU;
            let p = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(vertex(p, p));
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * stride + segment;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// The topper star: the five-point outline extruded into a flat prism.
pub fn star_prism(depth: f32) -> Mesh {
    let outline = star_outline(5, 0.9, 0.45);
    let half = depth / 2.0;
    let n = outline.len() as u32;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Front and back caps, fanned from the centroid. The star polygon is
    // star-shaped with respect to its center, so the fan is valid.
    for (z, normal) in [(half, Vec3::Z), (-half, Vec3::NEG_Z)] {
        let base = vertices.len() as u32;
        vertices.push(vertex(Vec3::new(0.0, 0.0, z), normal));
        for p in &outline {
            vertices.push(vertex(Vec3::new(p.x, p.y, z), normal));
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if normal.z > 0.0 {
                indices.extend_from_slice(&[base, base + 1 + i, base + 1 + j]);
            } else {
                indices.extend_from_slice(&[base, base + 1 + j, base + 1 + i]);
            }
        }
    }

    // Side walls, one quad per outline edge with its own outward normal.
    for i in 0..outline.len() {
        let j = (i + 1) % outline.len();
        let (p0, p1) = (outline[i], outline[j]);
        let edge = p1 - p0;
        let normal = Vec2::new(edge.y, -edge.x).normalize();
        let normal = Vec3::new(normal.x, normal.y, 0.0);

        let base = vertices.len() as u32;
        vertices.push(vertex(Vec3::new(p0.x, p0.y, half), normal));
        vertices.push(vertex(Vec3::new(p1.x, p1.y, half), normal));
        vertices.push(vertex(Vec3::new(p1.x, p1.y, -half), normal));
        vertices.push(vertex(Vec3::new(p0.x, p0.y, -half), normal));
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_bounds(mesh: &Mesh) {
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_cube_counts() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn test_cube_extents() {
        for v in cube().vertices {
            for c in v.position {
                assert!(c.abs() <= 0.5 + 1e-6);
            }
        }
    }

    #[test]
    fn test_sphere_counts_and_radius() {
        let mesh = uv_sphere(8, 12);
        assert_eq!(mesh.vertices.len(), 9 * 13);
        assert_eq!(mesh.index_count(), 8 * 12 * 6);
        assert_indices_in_bounds(&mesh);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 1.0).abs() < 1e-4);
            // Smooth normals point along the position.
            let n = Vec3::from_array(v.normal);
            assert!((n - p).length() < 1e-4);
        }
    }

    #[test]
    fn test_star_prism_counts() {
        let mesh = star_prism(0.3);
        // Two 11-vertex caps plus ten 4-vertex side quads.
        assert_eq!(mesh.vertices.len(), 22 + 40);
        assert_eq!(mesh.index_count(), 30 + 30 + 60);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn test_star_prism_depth() {
        for v in star_prism(0.3).vertices {
            assert!(v.position[2].abs() <= 0.15 + 1e-6);
        }
    }

    #[test]
    fn test_side_normals_are_horizontal() {
        let mesh = star_prism(0.3);
        for v in &mesh.vertices[22..] {
            assert!(v.normal[2].abs() < 1e-6);
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
}
