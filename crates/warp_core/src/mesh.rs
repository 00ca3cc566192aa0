//! Mesh geometry representation for warp scenes.
//!
//! Meshes are kept in object-local space. The renderer turns them into
//! world-space triangles for intersection, and the debug ray emitters sample
//! their local vertices as ray seeds.

use std::f32::consts::PI;

use warp_math::Vec3;

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// An axis-aligned cube centered on the origin.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;
        let positions = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1, 0, 3, 2, // -Z
            4, 5, 6, 4, 6, 7, // +Z
            0, 1, 5, 0, 5, 4, // -Y
            3, 7, 6, 3, 6, 2, // +Y
            0, 4, 7, 0, 7, 3, // -X
            1, 2, 6, 1, 6, 5, // +X
        ];
        Self::new(positions, indices)
    }

    /// A square grid in the XZ plane facing +Y, split into
    /// `subdivisions` x `subdivisions` quads.
    pub fn plane(size: f32, subdivisions: u32) -> Self {
        let n = subdivisions.max(1);
        let step = size / n as f32;
        let half = size * 0.5;

        let mut positions = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
        for row in 0..=n {
            for col in 0..=n {
                positions.push(Vec3::new(
                    -half + col as f32 * step,
                    0.0,
                    -half + row as f32 * step,
                ));
            }
        }

        let mut indices = Vec::with_capacity((n * n * 6) as usize);
        for row in 0..n {
            for col in 0..n {
                let a = row * (n + 1) + col;
                let b = a + n + 1;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self::new(positions, indices)
    }

    /// A latitude/longitude sphere centered on the origin.
    ///
    /// Pole rows only emit the triangles that have area, so every generated
    /// triangle has a well-defined normal.
    pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut positions = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
        for ring in 0..=rings {
            let phi = PI * ring as f32 / rings as f32;
            for seg in 0..=segments {
                let theta = 2.0 * PI * seg as f32 / segments as f32;
                positions.push(
                    radius * Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()),
                );
            }
        }

        let mut indices = Vec::new();
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * (segments + 1) + seg;
                let b = a + segments + 1;
                if ring != 0 {
                    indices.extend_from_slice(&[a, b, a + 1]);
                }
                if ring != rings - 1 {
                    indices.extend_from_slice(&[a + 1, b, b + 1]);
                }
            }
        }

        Self::new(positions, indices)
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check that the index buffer describes whole triangles over existing vertices.
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            ));
        }
        if let Some(&bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            return Err(format!(
                "index {} out of range for {} vertices",
                bad,
                self.positions.len()
            ));
        }
        Ok(())
    }

    /// Extract triangle vertices as an array of [v0, v1, v2] triplets.
    ///
    /// Triangles referencing missing vertices are skipped with a warning.
    pub fn extract_triangle_vertices(&self) -> Vec<[Vec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            match (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) {
                (Some(&v0), Some(&v1), Some(&v2)) => triangles.push([v0, v1, v2]),
                _ => log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                ),
            }
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_area(t: &[Vec3; 3]) -> f32 {
        (t[1] - t[0]).cross(t[2] - t[0]).length() * 0.5
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_indices() {
        let partial = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1]);
        assert!(partial.validate().is_err());

        let out_of_range = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 3]);
        let err = out_of_range.validate().unwrap_err();
        assert!(err.contains("out of range"), "{}", err);
    }

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.validate().is_ok());
        assert!(cube.positions.iter().all(|p| p.abs() == Vec3::ONE));
    }

    #[test]
    fn test_plane_grid() {
        let plane = Mesh::plane(10.0, 10);
        assert_eq!(plane.vertex_count(), 121);
        assert_eq!(plane.triangle_count(), 200);
        assert!(plane.validate().is_ok());
        assert!(plane.positions.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_uv_sphere_has_no_degenerate_triangles() {
        let sphere = Mesh::uv_sphere(1.0, 12, 8);
        assert!(sphere.validate().is_ok());

        for p in &sphere.positions {
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
        for tri in sphere.extract_triangle_vertices() {
            assert!(triangle_area(&tri) > 1e-6);
        }
    }

    #[test]
    fn test_extract_triangle_vertices() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(positions.clone(), vec![0, 1, 2, 1, 3, 2]);
        let triangles = mesh.extract_triangle_vertices();

        assert_eq!(triangles.len(), 2, "Should extract 2 triangles");
        assert_eq!(triangles[1], [positions[1], positions[3], positions[2]]);
    }
}
