//! CPU-side geometry buffers produced by the OBJ parser.
//!
//! [`GeometryBuffers`] holds flat, non-indexed attribute data. Positions are
//! per-triangle-vertex duplicated; consumers upload the byte views directly
//! as GPU vertex buffers.

use nalgebra::Point3;

/// Flat vertex attribute buffers for a parsed model.
///
/// `positions` is always present and non-indexed: each triangle contributes
/// nine floats (three vertices, three components each), so its length is a
/// multiple of 9. `normals` and `uvs` are present only if the source text
/// declared at least one `vn` / `vt` line.
///
/// By default `normals` and `uvs` are the raw declaration pools, *not*
/// expanded per triangle-vertex; they only line up with `positions` when the
/// source file declares exactly one normal/uv per emitted triangle-vertex in
/// matching order. See `ParseOptions::expand_attributes` for the expanded
/// layout.
#[derive(Clone, PartialEq)]
pub struct GeometryBuffers {
    /// Per-triangle-vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Normal components (3 per element), if any `vn` line was seen.
    pub normals: Option<Vec<f32>>,
    /// Texture coordinate components (2 per element), if any `vt` line was seen.
    pub uvs: Option<Vec<f32>>,
}

impl GeometryBuffers {
    /// Number of triangles in the position buffer.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    /// Number of emitted vertices in the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check whether any geometry was produced.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get position data as bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Get normal data as bytes, if present.
    pub fn normal_bytes(&self) -> Option<&[u8]> {
        self.normals.as_deref().map(bytemuck::cast_slice)
    }

    /// Get texture coordinate data as bytes, if present.
    pub fn uv_bytes(&self) -> Option<&[u8]> {
        self.uvs.as_deref().map(bytemuck::cast_slice)
    }

    /// Compute the axis-aligned bounding box of the emitted positions.
    ///
    /// Returns `(min, max)`, or `None` if no triangles were emitted.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut vertices = self.positions.chunks_exact(3);
        let first = vertices.next()?;
        let mut min = Point3::new(first[0], first[1], first[2]);
        let mut max = min;
        for vertex in vertices {
            for i in 0..3 {
                min[i] = min[i].min(vertex[i]);
                max[i] = max[i].max(vertex[i]);
            }
        }
        Some((min, max))
    }
}

impl std::fmt::Debug for GeometryBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryBuffers")
            .field("triangle_count", &self.triangle_count())
            .field("positions", &self.positions.len())
            .field("normals", &self.normals.as_ref().map(Vec::len))
            .field("uvs", &self.uvs.as_ref().map(Vec::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> GeometryBuffers {
        GeometryBuffers {
            positions: vec![
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, -2.0,
            ],
            normals: None,
            uvs: Some(vec![0.0, 0.0, 1.0, 0.0]),
        }
    }

    #[test]
    fn test_counts() {
        let buffers = two_triangles();
        assert_eq!(buffers.triangle_count(), 2);
        assert_eq!(buffers.vertex_count(), 6);
        assert!(!buffers.is_empty());
    }

    #[test]
    fn test_byte_views() {
        let buffers = two_triangles();
        assert_eq!(buffers.position_bytes().len(), 18 * 4);
        assert_eq!(buffers.normal_bytes(), None);
        assert_eq!(buffers.uv_bytes().map(<[u8]>::len), Some(16));
    }

    #[test]
    fn test_bounding_box() {
        let buffers = two_triangles();
        let (min, max) = buffers.bounding_box().expect("expected a bounding box");
        assert_eq!(min, Point3::new(0.0, 0.0, -2.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        let buffers = GeometryBuffers {
            positions: Vec::new(),
            normals: None,
            uvs: None,
        };
        assert!(buffers.bounding_box().is_none());
        assert!(buffers.is_empty());
    }
}
