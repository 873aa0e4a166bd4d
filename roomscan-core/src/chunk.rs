//! Mesh chunk data structures

use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// One discrete fragment of reconstructed surface geometry, as produced
/// incrementally by a scene-reconstruction subsystem.
///
/// A chunk with an empty vertex buffer stands in for a chunk whose geometry
/// has not materialized yet; exporters skip it without treating it as an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshChunk {
    /// Object-group name; exporters fall back to `"chunk"` when absent.
    pub name: Option<String>,
    /// Vertex positions in the chunk's local frame.
    pub vertices: Vec<Point3f>,
    /// Optional per-vertex normals. Only meaningful when the length exactly
    /// matches `vertices`.
    pub normals: Option<Vec<Vector3f>>,
    /// Flat triangle index buffer, length a multiple of 3, each value a
    /// 0-based index into `vertices`.
    pub triangles: Vec<u32>,
    /// Local-to-world transform for this chunk.
    pub transform: Transform3D,
}

impl MeshChunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self {
            name: None,
            vertices: Vec::new(),
            normals: None,
            triangles: Vec::new(),
            transform: Transform3D::identity(),
        }
    }

    /// Create a chunk from vertices and a flat triangle index buffer
    pub fn from_vertices_and_triangles(vertices: Vec<Point3f>, triangles: Vec<u32>) -> Self {
        Self {
            name: None,
            vertices,
            normals: None,
            triangles,
            transform: Transform3D::identity(),
        }
    }

    /// Set the chunk name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local-to-world transform
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Whether this chunk carries any geometry at all
    pub fn has_geometry(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Set vertex normals; ignored unless the count matches the vertex count
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Whether the normal buffer is present and aligned with the vertices
    pub fn has_aligned_normals(&self) -> bool {
        self.normals
            .as_ref()
            .is_some_and(|normals| normals.len() == self.vertices.len())
    }
}

impl Default for MeshChunk {
    fn default() -> Self {
        Self::new()
    }
}
