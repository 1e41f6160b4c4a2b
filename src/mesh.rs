//! Indexed triangle mesh produced by an extraction run
use nalgebra::Vector3;

/// Initial reservation for the vertex and triangle stores
///
/// Both stores then grow by the usual capacity doubling.
const ALLOC_SIZE: usize = 1024;

/// An indexed 3D mesh with per-vertex normals
///
/// Positions and normals are in grid-index space; the caller rescales into
/// world space.  Normals are unit length except in degenerate flat regions,
/// where they are left unnormalized rather than dividing by zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<Vector3<f32>>,
    /// Per-vertex normals, parallel to [`vertices`](Self::vertices)
    pub normals: Vec<Vector3<f32>>,
    /// Triangles, as triples of indices into the vertex sequence
    pub triangles: Vec<Vector3<usize>>,
}

impl Mesh {
    /// Builds an empty mesh with the initial store reservation
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(ALLOC_SIZE),
            normals: Vec::with_capacity(ALLOC_SIZE),
            triangles: Vec::with_capacity(ALLOC_SIZE),
        }
    }

    /// Number of populated vertices (distinct from allocated capacity)
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of populated triangles (distinct from allocated capacity)
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Appends a vertex, returning its index
    pub(crate) fn push_vertex(
        &mut self,
        pos: Vector3<f32>,
        normal: Vector3<f32>,
    ) -> usize {
        let i = self.vertices.len();
        self.vertices.push(pos);
        self.normals.push(normal);
        i
    }

    pub(crate) fn push_triangle(&mut self, tri: Vector3<usize>) {
        self.triangles.push(tri);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts_track_population() {
        let mut m = Mesh::new();
        assert_eq!(m.vertex_count(), 0);
        assert!(m.vertices.capacity() >= ALLOC_SIZE);
        let a = m.push_vertex(Vector3::zeros(), Vector3::x());
        let b = m.push_vertex(Vector3::x(), Vector3::x());
        let c = m.push_vertex(Vector3::y(), Vector3::x());
        m.push_triangle(Vector3::new(a, b, c));
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.triangle_count(), 1);
    }
}
