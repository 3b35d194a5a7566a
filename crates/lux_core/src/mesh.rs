//! Mesh geometry representation.
//!
//! A `Mesh` is the pre-parsed triangle list handed to the renderer. It can be
//! populated from a file loader or built directly in code.

use lux_math::Vec3;

/// Indexed triangle list with optional per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// One entry per vertex
    pub positions: Vec<Vec3>,

    /// Vertex normals, parallel to `positions` when present
    pub normals: Option<Vec<Vec3>>,

    /// Three vertex indices per face; a trailing partial face is ignored
    pub indices: Vec<u32>,
}

/// One triangle of a mesh with its vertices resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTriangle {
    pub positions: [Vec3; 3],
    pub normals: Option<[Vec3; 3]>,
}

impl Mesh {
    /// Normals are taken as given; see [`Mesh::compute_normals`] to derive
    /// them from the faces.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Build an unindexed mesh from a flat list of triangles.
    pub fn from_triangles(triangles: &[MeshTriangle]) -> Self {
        let mut positions = Vec::with_capacity(triangles.len() * 3);
        let mut normals = Vec::with_capacity(triangles.len() * 3);
        let with_normals = triangles.iter().all(|tri| tri.normals.is_some());

        for tri in triangles {
            positions.extend_from_slice(&tri.positions);
            if let Some(n) = tri.normals {
                normals.extend_from_slice(&n);
            }
        }

        let indices = (0..positions.len() as u32).collect();
        Self::new(positions, indices, with_normals.then_some(normals))
    }

    /// Number of complete triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Iterate over the triangles of the mesh.
    ///
    /// Faces that reference a vertex outside the position (or normal) buffer
    /// are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = MeshTriangle> + '_ {
        let normals = self
            .normals
            .as_deref()
            .filter(|n| n.len() == self.positions.len());

        self.valid_faces().map(move |face| MeshTriangle {
            positions: face.map(|i| self.positions[i]),
            normals: normals.map(|n| face.map(|i| n[i])),
        })
    }

    /// Index triples whose vertices all exist.
    fn valid_faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let count = self.positions.len();
        self.indices
            .chunks_exact(3)
            .map(|face| [face[0] as usize, face[1] as usize, face[2] as usize])
            .filter(move |face| face.iter().all(|&i| i < count))
    }

    /// Replace the normals with smooth ones derived from the faces.
    ///
    /// Each face contributes its counter-clockwise cross product, so larger
    /// faces weigh more. Vertices touched only by degenerate faces get +Y.
    pub fn compute_normals(&mut self) {
        let mut sums = vec![Vec3::ZERO; self.positions.len()];

        for [a, b, c] in self.valid_faces() {
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            let weighted = (pb - pa).cross(pc - pa);
            for i in [a, b, c] {
                sums[i] += weighted;
            }
        }

        let normals = sums
            .into_iter()
            .map(|sum| sum.try_normalize().unwrap_or(Vec3::Y))
            .collect();
        self.normals = Some(normals);
    }
}
