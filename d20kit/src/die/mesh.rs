use super::icosahedron::{FACES, LABELS, VERTICES};
use crate::math::{centroid, normalize};
use crate::types::*;

/// One triangular face of the die, in mesh-local space.
#[derive(Clone, Debug)]
pub struct Face {
    /// Indexes into `Mesh::vertices`.
    pub indexes: [usize; 3],
    /// Outward unit normal.
    pub normal: Vec3,
    pub centroid: Vec3,
    pub label: u8,
}

/// The icosahedron, with every vertex on the unit sphere.
///
/// Normals and centroids here are computed once from the unrotated
/// vertices. Anything that needs them in view space has to rotate the
/// vertices and derive them again; see `render::render_items`.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn d20() -> Mesh {
        let vertices: Vec<Vec3> = VERTICES
            .iter()
            .map(|v| normalize(&Vec3::new(v[0], v[1], v[2])))
            .collect();

        let faces = FACES
            .iter()
            .zip(LABELS.iter())
            .map(|(&indexes, &label)| {
                let a = &vertices[indexes[0]];
                let b = &vertices[indexes[1]];
                let c = &vertices[indexes[2]];
                Face {
                    indexes,
                    normal: face_normal(a, b, c),
                    centroid: centroid(a, b, c),
                    label,
                }
            })
            .collect();

        Mesh { vertices, faces }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Panics if `index` is out of range.
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    pub fn face_for_label(&self, label: u8) -> Option<&Face> {
        self.faces.iter().find(|face| face.label == label)
    }
}

/// Unit normal of the triangle `abc`, following its winding.
pub fn face_normal(a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    normalize(&(b - a).cross(&(c - a)))
}
