use std::collections::HashMap;

use super::*;
use crate::types::*;

#[test]
fn vertices_lie_on_unit_sphere() {
    let mesh = Mesh::d20();
    assert_eq!(mesh.vertices().len(), 12);
    for v in mesh.vertices() {
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn normals_point_outward() {
    let mesh = Mesh::d20();
    assert_eq!(mesh.faces().len(), FACE_COUNT);
    for face in mesh.faces() {
        assert_relative_eq!(face.normal.norm(), 1.0, epsilon = 1e-12);
        assert!(face.normal.dot(&face.centroid) > 0.0);
        // On a regular icosahedron the normal runs straight through the centroid.
        assert_relative_eq!(face.normal, face.centroid.normalize(), epsilon = 1e-9);
    }
}

#[test]
fn mesh_is_closed_and_consistently_wound() {
    let mesh = Mesh::d20();
    let mut directed_edges: HashMap<(usize, usize), usize> = HashMap::new();
    for face in mesh.faces() {
        let [a, b, c] = face.indexes;
        for edge in &[(a, b), (b, c), (c, a)] {
            *directed_edges.entry(*edge).or_insert(0) += 1;
        }
    }
    // 30 undirected edges, each walked once in each direction.
    assert_eq!(directed_edges.len(), 60);
    for (&(a, b), &count) in &directed_edges {
        assert_eq!(count, 1);
        assert_eq!(directed_edges.get(&(b, a)), Some(&1));
    }
}

#[test]
fn labels_are_a_bijection() {
    let mesh = Mesh::d20();
    let mut labels: Vec<u8> = mesh.faces().iter().map(|face| face.label).collect();
    labels.sort();
    let expected: Vec<u8> = (1..=20).collect();
    assert_eq!(labels, expected);
}

#[test]
fn labels_follow_declaration_order() {
    let mesh = Mesh::d20();
    for (index, face) in mesh.faces().iter().enumerate() {
        assert_eq!(face.label as usize, index + 1);
    }
    assert_eq!(mesh.face_for_label(20).map(|face| face.indexes), Some([9, 8, 1]));
    assert!(mesh.face_for_label(0).is_none());
    assert!(mesh.face_for_label(21).is_none());
}

#[test]
fn face_normal_follows_winding() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    assert_relative_eq!(face_normal(&a, &b, &c), Vec3::new(0.0, 0.0, 1.0));
    assert_relative_eq!(face_normal(&a, &c, &b), Vec3::new(0.0, 0.0, -1.0));
}
