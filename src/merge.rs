//! Scene flattening for the navmesh build.
//!
//! [`merge_scene`] walks a scene graph, normalizes every mesh to a
//! non-indexed triangle list in world space, and concatenates the results
//! into a single [`TriangleSoup`]. The navmesh builder wants one flat,
//! uniformly encoded buffer regardless of how the source meshes were stored,
//! so index buffers are expanded and local coordinates are resolved through
//! each mesh's composed world transform.
//!
//! Meshes with missing or malformed position data are skipped with a warning
//! and never fail the merge. A scene without qualifying meshes merges to an
//! empty soup.

use crate::data_structures::{
    geometry::{Geometry, TriangleSoup, VertexAttribute},
    scene_graph::{SceneNode, collect_meshes},
};

/// Flatten every mesh under `root` into one world-space triangle soup.
///
/// With `cull_back_faces` set, triangles keep their original winding and only
/// their front side counts as walkable. When unset, the whole soup is
/// duplicated with reversed winding — for each triangle (v0,v1,v2) a
/// back-facing (v0,v2,v1) is appended — so thin planar surfaces are navigable
/// from both sides.
pub fn merge_scene(root: &dyn SceneNode, cull_back_faces: bool) -> TriangleSoup {
    let mut positions: Vec<f32> = Vec::new();

    for (geometry, world) in collect_meshes(root) {
        let Some(vertices) = checked_positions(geometry) else {
            continue;
        };
        let matrix = world.to_matrix();

        match &geometry.indices {
            // Expand the index buffer: materialize each triangle's vertices
            // and drop the indices.
            Some(indices) => {
                for &index in indices {
                    let at = index as usize * 3;
                    push_transformed(&mut positions, &matrix, &vertices.data[at..at + 3]);
                }
            }
            None => {
                for vertex in vertices.data.chunks_exact(3) {
                    push_transformed(&mut positions, &matrix, vertex);
                }
            }
        }
    }

    if !cull_back_faces {
        let single_sided = positions.len();
        positions.extend_from_within(..);
        // Reverse winding on the copy: swap each triangle's second and third
        // vertices, (v0,v1,v2) -> (v0,v2,v1).
        for triangle in positions[single_sided..].chunks_exact_mut(9) {
            for k in 0..3 {
                triangle.swap(3 + k, 6 + k);
            }
        }
    }

    TriangleSoup::from_positions(positions)
}

/// Validate a geometry for merging and return its position attribute.
///
/// Skipping takes priority over failing the whole merge: a `None` here means
/// the mesh is excluded and the merge carries on.
fn checked_positions(geometry: &Geometry) -> Option<&VertexAttribute> {
    let Some(position) = geometry.position.as_ref() else {
        log::warn!("skipping mesh without a position attribute");
        return None;
    };
    if position.stride != 3 {
        log::warn!(
            "skipping mesh with a {}-component position attribute, expected 3",
            position.stride
        );
        return None;
    }
    if position.data.len() % 3 != 0 {
        log::warn!(
            "skipping mesh with truncated position data ({} floats)",
            position.data.len()
        );
        return None;
    }
    let vertex_count = position.vertex_count();
    match &geometry.indices {
        Some(indices) => {
            if indices.len() % 3 != 0 {
                log::warn!(
                    "skipping mesh with a partial triangle in its index buffer ({} indices)",
                    indices.len()
                );
                return None;
            }
            if indices.iter().any(|&i| i as usize >= vertex_count) {
                log::warn!(
                    "skipping mesh with indices out of range for {} vertices",
                    vertex_count
                );
                return None;
            }
        }
        None => {
            if vertex_count % 3 != 0 {
                log::warn!(
                    "skipping non-indexed mesh with a partial triangle ({} vertices)",
                    vertex_count
                );
                return None;
            }
        }
    }
    Some(position)
}

fn push_transformed(out: &mut Vec<f32>, matrix: &cgmath::Matrix4<f32>, vertex: &[f32]) {
    let world = matrix * cgmath::Vector4::new(vertex[0], vertex[1], vertex[2], 1.0);
    out.extend([world.x, world.y, world.z]);
}
