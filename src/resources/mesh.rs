use crate::data_structures::{geometry::Geometry, scene_graph::MeshNode};

/**
 * Obj models arrive as flat position/index buffers. Each model becomes its
 * own mesh node so per-object transforms can still be applied after loading.
 */
pub fn meshes_from_obj(models: &[tobj::Model], file_name: &str) -> Vec<MeshNode> {
    models
        .iter()
        .filter_map(|m| {
            if m.mesh.positions.is_empty() {
                log::warn!(
                    "Mesh {} in file {} has no position data and was skipped.",
                    m.name,
                    file_name
                );
                return None;
            }
            let indices = (!m.mesh.indices.is_empty()).then(|| m.mesh.indices.clone());
            let geometry = Geometry::new(
                crate::data_structures::geometry::VertexAttribute::new(
                    m.mesh.positions.clone(),
                    3,
                ),
                indices,
            );
            let name = if m.name.is_empty() {
                file_name.to_string()
            } else {
                m.name.clone()
            };
            Some(MeshNode::named(name, geometry))
        })
        .collect()
}
