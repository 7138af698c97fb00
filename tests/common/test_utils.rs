use navgen::{
    Quaternion,
    builder::{NavMeshBuilder, NavMeshError, PolyMeshBuffers},
    config::NavMeshConfig,
    data_structures::{
        geometry::Geometry,
        instance::Instance,
        scene_graph::{MeshNode, SceneNode},
    },
};

/// Wrap a geometry in a mesh node at the given position and rotation.
pub(crate) fn mesh_node(
    geometry: Geometry,
    position: [f32; 3],
    rotation: Quaternion<f32>,
) -> Box<dyn SceneNode> {
    let mut node = MeshNode::new(geometry);
    node.set_local_transform(Instance {
        position: position.into(),
        rotation,
        scale: [1.0; 3].into(),
    });
    Box::new(node)
}

pub(crate) enum Response {
    Succeed(PolyMeshBuffers),
    Fail(i32),
    Panic,
}

/// A scripted stand-in for the external navmesh builder.
///
/// Records every input it is handed and replays a canned response, so tests
/// can assert on the exact call contract without a real navmesh pipeline.
pub(crate) struct ScriptedBuilder {
    response: Response,
    pub(crate) seen_vertices: Option<Vec<f32>>,
    pub(crate) seen_indices: Option<Vec<i32>>,
    pub(crate) seen_config: Option<NavMeshConfig>,
    pub(crate) invocations: u32,
}

impl ScriptedBuilder {
    pub(crate) fn new(response: Response) -> Self {
        Self {
            response,
            seen_vertices: None,
            seen_indices: None,
            seen_config: None,
            invocations: 0,
        }
    }
}

impl NavMeshBuilder for ScriptedBuilder {
    fn build(
        &mut self,
        vertices: &[f32],
        indices: &[i32],
        config: &NavMeshConfig,
    ) -> Result<PolyMeshBuffers, NavMeshError> {
        self.invocations += 1;
        self.seen_vertices = Some(vertices.to_vec());
        self.seen_indices = Some(indices.to_vec());
        self.seen_config = Some(*config);
        match &self.response {
            Response::Succeed(buffers) => Ok(buffers.clone()),
            Response::Fail(status) => Err(NavMeshError::BuildFailed(*status)),
            Response::Panic => panic!("scripted builder panic"),
        }
    }
}

/// Echo the build input back as a single-submesh poly mesh.
pub(crate) fn passthrough_buffers(vertices: &[f32], indices: &[i32]) -> PolyMeshBuffers {
    let mut triangles = Vec::new();
    for triangle in indices.chunks_exact(3) {
        triangles.extend([triangle[0], triangle[1], triangle[2], 0]);
    }
    let submeshes = vec![
        0,
        (vertices.len() / 3) as i32,
        0,
        (triangles.len() / 4) as i32,
    ];
    PolyMeshBuffers {
        vertices: vertices.to_vec(),
        triangles,
        submeshes,
    }
}
