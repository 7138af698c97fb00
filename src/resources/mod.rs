use std::io::{BufReader, Cursor};

use crate::data_structures::{
    geometry::Geometry,
    instance::Instance,
    scene_graph::{ContainerNode, MeshNode, SceneNode},
};

/**
 * This module contains all logic for loading scene geometry from external files.
 */
pub mod mesh;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> reqwest::Url {
    let window = web_sys::window().unwrap();
    let location = window.location();
    let origin = location.origin().unwrap();
    let base = reqwest::Url::parse(&format!("{}/assets/", origin)).unwrap();
    base.join(file_name).unwrap()
}

pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    #[cfg(target_arch = "wasm32")]
    let txt = {
        let url = format_url(file_name);
        reqwest::get(url).await?.text().await?
    };
    #[cfg(not(target_arch = "wasm32"))]
    let txt = {
        // TODO: pass env for absolute path from lib caller
        let path = std::path::Path::new("./").join("assets").join(file_name);
        tokio::fs::read_to_string(path).await?
    };

    Ok(txt)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name);
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        // TODO: pass env for absolute path from lib caller
        let path = std::path::Path::new("./").join("assets").join(file_name);
        tokio::fs::read(path).await?
    };

    Ok(data)
}

/// Load a wavefront OBJ file as a scene node.
///
/// A single-model file loads as one mesh node; multi-model files are grouped
/// under a container. Materials are ignored — only geometry matters for a
/// navmesh build.
pub async fn load_scene_obj(file_name: &str) -> anyhow::Result<Box<dyn SceneNode>> {
    let obj_text = load_string(file_name).await?;
    let obj_cursor = Cursor::new(obj_text);
    let mut obj_reader = BufReader::new(obj_cursor);

    let (models, _materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_p| async move { Ok((Vec::new(), std::collections::HashMap::new())) },
    )
    .await?;

    let meshes = mesh::meshes_from_obj(&models, file_name);
    Ok(group_nodes(
        meshes.into_iter().map(|m| Box::new(m) as Box<dyn SceneNode>),
    ))
}

/// Load several OBJ files concurrently into one flat container node.
pub async fn load_flat_scene(file_names: Vec<&str>) -> anyhow::Result<Box<dyn SceneNode>> {
    let mut parent: Box<dyn SceneNode> = Box::new(ContainerNode::new());
    let loaded =
        futures::future::join_all(file_names.into_iter().map(|file| load_scene_obj(file))).await;
    for node in loaded {
        parent.add_child(node?);
    }
    Ok(parent)
}

/// Load a glTF file as a scene graph, preserving each node's transform.
///
/// Mesh primitives contribute their position and index accessors; materials,
/// textures and animations are not loaded.
pub async fn load_scene_gltf(file_name: &str) -> anyhow::Result<Box<dyn SceneNode>> {
    let gltf_bytes = load_binary(file_name).await?;
    let gltf_cursor = Cursor::new(gltf_bytes);
    let gltf_reader = BufReader::new(gltf_cursor);
    let gltf = gltf::Gltf::from_reader(gltf_reader)?;

    // Load buffers
    let mut buffer_data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                if let Some(blob) = gltf.blob.as_deref() {
                    buffer_data.push(blob.into());
                };
            }
            gltf::buffer::Source::Uri(uri) => {
                let bin = load_binary(uri).await?;
                buffer_data.push(bin);
            }
        }
    }

    let mut roots = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            roots.push(to_scene_node(node, &buffer_data, file_name));
        }
    }

    Ok(group_nodes(roots.into_iter()))
}

fn to_scene_node(
    node: gltf::scene::Node,
    buffer_data: &[Vec<u8>],
    file_name: &str,
) -> Box<dyn SceneNode> {
    let mut scene_node: Box<dyn SceneNode> = match node.mesh() {
        Some(mesh) => {
            let name = mesh.name().unwrap_or(file_name).to_string();
            Box::new(MeshNode::named(name, mesh_geometry(&mesh, buffer_data)))
        }
        None => Box::new(ContainerNode::new()),
    };

    let (position, rotation, scale) = node.transform().decomposed();
    scene_node.set_local_transform(Instance {
        position: position.into(),
        rotation: rotation.into(),
        scale: scale.into(),
    });

    for child in node.children() {
        scene_node.add_child(to_scene_node(child, buffer_data, file_name));
    }

    scene_node
}

/// Collapse a mesh's primitives into one indexed geometry.
fn mesh_geometry(mesh: &gltf::Mesh, buffer_data: &[Vec<u8>]) -> Geometry {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffer_data[buffer.index()]));

        let Some(vertex_attribute) = reader.read_positions() else {
            log::warn!(
                "Primitive {} of mesh {:?} has no positions and was skipped.",
                primitive.index(),
                mesh.name()
            );
            continue;
        };
        let base = positions.len() as u32;
        positions.extend(vertex_attribute);

        match reader.read_indices() {
            Some(indices_raw) => {
                indices.extend(indices_raw.into_u32().map(|index| base + index));
            }
            // A non-indexed primitive still has to share the mesh's index
            // buffer with its indexed siblings.
            None => indices.extend(base..positions.len() as u32),
        }
    }

    Geometry::from_positions(positions, Some(indices))
}

fn group_nodes(nodes: impl Iterator<Item = Box<dyn SceneNode>>) -> Box<dyn SceneNode> {
    let mut nodes: Vec<_> = nodes.collect();
    if nodes.len() == 1 {
        nodes.pop().unwrap()
    } else {
        let mut root = ContainerNode::new();
        root.children = nodes;
        Box::new(root)
    }
}
