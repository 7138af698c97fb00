//! The guarded navmesh generation front-end.
//!
//! [`generate_navmesh`] is the one call sites use: it flattens the scene,
//! hands the result to the external builder, and reassembles the output into
//! a [`MeshNode`] ready to attach back into the scene graph. Every failure
//! mode — a non-success build status, malformed output buffers, even a panic
//! inside the builder — is logged and collapsed into `None`. The surrounding
//! scene must keep running when navmesh generation fails, so "no mesh" is a
//! valid terminal outcome here, not an error to propagate.

use std::panic::{AssertUnwindSafe, catch_unwind};

use instant::Instant;

use crate::builder::{NavMeshBuilder, NavMeshError, reassemble_poly_mesh};
use crate::config::NavMeshConfig;
use crate::data_structures::{instance::Instance, scene_graph::{MeshNode, SceneNode}};
use crate::merge::merge_scene;

/// Build a navmesh for everything under `root`.
///
/// Returns a mesh node holding the generated navmesh, lowered by one cell
/// height so it sits just below the surfaces it was derived from, or `None`
/// when no mesh could be produced.
pub fn generate_navmesh<B: NavMeshBuilder>(
    root: &dyn SceneNode,
    builder: &mut B,
    config: &NavMeshConfig,
) -> Option<MeshNode> {
    let merge_started = Instant::now();
    let soup = merge_scene(root, true);
    // The soup is non-indexed; the builder contract still wants a triangle
    // index array, so synthesize the identity mapping.
    let indices: Vec<i32> = (0..soup.vertex_count() as i32).collect();
    log::debug!(
        "merged scene into {} triangles in {:?}",
        soup.triangle_count(),
        merge_started.elapsed()
    );

    let build_started = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        builder.build(soup.positions(), &indices, config)
    }));
    let buffers = match outcome {
        Ok(Ok(buffers)) => buffers,
        Ok(Err(error)) => {
            log::error!("navmesh generation failed: {}", error);
            return None;
        }
        Err(_) => {
            log::error!("navmesh generation failed: {}", NavMeshError::BuilderPanicked);
            return None;
        }
    };
    log::debug!("external navmesh build took {:?}", build_started.elapsed());

    let geometry = match reassemble_poly_mesh(&buffers) {
        Ok(geometry) => geometry,
        Err(error) => {
            log::error!("navmesh generation failed: {}", error);
            return None;
        }
    };

    let mut navmesh = MeshNode::named("navmesh", geometry);
    let mut transform = Instance::new();
    transform.position.y -= config.cell_height;
    navmesh.set_local_transform(transform);
    Some(navmesh)
}
