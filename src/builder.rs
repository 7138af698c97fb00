//! The external navmesh-builder boundary.
//!
//! The actual navmesh pipeline (voxelization, region partitioning, contour
//! tracing, polygon and detail meshing) lives in an external library behind
//! the [`NavMeshBuilder`] trait. The contract is deliberately narrow: flat
//! input buffers and a config in, a status plus flat output buffers out.
//!
//! Ownership across the boundary is explicit. The caller owns the input
//! slices for the duration of the call only; the builder returns freshly
//! owned [`PolyMeshBuffers`] and keeps nothing alive afterwards.
//!
//! [`reassemble_poly_mesh`] turns the builder's per-submesh flat arrays back
//! into a single indexed [`Geometry`].

use thiserror::Error;

use crate::config::NavMeshConfig;
use crate::data_structures::geometry::{Geometry, VertexAttribute};

/// Ints per entry in [`PolyMeshBuffers::triangles`]: three vertex indices
/// plus one flags slot.
pub const TRIANGLE_STRIDE: usize = 4;
/// Ints per entry in [`PolyMeshBuffers::submeshes`]: base vertex, vertex
/// count, base triangle, triangle count.
pub const SUBMESH_STRIDE: usize = 4;

#[derive(Debug, Error)]
pub enum NavMeshError {
    /// The builder refused to ingest the input geometry.
    #[error("input geometry was rejected by the navmesh builder")]
    Rejected,
    /// The build ran and reported a non-success status code.
    #[error("navmesh build failed with status {0}")]
    BuildFailed(i32),
    /// The builder's output buffers do not decode into a mesh.
    #[error("navmesh builder returned malformed buffers: {0}")]
    MalformedOutput(String),
    #[error("navmesh builder panicked")]
    BuilderPanicked,
}

/// Flat output buffers of a successful build.
///
/// Vertices are 3 floats each. Triangles and submesh entries are 4 ints each
/// (see [`TRIANGLE_STRIDE`] and [`SUBMESH_STRIDE`]); triangle indices are
/// local to their submesh and offset by the submesh's base vertex.
#[derive(Clone, Debug, Default)]
pub struct PolyMeshBuffers {
    pub vertices: Vec<f32>,
    pub triangles: Vec<i32>,
    pub submeshes: Vec<i32>,
}

/// The external collaborator that computes a navmesh from solid geometry.
///
/// `vertices` is a flat world-space position buffer (3 floats per vertex),
/// `indices` a flat triangle list into it (3 ints per triangle). One-shot:
/// any internal concurrency or staging is the implementor's concern.
pub trait NavMeshBuilder {
    fn build(
        &mut self,
        vertices: &[f32],
        indices: &[i32],
        config: &NavMeshConfig,
    ) -> Result<PolyMeshBuffers, NavMeshError>;
}

/// Rebuild one indexed mesh from the builder's per-submesh flat arrays.
///
/// Each submesh entry addresses a run of triangles whose indices are local
/// to the submesh; adding the submesh's base vertex yields indices into the
/// shared vertex buffer. Malformed tables (truncated strides, out-of-range
/// offsets) are reported as [`NavMeshError::MalformedOutput`].
pub fn reassemble_poly_mesh(buffers: &PolyMeshBuffers) -> Result<Geometry, NavMeshError> {
    if buffers.vertices.len() % 3 != 0 {
        return Err(malformed(format!(
            "vertex buffer length {} is not a multiple of 3",
            buffers.vertices.len()
        )));
    }
    if buffers.triangles.len() % TRIANGLE_STRIDE != 0 {
        return Err(malformed(format!(
            "triangle buffer length {} is not a multiple of {}",
            buffers.triangles.len(),
            TRIANGLE_STRIDE
        )));
    }
    if buffers.submeshes.len() % SUBMESH_STRIDE != 0 {
        return Err(malformed(format!(
            "submesh table length {} is not a multiple of {}",
            buffers.submeshes.len(),
            SUBMESH_STRIDE
        )));
    }

    let vertex_count = buffers.vertices.len() / 3;
    let triangle_count = buffers.triangles.len() / TRIANGLE_STRIDE;
    let mut indices: Vec<u32> = Vec::with_capacity(triangle_count * 3);

    for submesh in buffers.submeshes.chunks_exact(SUBMESH_STRIDE) {
        let base_vertex = submesh[0];
        let base_triangle = submesh[2];
        let submesh_triangles = submesh[3];
        if base_vertex < 0 || base_triangle < 0 || submesh_triangles < 0 {
            return Err(malformed(format!("negative submesh entry {:?}", submesh)));
        }
        let base_triangle = base_triangle as usize;
        let submesh_triangles = submesh_triangles as usize;
        if base_triangle + submesh_triangles > triangle_count {
            return Err(malformed(format!(
                "submesh triangles {}..{} exceed {} available",
                base_triangle,
                base_triangle + submesh_triangles,
                triangle_count
            )));
        }

        for t in 0..submesh_triangles {
            let at = (base_triangle + t) * TRIANGLE_STRIDE;
            for k in 0..3 {
                let local = buffers.triangles[at + k];
                if local < 0 {
                    return Err(malformed(format!("negative triangle index {}", local)));
                }
                let global = base_vertex as usize + local as usize;
                if global >= vertex_count {
                    return Err(malformed(format!(
                        "triangle index {} out of range for {} vertices",
                        global, vertex_count
                    )));
                }
                indices.push(global as u32);
            }
        }
    }

    Ok(Geometry::new(
        VertexAttribute::new(buffers.vertices.clone(), 3),
        Some(indices),
    ))
}

fn malformed(detail: String) -> NavMeshError {
    NavMeshError::MalformedOutput(detail)
}
