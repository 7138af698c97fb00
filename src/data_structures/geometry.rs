//! Geometry data for scene meshes and merge output.
//!
//! Geometry is kept close to the wire format of foreign tooling: flat float
//! buffers with an explicit stride and an optional index buffer. That means
//! malformed input (wrong stride, truncated data) is representable and can be
//! filtered at merge time instead of being rejected at construction.
//!
//! # Key types
//!
//! - [`VertexAttribute`] is a flat float buffer with a per-vertex stride
//! - [`Geometry`] is a position attribute plus an optional index buffer
//! - [`TriangleSoup`] is the fully expanded, world-space merge output
//!

use std::f32::consts::PI;

/// A flat per-vertex float buffer.
///
/// `stride` is the number of components per vertex; positions use a stride
/// of 3. Buffers whose length is not a multiple of the stride are considered
/// truncated and are skipped by consumers.
#[derive(Clone, Debug)]
pub struct VertexAttribute {
    pub data: Vec<f32>,
    pub stride: usize,
}

impl VertexAttribute {
    pub fn new(data: Vec<f32>, stride: usize) -> Self {
        Self { data, stride }
    }

    pub fn vertex_count(&self) -> usize {
        if self.stride == 0 {
            return 0;
        }
        self.data.len() / self.stride
    }
}

/// Mesh geometry: an optional position attribute and an optional index buffer.
///
/// Both fields are optional on purpose. A geometry without a position
/// attribute (or with a malformed one) still exists in the scene; it only
/// drops out when the scene is flattened for the navmesh build.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub position: Option<VertexAttribute>,
    pub indices: Option<Vec<u32>>,
}

impl Geometry {
    pub fn new(position: VertexAttribute, indices: Option<Vec<u32>>) -> Self {
        Self {
            position: Some(position),
            indices,
        }
    }

    /// Build a geometry from typed vertex positions.
    pub fn from_positions(positions: Vec<[f32; 3]>, indices: Option<Vec<u32>>) -> Self {
        let data = bytemuck::cast_slice(&positions).to_vec();
        Self::new(VertexAttribute::new(data, 3), indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.position.as_ref().map_or(0, |p| p.vertex_count())
    }

    /// Number of triangles this geometry describes, honouring the index
    /// buffer when present.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    /// An axis-aligned quad in the XY plane, centered at the origin, as two
    /// indexed triangles facing +z.
    pub fn plane(width: f32, height: f32) -> Self {
        let (x, y) = (width / 2.0, height / 2.0);
        let positions = vec![
            [-x, y, 0.0],
            [x, y, 0.0],
            [-x, -y, 0.0],
            [x, -y, 0.0],
        ];
        let indices = vec![0, 2, 1, 2, 3, 1];
        Self::from_positions(positions, Some(indices))
    }

    /// An axis-aligned box centered at the origin, as a non-indexed list of
    /// 12 triangles (two per face, counter-clockwise seen from outside).
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
        let corners = [
            [-x, -y, -z],
            [x, -y, -z],
            [x, y, -z],
            [-x, y, -z],
            [-x, -y, z],
            [x, -y, z],
            [x, y, z],
            [-x, y, z],
        ];
        const FACES: [[usize; 4]; 6] = [
            [4, 5, 6, 7], // +z
            [1, 0, 3, 2], // -z
            [5, 1, 2, 6], // +x
            [0, 4, 7, 3], // -x
            [7, 6, 2, 3], // +y
            [0, 1, 5, 4], // -y
        ];
        let mut positions = Vec::with_capacity(36);
        for face in FACES {
            let [a, b, c, d] = face.map(|i| corners[i]);
            positions.extend([a, b, c, a, c, d]);
        }
        Self::from_positions(positions, None)
    }

    /// A UV sphere centered at the origin, indexed, with degenerate pole
    /// quads collapsed to single triangles.
    pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Self {
        let mut positions = Vec::new();
        for i in 0..=stacks {
            // latitudes from +pi/2 down to -pi/2
            let stack_angle = PI / 2.0 - i as f32 * PI / stacks as f32;
            let ring = radius * stack_angle.cos();
            let y = radius * stack_angle.sin();
            for j in 0..=sectors {
                let sector_angle = j as f32 * 2.0 * PI / sectors as f32;
                positions.push([ring * sector_angle.cos(), y, ring * sector_angle.sin()]);
            }
        }
        let mut indices = Vec::new();
        for i in 0..stacks {
            for j in 0..sectors {
                let k1 = i * (sectors + 1) + j;
                let k2 = k1 + sectors + 1;
                if i != 0 {
                    indices.extend([k1, k2, k1 + 1]);
                }
                if i != stacks - 1 {
                    indices.extend([k1 + 1, k2, k2 + 1]);
                }
            }
        }
        Self::from_positions(positions, Some(indices))
    }
}

/// The merge output: world-space vertex positions with every triangle fully
/// expanded (no index buffer).
///
/// The buffer length is always a multiple of 9 (3 vertices of 3 floats per
/// triangle). A soup is created fresh per merge and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSoup {
    positions: Vec<f32>,
}

impl TriangleSoup {
    pub(crate) fn from_positions(positions: Vec<f32>) -> Self {
        debug_assert!(positions.len() % 9 == 0);
        Self { positions }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<f32> {
        self.positions
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
