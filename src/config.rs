//! Navmesh build parameters.
//!
//! The parameters are consumed verbatim by the external navmesh builder;
//! their effects (cell quantization, agent filtering, region partitioning,
//! edge simplification, detail sampling) are defined by that library, not
//! here. Omitted values take the defaults via struct update syntax:
//!
//! ```
//! use navgen::config::NavMeshConfig;
//!
//! let config = NavMeshConfig {
//!     cell_size: 0.03,
//!     agent_radius: 0.3,
//!     ..NavMeshConfig::default()
//! };
//! assert_eq!(config.verts_per_poly, 3);
//! ```

/// Tunables for a navmesh build, in world units unless noted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavMeshConfig {
    /// Voxelization cell size on the ground plane.
    pub cell_size: f32,
    /// Voxelization cell height.
    pub cell_height: f32,
    pub agent_height: f32,
    pub agent_radius: f32,
    /// Highest ledge an agent can step onto.
    pub agent_max_climb: f32,
    /// Steepest walkable slope, in degrees.
    pub agent_max_slope: f32,
    pub region_min_size: f32,
    pub region_merge_size: f32,
    pub edge_max_len: f32,
    pub edge_max_error: f32,
    pub verts_per_poly: u32,
    pub detail_sample_dist: f32,
    pub detail_sample_max_error: f32,
    /// Border padding around the build area, in cells.
    pub border_size: u32,
    /// Tile edge length for tiled builds, in cells; 0 builds a single tile.
    pub tile_size: u32,
}

impl Default for NavMeshConfig {
    fn default() -> Self {
        Self {
            cell_size: 0.166,
            cell_height: 0.1,
            agent_height: 1.7,
            agent_radius: 0.5,
            agent_max_climb: 0.3,
            agent_max_slope: 45.0,
            region_min_size: 1.0,
            region_merge_size: 20.0,
            edge_max_len: 12.0,
            edge_max_error: 1.0,
            verts_per_poly: 3,
            detail_sample_dist: 16.0,
            detail_sample_max_error: 1.0,
            border_size: 0,
            tile_size: 0,
        }
    }
}
