//! navgen
//!
//! A lightweight, cross-platform navmesh preparation library focused on
//! native and WASM compatibility. This crate flattens a scene graph of
//! meshes into a single world-space triangle soup, hands it to an external
//! navmesh-building collaborator, and reassembles the collaborator's flat
//! output buffers into a mesh node ready to attach back into the scene. The
//! hard navmesh computation itself stays behind the collaborator boundary.
//!
//! High-level modules
//! - `builder`: the external navmesh-builder contract and output reassembly
//! - `config`: navmesh build parameters and their defaults
//! - `data_structures`: scene data models (geometry, instances, scene graphs)
//! - `generate`: the guarded merge-build-reassemble front-end
//! - `merge`: scene flattening into a world-space triangle soup
//! - `resources`: helpers to load scene geometry from OBJ and glTF files
//!

pub mod builder;
pub mod config;
pub mod data_structures;
pub mod generate;
pub mod merge;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use gltf;
pub use tobj;

/// Initialize the `log` facade for the current platform.
///
/// Call this once from the consuming binary; the library itself only logs
/// through the facade and never forces a logger on its host.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::UnwrapThrowExt;

        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}
