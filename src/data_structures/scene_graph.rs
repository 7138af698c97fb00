//! Scene graph and hierarchical scene organization.
//!
//! Provides traits and structures for building a scene graph: a hierarchical
//! representation of objects in a scene with local transforms and an explicit
//! renderable-mesh capability.
//!
//! Whether a node carries geometry is part of the node interface
//! ([`SceneNode::geometry`]) and is resolved at traversal time. Containers
//! return `None`; there is no runtime property probing.

use crate::data_structures::{geometry::Geometry, instance::Instance};

pub trait SceneNode {
    /// The node's transform relative to its parent.
    fn local_transform(&self) -> &Instance;

    fn set_local_transform(&mut self, transform: Instance);

    /// The renderable capability: mesh geometry attached to this node, if any.
    fn geometry(&self) -> Option<&Geometry> {
        None
    }

    fn children(&self) -> &[Box<dyn SceneNode>];

    fn children_mut(&mut self) -> &mut Vec<Box<dyn SceneNode>>;

    fn add_child(&mut self, child: Box<dyn SceneNode>);
}

/// Walks the graph depth-first and returns every geometry-carrying node
/// together with its composed world transform.
///
/// The world transform of a node is `parent_world * local`, accumulated from
/// the root down. Traversal order (parent before children, children in
/// insertion order) is deterministic, so repeated collections over a static
/// graph yield identical results.
pub fn collect_meshes<'a>(root: &'a dyn SceneNode) -> Vec<(&'a Geometry, Instance)> {
    let mut meshes = Vec::new();
    collect_into(root, Instance::new(), &mut meshes);
    meshes
}

fn collect_into<'a>(
    node: &'a dyn SceneNode,
    parent_world: Instance,
    out: &mut Vec<(&'a Geometry, Instance)>,
) {
    let world = &parent_world * node.local_transform();
    if let Some(geometry) = node.geometry() {
        out.push((geometry, world.clone()));
    }
    for child in node.children() {
        collect_into(child.as_ref(), world.clone(), out);
    }
}

/// A node without geometry of its own, used to group children under a shared
/// transform.
pub struct ContainerNode {
    local: Instance,
    pub children: Vec<Box<dyn SceneNode>>,
}

impl ContainerNode {
    pub fn new() -> Self {
        Self {
            local: Instance::new(),
            children: Vec::new(),
        }
    }
}

impl Default for ContainerNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNode for ContainerNode {
    fn local_transform(&self) -> &Instance {
        &self.local
    }

    fn set_local_transform(&mut self, transform: Instance) {
        self.local = transform;
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Box<dyn SceneNode>> {
        &mut self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }
}

/// A node with mesh geometry attached.
pub struct MeshNode {
    pub name: String,
    local: Instance,
    geometry: Geometry,
    children: Vec<Box<dyn SceneNode>>,
}

impl MeshNode {
    pub fn new(geometry: Geometry) -> Self {
        Self::named(String::new(), geometry)
    }

    pub fn named(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            local: Instance::new(),
            geometry,
            children: Vec::new(),
        }
    }

    /// Convenience for placing a mesh directly: `MeshNode::new(geometry).at(position)`.
    pub fn at(mut self, position: cgmath::Vector3<f32>) -> Self {
        self.local.position = position;
        self
    }

    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }
}

impl SceneNode for MeshNode {
    fn local_transform(&self) -> &Instance {
        &self.local
    }

    fn set_local_transform(&mut self, transform: Instance) {
        self.local = transform;
    }

    fn geometry(&self) -> Option<&Geometry> {
        Some(&self.geometry)
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Box<dyn SceneNode>> {
        &mut self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }
}
