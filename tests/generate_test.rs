use navgen::{
    Vector3,
    builder::{NavMeshError, PolyMeshBuffers, reassemble_poly_mesh},
    config::NavMeshConfig,
    data_structures::{
        geometry::Geometry,
        scene_graph::{ContainerNode, MeshNode, SceneNode},
    },
    generate::generate_navmesh,
    merge::merge_scene,
};

use crate::common::test_utils::{Response, ScriptedBuilder, passthrough_buffers};

mod common;

fn quad_and_box_scene() -> ContainerNode {
    let mut root = ContainerNode::new();
    root.add_child(Box::new(MeshNode::new(Geometry::plane(1.0, 1.0))));
    root.add_child(Box::new(
        MeshNode::new(Geometry::cuboid(1.0, 1.0, 1.0)).at(Vector3::new(2.0, 0.0, 0.0)),
    ));
    root
}

#[test]
fn builder_receives_merged_soup_and_identity_indices() {
    let root = quad_and_box_scene();
    let expected = merge_scene(&root, true);

    let mut builder = ScriptedBuilder::new(Response::Succeed(passthrough_buffers(
        expected.positions(),
        &(0..expected.vertex_count() as i32).collect::<Vec<_>>(),
    )));
    let config = NavMeshConfig {
        cell_size: 0.03,
        agent_radius: 0.3,
        ..NavMeshConfig::default()
    };

    let navmesh = generate_navmesh(&root, &mut builder, &config);

    assert!(navmesh.is_some());
    assert_eq!(builder.invocations, 1);
    assert_eq!(builder.seen_vertices.as_deref(), Some(expected.positions()));
    let identity: Vec<i32> = (0..expected.vertex_count() as i32).collect();
    assert_eq!(builder.seen_indices.as_deref(), Some(identity.as_slice()));
    assert_eq!(builder.seen_config, Some(config));
}

#[test]
fn failed_build_yields_no_mesh() {
    let root = quad_and_box_scene();
    let mut builder = ScriptedBuilder::new(Response::Fail(-1));

    let navmesh = generate_navmesh(&root, &mut builder, &NavMeshConfig::default());

    assert!(navmesh.is_none());
    assert_eq!(builder.invocations, 1);
}

#[test]
fn panicking_builder_yields_no_mesh() {
    let root = quad_and_box_scene();
    let mut builder = ScriptedBuilder::new(Response::Panic);

    let navmesh = generate_navmesh(&root, &mut builder, &NavMeshConfig::default());

    assert!(navmesh.is_none());
}

#[test]
fn malformed_builder_output_yields_no_mesh() {
    let root = quad_and_box_scene();
    // Submesh table points one triangle past the end of the triangle buffer.
    let mut builder = ScriptedBuilder::new(Response::Succeed(PolyMeshBuffers {
        vertices: vec![0.0; 9],
        triangles: vec![0, 1, 2, 0],
        submeshes: vec![0, 3, 0, 2],
    }));

    let navmesh = generate_navmesh(&root, &mut builder, &NavMeshConfig::default());

    assert!(navmesh.is_none());
}

#[test]
fn generated_mesh_is_lowered_by_one_cell_height() {
    let root = quad_and_box_scene();
    let soup = merge_scene(&root, true);
    let mut builder = ScriptedBuilder::new(Response::Succeed(passthrough_buffers(
        soup.positions(),
        &(0..soup.vertex_count() as i32).collect::<Vec<_>>(),
    )));
    let config = NavMeshConfig::default();

    let navmesh = generate_navmesh(&root, &mut builder, &config).unwrap();

    let transform = navmesh.local_transform();
    assert_eq!(transform.position.y, -config.cell_height);
    assert_eq!(transform.position.x, 0.0);
    assert_eq!(transform.position.z, 0.0);
}

#[test]
fn reassembly_offsets_each_submesh_by_its_base_vertex() {
    // Two submeshes of three vertices each; both describe their single
    // triangle with local indices 0,1,2.
    let buffers = PolyMeshBuffers {
        vertices: (0..18).map(|i| i as f32).collect(),
        triangles: vec![0, 1, 2, 0, 0, 1, 2, 0],
        submeshes: vec![0, 3, 0, 1, 3, 3, 1, 1],
    };

    let geometry = reassemble_poly_mesh(&buffers).unwrap();

    assert_eq!(geometry.indices.as_deref(), Some(&[0u32, 1, 2, 3, 4, 5][..]));
    assert_eq!(geometry.position.as_ref().unwrap().data, buffers.vertices);
    assert_eq!(geometry.triangle_count(), 2);
}

#[test]
fn reassembly_rejects_malformed_tables() {
    // Truncated triangle stride.
    let truncated = PolyMeshBuffers {
        vertices: vec![0.0; 9],
        triangles: vec![0, 1, 2],
        submeshes: vec![0, 3, 0, 1],
    };
    assert!(matches!(
        reassemble_poly_mesh(&truncated),
        Err(NavMeshError::MalformedOutput(_))
    ));

    // Negative submesh entry.
    let negative = PolyMeshBuffers {
        vertices: vec![0.0; 9],
        triangles: vec![0, 1, 2, 0],
        submeshes: vec![-3, 3, 0, 1],
    };
    assert!(matches!(
        reassemble_poly_mesh(&negative),
        Err(NavMeshError::MalformedOutput(_))
    ));

    // Triangle index resolving past the vertex buffer.
    let out_of_range = PolyMeshBuffers {
        vertices: vec![0.0; 9],
        triangles: vec![0, 1, 5, 0],
        submeshes: vec![0, 3, 0, 1],
    };
    assert!(matches!(
        reassemble_poly_mesh(&out_of_range),
        Err(NavMeshError::MalformedOutput(_))
    ));
}
