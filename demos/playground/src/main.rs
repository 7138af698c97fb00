use std::fmt::Write as _;

use navgen::{
    Deg, Quaternion, Rotation3, Vector3,
    builder::{NavMeshBuilder, NavMeshError, PolyMeshBuffers},
    config::NavMeshConfig,
    data_structures::{
        geometry::{Geometry, TriangleSoup},
        instance::Instance,
        scene_graph::{ContainerNode, MeshNode, SceneNode},
    },
    generate::generate_navmesh,
    merge::merge_scene,
};

/// Stand-in for a real navmesh library: echoes the input back as a single
/// submesh so the whole merge-build-reassemble pipeline can be exercised
/// without a native dependency.
struct PassthroughBuilder;

impl NavMeshBuilder for PassthroughBuilder {
    fn build(
        &mut self,
        vertices: &[f32],
        indices: &[i32],
        _config: &NavMeshConfig,
    ) -> Result<PolyMeshBuffers, NavMeshError> {
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
        Ok(PolyMeshBuffers {
            vertices: vertices.to_vec(),
            triangles,
            submeshes,
        })
    }
}

fn place(geometry: Geometry, position: [f32; 3], rotation: Quaternion<f32>) -> Box<dyn SceneNode> {
    let mut node = MeshNode::new(geometry);
    node.set_local_transform(Instance {
        position: position.into(),
        rotation,
        scale: [1.0; 3].into(),
    });
    Box::new(node)
}

/// The classic walkability playground: a ground plane, a tilted ramp, a
/// raised platform and a sphere sitting on the floor.
fn demo_scene() -> ContainerNode {
    let mut scene = ContainerNode::new();
    scene.add_child(place(
        Geometry::plane(10.0, 10.0),
        [0.0; 3],
        Quaternion::from_axis_angle(Vector3::unit_x(), Deg(-90.0)),
    ));
    scene.add_child(place(
        Geometry::cuboid(1.0, 0.1, 2.0),
        [-2.0, 0.5, 1.2],
        Quaternion::from_axis_angle(Vector3::unit_x(), Deg(36.0)),
    ));
    scene.add_child(place(
        Geometry::cuboid(5.0, 0.1, 5.0),
        [-2.0, 1.0, -2.0],
        Quaternion::from_axis_angle(Vector3::unit_y(), Deg(0.0)),
    ));
    scene.add_child(place(
        Geometry::uv_sphere(1.0, 24, 16),
        [2.0, 0.0, 2.0],
        Quaternion::from_axis_angle(Vector3::unit_y(), Deg(0.0)),
    ));
    scene
}

/// Dump a triangle soup as a wavefront OBJ so it can be eyeballed in any
/// mesh viewer or fed to an external navmesh tool.
fn soup_to_obj(soup: &TriangleSoup) -> String {
    let mut obj = String::from("o merged_scene\n");
    for vertex in soup.positions().chunks_exact(3) {
        writeln!(obj, "v {} {} {}", vertex[0], vertex[1], vertex[2]).unwrap();
    }
    for triangle in 0..soup.triangle_count() {
        let base = triangle * 3 + 1;
        writeln!(obj, "f {} {} {}", base, base + 1, base + 2).unwrap();
    }
    obj
}

fn main() {
    navgen::init_logging();

    let scene = demo_scene();

    let single_sided = merge_scene(&scene, true);
    let double_sided = merge_scene(&scene, false);
    println!(
        "merged scene: {} triangles single-sided, {} double-sided",
        single_sided.triangle_count(),
        double_sided.triangle_count()
    );

    let config = NavMeshConfig {
        cell_size: 0.03,
        region_min_size: 0.5,
        agent_radius: 0.3,
        agent_height: 1.5,
        ..NavMeshConfig::default()
    };
    match generate_navmesh(&scene, &mut PassthroughBuilder, &config) {
        Some(navmesh) => {
            let geometry = navmesh.into_geometry();
            println!(
                "navmesh: {} vertices, {} triangles",
                geometry.vertex_count(),
                geometry.triangle_count()
            );
        }
        None => println!("no navmesh produced"),
    }

    let out = std::path::Path::new("merged_scene.obj");
    match std::fs::write(out, soup_to_obj(&single_sided)) {
        Ok(()) => println!("wrote {}", out.display()),
        Err(e) => eprintln!("could not write {}: {}", out.display(), e),
    }
}
