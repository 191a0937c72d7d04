//! Book viewer demo
//!
//! Plays the roles of the external collaborators around a `ViewerSession`:
//! builds the scene graph a loader would hand over, swaps skins the way a
//! UI tray would, and prints the camera state a renderer would consume.

use anyhow::{bail, Result};
use log::info;
use nalgebra::Point3;

use skinview_core::{Aabb, Bounded, Material, MaterialCatalog, SceneGraph, SceneNode};
use skinview_viewer::{InitialBinding, ViewerConfig, ViewerSession};

/// Stand-in for the asset loader: the book asset with a tagged cover mesh
fn load_book() -> SceneGraph {
    let mut graph = SceneGraph::new(SceneNode::group("book.gltf"));
    let root = graph.root();
    graph.add_child(
        root,
        SceneNode::mesh(
            "Body",
            Aabb::new(Point3::new(-2.0, 0.0, -3.0), Point3::new(2.0, 0.5, 3.0)),
        ),
    );
    graph.add_child(
        root,
        SceneNode::mesh(
            "BookCover_mesh",
            Aabb::new(Point3::new(-2.0, 0.5, -3.0), Point3::new(2.0, 0.6, 3.0)),
        ),
    );
    graph.add_child(
        root,
        SceneNode::mesh(
            "Spine",
            Aabb::new(Point3::new(-2.2, 0.0, -3.0), Point3::new(-2.0, 0.6, 3.0)),
        ),
    );
    graph
}

fn main() -> Result<()> {
    env_logger::init();

    let mut catalog = MaterialCatalog::new();
    catalog.push(
        "default",
        Material::textured("default", "resources/DefaultCover.jpg").shared(),
    );
    catalog.push(
        "premium",
        Material::textured("premium", "resources/PremiumCover.jpg").shared(),
    );

    let config = ViewerConfig {
        initial_map: vec![InitialBinding {
            pattern: "BookCover".to_string(),
            tag: "cover".to_string(),
            variant: "default".to_string(),
        }],
        ..ViewerConfig::default()
    };

    let mut session = ViewerSession::new(config, catalog);

    // Loader collaborator reports completion.
    session.on_asset_loaded(load_book());
    let bounds = session
        .graph()
        .and_then(|graph| graph.bounding_box())
        .expect("demo asset has renderable geometry");
    info!("asset bounds: center {:?}, size {}", bounds.center(), bounds.size());

    let camera = session.camera().expect("camera framed on load");
    println!("framed camera: {:?}", camera);
    println!("initial skin: {:?}", session.applied_skin("cover"));

    // UI collaborator: cycle through every catalog variant.
    let labels: Vec<String> = session
        .catalog()
        .labels()
        .map(str::to_string)
        .collect();
    for label in labels {
        let updated = session.select_skin("cover", &label)?;
        if updated == 0 {
            bail!("cover mesh went missing");
        }
        println!("selected {:?} -> applied {:?}", label, session.applied_skin("cover"));
    }

    // Renderer collaborator consumes the matrices each frame.
    let camera = *session.camera().expect("camera unchanged by skin swaps");
    println!("view matrix:\n{}", camera.view_matrix());
    println!("projection matrix:\n{}", camera.projection_matrix(16.0 / 9.0));

    Ok(())
}
