use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};
use constants::render_settings::{
    STAR_COLOUR, STAR_COUNT, STARFIELD_SEED, STARFIELD_SPREAD, hex_colour,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Component)]
pub struct Starfield;

/// `count` points spread uniformly over a cube of edge `spread` centred on
/// the origin. The same seed always gives the same sky.
pub fn generate_star_positions(count: usize, spread: f32, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half = spread * 0.5;
    let mut spread_value = || {
        if half > 0.0 {
            rng.random_range(-half..half)
        } else {
            0.0
        }
    };

    (0..count)
        .map(|_| [spread_value(), spread_value(), spread_value()])
        .collect()
}

/// Point-list mesh, one vertex per star.
pub fn create_starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let positions = generate_star_positions(STAR_COUNT, STARFIELD_SPREAD, STARFIELD_SEED);
    let mesh = meshes.add(create_starfield_mesh(positions));
    let material = materials.add(StandardMaterial {
        base_color: hex_colour(STAR_COLOUR),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
        Name::new("Starfield"),
        Starfield,
    ));
    info!("Starfield spawned with {STAR_COUNT} stars");
}
