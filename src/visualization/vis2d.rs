use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::AU;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the distance label of a non-anchor body
#[derive(Component)]
struct DistanceLabel(pub usize);

const WINDOW_WIDTH: f32 = 1300.0;
const WINDOW_HEIGHT: f32 = 700.0;
const LABEL_FONT_SIZE: f32 = 18.0;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
                update_distance_labels_system,
            )
                .chain(),
        )
        .run();
}

/// Meters-to-pixels factor for the scenario's display settings.
fn px_per_meter(scenario: &Scenario) -> f64 {
    scenario.display.px_per_au / AU
}

/// Physical position -> screen translation. Scaling happens in f64 so the
/// ~1e11 m coordinates keep their precision until the final cast.
fn to_screen(x: f64, y: f64, scale: f64) -> Vec2 {
    Vec2::new((x * scale) as f32, (y * scale) as f32)
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera; world origin lands at the window center
    commands.spawn(Camera2dBundle::default());

    let scale = px_per_meter(&scenario);

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let color = Color::srgb(body.color[0], body.color[1], body.color[2]);
        let pos = to_screen(body.x.x, body.x.y, scale);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Distance readout for every body except the anchor itself
        if !body.anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

/// One fixed physics step per rendered frame. Wall-clock frame time never
/// feeds into the step size; a frame always advances exactly h0 seconds.
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    euler_integrator(system, forces, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = px_per_meter(&scenario);
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_screen(b.x.x, b.x.y, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Draw each body's orbit path as a polyline through its trail, in the
/// body's own color.
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = px_per_meter(&scenario);
    for b in &scenario.system.bodies {
        if b.trail.len() < 2 {
            continue;
        }
        let color = Color::srgb(b.color[0], b.color[1], b.color[2]);
        let mut prev: Option<Vec2> = None;
        for p in &b.trail {
            let point = to_screen(p.x, p.y, scale);
            if let Some(prev) = prev {
                gizmos.line_2d(prev, point, color);
            }
            prev = Some(point);
        }
    }
}

/// Keep each label at its body and show the current distance to the
/// anchor, in units of 10^6 km like the reference display.
fn update_distance_labels_system(
    scenario: Res<Scenario>,
    mut query: Query<(&DistanceLabel, &mut Text, &mut Transform)>,
) {
    let scale = px_per_meter(&scenario);
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            text.sections[0].value = format!("{:.1} 10^6 km", b.dist_to_anchor / 1e9);
            let pos = to_screen(b.x.x, b.x.y, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}
