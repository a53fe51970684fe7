use crate::core::camera::components::MainCamera;
use crate::globe::resources::GlobeSettings;
use bevy::log::info;
use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands, settings: Res<GlobeSettings>) {
    let camera = &settings.camera;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, camera.distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    info!("Camera spawned at distance {}", camera.distance);
}
