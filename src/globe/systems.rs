use crate::globe::atmosphere_material::AtmosphereMaterial;
use crate::globe::components::*;
use crate::globe::country_asset::CountryList;
use crate::globe::resources::*;
use crate::helpers::mesh::{marker_mesh, star_mesh};
use crate::interaction::resources::InteractionState;
use crate::loading::GlobeAssets;
use bevy::prelude::*;
use geoglobe::marker::{build_markers, pulse_depth_scale};
use geoglobe::stars::generate_stars;

// A zero depth scale makes the marker transform singular
const MIN_PULSE_SCALE: f32 = 0.001;

pub fn store_country_dataset(
    assets: Res<GlobeAssets>,
    country_lists: Res<Assets<CountryList>>,
    mut dataset: ResMut<CountryDataset>,
) {
    let Some(list) = country_lists.get(&assets.countries) else {
        error!("Country list is not loaded; the globe will have no markers");
        return;
    };
    info!("Loaded {} countries ({} skipped)", list.records.len(), list.rejected);
    dataset.records = list.records.clone();
}

/// Re-read `globe_config.toml` on demand. Opacity, pulse, tooltip and drag
/// values apply immediately; geometry keeps what was spawned.
pub fn reload_settings(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<GlobeSettings>,
    mut interaction: ResMut<InteractionState>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    match geoglobe::reload_config() {
        Ok(()) => {
            settings.0 = geoglobe::get_config();
            interaction.configure(&settings.interaction);
            info!("Reloaded {}", geoglobe::config::CONFIG_PATH);
        }
        Err(err) => warn!("Keeping current settings: {err}"),
    }
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GlobeSettings>,
) {
    let stars = generate_stars(&settings.stars, &mut rand::rng());
    if stars.is_empty() {
        return;
    }

    commands.spawn((
        Mesh3d(meshes.add(star_mesh(&stars))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
        Name::new("Starfield"),
    ));
}

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
    settings: Res<GlobeSettings>,
    assets: Res<GlobeAssets>,
) {
    let globe = &settings.globe;
    let surface_mesh = meshes.add(Sphere::new(globe.radius).mesh().uv(globe.sectors, globe.stacks));
    let atmosphere_mesh = meshes.add(
        Sphere::new(globe.radius * globe.atmosphere_scale)
            .mesh()
            .uv(globe.sectors, globe.stacks),
    );
    let [r, g, b, a] = globe.atmosphere_color;

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            MarkerGroup,
            Name::new("Marker group"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(surface_mesh),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(assets.globe_texture.clone()),
                    unlit: true,
                    ..default()
                })),
                Transform::from_rotation(Quat::from_rotation_y(globe.texture_yaw_offset)),
                GlobeSurface,
            ));

            parent.spawn((
                Mesh3d(atmosphere_mesh),
                MeshMaterial3d(atmosphere_materials.add(AtmosphereMaterial {
                    color: LinearRgba::new(r, g, b, a),
                })),
                Transform::default(),
                Atmosphere,
            ));
        });
}

pub fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GlobeSettings>,
    dataset: Res<CountryDataset>,
    time: Res<Time>,
    groups: Query<Entity, With<MarkerGroup>>,
) {
    let Ok(group) = groups.single() else {
        error!("Marker group is missing, no markers spawned");
        return;
    };

    let config = &settings.markers;
    let [r, g, b] = config.color;
    let started_at = time.elapsed_secs();

    let registry = build_markers(
        &dataset.records,
        settings.globe.radius,
        config,
        &mut rand::rng(),
        |index, record, placement| {
            commands
                .spawn((
                    Mesh3d(meshes.add(marker_mesh(&placement.shape))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgba(r, g, b, config.dim_opacity),
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_translation(placement.position)
                        .with_rotation(placement.rotation),
                    CountryMarker { record: index },
                    MarkerShape(placement.shape),
                    PulseAnimation {
                        phase: placement.phase,
                        started_at,
                    },
                    Name::new(record.name.clone()),
                    ChildOf(group),
                ))
                .id()
        },
    );

    match registry {
        Ok(registry) => {
            info!("Spawned {} country markers", registry.len());
            commands.insert_resource(MarkerIndex(registry));
        }
        Err(err) => error!("Marker registration failed: {err}"),
    }
}

pub fn animate_marker_pulse(
    time: Res<Time>,
    settings: Res<GlobeSettings>,
    mut markers: Query<(&mut Transform, &PulseAnimation), With<CountryMarker>>,
) {
    let now = time.elapsed_secs();
    let duration = settings.markers.pulse_duration;

    for (mut transform, pulse) in &mut markers {
        let scale = pulse_depth_scale(now - pulse.started_at, pulse.phase, duration);
        transform.scale.z = scale.max(MIN_PULSE_SCALE);
    }
}
