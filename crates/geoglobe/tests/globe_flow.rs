use geoglobe::config::GlobeConfig;
use geoglobe::format::format_population;
use geoglobe::interaction::{InteractionContext, PointerEvent};
use geoglobe::marker::{MarkerBox, build_markers};
use geoglobe::picking::{Ray, pick_markers};
use geoglobe::records::{load_dataset, parse_dataset};
use glam::{Affine3A, Quat, Vec2, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

const COUNTRIES: &str = r#"[
    {"name": "Nigeria", "population": 206139587, "latlng": [10.0, 8.0]},
    {"name": "Atlantis", "population": 1, "latlng": [0.0, 500.0]},
    {"name": "Ghana", "population": 31072945, "latitude": "8 N", "longitude": "2 W"},
    {"name": "Gabon", "population": 1234567, "latlng": [-1.0, 11.75]}
]"#;

struct SpawnedMarker {
    local: Affine3A,
    shape: MarkerBox,
}

fn world_markers(markers: &[SpawnedMarker], group: Quat) -> Vec<(u32, Affine3A, MarkerBox)> {
    let group = Affine3A::from_quat(group);
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| (i as u32, group * m.local, m.shape))
        .collect()
}

#[test]
fn dataset_to_tooltip() {
    let config = GlobeConfig::default();
    let dataset = parse_dataset(COUNTRIES).unwrap();
    assert_eq!(dataset.records.len(), 3);
    assert_eq!(dataset.rejected.len(), 1);

    let mut spawned = Vec::new();
    let mut rng = StdRng::seed_from_u64(11);
    let registry = build_markers(
        &dataset.records,
        config.globe.radius,
        &config.markers,
        &mut rng,
        |index, _, placement| {
            spawned.push(SpawnedMarker {
                local: Affine3A::from_rotation_translation(placement.rotation, placement.position),
                shape: placement.shape,
            });
            index as u32
        },
    )
    .unwrap();
    assert_eq!(registry.len(), 3);

    // Aim straight at Gabon from the camera.
    let camera = Vec3::new(0.0, 0.0, config.camera.distance);
    let markers = world_markers(&spawned, Quat::IDENTITY);
    let gabon = registry.marker_of(2).unwrap() as usize;
    let target = markers[gabon].1.transform_point3(markers[gabon].2.center());

    let hover = pick_markers(&Ray::new(camera, target - camera), markers);
    let record = hover
        .tooltip
        .and_then(|handle| registry.record_of(&handle))
        .map(|index| &dataset.records[index])
        .unwrap();

    assert_eq!(record.name, "Gabon");
    assert_eq!(format_population(record.population), "1,234,567");
}

#[test]
fn drag_moves_markers_out_from_under_the_pointer() {
    let config = GlobeConfig::default();
    let dataset = parse_dataset(COUNTRIES).unwrap();
    let mut spawned = Vec::new();
    let mut rng = StdRng::seed_from_u64(5);
    build_markers(
        &dataset.records,
        config.globe.radius,
        &config.markers,
        &mut rng,
        |index, _, placement| {
            spawned.push(SpawnedMarker {
                local: Affine3A::from_rotation_translation(placement.rotation, placement.position),
                shape: placement.shape,
            });
            index as u32
        },
    )
    .unwrap();

    let mut ctx = InteractionContext::new(&config.interaction);
    let camera = Vec3::new(0.0, 0.0, config.camera.distance);
    let before = world_markers(&spawned, ctx.advance_frame(0.016));
    let target = before[0].1.transform_point3(before[0].2.center());
    let ray = Ray::new(camera, target - camera);

    assert!(pick_markers(&ray, before).is_highlighted(&0));

    let viewport = Vec2::new(1280.0, 800.0);
    ctx.handle(PointerEvent::Down { position: Vec2::new(600.0, 400.0) }, viewport);
    ctx.handle(PointerEvent::Move { position: Vec2::new(800.0, 400.0) }, viewport);
    ctx.handle(PointerEvent::Up, viewport);

    let after = world_markers(&spawned, ctx.advance_frame(0.016));
    let hover = pick_markers(&ray, after);
    assert!(!hover.is_highlighted(&0));
}

#[test]
fn shipped_country_list_is_clean() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/data/countries.json");
    let dataset = load_dataset(path).unwrap();

    assert!(dataset.rejected.is_empty(), "{:?}", dataset.rejected);
    assert!(dataset.records.iter().any(|r| r.name == "Ghana"));
    assert!(dataset.records.iter().any(|r| r.name == "Gabon"));
}
