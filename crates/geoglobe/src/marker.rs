use crate::config::MarkerConfig;
use crate::error::MarkerError;
use crate::geo::surface_placement;
use crate::records::GeoRecord;
use glam::{Quat, Vec3};
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// Local-space box of a marker. The box spans `z ∈ [0, depth]`, so with the
/// marker placed on the surface and +Z pointing outward its inner face sits
/// on the sphere and the rest sticks out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBox {
    pub size: Vec3,
}

impl MarkerBox {
    pub fn new(size: Vec3) -> Self {
        Self { size }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.size.z * 0.5)
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(-self.size.x * 0.5, -self.size.y * 0.5, 0.0)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.size.x * 0.5, self.size.y * 0.5, self.size.z)
    }
}

/// Everything needed to spawn one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    pub position: Vec3,
    pub rotation: Quat,
    pub shape: MarkerBox,
    /// Delay before this marker's pulse starts, in seconds.
    pub phase: f32,
}

/// Linear in population, capped at `max_scale`.
pub fn population_scale(population: u64, config: &MarkerConfig) -> f32 {
    if config.population_unit <= 0.0 {
        return 0.0;
    }
    let scale = population as f64 / config.population_unit;
    scale.min(config.max_scale as f64) as f32
}

/// Width, height and depth of the marker box. Never below the configured
/// floor, so even an empty country stays visible.
pub fn marker_size(population: u64, config: &MarkerConfig) -> Vec3 {
    let scale = population_scale(population, config);
    let width = (config.width_factor * scale).max(config.min_width);
    let depth = (config.depth_factor * scale).max(config.min_depth);
    Vec3::new(width, width, depth)
}

pub fn place_marker<R: Rng>(
    record: &GeoRecord,
    radius: f32,
    config: &MarkerConfig,
    rng: &mut R,
) -> MarkerPlacement {
    let surface = surface_placement(record.coordinates, radius);
    let phase = if config.max_phase > 0.0 {
        rng.random_range(0.0..config.max_phase)
    } else {
        0.0
    };

    MarkerPlacement {
        position: surface.position,
        rotation: surface.rotation,
        shape: MarkerBox::new(marker_size(record.population, config)),
        phase,
    }
}

/// Depth multiplier of the pulse: full depth down to flat over `duration`
/// seconds, then back up, forever. Nothing moves until `phase` has passed.
pub fn pulse_depth_scale(elapsed_secs: f32, phase: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    let t = elapsed_secs - phase;
    if t <= 0.0 {
        return 1.0;
    }

    let cycle = t.rem_euclid(2.0 * duration) / duration;
    if cycle < 1.0 { 1.0 - cycle } else { cycle - 1.0 }
}

/// Two-way mapping between records and marker handles.
///
/// A record gets its marker exactly once; a handle belongs to exactly one
/// record.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<H> {
    markers: Vec<Option<H>>,
    records: HashMap<H, usize>,
}

impl<H: Copy + Eq + Hash> MarkerRegistry<H> {
    pub fn new(record_count: usize) -> Self {
        Self {
            markers: vec![None; record_count],
            records: HashMap::with_capacity(record_count),
        }
    }

    pub fn assign(&mut self, record: usize, handle: H) -> Result<(), MarkerError> {
        let slot = self
            .markers
            .get_mut(record)
            .ok_or(MarkerError::UnknownRecord { record })?;
        if slot.is_some() {
            return Err(MarkerError::AlreadyAssigned { record });
        }
        if let Some(&owner) = self.records.get(&handle) {
            return Err(MarkerError::HandleInUse { record: owner });
        }

        *slot = Some(handle);
        self.records.insert(handle, record);
        Ok(())
    }

    pub fn marker_of(&self, record: usize) -> Option<H> {
        self.markers.get(record).copied().flatten()
    }

    pub fn record_of(&self, handle: &H) -> Option<usize> {
        self.records.get(handle).copied()
    }

    /// Number of records that have a marker.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Place one marker per record and register whatever handle `spawn` returns.
///
/// `spawn` is called exactly once per record, in record order.
pub fn build_markers<H, R, F>(
    records: &[GeoRecord],
    radius: f32,
    config: &MarkerConfig,
    rng: &mut R,
    mut spawn: F,
) -> Result<MarkerRegistry<H>, MarkerError>
where
    H: Copy + Eq + Hash,
    R: Rng,
    F: FnMut(usize, &GeoRecord, &MarkerPlacement) -> H,
{
    let mut registry = MarkerRegistry::new(records.len());
    for (index, record) in records.iter().enumerate() {
        let placement = place_marker(record, radius, config, rng);
        let handle = spawn(index, record, &placement);
        registry.assign(index, handle)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoCoord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn record(name: &str, population: u64, lat: f64, lon: f64) -> GeoRecord {
        GeoRecord {
            name: name.to_string(),
            population,
            coordinates: GeoCoord::new(lat, lon),
        }
    }

    #[test]
    fn test_size_is_monotonic_in_population() {
        let config = MarkerConfig::default();
        let populations = [
            0u64,
            1,
            10_000,
            5_000_000,
            100_000_000,
            500_000_000,
            1_400_000_000,
            3_000_000_000,
            u64::MAX,
        ];

        let sizes: Vec<Vec3> = populations
            .iter()
            .map(|&p| marker_size(p, &config))
            .collect();
        for pair in sizes.windows(2) {
            assert!(pair[1].x >= pair[0].x, "{:?} then {:?}", pair[0], pair[1]);
            assert!(pair[1].z >= pair[0].z, "{:?} then {:?}", pair[0], pair[1]);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(800)]
    fn test_size_floor(#[case] population: u64) {
        let config = MarkerConfig::default();
        let size = marker_size(population, &config);
        assert_eq!(size.x, config.min_width);
        assert_eq!(size.y, config.min_width);
        assert_eq!(size.z, config.min_depth);
    }

    #[test]
    fn test_size_is_capped() {
        let config = MarkerConfig::default();
        assert_eq!(
            marker_size(u64::MAX, &config),
            marker_size(10_000_000_000, &config)
        );
    }

    #[test]
    fn test_linear_range() {
        let config = MarkerConfig::default();
        let size = marker_size(1_000_000_000, &config);
        assert!((size.x - 0.2).abs() < 1e-6);
        assert!((size.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_marker_box_starts_on_surface() {
        let shape = MarkerBox::new(Vec3::new(0.2, 0.2, 0.8));
        assert_eq!(shape.min().z, 0.0);
        assert_eq!(shape.max().z, 0.8);
        assert_eq!(shape.center(), Vec3::new(0.0, 0.0, 0.4));
    }

    #[test]
    fn test_place_marker_sits_on_sphere_facing_out() {
        let config = MarkerConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let placement = place_marker(
            &record("Brazil", 214_000_000, -10.0, -55.0),
            5.0,
            &config,
            &mut rng,
        );

        assert!((placement.position.length() - 5.0).abs() < 1e-4);
        let outward = placement.rotation * Vec3::Z;
        assert!(outward.abs_diff_eq(placement.position.normalize(), 1e-5));
        assert!((0.0..config.max_phase).contains(&placement.phase));
    }

    #[test]
    fn test_phases_are_not_synchronised() {
        let config = MarkerConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let r = record("A", 1, 0.0, 0.0);
        let phases: Vec<f32> = (0..16)
            .map(|_| place_marker(&r, 5.0, &config, &mut rng).phase)
            .collect();
        assert!(phases.windows(2).any(|w| w[0] != w[1]));
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.5, 1.0)]
    #[case(1.5, 0.5)]
    #[case(2.5, 0.0)]
    #[case(3.5, 0.5)]
    #[case(4.5, 1.0)]
    #[case(5.5, 0.5)]
    fn test_pulse_yoyo(#[case] elapsed: f32, #[case] expected: f32) {
        let scale = pulse_depth_scale(elapsed, 0.5, 2.0);
        assert!((scale - expected).abs() < 1e-5, "t={elapsed}: {scale}");
    }

    #[test]
    fn test_pulse_without_duration_is_static() {
        assert_eq!(pulse_depth_scale(10.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_registry_single_assignment() {
        let mut registry: MarkerRegistry<u32> = MarkerRegistry::new(2);
        registry.assign(0, 100).unwrap();

        assert_eq!(
            registry.assign(0, 101),
            Err(MarkerError::AlreadyAssigned { record: 0 })
        );
        assert_eq!(
            registry.assign(1, 100),
            Err(MarkerError::HandleInUse { record: 0 })
        );
        assert_eq!(
            registry.assign(2, 102),
            Err(MarkerError::UnknownRecord { record: 2 })
        );

        registry.assign(1, 101).unwrap();
        assert_eq!(registry.marker_of(0), Some(100));
        assert_eq!(registry.record_of(&101), Some(1));
        assert_eq!(registry.record_of(&999), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_build_markers_spawns_once_per_record() {
        let records = vec![
            record("India", 1_380_004_385, 20.0, 77.0),
            record("Tuvalu", 11_792, -8.0, 178.0),
            record("Chad", 16_425_864, 15.0, 19.0),
        ];
        let config = MarkerConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut calls = Vec::new();

        let registry = build_markers(&records, 5.0, &config, &mut rng, |index, rec, _| {
            calls.push(rec.name.clone());
            index as u32 + 10
        })
        .unwrap();

        assert_eq!(calls, ["India", "Tuvalu", "Chad"]);
        for index in 0..records.len() {
            let handle = registry.marker_of(index).unwrap();
            assert_eq!(registry.record_of(&handle), Some(index));
        }
    }

    #[test]
    fn test_build_markers_rejects_reused_handle() {
        let records = vec![record("A", 1, 0.0, 0.0), record("B", 1, 0.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(1);
        let result = build_markers(
            &records,
            5.0,
            &MarkerConfig::default(),
            &mut rng,
            |_, _, _| 7u32,
        );
        assert_eq!(result.unwrap_err(), MarkerError::HandleInUse { record: 0 });
    }
}
