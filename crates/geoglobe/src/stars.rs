use crate::config::StarConfig;
use glam::Vec3;
use rand::Rng;

/// Scatter stars in a box behind the globe: x and y within ±spread/2,
/// z between -depth and 0.
pub fn generate_stars<R: Rng>(config: &StarConfig, rng: &mut R) -> Vec<Vec3> {
    (0..config.count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * config.spread,
                (rng.random::<f32>() - 0.5) * config.spread,
                -rng.random::<f32>() * config.depth,
            )
        })
        .collect()
}
