use bevy::prelude::*;
use geoglobe::marker::MarkerBox;

/// Root of everything that turns with the globe: the textured sphere, the
/// atmosphere and the markers.
#[derive(Component)]
pub struct MarkerGroup;

#[derive(Component)]
pub struct GlobeSurface;

#[derive(Component)]
pub struct Atmosphere;

#[derive(Component)]
pub struct Starfield;

#[derive(Component)]
pub struct CountryMarker {
    /// Index into `CountryDataset::records`.
    pub record: usize,
}

#[derive(Component, Deref)]
pub struct MarkerShape(pub MarkerBox);

#[derive(Component)]
pub struct PulseAnimation {
    pub phase: f32,
    pub started_at: f32,
}
