use bevy::prelude::*;
use geoglobe::config::GlobeConfig;
use geoglobe::marker::MarkerRegistry;
use geoglobe::records::GeoRecord;

#[derive(Resource, Clone, Deref)]
pub struct GlobeSettings(pub GlobeConfig);

#[derive(Resource, Default)]
pub struct CountryDataset {
    pub records: Vec<GeoRecord>,
}

/// Marker entity <-> record, filled once when the markers are spawned.
#[derive(Resource, Deref)]
pub struct MarkerIndex(pub MarkerRegistry<Entity>);
