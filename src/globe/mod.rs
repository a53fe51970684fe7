pub(crate) mod atmosphere_material;
pub(crate) mod components;
pub(crate) mod country_asset;
pub(crate) mod resources;
mod systems;

use crate::core::schedule::FrameSet;
use crate::core::state::GameState;
use crate::globe::atmosphere_material::AtmosphereMaterial;
use crate::globe::resources::CountryDataset;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobeScenePlugin;

impl Plugin for GlobeScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<AtmosphereMaterial>::default())
            .init_resource::<CountryDataset>()
            .add_systems(Startup, spawn_starfield)
            .add_systems(
                OnEnter(GameState::InGame),
                (store_country_dataset, spawn_globe, spawn_markers).chain(),
            )
            .add_systems(
                Update,
                (
                    reload_settings.in_set(FrameSet::Input),
                    animate_marker_pulse.in_set(FrameSet::Motion),
                ),
            );
    }
}
