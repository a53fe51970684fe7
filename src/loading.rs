use crate::core::state::GameState;
use crate::globe::country_asset::{CountryList, CountryListLoader};
use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use std::fmt;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<CountryList>()
            .init_asset_loader::<CountryListLoader>()
            .init_resource::<FailedAssets>()
            .add_loading_state(
                LoadingState::new(GameState::AssetLoading)
                    .continue_to_state(GameState::InGame)
                    .on_failure_continue_to_state(GameState::AssetLoadFailed)
                    .load_collection::<GlobeAssets>(),
            )
            .add_systems(
                Update,
                (
                    collect_load_failures::<Image>,
                    collect_load_failures::<CountryList>,
                )
                    .run_if(in_state(GameState::AssetLoading)),
            )
            .add_systems(OnEnter(GameState::AssetLoadFailed), report_asset_load_failure)
            .add_systems(OnEnter(GameState::InGame), || info!("Globe assets loaded"));
    }
}

#[derive(AssetCollection, Resource)]
pub struct GlobeAssets {
    #[asset(path = "textures/globe.jpeg")]
    pub globe_texture: Handle<Image>,
    #[asset(path = "data/countries.json")]
    pub countries: Handle<CountryList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load asset {}: {}", self.path, self.message)
    }
}

impl std::error::Error for AssetLoadError {}

/// Every asset that failed while loading, in arrival order.
#[derive(Resource, Default, Debug)]
pub struct FailedAssets(pub Vec<AssetLoadError>);

pub(crate) fn collect_load_failures<A: Asset>(
    mut failures: MessageReader<AssetLoadFailedEvent<A>>,
    mut failed: ResMut<FailedAssets>,
) {
    for failure in failures.read() {
        let error = AssetLoadError {
            path: failure.path.to_string(),
            message: failure.error.to_string(),
        };
        error!("{error}");
        failed.0.push(error);
    }
}

fn report_asset_load_failure(failed: Res<FailedAssets>) {
    match failed.0.len() {
        0 => error!("Asset loading failed"),
        count => error!("Asset loading failed for {count} asset(s), the globe will not be shown"),
    }
}
