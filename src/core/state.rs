use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum GameState {
    #[default]
    AssetLoading,
    // The globe texture could not be loaded; nothing else is spawned
    AssetLoadFailed,
    InGame,
}
