pub(crate) mod bundles;
pub(crate) mod components;
mod systems;

use crate::core::schedule::FrameSet;
use crate::core::state::GameState;
use crate::ui::systems::*;
use bevy::prelude::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), spawn_tooltip)
            .add_systems(OnEnter(GameState::AssetLoadFailed), show_load_failure)
            .add_systems(Update, update_tooltip.in_set(FrameSet::Presentation));
    }
}
