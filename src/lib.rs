mod core;
mod globe;
mod helpers;
mod interaction;
mod loading;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::schedule::FrameSet;
use crate::core::state::GameState;
use crate::globe::GlobeScenePlugin;
use crate::globe::resources::GlobeSettings;
use crate::interaction::InteractionPlugin;
use crate::loading::LoadingPlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GlobeSettings(geoglobe::get_config()))
            .init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Motion,
                    FrameSet::Picking,
                    FrameSet::Presentation,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_plugins((
                CameraPlugin,
                LoadingPlugin,
                GlobeScenePlugin,
                InteractionPlugin,
                UIPlugin,
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
