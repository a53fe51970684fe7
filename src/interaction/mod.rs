pub(crate) mod resources;
mod systems;

use crate::core::schedule::FrameSet;
use crate::interaction::resources::*;
use crate::interaction::systems::*;
use bevy::prelude::*;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<HoverState>()
            .add_systems(
                Update,
                (
                    read_pointer_input.in_set(FrameSet::Input),
                    apply_group_rotation.in_set(FrameSet::Motion),
                    pick_hovered_markers.in_set(FrameSet::Picking),
                ),
            );
    }
}
