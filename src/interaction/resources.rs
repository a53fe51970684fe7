use crate::globe::resources::GlobeSettings;
use bevy::prelude::*;
use geoglobe::config::InteractionConfig;
use geoglobe::interaction::InteractionContext;

#[derive(Resource, Deref, DerefMut)]
pub struct InteractionState(pub InteractionContext);

impl FromWorld for InteractionState {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<GlobeSettings>()
            .map(|settings| settings.interaction.clone())
            .unwrap_or_else(InteractionConfig::default);
        Self(InteractionContext::new(&config))
    }
}

/// Result of the last picking pass.
#[derive(Resource, Default, Debug)]
pub struct HoverState {
    /// Record shown in the tooltip.
    pub record: Option<usize>,
    pub highlighted: usize,
}
