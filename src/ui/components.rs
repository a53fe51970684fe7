use bevy::prelude::*;

#[derive(Component)]
pub struct Tooltip;

#[derive(Component)]
pub struct TooltipName;

#[derive(Component)]
pub struct TooltipPopulation;

#[derive(Component)]
pub struct LoadFailureMessage;
