use crate::globe::resources::{CountryDataset, GlobeSettings};
use crate::interaction::resources::{HoverState, InteractionState};
use crate::loading::FailedAssets;
use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;
use geoglobe::format::group_thousands;

pub fn spawn_tooltip(mut commands: Commands) {
    commands
        .spawn((
            TooltipPanelBundle::new(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            Tooltip,
            Name::new("Tooltip"),
        ))
        .with_children(|parent| {
            parent.spawn((
                LabelBundle::new("", 18.0, Color::WHITE).with_margin(UiRect::bottom(Val::Px(4.0))),
                TooltipName,
            ));
            parent.spawn((
                LabelBundle::new("", 16.0, Color::srgb(0.231, 0.969, 1.0)),
                TooltipPopulation,
            ));
        });
}

pub fn update_tooltip(
    hover: Res<HoverState>,
    interaction: Res<InteractionState>,
    dataset: Res<CountryDataset>,
    settings: Res<GlobeSettings>,
    mut tooltips: Query<&mut Node, With<Tooltip>>,
    mut names: Query<&mut Text, (With<TooltipName>, Without<TooltipPopulation>)>,
    mut populations: Query<&mut Text, (With<TooltipPopulation>, Without<TooltipName>)>,
) {
    let Ok(mut node) = tooltips.single_mut() else {
        return;
    };

    let Some(record) = hover.record.and_then(|index| dataset.records.get(index)) else {
        if node.display != Display::None {
            node.display = Display::None;
        }
        return;
    };

    let tooltip = &settings.tooltip;
    let [offset_x, offset_y] = tooltip.offset;
    let position = interaction.pointer().screen;
    node.display = Display::Flex;
    node.left = Val::Px(position.x + offset_x);
    node.top = Val::Px(position.y + offset_y);

    for mut text in &mut names {
        if text.0 != record.name {
            text.0.clone_from(&record.name);
        }
    }
    let population = group_thousands(record.population, tooltip.thousands_separator);
    for mut text in &mut populations {
        if text.0 != population {
            text.0.clone_from(&population);
        }
    }
}

pub fn show_load_failure(mut commands: Commands, failed: Res<FailedAssets>) {
    let message = load_failure_text(&failed);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            LoadFailureMessage,
        ))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(&message, 22.0, Color::srgb(1.0, 0.4, 0.4)));
        });
}

fn load_failure_text(failed: &FailedAssets) -> String {
    if failed.0.is_empty() {
        return "Assets failed to load. Check the assets folder and restart.".to_string();
    }
    let mut lines: Vec<String> = failed.0.iter().map(ToString::to_string).collect();
    lines.push("Check that the files exist and restart.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::AssetLoadError;

    #[test]
    fn test_failure_text_lists_each_failed_asset() {
        let failed = FailedAssets(vec![AssetLoadError {
            path: "data/countries.json".to_string(),
            message: "path not found".to_string(),
        }]);

        let text = load_failure_text(&failed);
        assert!(text.contains("data/countries.json: path not found"));
        assert!(!text.contains("globe.jpeg"));
    }
}
