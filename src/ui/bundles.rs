use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }
}

/// Floating panel positioned in window pixels. Starts hidden.
#[derive(Bundle)]
pub struct TooltipPanelBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_radius: BorderRadius,
    pub z_index: GlobalZIndex,
}

impl TooltipPanelBundle {
    pub fn new(background: Color) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                ..default()
            },
            background: BackgroundColor(background),
            border_radius: BorderRadius::all(Val::Px(6.0)),
            z_index: GlobalZIndex(10),
        }
    }
}
