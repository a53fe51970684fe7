// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};
use bevy::winit::WinitWindows;
use population_globe::GlobePlugin;
use winit::window::Icon;

const ICON_PATH: &str = "assets/icons/icon.png";

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Population Globe".into(),
                resolution: WindowResolution::new(1280, 800),
                present_mode: PresentMode::AutoVsync,
                // Bind to the page canvas on the web instead of creating one
                canvas: Some("#globe-canvas".into()),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GlobePlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else { return; };
    let Ok(primary_entity) = primary_window.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };
    let image = match image::open(ICON_PATH) {
        Ok(image) => image.into_rgba8(),
        Err(err) => {
            debug!("no window icon ({ICON_PATH}): {err}");
            return;
        }
    };
    let (width, height) = image.dimensions();
    match Icon::from_rgba(image.into_raw(), width, height) {
        Ok(icon) => primary.set_window_icon(Some(icon)),
        Err(err) => warn!("invalid window icon: {err}"),
    }
}
