use crate::core::camera::components::MainCamera;
use crate::globe::components::{CountryMarker, MarkerGroup, MarkerShape};
use crate::globe::resources::{GlobeSettings, MarkerIndex};
use crate::interaction::resources::*;
use bevy::input::touch::{TouchInput, TouchPhase as BevyTouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};
use geoglobe::interaction::{PointerEvent, TouchPhase};
use geoglobe::picking::{Ray, pick_markers};

pub fn read_pointer_input(
    mut cursor_moved: MessageReader<CursorMoved>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut touches: MessageReader<TouchInput>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut interaction: ResMut<InteractionState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = window.size();
    let was_dragging = interaction.is_dragging();

    for moved in cursor_moved.read() {
        interaction.handle(PointerEvent::Move { position: moved.position }, viewport);
    }
    // The two streams are read separately, so a leave is only trusted when
    // the window agrees the cursor is gone.
    let left = cursor_left.read().count() > 0;
    if left && window.cursor_position().is_none() {
        interaction.handle(PointerEvent::Left, viewport);
    }

    if mouse_input.just_pressed(MouseButton::Left) {
        if let Some(position) = window.cursor_position() {
            interaction.handle(PointerEvent::Down { position }, viewport);
        }
    }
    if mouse_input.just_released(MouseButton::Left) {
        interaction.handle(PointerEvent::Up, viewport);
    }

    for touch in touches.read() {
        interaction.handle_touch(touch.id, touch_phase(touch.phase), touch.position, viewport);
    }

    match (was_dragging, interaction.is_dragging()) {
        (false, true) => debug!("Drag started at {}", interaction.pointer().screen),
        (true, false) => debug!("Drag stopped, rotation {:?}", interaction.rotation()),
        _ => {}
    }
}

fn touch_phase(phase: BevyTouchPhase) -> TouchPhase {
    match phase {
        BevyTouchPhase::Started => TouchPhase::Started,
        BevyTouchPhase::Moved => TouchPhase::Moved,
        BevyTouchPhase::Ended => TouchPhase::Ended,
        BevyTouchPhase::Canceled => TouchPhase::Cancelled,
    }
}

pub fn apply_group_rotation(
    time: Res<Time>,
    mut interaction: ResMut<InteractionState>,
    mut groups: Query<&mut Transform, With<MarkerGroup>>,
) {
    let rotation = interaction.advance_frame(time.delta_secs());
    for mut transform in &mut groups {
        transform.rotation = rotation;
    }
}

/// World-space ray through the pointer, or `None` when there is nothing to
/// aim at.
fn pointer_ray(
    interaction: &InteractionState,
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Ray> {
    let pointer = interaction.pointer();
    if !pointer.inside {
        return None;
    }
    let position = pointer.viewport_position(window.size());
    let ray = camera.viewport_to_world(camera_transform, position).ok()?;
    Some(Ray::new(ray.origin, *ray.direction))
}

pub fn pick_hovered_markers(
    interaction: Res<InteractionState>,
    settings: Res<GlobeSettings>,
    index: Option<Res<MarkerIndex>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    groups: Query<&Transform, (With<MarkerGroup>, Without<CountryMarker>)>,
    markers: Query<
        (Entity, &Transform, &MarkerShape, &MeshMaterial3d<StandardMaterial>),
        With<CountryMarker>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hover: ResMut<HoverState>,
) {
    let Some(index) = index else {
        return;
    };
    let (Ok(window), Ok((camera, camera_transform)), Ok(group)) =
        (windows.single(), cameras.single(), groups.single())
    else {
        return;
    };

    let group_affine = group.compute_affine();
    let result = match pointer_ray(&interaction, window, camera, camera_transform) {
        Some(ray) => pick_markers(
            &ray,
            markers.iter().map(|(entity, transform, shape, _)| {
                (entity, group_affine * transform.compute_affine(), **shape)
            }),
        ),
        None => Default::default(),
    };

    let config = &settings.markers;
    for (entity, _, _, material) in &markers {
        let opacity = result.opacity_for(&entity, config.dim_opacity, config.highlight_opacity);
        set_marker_opacity(&mut materials, material, opacity);
    }

    if hover.highlighted != result.highlighted.len() {
        debug!("{} markers under the pointer", result.highlighted.len());
    }
    hover.highlighted = result.highlighted.len();
    hover.record = result.tooltip.and_then(|entity| index.record_of(&entity));
}

fn set_marker_opacity(
    materials: &mut Assets<StandardMaterial>,
    material: &MeshMaterial3d<StandardMaterial>,
    opacity: f32,
) {
    // Only touch materials that change so unchanged markers are not re-uploaded
    let needs_update = materials
        .get(&material.0)
        .is_some_and(|current| current.base_color.alpha() != opacity);
    if needs_update {
        if let Some(current) = materials.get_mut(&material.0) {
            current.base_color.set_alpha(opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoglobe::config::InteractionConfig;
    use geoglobe::interaction::InteractionContext;
    use rstest::rstest;

    #[rstest]
    #[case(BevyTouchPhase::Started, TouchPhase::Started)]
    #[case(BevyTouchPhase::Moved, TouchPhase::Moved)]
    #[case(BevyTouchPhase::Ended, TouchPhase::Ended)]
    #[case(BevyTouchPhase::Canceled, TouchPhase::Cancelled)]
    fn test_touch_phase_mapping(#[case] input: BevyTouchPhase, #[case] expected: TouchPhase) {
        assert_eq!(touch_phase(input), expected);
    }

    #[test]
    fn test_group_follows_drag_rotation() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut ctx = InteractionContext::new(&InteractionConfig::default());
        ctx.handle(PointerEvent::Down { position: Vec2::new(100.0, 100.0) }, viewport);
        ctx.handle(PointerEvent::Move { position: Vec2::new(160.0, 130.0) }, viewport);
        let expected = ctx.rotation().to_quat();

        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(InteractionState(ctx))
            .add_systems(Update, apply_group_rotation);
        let group = app.world_mut().spawn((Transform::default(), MarkerGroup)).id();

        app.update();

        let rotation = app.world().get::<Transform>(group).map(|t| t.rotation);
        assert!(rotation.is_some_and(|r| r.abs_diff_eq(expected, 1e-6)));
    }

    fn pointer_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_message::<CursorMoved>()
            .add_message::<CursorLeft>()
            .add_message::<TouchInput>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(InteractionState(InteractionContext::new(
                &InteractionConfig::default(),
            )))
            .add_systems(Update, read_pointer_input);
        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        (app, window)
    }

    #[test]
    fn test_move_then_leave_in_one_frame_ends_outside() {
        let (mut app, window) = pointer_app();
        app.world_mut().write_message(CursorMoved {
            window,
            position: Vec2::new(1279.0, 400.0),
            delta: None,
        });
        app.world_mut().write_message(CursorLeft { window });

        app.update();

        let pointer = *app.world().resource::<InteractionState>().pointer();
        assert!(!pointer.inside);
        assert_eq!(pointer.screen, Vec2::new(1279.0, 400.0));
    }

    #[test]
    fn test_move_without_leave_stays_inside() {
        let (mut app, window) = pointer_app();
        app.world_mut().write_message(CursorMoved {
            window,
            position: Vec2::new(200.0, 150.0),
            delta: None,
        });

        app.update();

        assert!(app.world().resource::<InteractionState>().pointer().inside);
    }
}
