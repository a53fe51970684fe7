use crate::config::InteractionConfig;
use glam::{Quat, Vec2};

/// Pointer input in window pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2 },
    Move { position: Vec2 },
    Up,
    /// The pointer left the window.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Both axes in [-1, 1], y up.
    pub normalized: Vec2,
    /// Last known position in window pixels; the tooltip follows this.
    pub screen: Vec2,
    /// Position the current drag delta is measured from.
    pub previous: Vec2,
    pub is_down: bool,
    pub inside: bool,
}

impl PointerState {
    /// Back to window pixels for a viewport of `viewport` size.
    pub fn viewport_position(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(
            (self.normalized.x + 1.0) * 0.5 * viewport.x,
            (1.0 - self.normalized.y) * 0.5 * viewport.y,
        )
    }
}

/// Cumulative rotation of the marker group, in radians. `x` is driven by
/// horizontal drag and turns the group about +Y; `y` is driven by vertical
/// drag and tilts it about +X.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RotationOffset {
    pub x: f32,
    pub y: f32,
}

impl RotationOffset {
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_x(self.y) * Quat::from_rotation_y(self.x)
    }
}

pub fn normalize_pointer(position: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        position.x / viewport.x * 2.0 - 1.0,
        -(position.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Pointer, drag and rotation state shared by the input handlers and the
/// per-frame systems.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionContext {
    pointer: PointerState,
    drag: DragState,
    rotation: RotationOffset,
    active_touch: Option<u64>,
    sensitivity: f32,
    idle_rotation_speed: f32,
    auto_rotate: bool,
}

impl InteractionContext {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            pointer: PointerState::default(),
            drag: DragState::Idle,
            rotation: RotationOffset::default(),
            active_touch: None,
            sensitivity: config.drag_sensitivity,
            idle_rotation_speed: config.idle_rotation_speed,
            auto_rotate: config.auto_rotate,
        }
    }

    /// Take new tuning values, keeping pointer, drag and rotation state.
    pub fn configure(&mut self, config: &InteractionConfig) {
        self.sensitivity = config.drag_sensitivity;
        self.idle_rotation_speed = config.idle_rotation_speed;
        self.auto_rotate = config.auto_rotate;
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn rotation(&self) -> RotationOffset {
        self.rotation
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn handle(&mut self, event: PointerEvent, viewport: Vec2) {
        match event {
            PointerEvent::Down { position } => {
                self.track(position, viewport);
                self.pointer.is_down = true;
                self.pointer.previous = position;
                self.drag = DragState::Dragging;
            }
            PointerEvent::Move { position } => {
                self.track(position, viewport);
                if self.drag == DragState::Dragging {
                    let delta = position - self.pointer.previous;
                    self.rotation.x += delta.x * self.sensitivity;
                    self.rotation.y += delta.y * self.sensitivity;
                    self.pointer.previous = position;
                }
            }
            PointerEvent::Up => {
                self.pointer.is_down = false;
                self.drag = DragState::Idle;
            }
            PointerEvent::Left => {
                self.pointer.inside = false;
            }
        }
    }

    /// Single-touch input. Only the touch that started the drag is followed.
    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2, viewport: Vec2) {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_none() {
                    self.active_touch = Some(id);
                    self.handle(PointerEvent::Down { position }, viewport);
                }
            }
            TouchPhase::Moved => {
                if self.active_touch == Some(id) {
                    self.handle(PointerEvent::Move { position }, viewport);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                    self.handle(PointerEvent::Up, viewport);
                }
            }
        }
    }

    /// Advance by one frame and return the group rotation to apply. Idle
    /// auto-rotation only runs when enabled and nobody is dragging.
    pub fn advance_frame(&mut self, delta_secs: f32) -> Quat {
        if self.auto_rotate && self.drag == DragState::Idle {
            self.rotation.x += self.idle_rotation_speed * delta_secs;
        }
        self.rotation.to_quat()
    }

    fn track(&mut self, position: Vec2, viewport: Vec2) {
        self.pointer.screen = position;
        self.pointer.normalized = normalize_pointer(position, viewport);
        self.pointer.inside = true;
    }
}
