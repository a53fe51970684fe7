use bevy::prelude::SystemSet;

/// Per-frame ordering of the globe systems. Bevy renders once after all of
/// them, so opacity and tooltip changes show up in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FrameSet {
    Input,
    Motion,
    Picking,
    Presentation,
}
