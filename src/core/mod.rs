pub(crate) mod camera;
pub(crate) mod schedule;
pub(crate) mod state;
