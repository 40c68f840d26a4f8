use bevy_ecs::prelude::Resource;

/// Wall-clock timing for the current frame.
///
/// `delta` is the seconds elapsed since the previous frame as reported by the
/// frame driver. There is no fixed step and no sub-stepping.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
