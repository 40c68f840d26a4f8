//! Debug toggle resource.
//!
//! When present, the debug render pass submits a point for every positioned
//! entity in addition to the regular sprite draws.

use bevy_ecs::prelude::Resource;

/// Marker resource toggled by [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
