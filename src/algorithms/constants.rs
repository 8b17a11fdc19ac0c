// Playback timing constants

use std::time::Duration;

/// Tick interval at 1x speed for most problems
pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);

/// Tick interval at 1x speed for the union/intersection walk, whose steps
/// change three arrays at once
pub const SLOW_BASE_INTERVAL: Duration = Duration::from_millis(2000);
