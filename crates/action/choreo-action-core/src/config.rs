//! Runner configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Upper bound applied to each tick's dt before it reaches actions.
    /// `None` forwards dt untouched.
    pub max_step: Option<f32>,

    /// Events retained per tick; the overflow is summarized by a single
    /// `EventsDropped` event.
    pub max_events_per_tick: usize,

    /// Retire runs whose target the resolver no longer knows.
    pub stop_on_missing_target: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_step: None,
            max_events_per_tick: 1024,
            stop_on_missing_target: true,
        }
    }
}
