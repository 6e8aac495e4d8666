//! Output contracts from the runner.
//!
//! Property writes go straight to targets; outputs only carry the discrete
//! lifecycle events observed during a tick.

use serde::{Deserialize, Serialize};

use crate::ids::RunId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ActionEvent {
    Started {
        run: RunId,
        target: String,
        action: String,
    },
    Finished {
        run: RunId,
        target: String,
    },
    Cancelled {
        run: RunId,
        target: String,
    },
    /// The resolver had no target for this run's key.
    TargetMissing {
        run: RunId,
        target: String,
    },
    EventsDropped {
        count: usize,
    },
}

/// Outputs returned by ActionRunner::tick().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<ActionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: ActionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
