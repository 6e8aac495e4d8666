//! Error type shared by action construction, reversal, definitions and the runner.

use thiserror::Error;

use crate::ids::RunId;
use crate::target::Capabilities;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{combinator} requires at least one action")]
    EmptyActionList { combinator: &'static str },
    #[error("repeat count must be at least 1")]
    ZeroRepeat,
    #[error("blink count must be at least 1")]
    ZeroBlinks,
    #[error("animation clip '{name}' has no frames")]
    EmptyAnimation { name: String },
    #[error("{action} has no reverse")]
    NotReversible { action: &'static str },
    #[error("{action} needs target capabilities {missing:?}")]
    MissingCapability {
        action: &'static str,
        missing: Capabilities,
    },
    #[error("invalid action definition: {0}")]
    InvalidDefinition(String),
    #[error("action definition json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no running action with id {0:?}")]
    UnknownRun(RunId),
}
