//! Error types for the Rota environment framework.
//!
//! The raw environment performs no validation of its own; every call
//! rejection in this taxonomy is produced by a compliance wrapper
//! before the inner environment is touched.

use crate::id::AgentId;
use std::error::Error;
use std::fmt;

/// Rejections surfaced to callers of `step`, `observe`, or the derived
/// simultaneous-step surface.
#[derive(Clone, Debug, PartialEq)]
pub enum EnvError {
    /// The submitted action is outside `[0, capacity)`.
    ActionOutOfBounds {
        /// The offending action.
        action: u32,
        /// Cardinality of the agent's action space.
        capacity: u32,
    },
    /// A non-`None` action was submitted for a terminated or truncated
    /// agent; the only valid action for a dead agent is `None`.
    DeadAgentAction {
        /// The dead agent.
        agent: AgentId,
    },
    /// `step`, `observe`, or `render` was called before the first `reset`.
    ResetRequired {
        /// The rejected call.
        call: &'static str,
    },
    /// `step` was called after every agent retired, without an
    /// intervening `reset`.
    EpisodeOver,
    /// The named agent is not part of this environment.
    UnknownAgent {
        /// The unrecognized name.
        name: String,
    },
    /// The simultaneous-step surface received no action for a live agent.
    MissingAction {
        /// The agent left without an action.
        agent: AgentId,
    },
    /// Bounds checking requires a discrete action space.
    UnsupportedActionSpace {
        /// The agent whose action space is not discrete.
        agent: AgentId,
    },
    /// The transition extension point failed.
    Transition(TransitionError),
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionOutOfBounds { action, capacity } => {
                write!(f, "action {action} out of bounds [0, {capacity})")
            }
            Self::DeadAgentAction { agent } => {
                write!(f, "agent '{agent}' is done; the only valid action is None")
            }
            Self::ResetRequired { call } => {
                write!(f, "{call} called before reset")
            }
            Self::EpisodeOver => write!(f, "step called after the episode ended; reset first"),
            Self::UnknownAgent { name } => write!(f, "unknown agent '{name}'"),
            Self::MissingAction { agent } => {
                write!(f, "no action supplied for live agent '{agent}'")
            }
            Self::UnsupportedActionSpace { agent } => {
                write!(f, "agent '{agent}' has a non-discrete action space")
            }
            Self::Transition(reason) => write!(f, "transition failed: {reason}"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transition(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<TransitionError> for EnvError {
    fn from(e: TransitionError) -> Self {
        Self::Transition(e)
    }
}

/// Errors from a [`Transition`](crate::Transition) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionError {
    /// The transition could not apply the action.
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "{reason}"),
        }
    }
}

impl Error for TransitionError {}
