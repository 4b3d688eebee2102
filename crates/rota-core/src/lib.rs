//! Core types and traits for the Rota environment framework.
//!
//! Defines the fundamental abstractions used throughout the Rota
//! workspace: agent identifiers, per-agent episode records, the
//! turn-based environment contract ([`AecEnv`]), the cycling
//! [`TurnSelector`], the pluggable [`Transition`] extension point,
//! and the error taxonomy shared by environments and wrappers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod record;
mod selector;
mod traits;
mod transition;

pub use error::{EnvError, TransitionError};
pub use id::{AgentId, StepCount};
pub use record::{AgentRecord, AgentStatus, EpisodeState, Info};
pub use selector::TurnSelector;
pub use traits::{ActionIndex, AecEnv};
pub use transition::Transition;
