//! Rota: turn-based multi-agent environment scaffolding for
//! staff-rostering reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rota sub-crates and provides the wrapped entry points. For
//! most users, adding `rota` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rota::prelude::*;
//!
//! let mut env = rota::env(EnvConfig {
//!     max_action_space_size: 100,
//!     eps_end_timestep: 5,
//!     ..EnvConfig::default()
//! })
//! .unwrap();
//!
//! env.reset(Some(42), None);
//! for _ in 0..5 {
//!     env.step(Some(3)).unwrap();
//! }
//! assert_eq!(env.step_count(), StepCount(5));
//! assert!(env.record("HR_1").unwrap().termination());
//!
//! // Out-of-bounds actions never reach the state machine.
//! env.reset(None, None);
//! assert!(matches!(
//!     env.step(Some(100)),
//!     Err(EnvError::ActionOutOfBounds { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rota-core` | IDs, episode records, the `AecEnv` and `Transition` traits, errors |
//! | [`spaces`] | `rota-spaces` | Space descriptors, sampling, membership checking |
//! | [`staffing`] | `rota-env` | The staffing environment, its configuration and space factory |
//! | [`wrappers`] | `rota-wrappers` | Compliance wrappers and the simultaneous-step adapter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rota_env::{ConfigError, EnvConfig, StaffingEnv};
use rota_wrappers::{AssertOutOfBounds, OrderEnforcing, ParallelAdapter};

/// Core types, traits, and IDs (`rota-core`).
pub use rota_core as types;

/// Space descriptors, sampling, and membership checking (`rota-spaces`).
pub use rota_spaces as spaces;

/// The staffing environment and its configuration (`rota-env`).
pub use rota_env as staffing;

/// Compliance wrappers and the simultaneous-step adapter
/// (`rota-wrappers`).
pub use rota_wrappers as wrappers;

/// The fully wrapped turn-based environment returned by [`env()`].
pub type AecChain = OrderEnforcing<AssertOutOfBounds<StaffingEnv>>;

/// The fully wrapped simultaneous-step environment returned by
/// [`parallel_env()`].
pub type ParallelChain = ParallelAdapter<AecChain>;

/// Build the turn-based environment with the full compliance chain:
/// action bounds assertion inside, call-order enforcement outside.
pub fn env(config: EnvConfig) -> Result<AecChain, ConfigError> {
    let raw = StaffingEnv::new(config)?;
    Ok(OrderEnforcing::new(AssertOutOfBounds::new(raw)))
}

/// Build the derived "all agents act simultaneously" environment over
/// the same compliance chain.
pub fn parallel_env(config: EnvConfig) -> Result<ParallelChain, ConfigError> {
    Ok(ParallelAdapter::new(env(config)?))
}

/// Common imports for typical Rota usage.
///
/// ```rust
/// use rota::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rota_core::{
        ActionIndex, AecEnv, AgentId, AgentRecord, AgentStatus, Info, StepCount, Transition,
        TurnSelector,
    };

    // Errors
    pub use rota_core::{EnvError, TransitionError};
    pub use rota_env::ConfigError;
    pub use rota_spaces::SpaceError;

    // Spaces
    pub use rota_spaces::{BoxSpace, Discrete, Space, Value};

    // Environment
    pub use rota_env::{EnvConfig, PlaceholderMove, RenderMode, StaffingEnv};

    // Wrappers
    pub use rota_wrappers::{AssertOutOfBounds, OrderEnforcing, ParallelAdapter, ParallelStep};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn entry_point_rejects_invalid_config() {
        let result = crate::env(EnvConfig {
            eps_end_timestep: 0,
            ..EnvConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::ZeroEpisodeLength)));
    }

    #[test]
    fn parallel_entry_point_runs_a_cycle() {
        let mut env = crate::parallel_env(EnvConfig {
            max_action_space_size: 10,
            eps_end_timestep: 2,
            ..EnvConfig::default()
        })
        .unwrap();

        env.reset(Some(1), None).unwrap();
        let actions = [(AgentId::from("HR_1"), 4)].into_iter().collect();
        let first = env.step(&actions).unwrap();
        assert!(!first.terminations["HR_1"]);
        let second = env.step(&actions).unwrap();
        assert!(second.terminations["HR_1"]);
    }
}
