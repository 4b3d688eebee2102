//! Staff-rostering environment scaffold.
//!
//! [`StaffingEnv`] simulates assigning staff around an organization
//! under the turn-based [`AecEnv`](rota_core::AecEnv) contract. The
//! observation and action shapes are real; the world mutation itself
//! is a pluggable [`Transition`](rota_core::Transition) defaulting to
//! [`PlaceholderMove`], so adopters can drop in their own assignment
//! logic without touching the lifecycle scaffolding.
//!
//! The environment performs no call validation — compose it with the
//! wrappers from `rota-wrappers` (or use the `rota` facade entry
//! points, which do so for you).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod env;
pub mod factory;
mod staff;
mod transition;

pub use config::{ConfigError, EnvConfig, RenderMode};
pub use env::StaffingEnv;
pub use staff::{StaffDirectory, StaffMember};
pub use transition::PlaceholderMove;
