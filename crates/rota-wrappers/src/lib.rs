//! Compliance wrappers for Rota environments.
//!
//! Each wrapper implements the same [`AecEnv`](rota_core::AecEnv)
//! contract and delegates to an inner instance, checking its own
//! invariant before forwarding the call:
//!
//! - [`AssertOutOfBounds`] rejects malformed actions.
//! - [`OrderEnforcing`] rejects out-of-order lifecycle calls.
//! - [`ParallelAdapter`] derives an "all agents act simultaneously"
//!   surface from the turn-based one.
//!
//! Rejections happen before any inner state mutation, so a rejected
//! call leaves the episode exactly where it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bounds;
mod order;
mod parallel;

pub use bounds::AssertOutOfBounds;
pub use order::OrderEnforcing;
pub use parallel::{ParallelAdapter, ParallelStep};
