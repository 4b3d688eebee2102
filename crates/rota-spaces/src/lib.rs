//! Declarative space descriptors for Rota environments.
//!
//! This is the leaf crate with zero internal dependencies. A [`Space`]
//! is a purely structural description of what an observation or action
//! looks like: bounded continuous blocks ([`BoxSpace`]), discrete
//! choices ([`Discrete`]), and nested tuples and dicts of either.
//! Descriptors carry no state; sampling draws through a caller-owned
//! RNG and membership checks are side-effect-free.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compliance;
mod error;
mod space;
mod value;

pub use error::SpaceError;
pub use space::{BoxSpace, Discrete, Shape, Space};
pub use value::Value;
