//! Strongly-typed identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Names an agent within an environment.
///
/// Agents are identified by string names fixed at construction.
/// `Borrow<str>` lets agent-keyed maps be queried with plain `&str`.
///
/// # Examples
///
/// ```
/// use rota_core::AgentId;
///
/// let agent = AgentId::from("HR_1");
/// assert_eq!(agent.as_str(), "HR_1");
/// assert_eq!(agent.to_string(), "HR_1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(String);

impl AgentId {
    /// Create an agent identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The agent name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AgentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for AgentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Monotonically increasing per-episode step counter.
///
/// Zeroed on `reset`, incremented once per successful `step`. Dead
/// steps leave it unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepCount(pub u64);

impl StepCount {
    /// The counter immediately after a reset.
    pub const ZERO: StepCount = StepCount(0);

    /// The counter advanced by one step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Whether the counter is a (positive) multiple of `period`.
    ///
    /// Always `false` at zero: a fresh episode is never at a period
    /// boundary.
    pub fn at_multiple_of(self, period: u64) -> bool {
        self.0 > 0 && period > 0 && self.0 % period == 0
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepCount {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
