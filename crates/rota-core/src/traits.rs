//! The agent-environment-cycle contract.

use crate::error::EnvError;
use crate::id::{AgentId, StepCount};
use crate::record::{AgentRecord, Info};
use rota_spaces::{Space, Value};

/// A discrete action: an index into the acting agent's action space.
pub type ActionIndex = u32;

/// A turn-based multi-agent environment: exactly one agent acts per
/// [`step()`](AecEnv::step) call.
///
/// Compliance wrappers implement this same trait and delegate to an
/// inner instance, checking their own invariant before forwarding the
/// call; the raw environment performs no validation of its own and
/// relies entirely on the wrapper chain.
///
/// # Object safety
///
/// This trait is object-safe; heterogeneous environments can be held
/// as `Box<dyn AecEnv>`.
pub trait AecEnv {
    /// Every agent this environment can ever host, in turn order.
    fn possible_agents(&self) -> &[AgentId];

    /// The agents still live in the current episode, in turn order.
    fn agents(&self) -> &[AgentId];

    /// The agent whose turn it is, or `None` once every agent retired.
    fn agent_selection(&self) -> Option<&AgentId>;

    /// The declared observation space for `agent`.
    fn observation_space(&self, agent: &str) -> Option<&Space>;

    /// The declared action space for `agent`.
    fn action_space(&self, agent: &str) -> Option<&Space>;

    /// One agent's episode record (reward, status, info), if live.
    fn record(&self, agent: &str) -> Option<&AgentRecord>;

    /// Steps taken in the current episode.
    fn step_count(&self) -> StepCount;

    /// Reinitialize episode state for a new episode.
    ///
    /// Reseeds the internal random source iff `seed` is supplied.
    /// Side effect only; no return value.
    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>);

    /// Produce `agent`'s current observation.
    ///
    /// The value conforms to the agent's declared observation space.
    fn observe(&mut self, agent: &str) -> Result<Value, EnvError>;

    /// Execute one turn: apply the selected agent's `action`.
    ///
    /// `None` means "no action" and triggers the dead-agent transition
    /// for a terminated or truncated agent.
    fn step(&mut self, action: Option<ActionIndex>) -> Result<(), EnvError>;

    /// Render a human-readable view of the episode.
    ///
    /// Returns the rendered text in ANSI mode; in human mode the text
    /// goes to stdout and the call returns `None`.
    fn render(&mut self) -> Option<String>;
}
