//! Call-order enforcement for the environment lifecycle.

use rota_core::{ActionIndex, AecEnv, AgentId, AgentRecord, EnvError, Info, StepCount};
use rota_spaces::{Space, Value};

/// Rejects lifecycle calls made in the wrong order.
///
/// - [`step()`](AecEnv::step) or [`observe()`](AecEnv::observe) before
///   the first [`reset()`](AecEnv::reset) →
///   [`EnvError::ResetRequired`];
/// - [`step()`](AecEnv::step) after every agent has retired, without an
///   intervening reset → [`EnvError::EpisodeOver`];
/// - [`render()`](AecEnv::render) before the first reset returns
///   `None` (the render channel has no error path).
#[derive(Debug)]
pub struct OrderEnforcing<E: AecEnv> {
    inner: E,
    has_reset: bool,
}

impl<E: AecEnv> OrderEnforcing<E> {
    /// Wrap `inner` with call-order enforcement.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            has_reset: false,
        }
    }

    /// Borrow the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap, discarding the order enforcement.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: AecEnv> AecEnv for OrderEnforcing<E> {
    fn possible_agents(&self) -> &[AgentId] {
        self.inner.possible_agents()
    }

    fn agents(&self) -> &[AgentId] {
        self.inner.agents()
    }

    fn agent_selection(&self) -> Option<&AgentId> {
        self.inner.agent_selection()
    }

    fn observation_space(&self, agent: &str) -> Option<&Space> {
        self.inner.observation_space(agent)
    }

    fn action_space(&self, agent: &str) -> Option<&Space> {
        self.inner.action_space(agent)
    }

    fn record(&self, agent: &str) -> Option<&AgentRecord> {
        self.inner.record(agent)
    }

    fn step_count(&self) -> StepCount {
        self.inner.step_count()
    }

    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>) {
        self.has_reset = true;
        self.inner.reset(seed, options);
    }

    fn observe(&mut self, agent: &str) -> Result<Value, EnvError> {
        if !self.has_reset {
            return Err(EnvError::ResetRequired { call: "observe" });
        }
        self.inner.observe(agent)
    }

    fn step(&mut self, action: Option<ActionIndex>) -> Result<(), EnvError> {
        if !self.has_reset {
            return Err(EnvError::ResetRequired { call: "step" });
        }
        if self.inner.agents().is_empty() {
            return Err(EnvError::EpisodeOver);
        }
        self.inner.step(action)
    }

    fn render(&mut self) -> Option<String> {
        if !self.has_reset {
            return None;
        }
        self.inner.render()
    }
}
