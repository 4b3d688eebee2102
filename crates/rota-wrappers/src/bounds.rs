//! Out-of-bounds action assertion for discrete action spaces.

use rota_core::{ActionIndex, AecEnv, AgentId, AgentRecord, EnvError, Info, StepCount};
use rota_spaces::{Space, Value};

/// Rejects malformed actions before they reach the inner environment.
///
/// Two invariants, checked against the currently selected agent:
///
/// - a terminated or truncated agent only accepts `None`
///   ([`EnvError::DeadAgentAction`] otherwise);
/// - a live agent's action must lie in `[0, capacity)` of its discrete
///   action space ([`EnvError::ActionOutOfBounds`] otherwise).
///
/// Only discrete action spaces are supported; anything else is
/// rejected with [`EnvError::UnsupportedActionSpace`].
#[derive(Debug)]
pub struct AssertOutOfBounds<E: AecEnv> {
    inner: E,
}

impl<E: AecEnv> AssertOutOfBounds<E> {
    /// Wrap `inner` with action bounds checking.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap, discarding the bounds checking.
    pub fn into_inner(self) -> E {
        self.inner
    }

    fn check(&self, action: Option<ActionIndex>) -> Result<(), EnvError> {
        let Some(agent) = self.inner.agent_selection() else {
            return Ok(());
        };
        let done = self
            .inner
            .record(agent.as_str())
            .map(|record| record.status.is_done())
            .unwrap_or(false);
        match action {
            None => Ok(()),
            Some(_) if done => Err(EnvError::DeadAgentAction {
                agent: agent.clone(),
            }),
            Some(action) => match self.inner.action_space(agent.as_str()) {
                Some(Space::Discrete(d)) if action < d.n => Ok(()),
                Some(Space::Discrete(d)) => Err(EnvError::ActionOutOfBounds {
                    action,
                    capacity: d.n,
                }),
                _ => Err(EnvError::UnsupportedActionSpace {
                    agent: agent.clone(),
                }),
            },
        }
    }
}

impl<E: AecEnv> AecEnv for AssertOutOfBounds<E> {
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
        self.inner.reset(seed, options);
    }

    fn observe(&mut self, agent: &str) -> Result<Value, EnvError> {
        self.inner.observe(agent)
    }

    fn step(&mut self, action: Option<ActionIndex>) -> Result<(), EnvError> {
        self.check(action)?;
        self.inner.step(action)
    }

    fn render(&mut self) -> Option<String> {
        self.inner.render()
    }
}
