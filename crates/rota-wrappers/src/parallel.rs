//! Simultaneous-step adapter derived from the turn-based contract.

use indexmap::IndexMap;
use rota_core::{ActionIndex, AecEnv, AgentId, EnvError, Info, StepCount};
use rota_spaces::Value;

/// Result of one simultaneous step: post-cycle views keyed by the
/// agents that were live when the cycle began.
#[derive(Clone, Debug)]
pub struct ParallelStep {
    /// Fresh observations for each agent.
    pub observations: IndexMap<AgentId, Value>,
    /// Reward each agent earned during the cycle.
    pub rewards: IndexMap<AgentId, f64>,
    /// Termination flags after the cycle.
    pub terminations: IndexMap<AgentId, bool>,
    /// Truncation flags after the cycle.
    pub truncations: IndexMap<AgentId, bool>,
    /// Auxiliary metadata after the cycle.
    pub infos: IndexMap<AgentId, Info>,
}

/// Derives an "all agents act simultaneously" surface from any
/// turn-based environment.
///
/// [`step()`](ParallelAdapter::step) takes one action per live agent,
/// plays each agent's turn in roster order against the inner
/// environment, and reports the post-cycle episode state. Agents that
/// are already terminated or truncated are retired with the dead-step
/// call; everyone else must have an action in the map.
pub struct ParallelAdapter<E: AecEnv> {
    inner: E,
}

impl<E: AecEnv> ParallelAdapter<E> {
    /// Wrap a turn-based environment.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap back to the turn-based surface.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Every agent this environment can ever host.
    pub fn possible_agents(&self) -> &[AgentId] {
        self.inner.possible_agents()
    }

    /// The agents still live in the current episode.
    pub fn agents(&self) -> &[AgentId] {
        self.inner.agents()
    }

    /// Steps taken in the current episode.
    pub fn step_count(&self) -> StepCount {
        self.inner.step_count()
    }

    /// Reinitialize for a new episode and return each live agent's
    /// initial observation and info.
    #[allow(clippy::type_complexity)]
    pub fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> Result<(IndexMap<AgentId, Value>, IndexMap<AgentId, Info>), EnvError> {
        self.inner.reset(seed, options);
        let roster: Vec<AgentId> = self.inner.agents().to_vec();
        let mut observations = IndexMap::new();
        let mut infos = IndexMap::new();
        for agent in roster {
            let observation = self.inner.observe(agent.as_str())?;
            let info = self
                .inner
                .record(agent.as_str())
                .map(|record| record.info.clone())
                .unwrap_or_default();
            observations.insert(agent.clone(), observation);
            infos.insert(agent, info);
        }
        Ok((observations, infos))
    }

    /// Play one full cycle: every live agent acts once, in turn order.
    ///
    /// Returns [`EnvError::MissingAction`] if a live agent has no entry
    /// in `actions`; rejections from the inner wrapper chain surface
    /// unchanged.
    pub fn step(
        &mut self,
        actions: &IndexMap<AgentId, ActionIndex>,
    ) -> Result<ParallelStep, EnvError> {
        let roster: Vec<AgentId> = self.inner.agents().to_vec();
        let mut rewards: IndexMap<AgentId, f64> =
            roster.iter().map(|agent| (agent.clone(), 0.0)).collect();

        for _ in 0..roster.len() {
            let Some(selected) = self.inner.agent_selection().cloned() else {
                break;
            };
            let done = self
                .inner
                .record(selected.as_str())
                .map(|record| record.status.is_done())
                .unwrap_or(true);
            let action = if done {
                None
            } else {
                let action = actions.get(selected.as_str()).ok_or_else(|| {
                    EnvError::MissingAction {
                        agent: selected.clone(),
                    }
                })?;
                Some(*action)
            };
            self.inner.step(action)?;

            // Per-step rewards are cleared at each turn start, so each
            // turn contributes exactly once per agent.
            for (agent, reward) in rewards.iter_mut() {
                if let Some(record) = self.inner.record(agent.as_str()) {
                    *reward += record.reward;
                }
            }
        }

        let mut observations = IndexMap::new();
        let mut terminations = IndexMap::new();
        let mut truncations = IndexMap::new();
        let mut infos = IndexMap::new();
        for agent in &roster {
            match self.inner.record(agent.as_str()) {
                Some(record) => {
                    terminations.insert(agent.clone(), record.termination());
                    truncations.insert(agent.clone(), record.truncation());
                    infos.insert(agent.clone(), record.info.clone());
                }
                // Retired during the cycle: report the terminal view.
                None => {
                    terminations.insert(agent.clone(), true);
                    truncations.insert(agent.clone(), false);
                    infos.insert(agent.clone(), Info::new());
                }
            }
            observations.insert(agent.clone(), self.inner.observe(agent.as_str())?);
        }

        Ok(ParallelStep {
            observations,
            rewards,
            terminations,
            truncations,
            infos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_test_utils::{agent_map, ScriptedEnv};

    #[test]
    fn reset_returns_an_observation_per_agent() {
        let mut env = ParallelAdapter::new(ScriptedEnv::new(2, 4, 10));
        let (observations, infos) = env.reset(Some(0), None).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(infos.len(), 2);
        assert!(observations.contains_key("A0"));
        assert!(observations.contains_key("A1"));
    }

    #[test]
    fn one_call_steps_every_live_agent() {
        let mut env = ParallelAdapter::new(ScriptedEnv::new(2, 4, 10));
        env.reset(None, None).unwrap();
        let result = env.step(&agent_map([("A0", 1), ("A1", 2)])).unwrap();
        assert_eq!(env.step_count(), StepCount(2));
        assert_eq!(result.rewards["A0"], 1.0);
        assert_eq!(result.rewards["A1"], 1.0);
        assert!(!result.terminations["A0"]);
    }

    #[test]
    fn missing_action_for_live_agent_rejected() {
        let mut env = ParallelAdapter::new(ScriptedEnv::new(2, 4, 10));
        env.reset(None, None).unwrap();
        let err = env.step(&agent_map([("A0", 1)])).unwrap_err();
        assert!(matches!(err, EnvError::MissingAction { .. }));
    }

    #[test]
    fn terminated_cycle_reports_terminal_flags() {
        let mut env = ParallelAdapter::new(ScriptedEnv::new(2, 4, 2));
        env.reset(None, None).unwrap();
        let result = env.step(&agent_map([("A0", 0), ("A1", 0)])).unwrap();
        assert!(result.terminations["A0"]);
        assert!(result.terminations["A1"]);
        assert!(!result.truncations["A0"]);
    }
}
