//! Test utilities for Rota development.
//!
//! Provides [`ScriptedEnv`], a minimal hand-driven environment with a
//! call log, for exercising compliance wrappers without the full
//! staffing environment.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rota_core::{
    ActionIndex, AecEnv, AgentId, AgentRecord, EnvError, EpisodeState, Info, StepCount,
    TurnSelector,
};
use rota_spaces::{BoxSpace, Discrete, Space, Value};

/// A minimal scripted environment.
///
/// Terminates every agent once the step counter reaches `episode_len`,
/// credits one reward unit per step, and records every trait call in
/// [`calls`](ScriptedEnv::calls) so wrapper tests can assert exactly
/// which calls reached the inner environment.
pub struct ScriptedEnv {
    possible_agents: Vec<AgentId>,
    observation_space: Space,
    action_space: Space,
    episode_len: u64,
    state: EpisodeState,
    selector: TurnSelector,
    selection: Option<AgentId>,
    rng: ChaCha8Rng,
    /// Names of the trait calls that reached this environment, in order.
    pub calls: Vec<&'static str>,
}

impl ScriptedEnv {
    /// A scripted environment with `agent_count` agents named
    /// `A0, A1, …`, `capacity` discrete actions, and the given episode
    /// length.
    pub fn new(agent_count: usize, capacity: u32, episode_len: u64) -> Self {
        let possible_agents: Vec<AgentId> = (0..agent_count)
            .map(|i| AgentId::from(format!("A{i}")))
            .collect();
        let state = EpisodeState::new(&possible_agents);
        let mut selector = TurnSelector::new(&possible_agents);
        let selection = selector.reset();
        Self {
            possible_agents,
            observation_space: Space::Box(BoxSpace::unit_vector(4)),
            action_space: Space::Discrete(Discrete { n: capacity }),
            episode_len,
            state,
            selector,
            selection,
            rng: ChaCha8Rng::seed_from_u64(0),
            calls: Vec::new(),
        }
    }

    /// How many times `name` reached this environment.
    pub fn call_count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| **c == name).count()
    }
}

impl AecEnv for ScriptedEnv {
    fn possible_agents(&self) -> &[AgentId] {
        &self.possible_agents
    }

    fn agents(&self) -> &[AgentId] {
        self.state.agents()
    }

    fn agent_selection(&self) -> Option<&AgentId> {
        self.selection.as_ref()
    }

    fn observation_space(&self, _agent: &str) -> Option<&Space> {
        Some(&self.observation_space)
    }

    fn action_space(&self, _agent: &str) -> Option<&Space> {
        Some(&self.action_space)
    }

    fn record(&self, agent: &str) -> Option<&AgentRecord> {
        self.state.record(agent)
    }

    fn step_count(&self) -> StepCount {
        self.state.step_count()
    }

    fn reset(&mut self, seed: Option<u64>, _options: Option<&Info>) {
        self.calls.push("reset");
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.state.restore(&self.possible_agents);
        self.selector.reinit(&self.possible_agents);
        self.selection = self.selector.reset();
    }

    fn observe(&mut self, agent: &str) -> Result<Value, EnvError> {
        self.calls.push("observe");
        if !self.possible_agents.iter().any(|a| a.as_str() == agent) {
            return Err(EnvError::UnknownAgent {
                name: agent.to_string(),
            });
        }
        Ok(self.observation_space.sample(&mut self.rng))
    }

    fn step(&mut self, action: Option<ActionIndex>) -> Result<(), EnvError> {
        self.calls.push("step");
        let Some(agent) = self.selection.clone() else {
            return Ok(());
        };
        let done = self
            .state
            .record(agent.as_str())
            .map(|record| record.status.is_done())
            .unwrap_or(true);

        if done || action.is_none() {
            self.state.clear_step_rewards();
            if done {
                self.state.remove(agent.as_str());
                self.selector.reinit(self.state.agents());
                self.selection = self.selector.reset();
            } else {
                self.selection = self.selector.next();
            }
            return Ok(());
        }

        self.state.bump_step();
        self.state.clear_step_rewards();
        if let Some(record) = self.state.record_mut(agent.as_str()) {
            record.reward = 1.0;
        }
        if self.state.step_count().at_multiple_of(self.episode_len) {
            self.state.terminate_all();
        }
        self.state.accumulate_rewards();
        self.selection = self.selector.next();
        Ok(())
    }

    fn render(&mut self) -> Option<String> {
        self.calls.push("render");
        Some(format!("step {}", self.state.step_count()))
    }
}

/// Build an agent-keyed map from `(name, value)` pairs, for concise
/// test setup.
pub fn agent_map<V>(pairs: impl IntoIterator<Item = (&'static str, V)>) -> IndexMap<AgentId, V> {
    pairs
        .into_iter()
        .map(|(name, value)| (AgentId::from(name), value))
        .collect()
}
