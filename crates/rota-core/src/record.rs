//! Per-agent episode records and the episode state container.
//!
//! The framework contract surfaces four agent-keyed mappings (rewards,
//! terminations, truncations, infos). Rota folds them into one explicit
//! per-agent [`AgentRecord`] indexed by [`AgentId`], so the mappings can
//! never drift out of sync with each other or with the live roster.

use crate::id::{AgentId, StepCount};
use indexmap::IndexMap;

/// Open-ended auxiliary metadata attached to an agent for one episode.
pub type Info = IndexMap<String, String>;

// ── AgentStatus ──────────────────────────────────────────────────

/// Lifecycle state of a single agent within an episode.
///
/// Terminal states are sinks: once `Terminated` or `Truncated`, an
/// agent stays there until the next `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    /// The agent is live and may act.
    #[default]
    Active,
    /// The episode ended for this agent by the environment's own rule.
    Terminated,
    /// The episode was cut short externally (time limit, operator stop).
    ///
    /// Part of the contract surface; the staffing template never sets it.
    Truncated,
}

impl AgentStatus {
    /// Whether the agent has reached a terminal state.
    pub fn is_done(self) -> bool {
        !matches!(self, Self::Active)
    }
}

// ── AgentRecord ──────────────────────────────────────────────────

/// Episode bookkeeping for one agent.
///
/// # Examples
///
/// ```
/// use rota_core::{AgentRecord, AgentStatus};
///
/// let rec = AgentRecord::new();
/// assert_eq!(rec.reward, 0.0);
/// assert_eq!(rec.status, AgentStatus::Active);
/// assert!(!rec.termination());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentRecord {
    /// Reward earned in the current step (cleared at each step start).
    pub reward: f64,
    /// Reward accumulated since this agent last acted (the framework's
    /// `_cumulative_rewards` bookkeeping).
    pub cumulative_reward: f64,
    /// Lifecycle state.
    pub status: AgentStatus,
    /// Auxiliary metadata.
    pub info: Info,
}

impl AgentRecord {
    /// A fresh record: zero rewards, `Active`, empty info.
    pub fn new() -> Self {
        Self::default()
    }

    /// The framework's `terminations` flag for this agent.
    pub fn termination(&self) -> bool {
        self.status == AgentStatus::Terminated
    }

    /// The framework's `truncations` flag for this agent.
    pub fn truncation(&self) -> bool {
        self.status == AgentStatus::Truncated
    }
}

// ── EpisodeState ─────────────────────────────────────────────────

/// Mutable per-episode state: the live roster, one record per live
/// agent, and the step counter.
///
/// Invariant: the record key set is exactly the live roster, in roster
/// order, at all times. All mutation goes through methods that preserve
/// this.
///
/// # Examples
///
/// ```
/// use rota_core::{AgentId, EpisodeState, StepCount};
///
/// let roster = [AgentId::from("HR_1")];
/// let mut state = EpisodeState::new(&roster);
/// assert_eq!(state.step_count(), StepCount::ZERO);
/// assert_eq!(state.agents(), &roster);
///
/// state.bump_step();
/// assert_eq!(state.step_count(), StepCount(1));
/// ```
#[derive(Clone, Debug)]
pub struct EpisodeState {
    agents: Vec<AgentId>,
    records: IndexMap<AgentId, AgentRecord>,
    step_count: StepCount,
}

impl EpisodeState {
    /// Create episode state with every agent live and zeroed.
    pub fn new(agents: &[AgentId]) -> Self {
        let mut state = Self {
            agents: Vec::new(),
            records: IndexMap::new(),
            step_count: StepCount::ZERO,
        };
        state.restore(agents);
        state
    }

    /// Reinitialize for a new episode: restore the full roster, zero
    /// all rewards and the step counter, clear statuses and infos.
    pub fn restore(&mut self, possible_agents: &[AgentId]) {
        self.agents = possible_agents.to_vec();
        self.records = possible_agents
            .iter()
            .map(|agent| (agent.clone(), AgentRecord::new()))
            .collect();
        self.step_count = StepCount::ZERO;
        self.debug_check_keys();
    }

    /// The live roster, in turn order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    /// Whether any agents remain live.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Current step counter.
    pub fn step_count(&self) -> StepCount {
        self.step_count
    }

    /// Advance the step counter by one and return the new value.
    pub fn bump_step(&mut self) -> StepCount {
        self.step_count = self.step_count.next();
        self.step_count
    }

    /// Borrow one agent's record.
    pub fn record(&self, agent: &str) -> Option<&AgentRecord> {
        self.records.get(agent)
    }

    /// Mutably borrow one agent's record.
    pub fn record_mut(&mut self, agent: &str) -> Option<&mut AgentRecord> {
        self.records.get_mut(agent)
    }

    /// Iterate over `(agent, record)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &AgentRecord)> {
        self.records.iter()
    }

    /// Zero every agent's per-step reward.
    pub fn clear_step_rewards(&mut self) {
        for record in self.records.values_mut() {
            record.reward = 0.0;
        }
    }

    /// Roll per-step rewards into cumulative rewards.
    pub fn accumulate_rewards(&mut self) {
        for record in self.records.values_mut() {
            record.cumulative_reward += record.reward;
        }
    }

    /// Mark every live agent `Terminated` and replace its info with a
    /// fresh empty record.
    pub fn terminate_all(&mut self) {
        for record in self.records.values_mut() {
            record.status = AgentStatus::Terminated;
            record.info = Info::new();
        }
    }

    /// Retire an agent: drop it from the roster and its record with it.
    ///
    /// Returns `false` if the agent was not live. The step counter is
    /// untouched.
    pub fn remove(&mut self, agent: &str) -> bool {
        let Some(pos) = self.agents.iter().position(|a| a.as_str() == agent) else {
            return false;
        };
        self.agents.remove(pos);
        self.records.shift_remove(agent);
        self.debug_check_keys();
        true
    }

    fn debug_check_keys(&self) {
        debug_assert!(
            self.agents.len() == self.records.len()
                && self
                    .agents
                    .iter()
                    .zip(self.records.keys())
                    .all(|(a, k)| a == k),
            "record key set diverged from the live roster"
        );
    }
}
