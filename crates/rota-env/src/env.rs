//! The staffing environment state machine.

use crate::config::{ConfigError, EnvConfig, RenderMode};
use crate::factory;
use crate::staff::StaffDirectory;
use crate::transition::PlaceholderMove;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rota_core::{
    ActionIndex, AecEnv, AgentId, EnvError, EpisodeState, Info, StepCount, Transition,
    TurnSelector,
};
use rota_spaces::{Space, Value};

/// Number of placeholder staff rows seeded at construction.
const PLACEHOLDER_STAFF_ROWS: usize = 10;

/// A turn-based staffing environment.
///
/// Simulates using RL to move staff around an organization in an
/// optimal manner — reduced to its barebones lifecycle. The observation
/// and action shapes are the real contract; world mutation is delegated
/// to a [`Transition`] defaulting to [`PlaceholderMove`], and
/// observations are fresh samples from the declared space, a stand-in
/// for extraction from real simulation state.
///
/// The environment itself performs no call validation (garbage in,
/// garbage out); compose it with the `rota-wrappers` chain for bounds
/// and call-order enforcement.
///
/// # Ownership model
///
/// `StaffingEnv` is `Send` but owns all of its episode state; all
/// mutation goes through `&mut self` methods, so no synchronization is
/// involved anywhere.
///
/// # Examples
///
/// ```
/// use rota_core::AecEnv;
/// use rota_env::{EnvConfig, StaffingEnv};
///
/// let mut env = StaffingEnv::new(EnvConfig {
///     max_action_space_size: 100,
///     eps_end_timestep: 5,
///     ..EnvConfig::default()
/// })
/// .unwrap();
///
/// env.reset(Some(42), None);
/// for _ in 0..5 {
///     env.step(Some(3)).unwrap();
/// }
/// assert_eq!(env.step_count().0, 5);
/// assert!(env.record("HR_1").unwrap().termination());
/// ```
pub struct StaffingEnv {
    config: EnvConfig,
    possible_agents: Vec<AgentId>,
    observation_spaces: IndexMap<AgentId, Space>,
    action_spaces: IndexMap<AgentId, Space>,
    staff: StaffDirectory,
    state: EpisodeState,
    selector: TurnSelector,
    selection: Option<AgentId>,
    transition: Box<dyn Transition>,
    rng: ChaCha8Rng,
}

impl StaffingEnv {
    /// Build an environment from a validated configuration.
    ///
    /// Declares each agent's observation and action space once, seeds
    /// the internal random source from `config.seed`, and starts with
    /// every possible agent live.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let possible_agents = vec![config.agent.clone()];
        let capacity = config.max_action_space_size;
        let observation_spaces = possible_agents
            .iter()
            .map(|agent| (agent.clone(), factory::observation_space(capacity)))
            .collect();
        let action_spaces = possible_agents
            .iter()
            .map(|agent| (agent.clone(), factory::action_space(capacity)))
            .collect();

        let state = EpisodeState::new(&possible_agents);
        let mut selector = TurnSelector::new(&possible_agents);
        let selection = selector.reset();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            possible_agents,
            observation_spaces,
            action_spaces,
            staff: StaffDirectory::placeholder(PLACEHOLDER_STAFF_ROWS),
            state,
            selector,
            selection,
            transition: Box::new(PlaceholderMove::default()),
            rng,
        })
    }

    /// Replace the world-mutation extension point.
    pub fn with_transition(mut self, transition: Box<dyn Transition>) -> Self {
        self.transition = transition;
        self
    }

    /// The configuration this environment was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The staff records backing the simulation.
    pub fn staff(&self) -> &StaffDirectory {
        &self.staff
    }

    /// Retire a dead agent, or skip the turn when no action was given
    /// for a live one. The step counter is untouched either way.
    fn dead_step(&mut self, agent: &AgentId, done: bool) {
        self.state.clear_step_rewards();
        if done {
            self.state.remove(agent.as_str());
            self.selector.reinit(self.state.agents());
            self.selection = self.selector.reset();
        } else {
            self.selection = self.selector.next();
        }
    }

    fn status_line(&self) -> String {
        let selected = self
            .selection
            .as_ref()
            .map(AgentId::as_str)
            .unwrap_or("-");
        format!(
            "step {} | live agents {} | selected {}",
            self.state.step_count(),
            self.state.agents().len(),
            selected
        )
    }
}

impl AecEnv for StaffingEnv {
    fn possible_agents(&self) -> &[AgentId] {
        &self.possible_agents
    }

    fn agents(&self) -> &[AgentId] {
        self.state.agents()
    }

    fn agent_selection(&self) -> Option<&AgentId> {
        self.selection.as_ref()
    }

    fn observation_space(&self, agent: &str) -> Option<&Space> {
        self.observation_spaces.get(agent)
    }

    fn action_space(&self, agent: &str) -> Option<&Space> {
        self.action_spaces.get(agent)
    }

    fn record(&self, agent: &str) -> Option<&rota_core::AgentRecord> {
        self.state.record(agent)
    }

    fn step_count(&self) -> StepCount {
        self.state.step_count()
    }

    fn reset(&mut self, seed: Option<u64>, _options: Option<&Info>) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.state.restore(&self.possible_agents);
        self.selector.reinit(&self.possible_agents);
        self.selection = self.selector.reset();
    }

    fn observe(&mut self, agent: &str) -> Result<Value, EnvError> {
        let space = self
            .observation_spaces
            .get(agent)
            .ok_or_else(|| EnvError::UnknownAgent {
                name: agent.to_string(),
            })?;
        Ok(space.sample(&mut self.rng))
    }

    fn step(&mut self, action: Option<ActionIndex>) -> Result<(), EnvError> {
        let Some(agent) = self.selection.clone() else {
            // Every agent has retired; nothing to do until reset.
            return Ok(());
        };
        let done = self
            .state
            .record(agent.as_str())
            .map(|record| record.status.is_done())
            .unwrap_or(true);

        let action = match action {
            Some(action) if !done => action,
            _ => {
                self.dead_step(&agent, done);
                return Ok(());
            }
        };

        // Step incremented whether or not the action moves anyone.
        self.state.bump_step();
        self.state.clear_step_rewards();

        let reward = self
            .transition
            .apply(&agent, action, &mut self.rng)
            .map_err(EnvError::Transition)?;
        if let Some(record) = self.state.record_mut(agent.as_str()) {
            record.reward += reward;
        }

        if self
            .state
            .step_count()
            .at_multiple_of(self.config.eps_end_timestep)
        {
            self.state.terminate_all();
        }

        // The acting agent's accumulation restarts from this step.
        if let Some(record) = self.state.record_mut(agent.as_str()) {
            record.cumulative_reward = 0.0;
        }
        self.state.accumulate_rewards();

        self.selection = self.selector.next();
        Ok(())
    }

    fn render(&mut self) -> Option<String> {
        let line = self.status_line();
        match self.config.render_mode {
            RenderMode::Ansi => Some(line),
            RenderMode::Human => {
                println!("{line}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::TransitionError;

    fn env(eps_end: u64) -> StaffingEnv {
        StaffingEnv::new(EnvConfig {
            max_action_space_size: 8,
            eps_end_timestep: eps_end,
            ..EnvConfig::default()
        })
        .unwrap()
    }

    struct FailingMove;

    impl Transition for FailingMove {
        fn name(&self) -> &str {
            "failing_move"
        }

        fn apply(
            &mut self,
            _agent: &AgentId,
            _action: ActionIndex,
            _rng: &mut dyn rand::rand_core::RngCore,
        ) -> Result<f64, TransitionError> {
            Err(TransitionError::Failed {
                reason: "roster database unavailable".to_string(),
            })
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = StaffingEnv::new(EnvConfig {
            max_action_space_size: 0,
            ..EnvConfig::default()
        });
        assert!(matches!(err, Err(ConfigError::ZeroActionCapacity)));
    }

    #[test]
    fn seeded_observation_streams_are_identical() {
        let mut a = env(10);
        let mut b = env(10);
        a.reset(Some(7), None);
        b.reset(Some(7), None);
        for _ in 0..3 {
            assert_eq!(a.observe("HR_1").unwrap(), b.observe("HR_1").unwrap());
        }
    }

    #[test]
    fn reset_without_seed_keeps_the_stream() {
        let mut env = env(10);
        env.reset(Some(7), None);
        let first = env.observe("HR_1").unwrap();
        env.reset(None, None);
        let second = env.observe("HR_1").unwrap();
        // Still advancing the same stream, not restarting it.
        assert_ne!(first, second);
    }

    #[test]
    fn observe_unknown_agent_is_rejected() {
        let mut env = env(10);
        env.reset(None, None);
        assert_eq!(
            env.observe("HR_9"),
            Err(EnvError::UnknownAgent {
                name: "HR_9".to_string()
            })
        );
    }

    #[test]
    fn acting_agent_accumulates_current_step_reward() {
        let mut env = env(10);
        env.reset(None, None);
        env.step(Some(0)).unwrap();
        let record = env.record("HR_1").unwrap();
        assert_eq!(record.reward, 1.0);
        assert_eq!(record.cumulative_reward, 1.0);
        env.step(Some(1)).unwrap();
        // Accumulation restarts at each of the agent's own turns.
        assert_eq!(env.record("HR_1").unwrap().cumulative_reward, 1.0);
    }

    #[test]
    fn dead_step_retires_terminated_agent() {
        let mut env = env(2);
        env.reset(None, None);
        env.step(Some(0)).unwrap();
        env.step(Some(0)).unwrap();
        assert!(env.record("HR_1").unwrap().termination());

        env.step(None).unwrap();
        assert!(env.agents().is_empty());
        assert_eq!(env.agent_selection(), None);
        assert_eq!(env.step_count(), StepCount(2));

        // Further steps are inert until reset.
        env.step(Some(3)).unwrap();
        assert_eq!(env.step_count(), StepCount(2));
    }

    #[test]
    fn none_action_on_live_agent_skips_the_turn() {
        let mut env = env(10);
        env.reset(None, None);
        env.step(None).unwrap();
        assert_eq!(env.step_count(), StepCount::ZERO);
        assert_eq!(env.agents().len(), 1);
        assert!(!env.record("HR_1").unwrap().status.is_done());
    }

    #[test]
    fn transition_failure_surfaces() {
        let mut env = env(10).with_transition(Box::new(FailingMove));
        env.reset(None, None);
        let err = env.step(Some(0)).unwrap_err();
        assert!(matches!(err, EnvError::Transition(_)));
    }

    #[test]
    fn render_ansi_reports_progress() {
        let mut env = env(10);
        env.reset(None, None);
        env.step(Some(0)).unwrap();
        let line = env.render().unwrap();
        assert!(line.contains("step 1"));
        assert!(line.contains("HR_1"));
    }
}
