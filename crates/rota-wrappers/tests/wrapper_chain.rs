//! Integration test: the full compliance chain around the staffing
//! environment.
//!
//! Composes `OrderEnforcing(AssertOutOfBounds(StaffingEnv))` the way
//! the facade entry point does, and verifies that each layer's
//! rejection leaves the inner episode untouched.

use rota_core::{AecEnv, EnvError, StepCount};
use rota_env::{EnvConfig, StaffingEnv};
use rota_test_utils::agent_map;
use rota_wrappers::{AssertOutOfBounds, OrderEnforcing, ParallelAdapter};

fn chain(capacity: u32, eps_end: u64) -> OrderEnforcing<AssertOutOfBounds<StaffingEnv>> {
    let raw = StaffingEnv::new(EnvConfig {
        max_action_space_size: capacity,
        eps_end_timestep: eps_end,
        ..EnvConfig::default()
    })
    .unwrap();
    OrderEnforcing::new(AssertOutOfBounds::new(raw))
}

#[test]
fn step_before_reset_is_rejected_by_the_outer_layer() {
    let mut env = chain(4, 10);
    assert_eq!(
        env.step(Some(0)),
        Err(EnvError::ResetRequired { call: "step" })
    );
    assert_eq!(env.step_count(), StepCount::ZERO);
}

#[test]
fn out_of_bounds_action_is_rejected_without_mutation() {
    let mut env = chain(4, 10);
    env.reset(Some(0), None);
    env.step(Some(1)).unwrap();

    assert_eq!(
        env.step(Some(9)),
        Err(EnvError::ActionOutOfBounds {
            action: 9,
            capacity: 4
        })
    );
    assert_eq!(env.step_count(), StepCount(1));
    assert_eq!(env.record("HR_1").unwrap().reward, 1.0);
}

#[test]
fn full_episode_through_the_chain() {
    let mut env = chain(100, 5);
    env.reset(Some(42), None);

    for k in 1..=5u64 {
        env.step(Some(3)).unwrap();
        assert_eq!(env.step_count(), StepCount(k));
    }
    assert!(env.record("HR_1").unwrap().termination());

    // Dead agent: only None is accepted, and it retires the agent.
    assert!(matches!(
        env.step(Some(3)),
        Err(EnvError::DeadAgentAction { .. })
    ));
    env.step(None).unwrap();
    assert!(env.agents().is_empty());

    // Episode over: steps are rejected until the next reset.
    assert_eq!(env.step(Some(3)), Err(EnvError::EpisodeOver));
    env.reset(None, None);
    assert_eq!(env.step_count(), StepCount::ZERO);
    assert!(env.step(Some(3)).is_ok());
}

#[test]
fn observation_stays_within_declared_bounds_through_the_chain() {
    let mut env = chain(16, 10);
    env.reset(Some(7), None);
    let space = env.observation_space("HR_1").unwrap().clone();
    for _ in 0..8 {
        let observation = env.observe("HR_1").unwrap();
        assert!(space.contains(&observation));
    }
}

#[test]
fn parallel_surface_derives_from_the_same_chain() {
    let mut env = ParallelAdapter::new(chain(8, 3));
    let (observations, _infos) = env.reset(Some(0), None).unwrap();
    assert_eq!(observations.len(), 1);

    for _ in 0..2 {
        let result = env.step(&agent_map([("HR_1", 2)])).unwrap();
        assert!(!result.terminations["HR_1"]);
    }
    let result = env.step(&agent_map([("HR_1", 2)])).unwrap();
    assert!(result.terminations["HR_1"]);
    assert_eq!(env.step_count(), StepCount(3));
}
