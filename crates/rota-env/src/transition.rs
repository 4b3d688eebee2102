//! Default transition: no world mutation, fixed reward.

use rota_core::{ActionIndex, AgentId, Transition, TransitionError};
use rand::rand_core::RngCore;

/// The scaffold's stand-in for real assignment logic.
///
/// Accepts every action, mutates nothing, and credits a fixed reward
/// per step. Replace it via
/// [`StaffingEnv::with_transition`](crate::StaffingEnv::with_transition)
/// to plug in actual staff movement.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderMove {
    reward_per_step: f64,
}

impl PlaceholderMove {
    /// A placeholder crediting `reward_per_step` for every action.
    pub fn new(reward_per_step: f64) -> Self {
        Self { reward_per_step }
    }
}

impl Default for PlaceholderMove {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Transition for PlaceholderMove {
    fn name(&self) -> &str {
        "placeholder_move"
    }

    fn apply(
        &mut self,
        _agent: &AgentId,
        _action: ActionIndex,
        _rng: &mut dyn RngCore,
    ) -> Result<f64, TransitionError> {
        Ok(self.reward_per_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn placeholder_credits_fixed_reward() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let agent = AgentId::from("HR_1");
        let mut transition = PlaceholderMove::default();
        for action in [0, 3, 99] {
            assert_eq!(transition.apply(&agent, action, &mut rng), Ok(1.0));
        }
    }
}
