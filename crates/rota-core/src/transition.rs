//! The pluggable world-mutation extension point.

use crate::error::TransitionError;
use crate::id::AgentId;
use crate::traits::ActionIndex;
use rand::rand_core::RngCore;

/// Applies an agent's action to the simulated world.
///
/// How an action changes world state is domain-specific and belongs to
/// the adopter; environments hold a `Box<dyn Transition>` and invoke it
/// once per successful step. The returned value is the reward earned by
/// the acting agent for this step.
///
/// # Contract
///
/// - `apply()` must be deterministic given the RNG stream.
/// - Transitions own whatever world state they mutate; the environment
///   only tracks the episode bookkeeping around them.
///
/// # Examples
///
/// A transition that rewards even-numbered assignments:
///
/// ```
/// use rota_core::{ActionIndex, AgentId, Transition, TransitionError};
/// use rand::rand_core::RngCore;
///
/// struct EvenBonus;
///
/// impl Transition for EvenBonus {
///     fn name(&self) -> &str { "even_bonus" }
///
///     fn apply(
///         &mut self,
///         _agent: &AgentId,
///         action: ActionIndex,
///         _rng: &mut dyn RngCore,
///     ) -> Result<f64, TransitionError> {
///         Ok(if action % 2 == 0 { 2.0 } else { 1.0 })
///     }
/// }
///
/// let mut t = EvenBonus;
/// assert_eq!(t.name(), "even_bonus");
/// ```
pub trait Transition: Send + 'static {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Apply `action` for `agent`, returning the step reward.
    fn apply(
        &mut self,
        agent: &AgentId,
        action: ActionIndex,
        rng: &mut dyn RngCore,
    ) -> Result<f64, TransitionError>;
}
