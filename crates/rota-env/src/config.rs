//! Environment configuration and validation.

use rota_core::{AgentId, Info};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

// ── RenderMode ───────────────────────────────────────────────────

/// How [`render()`](rota_core::AecEnv::render) surfaces its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Return the rendered text to the caller.
    #[default]
    Ansi,
    /// Print the rendered text to stdout.
    Human,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi => write!(f, "ansi"),
            Self::Human => write!(f, "human"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ansi" => Ok(Self::Ansi),
            "human" => Ok(Self::Human),
            other => Err(ConfigError::UnknownRenderMode {
                value: other.to_string(),
            }),
        }
    }
}

// ── EnvConfig ────────────────────────────────────────────────────

/// Construction parameters for [`StaffingEnv`](crate::StaffingEnv).
///
/// # Examples
///
/// ```
/// use rota_env::EnvConfig;
///
/// let config = EnvConfig {
///     max_action_space_size: 100,
///     eps_end_timestep: 5,
///     ..EnvConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// Action capacity: how many staff are eligible for assignment at
    /// any point in time. Doubles as the staff capacity of the
    /// observation space.
    pub max_action_space_size: u32,
    /// Episode length: every agent terminates once the step counter
    /// reaches a multiple of this.
    pub eps_end_timestep: u64,
    /// Render output channel.
    pub render_mode: RenderMode,
    /// Name of the acting agent.
    pub agent: AgentId,
    /// Seed for the internal random source. `reset` with an explicit
    /// seed overrides it for the remainder of the run.
    pub seed: u64,
    /// Open-ended pass-through options, untouched by the scaffold.
    pub options: Info,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_action_space_size: 100,
            eps_end_timestep: 100,
            render_mode: RenderMode::default(),
            agent: AgentId::from("HR_1"),
            seed: 0,
            options: Info::new(),
        }
    }
}

impl EnvConfig {
    /// Check structural invariants at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_action_space_size == 0 {
            return Err(ConfigError::ZeroActionCapacity);
        }
        if self.eps_end_timestep == 0 {
            return Err(ConfigError::ZeroEpisodeLength);
        }
        if self.agent.is_empty() {
            return Err(ConfigError::EmptyAgentName);
        }
        Ok(())
    }
}

// ── ConfigError ──────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_action_space_size` is zero.
    ZeroActionCapacity,
    /// `eps_end_timestep` is zero.
    ZeroEpisodeLength,
    /// The agent name is empty.
    EmptyAgentName,
    /// The render mode string is not one of `ansi` / `human`.
    UnknownRenderMode {
        /// The unrecognized value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroActionCapacity => {
                write!(f, "max_action_space_size must be a positive integer")
            }
            Self::ZeroEpisodeLength => {
                write!(f, "eps_end_timestep must be a positive integer")
            }
            Self::EmptyAgentName => write!(f, "agent name must not be empty"),
            Self::UnknownRenderMode { value } => {
                write!(f, "unknown render mode '{value}' (expected 'ansi' or 'human')")
            }
        }
    }
}

impl Error for ConfigError {}
