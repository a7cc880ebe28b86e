//! Runtime configuration for the order desk.

use tracing::warn;

/// Environment variable overriding [`DeskConfig::queue_capacity`].
pub const QUEUE_CAPACITY_ENV: &str = "TAKEAWAY_QUEUE_CAPACITY";

const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// Settings used when starting the [`TakeawaySystem`](super::TakeawaySystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Capacity of the desk's request channel. Callers wait when it is full.
    pub queue_capacity: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl DeskConfig {
    /// Reads overrides from the environment, keeping defaults for anything unset or invalid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(QUEUE_CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.queue_capacity = capacity,
                _ => warn!(
                    value = %raw,
                    default = config.queue_capacity,
                    "Ignoring invalid {QUEUE_CAPACITY_ENV}"
                ),
            }
        }
        config
    }
}
