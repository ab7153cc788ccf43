//! Runtime configuration read from environment variables.
//!
//! - `GRID_CHASE_SEED`: Layout seed (default: derived from the clock)
//! - `GRID_CHASE_TICK_MS`: Enemy step interval (default: 500)
//! - `GRID_CHASE_QUEUE`: Command queue capacity (default: 64)
//! - `GRID_CHASE_LOG`: Log file path (default: logging disabled)

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Default command queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub queue_capacity: usize,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            log_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("GRID_CHASE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("GRID_CHASE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let queue_capacity = lookup("GRID_CHASE_QUEUE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_QUEUE_CAPACITY)
            .max(1);

        let log_path = lookup("GRID_CHASE_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            queue_capacity,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_values() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("GRID_CHASE_SEED", "42"),
            ("GRID_CHASE_TICK_MS", "250"),
            ("GRID_CHASE_QUEUE", "8"),
            ("GRID_CHASE_LOG", " /tmp/grid-chase.log "),
        ]));

        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tick_ms, 250);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(250));
        assert_eq!(cfg.queue_capacity, 8);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/grid-chase.log"));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("GRID_CHASE_SEED", "7"),
            ("GRID_CHASE_TICK_MS", "fast"),
            ("GRID_CHASE_QUEUE", "-3"),
            ("GRID_CHASE_LOG", "   "),
        ]));

        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn zero_values_are_clamped() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("GRID_CHASE_SEED", "1"),
            ("GRID_CHASE_TICK_MS", "0"),
            ("GRID_CHASE_QUEUE", "0"),
        ]));

        assert_eq!(cfg.tick_ms, 1);
        assert_eq!(cfg.queue_capacity, 1);
    }
}
