//! Engine configuration.
//!
//! Two historical variants of the calculator disagreed on how many biologic
//! administrations to project and which patterns exist. Both survive as
//! presets of one `EngineConfig`; `detailed()` is the default.

use serde::{Deserialize, Serialize};

use crate::schedule::PatternSet;

/// Event cap of the detailed preset.
pub const DETAILED_EVENT_CAP: usize = 10;

/// Event cap of the simple preset.
pub const SIMPLE_EVENT_CAP: usize = 6;

/// Largest event cap an engine accepts. Keeps every projection bounded.
pub const MAX_EVENT_CAP: usize = DETAILED_EVENT_CAP;

/// Behavioural switches for one `CostProjector`.
///
/// In TOML:
/// ```toml
/// [engine]
/// event_cap = 6
/// pattern_set = "default-only"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Total administrations a schedule may contain. Generation stops exactly here.
    pub event_cap: usize,
    pub pattern_set: PatternSet,
}

impl EngineConfig {
    /// Ten events, all four dosing patterns.
    pub fn detailed() -> Self {
        Self {
            event_cap: DETAILED_EVENT_CAP,
            pattern_set: PatternSet::Full,
        }
    }

    /// Six events, family defaults only.
    pub fn simple() -> Self {
        Self {
            event_cap: SIMPLE_EVENT_CAP,
            pattern_set: PatternSet::DefaultOnly,
        }
    }

    /// True when `event_cap` lies in `1..=MAX_EVENT_CAP`.
    pub fn has_valid_event_cap(&self) -> bool {
        (1..=MAX_EVENT_CAP).contains(&self.event_cap)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::detailed()
    }
}
