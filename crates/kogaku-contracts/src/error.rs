//! Error types for the KOGAKU cost projection engine.
//!
//! All fallible operations return `KogakuResult<T>`. Lenient inputs (puff
//! counts, pattern names) never reach this type; they fall back to defaults.

use chrono::NaiveDate;
use thiserror::Error;

/// The unified error type for the KOGAKU crates.
#[derive(Debug, Error)]
pub enum KogakuError {
    /// The catalog file is malformed or violates a load-time invariant.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The requested income tier has no row in the cap table.
    #[error("configuration error: income tier '{tier}' is not in the cap table")]
    UnknownIncomeTier { tier: String },

    /// The requested drug is not in the pricing catalog.
    #[error("configuration error: drug '{name}' is not in the pricing catalog")]
    UnknownDrug { name: String },

    /// An administration date fell outside the representable calendar.
    #[error("date out of range: {start} + {offset_days} days")]
    DateOutOfRange { start: NaiveDate, offset_days: u64 },

    /// The presentation layer handed over a request the engine cannot use.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// A finished report could not be written out.
    #[error("failed to render report: {reason}")]
    RenderFailed { reason: String },
}

/// Convenience alias used throughout the KOGAKU crates.
pub type KogakuResult<T> = Result<T, KogakuError>;
