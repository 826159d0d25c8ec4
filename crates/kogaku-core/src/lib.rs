//! # kogaku-core
//!
//! The calculators of the KOGAKU cost projection engine.
//!
//! This crate provides:
//! - The three seams (`DrugCatalog`, `CapSchedule`, `DosingScheduler`)
//! - The maintenance, monthly-cap, and comparison calculators
//! - The `CostProjector` that runs them in order for one request
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kogaku_core::{CostProjector, traits::{CapSchedule, DosingScheduler, DrugCatalog}};
//! ```

pub mod aggregate;
pub mod compare;
pub mod maintenance;
pub mod projector;
pub mod traits;

#[cfg(test)]
mod fixtures;

pub use projector::CostProjector;
