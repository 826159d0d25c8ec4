//! # kogaku-catalog
//!
//! The pricing catalog and cap table of the KOGAKU engine, read from TOML.
//!
//! ## Overview
//!
//! [`PricingCatalog`] implements both
//! [`DrugCatalog`](kogaku_core::traits::DrugCatalog) and
//! [`CapSchedule`](kogaku_core::traits::CapSchedule). It is loaded once,
//! validated, and shared read-only by every projection.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kogaku_catalog::PricingCatalog;
//!
//! let catalog = Arc::new(PricingCatalog::builtin()?);
//! // Pass `catalog` to `kogaku_core::CostProjector::new(...)` twice.
//! ```
//!
//! ## File layout
//!
//! One array of tables per category: `cap_tiers`, `fixed_inhalants`,
//! `variable_inhalants`, `addon_inhalants`, `oral_drugs`, `biologics`, and an
//! optional `[engine]` table. Declaration order is kept.

pub mod loader;
pub mod schema;

pub use loader::PricingCatalog;
pub use schema::{CatalogFile, DrugRow};

// ── Tests ─────────────────────────────────────────────────────────────────────
