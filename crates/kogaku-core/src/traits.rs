//! Trait definitions for the KOGAKU projection pipeline.
//!
//! - `DrugCatalog`     — read-only price list for maintenance drugs and biologics
//! - `CapSchedule`     — read-only income-tier cap table
//! - `DosingScheduler` — turns a biologic and a pattern into administrations
//!
//! All three are shared across concurrent projections, so implementations
//! must not mutate state behind `&self`.

use chrono::NaiveDate;

use kogaku_contracts::{
    catalog::{BiologicEntry, CapTierEntry, DrugCategory, DrugCategoryEntry, IncomeTier},
    error::KogakuResult,
    schedule::{AdministrationEvent, DosingPattern},
};

/// The pricing catalog.
pub trait DrugCatalog: Send + Sync {
    /// All entries of a maintenance category, in declaration order.
    fn entries(&self, category: DrugCategory) -> &[DrugCategoryEntry];

    /// Look up a biologic by name.
    ///
    /// Returns `KogakuError::UnknownDrug` when the name is not listed.
    fn biologic(&self, name: &str) -> KogakuResult<&BiologicEntry>;
}

/// The cap table.
pub trait CapSchedule: Send + Sync {
    /// Look up the caps for an income tier.
    ///
    /// Returns `KogakuError::UnknownIncomeTier` when the tier has no row.
    fn tier(&self, tier: &IncomeTier) -> KogakuResult<&CapTierEntry>;
}

/// The dosing schedule generator.
///
/// Implementations must be deterministic: identical arguments always produce
/// an identical, date-ordered sequence of at most `event_cap` events.
pub trait DosingScheduler: Send + Sync {
    fn generate(
        &self,
        drug: &BiologicEntry,
        start: NaiveDate,
        pattern: DosingPattern,
        event_cap: usize,
    ) -> KogakuResult<Vec<AdministrationEvent>>;
}
