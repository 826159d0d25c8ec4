//! The KOGAKU projector: runs one cost projection end to end.
//!
//!   Cap lookup → Biologic lookup → Maintenance → Pattern → Schedule → Aggregate → Compare
//!
//! Both lookups run before any calculation, so a request with an unknown tier
//! or biologic fails without touching the scheduler.

use std::sync::Arc;

use tracing::{debug, info};

use kogaku_contracts::{
    config::{EngineConfig, MAX_EVENT_CAP},
    error::{KogakuError, KogakuResult},
    projection::{ProjectionReport, ProjectionRequest},
    schedule::DosingPattern,
};

use crate::{
    aggregate::aggregate_monthly,
    compare::{first_frequent_month, first_month_diff},
    maintenance::calculate_maintenance,
    traits::{CapSchedule, DosingScheduler, DrugCatalog},
};

/// Runs projections against one catalog, cap table, and scheduler.
///
/// Holds only read-only data, so one projector can serve concurrent requests.
pub struct CostProjector {
    catalog: Arc<dyn DrugCatalog>,
    caps: Arc<dyn CapSchedule>,
    scheduler: Box<dyn DosingScheduler>,
    config: EngineConfig,
}

impl CostProjector {
    pub fn new(
        catalog: Arc<dyn DrugCatalog>,
        caps: Arc<dyn CapSchedule>,
        scheduler: Box<dyn DosingScheduler>,
        config: EngineConfig,
    ) -> Self {
        Self { catalog, caps, scheduler, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Project the out-of-pocket cost of switching to a biologic.
    ///
    /// # Errors
    ///
    /// `ConfigError` when the event cap is out of range, `UnknownIncomeTier`
    /// and `UnknownDrug` when a lookup key is missing, and
    /// whatever the scheduler returns. Bad puff counts and pattern names are
    /// not errors; they fall back to defaults.
    pub fn project(&self, request: &ProjectionRequest) -> KogakuResult<ProjectionReport> {
        debug!(
            income_tier = %request.income_tier,
            biologic = %request.biologic,
            start = %request.start_date,
            pattern = %request.pattern,
            "projection starting"
        );

        if !self.config.has_valid_event_cap() {
            return Err(KogakuError::ConfigError {
                reason: format!(
                    "engine event_cap {} is outside 1..={}",
                    self.config.event_cap, MAX_EVENT_CAP
                ),
            });
        }

        let tier = self.caps.tier(&request.income_tier)?;
        let drug = self.catalog.biologic(&request.biologic)?;

        let maintenance = calculate_maintenance(self.catalog.as_ref(), &request.maintenance);

        let pattern = DosingPattern::resolve(drug.family, &request.pattern, self.config.pattern_set);
        if DosingPattern::parse_name(&request.pattern) != Some(pattern) {
            debug!(
                requested = %request.pattern,
                resolved = %pattern,
                "dosing pattern fell back to family default"
            );
        }

        let events = self
            .scheduler
            .generate(drug, request.start_date, pattern, self.config.event_cap)?;
        let monthly = aggregate_monthly(&events, drug.unit_price, tier);

        let diff = first_month_diff(&maintenance, &monthly);
        let first_frequent = first_frequent_month(&monthly);

        info!(
            biologic = %drug.name,
            %pattern,
            events = events.len(),
            months = monthly.len(),
            maintenance_total = maintenance.total,
            diff,
            "projection complete"
        );

        Ok(ProjectionReport {
            income_tier: request.income_tier.clone(),
            biologic: drug.name.clone(),
            pattern,
            maintenance,
            monthly,
            diff,
            first_frequent,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
