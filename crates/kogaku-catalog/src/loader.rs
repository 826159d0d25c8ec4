//! TOML-driven pricing catalog.
//!
//! `PricingCatalog` loads a `CatalogFile` from a TOML string or file,
//! validates it, and implements both `DrugCatalog` and `CapSchedule`.
//!
//! Load-time checks (all fail with `KogakuError::ConfigError`):
//!
//! 1. Every price and cap is positive, and `frequent_cap <= normal_cap`.
//! 2. Variable-puff rows carry `puffs_per_pack` only; all other maintenance
//!    rows carry `days_per_pack` only; either must be positive.
//! 3. Maintenance names are unique across all four maintenance categories,
//!    biologic names are unique, and income tiers are unique.
//! 4. The `[engine]` event cap lies in `1..=MAX_EVENT_CAP`.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info};

use kogaku_contracts::{
    catalog::{
        BiologicEntry, CapTierEntry, DosingUnit, DrugCategory, DrugCategoryEntry, IncomeTier,
    },
    config::{EngineConfig, MAX_EVENT_CAP},
    error::{KogakuError, KogakuResult},
};
use kogaku_core::traits::{CapSchedule, DrugCatalog};

use crate::schema::{CatalogFile, DrugRow};

/// The catalog shipped with the engine.
const DEFAULT_CATALOG: &str = include_str!("../catalog/default.toml");

/// A validated, immutable price list and cap table.
///
/// Construct via `builtin`, `from_toml_str`, or `from_file`, wrap in an `Arc`,
/// and hand it to `CostProjector::new` as both catalog and cap schedule.
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    engine: EngineConfig,
    cap_tiers: Vec<CapTierEntry>,
    fixed_inhalants: Vec<DrugCategoryEntry>,
    variable_inhalants: Vec<DrugCategoryEntry>,
    addon_inhalants: Vec<DrugCategoryEntry>,
    oral_drugs: Vec<DrugCategoryEntry>,
    biologics: Vec<BiologicEntry>,
}

impl PricingCatalog {
    /// Load the embedded default catalog.
    pub fn builtin() -> KogakuResult<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Parse `s` as TOML and validate it.
    ///
    /// Returns `KogakuError::ConfigError` if the TOML is malformed, does not
    /// match `CatalogFile`, or breaks a load-time check.
    pub fn from_toml_str(s: &str) -> KogakuResult<Self> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| KogakuError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::from_catalog_file(file)
    }

    /// Read the file at `path` and parse it as a catalog.
    pub fn from_file(path: &Path) -> KogakuResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| KogakuError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_catalog_file(file: CatalogFile) -> KogakuResult<Self> {
        // Selections are keyed by name alone, so maintenance names are
        // unique across every category.
        let mut names = HashSet::new();
        let catalog = Self {
            engine: validate_engine(file.engine)?,
            cap_tiers: validate_cap_tiers(file.cap_tiers)?,
            fixed_inhalants: validate_rows(
                DrugCategory::FixedInhalant,
                file.fixed_inhalants,
                &mut names,
            )?,
            variable_inhalants: validate_rows(
                DrugCategory::VariableInhalant,
                file.variable_inhalants,
                &mut names,
            )?,
            addon_inhalants: validate_rows(
                DrugCategory::AddonInhalant,
                file.addon_inhalants,
                &mut names,
            )?,
            oral_drugs: validate_rows(DrugCategory::OralDrug, file.oral_drugs, &mut names)?,
            biologics: validate_biologics(file.biologics)?,
        };

        info!(
            tiers = catalog.cap_tiers.len(),
            maintenance = DrugCategory::ORDER
                .iter()
                .map(|c| catalog.entries(*c).len())
                .sum::<usize>(),
            biologics = catalog.biologics.len(),
            event_cap = catalog.engine.event_cap,
            "pricing catalog loaded"
        );

        Ok(catalog)
    }

    /// The `[engine]` table of the catalog file, or the detailed preset.
    pub fn engine_config(&self) -> EngineConfig {
        self.engine
    }

    pub fn cap_tiers(&self) -> &[CapTierEntry] {
        &self.cap_tiers
    }

    pub fn biologics(&self) -> &[BiologicEntry] {
        &self.biologics
    }
}

impl DrugCatalog for PricingCatalog {
    fn entries(&self, category: DrugCategory) -> &[DrugCategoryEntry] {
        match category {
            DrugCategory::FixedInhalant => &self.fixed_inhalants,
            DrugCategory::VariableInhalant => &self.variable_inhalants,
            DrugCategory::AddonInhalant => &self.addon_inhalants,
            DrugCategory::OralDrug => &self.oral_drugs,
        }
    }

    fn biologic(&self, name: &str) -> KogakuResult<&BiologicEntry> {
        debug!(biologic = %name, "looking up biologic");
        self.biologics
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| KogakuError::UnknownDrug {
                name: name.to_string(),
            })
    }
}

impl CapSchedule for PricingCatalog {
    fn tier(&self, tier: &IncomeTier) -> KogakuResult<&CapTierEntry> {
        debug!(income_tier = %tier, "looking up cap tier");
        self.cap_tiers
            .iter()
            .find(|t| &t.income_tier == tier)
            .ok_or_else(|| KogakuError::UnknownIncomeTier {
                tier: tier.0.clone(),
            })
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn config_error(reason: String) -> KogakuError {
    KogakuError::ConfigError { reason }
}

fn validate_engine(engine: EngineConfig) -> KogakuResult<EngineConfig> {
    if !engine.has_valid_event_cap() {
        return Err(config_error(format!(
            "engine event_cap {} is outside 1..={}",
            engine.event_cap, MAX_EVENT_CAP
        )));
    }
    Ok(engine)
}

fn validate_cap_tiers(tiers: Vec<CapTierEntry>) -> KogakuResult<Vec<CapTierEntry>> {
    let mut seen = HashSet::new();
    for tier in &tiers {
        if !seen.insert(tier.income_tier.clone()) {
            return Err(config_error(format!(
                "income tier '{}' is listed more than once",
                tier.income_tier
            )));
        }
        if tier.normal_cap == 0 || tier.frequent_cap == 0 {
            return Err(config_error(format!(
                "income tier '{}' has a zero cap",
                tier.income_tier
            )));
        }
        if tier.frequent_cap > tier.normal_cap {
            return Err(config_error(format!(
                "income tier '{}' has frequent_cap {} above normal_cap {}",
                tier.income_tier, tier.frequent_cap, tier.normal_cap
            )));
        }
    }
    Ok(tiers)
}

fn validate_rows(
    category: DrugCategory,
    rows: Vec<DrugRow>,
    seen: &mut HashSet<String>,
) -> KogakuResult<Vec<DrugCategoryEntry>> {
    let mut entries = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen.insert(row.name.clone()) {
            return Err(config_error(format!(
                "maintenance drug '{}' is listed more than once (again in {})",
                row.name,
                category.label()
            )));
        }
        if row.unit_price == 0 {
            return Err(config_error(format!("'{}' has a zero unit_price", row.name)));
        }

        let dosing_unit = match (category, row.days_per_pack, row.puffs_per_pack) {
            (DrugCategory::VariableInhalant, None, Some(puffs)) if puffs > 0 => {
                DosingUnit::PuffsPerPack(puffs)
            }
            (DrugCategory::VariableInhalant, _, _) => {
                return Err(config_error(format!(
                    "'{}' must set a positive puffs_per_pack and no days_per_pack",
                    row.name
                )));
            }
            (_, Some(days), None) if days > 0 => DosingUnit::DaysPerPack(days),
            _ => {
                return Err(config_error(format!(
                    "'{}' must set a positive days_per_pack and no puffs_per_pack",
                    row.name
                )));
            }
        };

        entries.push(DrugCategoryEntry {
            name: row.name,
            unit_price: row.unit_price,
            dosing_unit,
        });
    }

    Ok(entries)
}

fn validate_biologics(biologics: Vec<BiologicEntry>) -> KogakuResult<Vec<BiologicEntry>> {
    let mut seen = HashSet::new();
    for drug in &biologics {
        if !seen.insert(drug.name.clone()) {
            return Err(config_error(format!(
                "biologic '{}' is listed more than once",
                drug.name
            )));
        }
        if drug.unit_price == 0 {
            return Err(config_error(format!("'{}' has a zero unit_price", drug.name)));
        }
    }
    Ok(biologics)
}
