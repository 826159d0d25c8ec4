//! Catalog file schema.
//!
//! A `CatalogFile` is deserialized from TOML. Maintenance drugs are plain
//! rows with two optional dosing fields; the loader checks that each row
//! carries exactly the one its category needs.

use serde::{Deserialize, Serialize};

use kogaku_contracts::{
    catalog::{BiologicEntry, CapTierEntry},
    config::EngineConfig,
};

/// A maintenance drug row as written in TOML.
///
/// Example:
/// ```toml
/// [[fixed_inhalants]]
/// name = "テリルジー200"
/// unit_price = 11200
/// days_per_pack = 28
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugRow {
    pub name: String,

    /// Price of one pack, in yen.
    pub unit_price: u64,

    /// Mandatory for fixed, add-on, and oral rows.
    pub days_per_pack: Option<u32>,

    /// Mandatory for variable-puff rows.
    pub puffs_per_pack: Option<u32>,
}

/// The top-level structure of a catalog file.
///
/// Every array is optional and keeps its declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub engine: EngineConfig,
    pub cap_tiers: Vec<CapTierEntry>,
    pub fixed_inhalants: Vec<DrugRow>,
    pub variable_inhalants: Vec<DrugRow>,
    pub addon_inhalants: Vec<DrugRow>,
    pub oral_drugs: Vec<DrugRow>,
    pub biologics: Vec<BiologicEntry>,
}
