//! In-memory catalog and cap table shared by the unit tests.

use kogaku_contracts::{
    catalog::{
        BiologicEntry, BiologicFamily, CapTierEntry, DosingUnit, DrugCategory, DrugCategoryEntry,
        IncomeTier,
    },
    error::{KogakuError, KogakuResult},
};

use crate::traits::{CapSchedule, DrugCatalog};

pub(crate) struct MockCatalog {
    fixed: Vec<DrugCategoryEntry>,
    variable: Vec<DrugCategoryEntry>,
    addon: Vec<DrugCategoryEntry>,
    oral: Vec<DrugCategoryEntry>,
    biologics: Vec<BiologicEntry>,
    tiers: Vec<CapTierEntry>,
}

fn days(name: &str, unit_price: u64, days: u32) -> DrugCategoryEntry {
    DrugCategoryEntry {
        name: name.to_string(),
        unit_price,
        dosing_unit: DosingUnit::DaysPerPack(days),
    }
}

fn puffs(name: &str, unit_price: u64, puffs: u32) -> DrugCategoryEntry {
    DrugCategoryEntry {
        name: name.to_string(),
        unit_price,
        dosing_unit: DosingUnit::PuffsPerPack(puffs),
    }
}

fn tier(name: &str, normal_cap: u64, frequent_cap: u64) -> CapTierEntry {
    CapTierEntry {
        income_tier: IncomeTier::new(name),
        normal_cap,
        frequent_cap,
    }
}

fn biologic(name: &str, unit_price: u64, family: BiologicFamily) -> BiologicEntry {
    BiologicEntry {
        name: name.to_string(),
        unit_price,
        family,
    }
}

impl MockCatalog {
    pub(crate) fn new() -> Self {
        Self {
            fixed: vec![days("テリルジー200", 11_200, 28), days("アドエア500", 9_800, 28)],
            variable: vec![
                puffs("フルティフォーム125（120吸入）", 8_900, 120),
                puffs("ブデホル（60吸入）", 7_600, 60),
            ],
            addon: vec![days("スピリーバ レスピマット2.5μg", 5_200, 30)],
            oral: vec![
                days("モンテルカスト10", 2_300, 30),
                days("テオフィリン徐放U200", 1_800, 30),
            ],
            biologics: vec![
                biologic("テゼスパイア", 145_000, BiologicFamily::Quarterly),
                biologic("デュピルマブ", 82_000, BiologicFamily::LoadingDose),
            ],
            tiers: vec![tier("ウ", 57_600, 44_400), tier("エ", 35_400, 24_600)],
        }
    }
}

impl DrugCatalog for MockCatalog {
    fn entries(&self, category: DrugCategory) -> &[DrugCategoryEntry] {
        match category {
            DrugCategory::FixedInhalant => &self.fixed,
            DrugCategory::VariableInhalant => &self.variable,
            DrugCategory::AddonInhalant => &self.addon,
            DrugCategory::OralDrug => &self.oral,
        }
    }

    fn biologic(&self, name: &str) -> KogakuResult<&BiologicEntry> {
        self.biologics
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| KogakuError::UnknownDrug { name: name.to_string() })
    }
}

impl CapSchedule for MockCatalog {
    fn tier(&self, tier: &IncomeTier) -> KogakuResult<&CapTierEntry> {
        self.tiers
            .iter()
            .find(|t| &t.income_tier == tier)
            .ok_or_else(|| KogakuError::UnknownIncomeTier { tier: tier.0.clone() })
    }
}
