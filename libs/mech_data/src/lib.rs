//! Defines the static combat-vehicle reference data consumed by the
//! GearLink tools: chassis, items, upgrades, pods, and modules, plus the
//! id-indexed [`Database`] service the link codecs resolve IDs through.

use serde::{Deserialize, Serialize};
use small_fixed_array::FixedArray;

mod data_def;

pub mod chassis;
mod database;
pub mod item;
pub mod module;
pub mod pod;
pub mod upgrade;

pub use database::{DataError, Database, EntityKind};

/// Definition data to be saved/loaded in bulk.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DefinitionData {
    /// All known chassis variants.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub chassis: FixedArray<chassis::Chassis>,
    /// All known items.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub items: FixedArray<item::Item>,
    /// All known upgrades.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub upgrades: FixedArray<upgrade::Upgrade>,
    /// All known pods.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub pods: FixedArray<pod::Pod>,
    /// All known modules.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub modules: FixedArray<module::Module>,
}
