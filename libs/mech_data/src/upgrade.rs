//! Data structures for chassis-wide upgrades.

use serde::{Deserialize, Serialize};
use small_fixed_array::FixedString;

use crate::data_def::define_data_enum;

define_data_enum! {
    /// The slot an upgrade occupies. A loadout carries exactly one upgrade
    /// of each kind.
    pub enum UpgradeKind for UpgradeKindData {
        /// The display name of the upgrade slot.
        pub name: &'static str;

        Structure("Structure"),
        Armor("Armor"),
        HeatSink("Heat Sink"),
        Guidance("Guidance"),
    }
}

/// Represents one selectable upgrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    /// The upgrade's ID.
    pub upgrade_id: u32,
    /// The upgrade's display name.
    pub name: FixedString,
    /// Which upgrade slot it fills.
    pub kind: UpgradeKind,
}
