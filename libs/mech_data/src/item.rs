//! Data structures for equippable items.

use serde::{Deserialize, Serialize};
use small_fixed_array::FixedString;

use crate::data_def::define_data_enum;

define_data_enum! {
    /// The kinds of weapon hardpoints a location can carry.
    pub enum HardpointKind for HardpointKindData {
        /// The display name of the hardpoint kind.
        pub name: &'static str;

        Energy("Energy"),
        Ballistic("Ballistic"),
        Missile("Missile"),
        AntiMissile("Anti-Missile"),
    }
}

/// Per-kind hardpoint counts for a location or pod.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardpoints {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub energy: u8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ballistic: u8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub missile: u8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub anti_missile: u8,
}

fn is_zero(v: &u8) -> bool {
    *v == 0
}

impl Hardpoints {
    /// A location without any hardpoints.
    pub const NONE: Self = Self {
        energy: 0,
        ballistic: 0,
        missile: 0,
        anti_missile: 0,
    };

    /// Whether no hardpoints are present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.energy == 0 && self.ballistic == 0 && self.missile == 0 && self.anti_missile == 0
    }

    /// The amount of hardpoints of the given kind.
    #[must_use]
    pub const fn count(self, kind: HardpointKind) -> u8 {
        match kind {
            HardpointKind::Energy => self.energy,
            HardpointKind::Ballistic => self.ballistic,
            HardpointKind::Missile => self.missile,
            HardpointKind::AntiMissile => self.anti_missile,
        }
    }
}

/// The kind of an [`Item`], determining where it may be equipped.
///
/// Weapon kinds consume one hardpoint of the matching [`HardpointKind`].
/// [`ItemKind::Internal`] marks chassis-fixed structure that is never
/// equipped by hand and never serialized into share links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Energy,
    Ballistic,
    Missile,
    AntiMissile,
    HeatSink,
    Equipment,
    Internal,
}

impl ItemKind {
    /// The hardpoint kind this item consumes, if any.
    #[must_use]
    pub const fn hardpoint(self) -> Option<HardpointKind> {
        match self {
            Self::Energy => Some(HardpointKind::Energy),
            Self::Ballistic => Some(HardpointKind::Ballistic),
            Self::Missile => Some(HardpointKind::Missile),
            Self::AntiMissile => Some(HardpointKind::AntiMissile),
            _ => None,
        }
    }
}

/// Represents an equippable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// The item's ID.
    pub item_id: u32,
    /// The item's display name.
    pub name: FixedString,
    /// The kind of item, determining which locations may accept it.
    pub kind: ItemKind,
    /// How many critical slots the item occupies.
    pub slots: u8,
    /// The item's mass in tons.
    pub tonnage: f64,
}

impl Item {
    /// Whether this item is chassis-fixed structure.
    ///
    /// Internal items are reconstructed from the chassis or pod definition
    /// and must never appear on the wire.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.kind, ItemKind::Internal)
    }
}
