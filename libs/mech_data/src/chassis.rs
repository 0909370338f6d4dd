//! Data structures describing vehicle chassis.

use serde::{Deserialize, Serialize};
use small_fixed_array::{FixedArray, FixedString};

use crate::data_def::define_data_enum;
use crate::item::Hardpoints;

define_data_enum! {
    /// One structural slot of a chassis.
    ///
    /// [`LocationKind::ORDER`] is the canonical wire traversal order; every
    /// codec that walks locations must use it.
    pub enum LocationKind for LocationKindData {
        /// The short location code.
        pub code: &'static str,
        /// The long location name.
        pub name: &'static str,
        /// Whether the location has independent front and back armor.
        pub two_sided: bool;

        RightArm("RA", "Right Arm", false),
        RightTorso("RT", "Right Torso", true),
        RightLeg("RL", "Right Leg", false),
        Head("HD", "Head", false),
        CenterTorso("CT", "Center Torso", true),
        LeftTorso("LT", "Left Torso", true),
        LeftLeg("LL", "Left Leg", false),
        LeftArm("LA", "Left Arm", false),
    }
}

impl LocationKind {
    /// The canonical traversal order for wire formats.
    pub const ORDER: &[LocationKind] = Self::ALL;
}

/// Whether a chassis has fixed equipment layouts or swappable pods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChassisKind {
    /// Hardpoints are fixed per location.
    Standard,
    /// Each location's hardpoints come from a swappable [`Pod`].
    ///
    /// [`Pod`]: crate::pod::Pod
    Swappable,
}

/// Static definition of a single location on a chassis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSpec {
    /// Which location this describes.
    pub kind: LocationKind,
    /// The total critical slot capacity.
    pub slots: u8,
    /// The maximum armor for each side of this location.
    ///
    /// Wire formats store one byte per armor value, so the bound fits `u8`.
    pub max_armor: u8,
    /// The fixed hardpoints. Always empty for swappable chassis, whose
    /// hardpoints come from the equipped pod.
    #[serde(default, skip_serializing_if = "Hardpoints::is_none")]
    pub hardpoints: Hardpoints,
    /// Item IDs fixed to this location (engine, gyro, actuators, ...).
    ///
    /// These are reconstructed on load and never serialized into links.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub fixed_item_ids: FixedArray<u32>,
}

/// Represents one chassis variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chassis {
    /// The chassis ID.
    ///
    /// Wire formats store this as 16 bits; larger IDs cannot be shared.
    pub chassis_id: u32,
    /// The variant's display name.
    pub name: FixedString,
    /// The chassis family, shared between variants that accept the same
    /// pods.
    pub family: FixedString,
    /// Whether the chassis takes swappable pods.
    pub kind: ChassisKind,
    /// The maximum total mass in tons.
    pub max_tonnage: f64,
    /// The structural locations, in no particular order.
    pub locations: FixedArray<LocationSpec>,
}

impl Chassis {
    /// Gets the location spec for the given kind.
    #[must_use]
    pub fn location(&self, kind: LocationKind) -> Option<&LocationSpec> {
        self.locations.iter().find(|l| l.kind == kind)
    }
}
