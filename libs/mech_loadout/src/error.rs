//! Error handling types.

use mech_data::DataError;
use mech_data::chassis::LocationKind;

/// Error applying a mutation to a [`Loadout`].
///
/// Each variant carries the offending ID and, where it applies, the
/// location, so callers can surface precise diagnostics.
///
/// [`Loadout`]: crate::Loadout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EquipError {
    /// An ID did not resolve against the reference database.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The chassis definition lacks one of the eight locations.
    #[error("chassis has no {} location", kind.code())]
    MissingLocation {
        /// The missing location.
        kind: LocationKind,
    },
    /// An armor value exceeds the location's chassis-derived maximum.
    #[error("armor {value} exceeds maximum {max} for {}", location.code())]
    ArmorOutOfRange {
        /// The location being armored.
        location: LocationKind,
        /// The rejected value.
        value: u8,
        /// The chassis-derived maximum.
        max: u8,
    },
    /// Back armor was set on a single-sided location.
    #[error("{} has no back armor", location.code())]
    NoBackArmor {
        /// The single-sided location.
        location: LocationKind,
    },
    /// A chassis-fixed internal item was equipped explicitly.
    #[error("item {item_id} is internal and cannot be equipped")]
    InternalItem {
        /// The rejected item's ID.
        item_id: u32,
    },
    /// No free hardpoint of the item's kind remains in the location.
    #[error("no free hardpoint for item {item_id} in {}", location.code())]
    HardpointsExhausted {
        /// The location the item was equipped to.
        location: LocationKind,
        /// The rejected item's ID.
        item_id: u32,
    },
    /// The location's critical slots cannot fit the item.
    #[error("no free slots for item {item_id} in {}", location.code())]
    SlotsExhausted {
        /// The location the item was equipped to.
        location: LocationKind,
        /// The rejected item's ID.
        item_id: u32,
    },
    /// Equipping the item would exceed the chassis tonnage limit.
    #[error("item {item_id} exceeds the chassis tonnage limit")]
    TonnageExceeded {
        /// The rejected item's ID.
        item_id: u32,
    },
    /// A pod was mounted on a chassis with fixed hardpoints.
    #[error("pod {pod_id} cannot mount on a standard chassis")]
    PodOnStandardChassis {
        /// The rejected pod's ID.
        pod_id: u32,
    },
    /// The pod belongs to a different chassis family.
    #[error("pod {pod_id} does not fit this chassis family")]
    PodFamilyMismatch {
        /// The rejected pod's ID.
        pod_id: u32,
    },
    /// The pod is made for a different location.
    #[error("pod {pod_id} does not mount to {}", location.code())]
    PodLocationMismatch {
        /// The rejected pod's ID.
        pod_id: u32,
        /// The location the pod was mounted to.
        location: LocationKind,
    },
    /// The module is already part of the loadout.
    #[error("module {module_id} is already equipped")]
    DuplicateModule {
        /// The rejected module's ID.
        module_id: u32,
    },
}
