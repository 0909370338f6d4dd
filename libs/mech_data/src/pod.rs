//! Data structures for swappable location pods.

use serde::{Deserialize, Serialize};
use small_fixed_array::{FixedArray, FixedString};

use crate::chassis::LocationKind;
use crate::item::Hardpoints;

/// A swappable hardware pod for one location of a swappable chassis.
///
/// Pods carry the location's hardpoints and any fixed items; a swappable
/// chassis without a pod in a location has no hardpoints there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    /// The pod's ID.
    pub pod_id: u32,
    /// The pod's display name.
    pub name: FixedString,
    /// The chassis family the pod fits.
    pub family: FixedString,
    /// The location the pod mounts to.
    pub location: LocationKind,
    /// The hardpoints the pod provides.
    #[serde(default, skip_serializing_if = "Hardpoints::is_none")]
    pub hardpoints: Hardpoints,
    /// Item IDs fixed to the pod.
    ///
    /// Like chassis-fixed items, these are reconstructed on load and never
    /// serialized into links.
    #[serde(default, skip_serializing_if = "FixedArray::is_empty")]
    pub fixed_item_ids: FixedArray<u32>,
}
