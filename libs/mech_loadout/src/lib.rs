//! The in-memory loadout model: a chassis with per-location armor and
//! items, chassis-wide upgrades, pilot efficiencies, swappable pods, and
//! auxiliary modules, plus the batch mutation sink link decoding drives.
//!
//! All reference data is borrowed from a [`mech_data::Database`]; a
//! loadout only holds selections.

mod builder;
mod error;
mod flags;
mod loadout;
#[cfg(test)]
pub(crate) mod testing;

pub use builder::{LoadoutBuilder, LoadoutOp};
pub use error::EquipError;
pub use flags::{ActuatorState, Efficiencies};
pub use loadout::{Loadout, LocationSlot, Side, UpgradeSet};
