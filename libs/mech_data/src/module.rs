//! Data structures for auxiliary pilot modules.

use serde::{Deserialize, Serialize};
use small_fixed_array::FixedString;

use crate::data_def::define_data_enum;

define_data_enum! {
    /// The module slot categories.
    pub enum ModuleSlot for ModuleSlotData {
        /// The display name of the slot category.
        pub name: &'static str;

        Weapon("Weapon"),
        Consumable("Consumable"),
        Support("Support"),
    }
}

/// Represents an auxiliary module equipped alongside the loadout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// The module's ID.
    pub module_id: u32,
    /// The module's display name.
    pub name: FixedString,
    /// The slot category the module occupies.
    pub slot: ModuleSlot,
}
