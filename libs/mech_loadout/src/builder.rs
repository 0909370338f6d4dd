//! A batch mutation sink for loadouts.
//!
//! Link decoding does not mutate a loadout directly: it queues
//! [`LoadoutOp`] values on a [`LoadoutBuilder`] and applies them in one
//! batch. The builder consumes the shell it is applied to, so a batch
//! that fails part-way never leaks a half-populated loadout to the
//! caller.

use mech_data::chassis::LocationKind;

use crate::error::EquipError;
use crate::flags::{ActuatorState, Efficiencies};
use crate::loadout::{Loadout, Side};

/// A single queued loadout mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadoutOp {
    /// Sets one armor value.
    SetArmor {
        location: LocationKind,
        side: Side,
        value: u8,
    },
    /// Selects an upgrade by ID.
    SetUpgrade { upgrade_id: u32 },
    /// Replaces the pilot talents.
    SetEfficiencies { efficiencies: Efficiencies },
    /// Replaces the arm actuator toggles.
    SetActuators { actuators: ActuatorState },
    /// Mounts a pod by ID.
    SetPod {
        location: LocationKind,
        pod_id: u32,
    },
    /// Equips an item by ID.
    AddItem {
        location: LocationKind,
        item_id: u32,
    },
    /// Adds an auxiliary module by ID.
    AddModule { module_id: u32 },
}

/// Queues [`LoadoutOp`] values and applies them as one batch.
#[derive(Debug, Clone, Default)]
pub struct LoadoutBuilder {
    ops: Vec<LoadoutOp>,
}

impl LoadoutBuilder {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an operation.
    pub fn push(&mut self, op: LoadoutOp) {
        self.ops.push(op);
    }

    /// Applies the batch to a shell, consuming both.
    ///
    /// Operations apply in queue order. IDs resolve against the shell's
    /// database; every resolution or validation failure aborts the whole
    /// batch.
    ///
    /// # Errors
    ///
    /// Returns the first [`EquipError`] encountered; the partially mutated
    /// shell is dropped rather than returned.
    pub fn apply<'d>(self, mut shell: Loadout<'d>) -> Result<Loadout<'d>, EquipError> {
        for op in self.ops {
            apply_op(&mut shell, op)?;
        }

        Ok(shell)
    }
}

fn apply_op<'d>(loadout: &mut Loadout<'d>, op: LoadoutOp) -> Result<(), EquipError> {
    let db = loadout.database();
    match op {
        LoadoutOp::SetArmor {
            location,
            side,
            value,
        } => loadout.set_armor(location, side, value),
        LoadoutOp::SetUpgrade { upgrade_id } => {
            let upgrade = db.upgrade(upgrade_id)?;
            loadout.set_upgrade(upgrade);
            Ok(())
        },
        LoadoutOp::SetEfficiencies { efficiencies } => {
            loadout.set_efficiencies(efficiencies);
            Ok(())
        },
        LoadoutOp::SetActuators { actuators } => {
            loadout.set_actuators(actuators);
            Ok(())
        },
        LoadoutOp::SetPod { location, pod_id } => {
            let pod = db.pod(pod_id)?;
            loadout.set_pod(location, pod)
        },
        LoadoutOp::AddItem { location, item_id } => {
            let item = db.item(item_id)?;
            loadout.equip(location, item)
        },
        LoadoutOp::AddModule { module_id } => {
            let module = db.module(module_id)?;
            loadout.add_module(module)
        },
    }
}

#[cfg(test)]
mod tests {
    use mech_data::{DataError, EntityKind};

    use super::*;
    use crate::testing;

    #[test]
    fn batch_applies_in_order() {
        let db = testing::database();
        let chassis = db.chassis(testing::STD_CHASSIS).expect("fixture chassis");
        let shell =
            Loadout::new(&db, chassis, testing::stock_upgrades()).expect("shell must build");

        let mut builder = LoadoutBuilder::new();
        builder.push(LoadoutOp::SetArmor {
            location: LocationKind::Head,
            side: Side::Front,
            value: 18,
        });
        builder.push(LoadoutOp::SetUpgrade { upgrade_id: 3001 });
        builder.push(LoadoutOp::AddItem {
            location: LocationKind::Head,
            item_id: testing::MEDIUM_LASER,
        });
        builder.push(LoadoutOp::AddModule { module_id: 9002 });

        let loadout = builder.apply(shell).expect("all ops are valid");
        assert_eq!(loadout.location(LocationKind::Head).armor(Side::Front), 18);
        assert_eq!(loadout.upgrades().heat_sink, 3001);
        assert_eq!(loadout.location(LocationKind::Head).items().len(), 1);
        assert_eq!(loadout.modules().len(), 1);
    }

    #[test]
    fn batch_aborts_on_first_failure() {
        let db = testing::database();
        let chassis = db.chassis(testing::STD_CHASSIS).expect("fixture chassis");
        let shell =
            Loadout::new(&db, chassis, testing::stock_upgrades()).expect("shell must build");

        let mut builder = LoadoutBuilder::new();
        builder.push(LoadoutOp::AddItem {
            location: LocationKind::RightArm,
            item_id: 424242,
        });

        let err = builder.apply(shell).expect_err("unknown item id");
        assert_eq!(
            err,
            EquipError::Data(DataError::UnknownId {
                kind: EntityKind::Item,
                id: 424242,
            })
        );
    }
}
