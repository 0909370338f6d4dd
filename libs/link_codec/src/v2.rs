//! Format version 2, magic `0x02`: the current link format.
//!
//! Layout: the common header, the armor section, one actuator-state
//! byte on swappable-pod chassis, then the Huffman stream. The flags
//! byte carries all eight pilot talents; the upgrade selections moved
//! into the token stream.
//!
//! The stream opens with the upgrade block — four IDs (structure, armor,
//! heat sink, guidance) on standard chassis, one (guidance) on swappable
//! chassis, a fixed per-version count that is never inferred from the
//! data — then the separator, then the eight per-location blocks in
//! canonical order. On swappable chassis each block leads with the
//! location's pod ID before its item IDs. Every block is terminated by
//! the separator; the trailing module IDs carry no terminator.

use mech_data::chassis::{ChassisKind, LocationKind};
use mech_data::upgrade::UpgradeKind;
use mech_data::Database;
use mech_loadout::{
    ActuatorState, Efficiencies, EquipError, Loadout, LoadoutBuilder, LoadoutOp, UpgradeSet,
};

use crate::codec::FormatCoder;
use crate::error::{Error, Result};
use crate::grammar::{self, SEPARATOR, TokenCursor};
use crate::header::{self, Header};
use crate::huffman::Huffman;
use crate::{armor, tables};

pub const MAGIC: u8 = 0x02;

/// The upgrade IDs preceding the location blocks, per chassis kind.
///
/// Swappable chassis have fixed structure, armor, and heat sinks, so
/// only guidance is carried on the wire for them.
const fn upgrade_slots(kind: ChassisKind) -> &'static [UpgradeKind] {
    match kind {
        ChassisKind::Standard => &[
            UpgradeKind::Structure,
            UpgradeKind::Armor,
            UpgradeKind::HeatSink,
            UpgradeKind::Guidance,
        ],
        ChassisKind::Swappable => &[UpgradeKind::Guidance],
    }
}

/// The version-2 loadout coder.
#[derive(Debug)]
pub struct FormatV2 {
    huffman: Huffman,
}

impl FormatV2 {
    /// Creates the coder, loading its baked frequency table.
    ///
    /// # Errors
    ///
    /// Fails only if the baked table resource is invalid.
    pub fn new() -> Result<Self> {
        Ok(Self {
            huffman: Huffman::new(&tables::version_2()?)?,
        })
    }
}

impl FormatCoder for FormatV2 {
    fn magic(&self) -> u8 {
        MAGIC
    }

    fn encode(&self, loadout: &Loadout<'_>) -> Result<Vec<u8>> {
        let chassis = loadout.chassis();
        let swappable = chassis.kind == ChassisKind::Swappable;

        let mut out = Vec::new();
        Header {
            magic: MAGIC,
            flags: loadout.efficiencies().bits(),
            chassis_id: header::chassis_id_field(chassis.chassis_id)?,
        }
        .write(&mut out);
        armor::write(loadout, &mut out);
        if swappable {
            out.push(loadout.actuators().bits());
        }

        let mut tokens = Vec::new();
        for &kind in upgrade_slots(chassis.kind) {
            grammar::push_id(&mut tokens, loadout.upgrades().get(kind))?;
        }
        tokens.push(SEPARATOR);

        for slot in loadout.locations() {
            if swappable {
                let pod = slot.pod().ok_or(Error::MissingPod {
                    location: slot.kind(),
                })?;
                grammar::push_id(&mut tokens, pod.pod_id)?;
            }
            for item in slot.items() {
                grammar::push_id(&mut tokens, item.item_id)?;
            }
            tokens.push(SEPARATOR);
        }

        for module in loadout.modules() {
            grammar::push_id(&mut tokens, module.module_id)?;
        }

        out.extend_from_slice(&self.huffman.encode(&tokens)?);
        Ok(out)
    }

    fn decode<'d>(&self, db: &'d Database, buf: &[u8]) -> Result<Loadout<'d>> {
        let (header, rest) = Header::read(buf, MAGIC)?;
        let chassis = db
            .chassis(u32::from(header.chassis_id))
            .map_err(Error::UnknownChassis)?;
        let swappable = chassis.kind == ChassisKind::Swappable;

        let Some((armor_bytes, tail)) = rest.split_at_checked(armor::section_len()) else {
            return Err(Error::UnexpectedEnd { section: "armor" });
        };

        let (actuators, stream) = if swappable {
            let (&byte, stream) = tail
                .split_first()
                .ok_or(Error::UnexpectedEnd { section: "actuators" })?;
            let actuators = ActuatorState::from_bits(byte)
                .ok_or(Error::ReservedActuatorBits { byte })?;
            (actuators, stream)
        } else {
            (ActuatorState::empty(), tail)
        };

        let tokens = self.huffman.decode(stream)?;
        let mut cursor = TokenCursor::new(&tokens);

        // fixed upgrade slots stay at their default id on swappable chassis
        let mut upgrades = UpgradeSet::new(0, 0, 0, 0);
        for &expected in upgrade_slots(chassis.kind) {
            let upgrade_id = cursor.expect_id("upgrades")?;
            let upgrade = db.upgrade(upgrade_id).map_err(EquipError::from)?;
            if upgrade.kind != expected {
                return Err(Error::UpgradeSlotMismatch {
                    expected,
                    upgrade_id,
                });
            }
            upgrades.set(expected, upgrade_id);
        }
        cursor.expect_separator("upgrades")?;

        let mut shell = Loadout::new(db, chassis, upgrades)?;
        armor::read(armor_bytes, &mut shell)?;

        let mut builder = LoadoutBuilder::new();
        builder.push(LoadoutOp::SetEfficiencies {
            efficiencies: Efficiencies::from_bits_retain(header.flags),
        });
        if swappable {
            builder.push(LoadoutOp::SetActuators { actuators });
        }

        for &location in LocationKind::ORDER {
            if swappable {
                let pod_id = cursor.expect_id("pod")?;
                builder.push(LoadoutOp::SetPod { location, pod_id });
            }
            while let Some(item_id) = cursor.next_block_id("items")? {
                builder.push(LoadoutOp::AddItem { location, item_id });
            }
        }

        for module_id in cursor.read_module_ids()? {
            builder.push(LoadoutOp::AddModule { module_id });
        }

        Ok(builder.apply(shell)?)
    }
}
