//! Format version 1, magic `0x01`: the original link format.
//!
//! Layout: the common header, the armor section, then the Huffman
//! stream. The flags byte carries the four upgrade toggles in its low
//! bits and the first four pilot talents in its high bits; upgrades do
//! not appear in the token stream at all. The stream is the eight
//! per-location item blocks, each terminated by the separator, followed
//! by the trailing module IDs.
//!
//! Version 1 predates swappable-pod chassis and cannot represent them.

use mech_data::Database;
use mech_data::chassis::ChassisKind;
use mech_loadout::{Efficiencies, EquipError, Loadout, LoadoutBuilder, LoadoutOp, UpgradeSet};

use crate::codec::FormatCoder;
use crate::error::{Error, Result};
use crate::grammar::{self, SEPARATOR, TokenCursor};
use crate::header::{self, Header};
use crate::huffman::Huffman;
use crate::{armor, tables};

pub const MAGIC: u8 = 0x01;

const FLAG_REINFORCED_STRUCTURE: u8 = 1 << 0;
const FLAG_COMPOSITE_ARMOR: u8 = 1 << 1;
const FLAG_DOUBLE_HEAT_SINKS: u8 = 1 << 2;
const FLAG_ENHANCED_GUIDANCE: u8 = 1 << 3;
/// The first four pilot talents live in the high nibble.
const EFFICIENCY_SHIFT: u8 = 4;

/// The fixed upgrade IDs the flag bits map to, `(clear, set)` per slot.
/// These are part of the version-1 wire contract.
const STRUCTURE_IDS: (u32, u32) = (2800, 2801);
const ARMOR_IDS: (u32, u32) = (2810, 2811);
const HEAT_SINK_IDS: (u32, u32) = (3000, 3001);
const GUIDANCE_IDS: (u32, u32) = (3050, 3051);

/// The version-1 loadout coder.
#[derive(Debug)]
pub struct FormatV1 {
    huffman: Huffman,
}

impl FormatV1 {
    /// Creates the coder, loading its baked frequency table.
    ///
    /// # Errors
    ///
    /// Fails only if the baked table resource is invalid.
    pub fn new() -> Result<Self> {
        Ok(Self {
            huffman: Huffman::new(&tables::version_1()?)?,
        })
    }
}

fn upgrade_flag(selected: u32, ids: (u32, u32), flag: u8) -> Result<u8> {
    if selected == ids.0 {
        Ok(0)
    } else if selected == ids.1 {
        Ok(flag)
    } else {
        Err(Error::UnsupportedUpgrade {
            upgrade_id: selected,
        })
    }
}

const fn flagged_id(flags: u8, ids: (u32, u32), flag: u8) -> u32 {
    if flags & flag != 0 { ids.1 } else { ids.0 }
}

impl FormatCoder for FormatV1 {
    fn magic(&self) -> u8 {
        MAGIC
    }

    fn encode(&self, loadout: &Loadout<'_>) -> Result<Vec<u8>> {
        let chassis = loadout.chassis();
        if chassis.kind != ChassisKind::Standard {
            return Err(Error::UnsupportedChassis {
                chassis_id: chassis.chassis_id,
            });
        }

        let upgrades = loadout.upgrades();
        // talents beyond the first four have no version-1 representation
        // and are dropped; encoding new links always uses the newest format
        let mut flags =
            (loadout.efficiencies().bits() & 0x0F) << EFFICIENCY_SHIFT;
        flags |= upgrade_flag(upgrades.structure, STRUCTURE_IDS, FLAG_REINFORCED_STRUCTURE)?;
        flags |= upgrade_flag(upgrades.armor, ARMOR_IDS, FLAG_COMPOSITE_ARMOR)?;
        flags |= upgrade_flag(upgrades.heat_sink, HEAT_SINK_IDS, FLAG_DOUBLE_HEAT_SINKS)?;
        flags |= upgrade_flag(upgrades.guidance, GUIDANCE_IDS, FLAG_ENHANCED_GUIDANCE)?;

        let mut out = Vec::new();
        Header {
            magic: MAGIC,
            flags,
            chassis_id: header::chassis_id_field(chassis.chassis_id)?,
        }
        .write(&mut out);
        armor::write(loadout, &mut out);

        let mut tokens = Vec::new();
        for slot in loadout.locations() {
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
        if chassis.kind != ChassisKind::Standard {
            return Err(Error::UnsupportedChassis {
                chassis_id: chassis.chassis_id,
            });
        }

        let upgrades = UpgradeSet::new(
            flagged_id(header.flags, STRUCTURE_IDS, FLAG_REINFORCED_STRUCTURE),
            flagged_id(header.flags, ARMOR_IDS, FLAG_COMPOSITE_ARMOR),
            flagged_id(header.flags, HEAT_SINK_IDS, FLAG_DOUBLE_HEAT_SINKS),
            flagged_id(header.flags, GUIDANCE_IDS, FLAG_ENHANCED_GUIDANCE),
        );
        for id in [
            upgrades.structure,
            upgrades.armor,
            upgrades.heat_sink,
            upgrades.guidance,
        ] {
            db.upgrade(id).map_err(EquipError::from)?;
        }

        let mut shell = Loadout::new(db, chassis, upgrades)?;
        let rest = armor::read(rest, &mut shell)?;

        let tokens = self.huffman.decode(rest)?;
        let mut cursor = TokenCursor::new(&tokens);
        let mut builder = LoadoutBuilder::new();
        builder.push(LoadoutOp::SetEfficiencies {
            efficiencies: Efficiencies::from_bits_truncate(header.flags >> EFFICIENCY_SHIFT),
        });

        for slot in shell.locations() {
            let location = slot.kind();
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
