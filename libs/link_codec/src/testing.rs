//! Fixture data shared by this crate's tests.
//!
//! The IDs match the coverage of the baked frequency tables, the way a
//! real reference database matches the tables generated from it.

use mech_data::chassis::{Chassis, ChassisKind, LocationKind, LocationSpec};
use mech_data::item::{Hardpoints, Item, ItemKind};
use mech_data::module::{Module, ModuleSlot};
use mech_data::pod::Pod;
use mech_data::upgrade::{Upgrade, UpgradeKind};
use mech_data::{Database, DefinitionData};
use mech_loadout::{Loadout, UpgradeSet};
use small_fixed_array::TruncatingInto as _;

pub const ENGINE: u32 = 100;
pub const MEDIUM_LASER: u32 = 1001;
pub const LRM_10: u32 = 1002;
pub const DOUBLE_HEAT_SINK: u32 = 1003;
pub const AUTOCANNON_5: u32 = 1004;
pub const JUMP_JET: u32 = 1005;

pub const STD_CHASSIS: u32 = 2;
pub const POD_CHASSIS: u32 = 5;
/// A chassis whose ID does not fit the 16-bit wire field.
pub const WIDE_CHASSIS: u32 = 70000;

pub fn database() -> Database {
    Database::from_definition(definition()).expect("fixture data is valid")
}

/// The stock upgrade selection: standard everything.
pub fn stock_upgrades() -> UpgradeSet {
    UpgradeSet::new(2800, 2810, 3000, 3050)
}

/// An empty loadout shell on the standard chassis.
pub fn standard_shell(db: &Database) -> Loadout<'_> {
    let chassis = db.chassis(STD_CHASSIS).expect("fixture chassis");
    Loadout::new(db, chassis, stock_upgrades()).expect("shell must build")
}

/// An empty loadout shell on the swappable chassis, with the stock pod
/// mounted in every location.
pub fn swappable_shell(db: &Database) -> Loadout<'_> {
    let chassis = db.chassis(POD_CHASSIS).expect("fixture chassis");
    let mut shell =
        Loadout::new(db, chassis, UpgradeSet::new(0, 0, 0, 3050)).expect("shell must build");
    for &kind in LocationKind::ORDER {
        let pod = db.pod(pod_id_for(kind)).expect("fixture pod");
        shell.set_pod(kind, pod).expect("pod fits");
    }
    shell
}

/// Pod IDs for the swappable chassis: 7001 through 7008 in canonical
/// location order.
pub fn pod_id_for(kind: LocationKind) -> u32 {
    7001 + kind as u32
}

fn item(item_id: u32, name: &str, kind: ItemKind, slots: u8, tonnage: f64) -> Item {
    Item {
        item_id,
        name: name.to_owned().trunc_into(),
        kind,
        slots,
        tonnage,
    }
}

fn upgrade(upgrade_id: u32, name: &str, kind: UpgradeKind) -> Upgrade {
    Upgrade {
        upgrade_id,
        name: name.to_owned().trunc_into(),
        kind,
    }
}

fn module(module_id: u32, name: &str, slot: ModuleSlot) -> Module {
    Module {
        module_id,
        name: name.to_owned().trunc_into(),
        slot,
    }
}

fn location(
    kind: LocationKind,
    slots: u8,
    max_armor: u8,
    hardpoints: Hardpoints,
    fixed_item_ids: &[u32],
) -> LocationSpec {
    LocationSpec {
        kind,
        slots,
        max_armor,
        hardpoints,
        fixed_item_ids: fixed_item_ids.to_vec().trunc_into(),
    }
}

const fn energy(count: u8) -> Hardpoints {
    Hardpoints {
        energy: count,
        ..Hardpoints::NONE
    }
}

fn chassis(chassis_id: u32, name: &str, family: &str, kind: ChassisKind) -> Chassis {
    let fixed = |loc: LocationKind| match loc {
        LocationKind::CenterTorso => vec![ENGINE],
        _ => Vec::new(),
    };
    let hardpoints = |loc: LocationKind| {
        if kind == ChassisKind::Swappable {
            return Hardpoints::NONE;
        }
        match loc {
            LocationKind::RightArm | LocationKind::LeftArm => energy(2),
            LocationKind::Head => energy(1),
            LocationKind::RightTorso => Hardpoints {
                ballistic: 3,
                ..Hardpoints::NONE
            },
            LocationKind::LeftTorso => Hardpoints {
                missile: 2,
                ..Hardpoints::NONE
            },
            _ => Hardpoints::NONE,
        }
    };
    let max_armor = |loc: LocationKind| match loc {
        LocationKind::Head => 18,
        LocationKind::CenterTorso => 60,
        LocationKind::RightTorso | LocationKind::LeftTorso => 48,
        LocationKind::RightLeg | LocationKind::LeftLeg => 50,
        LocationKind::RightArm | LocationKind::LeftArm => 40,
    };

    Chassis {
        chassis_id,
        name: name.to_owned().trunc_into(),
        family: family.to_owned().trunc_into(),
        kind,
        max_tonnage: 50.0,
        locations: LocationKind::ORDER
            .iter()
            .map(|&loc| location(loc, 12, max_armor(loc), hardpoints(loc), &fixed(loc)))
            .collect::<Vec<_>>()
            .trunc_into(),
    }
}

fn definition() -> DefinitionData {
    let pods: Vec<Pod> = LocationKind::ORDER
        .iter()
        .map(|&kind| {
            let hardpoints = match kind {
                LocationKind::RightArm => energy(2),
                LocationKind::LeftTorso => Hardpoints {
                    missile: 1,
                    ..Hardpoints::NONE
                },
                _ => Hardpoints::NONE,
            };
            // the right-torso pod carries a fixed heat sink
            let fixed_item_ids = match kind {
                LocationKind::RightTorso => vec![DOUBLE_HEAT_SINK],
                _ => Vec::new(),
            };
            Pod {
                pod_id: pod_id_for(kind),
                name: format!("NVA {}", kind.code()).trunc_into(),
                family: "NVA".to_owned().trunc_into(),
                location: kind,
                hardpoints,
                fixed_item_ids: fixed_item_ids.trunc_into(),
            }
        })
        .collect();

    DefinitionData {
        chassis: vec![
            chassis(STD_CHASSIS, "HBK-4P", "HBK", ChassisKind::Standard),
            chassis(POD_CHASSIS, "NVA-P", "NVA", ChassisKind::Swappable),
            chassis(WIDE_CHASSIS, "BIG-1", "BIG", ChassisKind::Standard),
        ]
        .trunc_into(),
        items: vec![
            item(ENGINE, "Std Engine 200", ItemKind::Internal, 6, 10.0),
            item(MEDIUM_LASER, "Medium Laser", ItemKind::Energy, 1, 1.0),
            item(LRM_10, "LRM 10", ItemKind::Missile, 2, 5.0),
            item(DOUBLE_HEAT_SINK, "Double Heat Sink", ItemKind::HeatSink, 3, 1.0),
            item(AUTOCANNON_5, "AC/5", ItemKind::Ballistic, 4, 8.0),
            item(JUMP_JET, "Jump Jet", ItemKind::Equipment, 1, 0.5),
        ]
        .trunc_into(),
        upgrades: vec![
            upgrade(2800, "Standard Structure", UpgradeKind::Structure),
            upgrade(2801, "Reinforced Structure", UpgradeKind::Structure),
            upgrade(2810, "Standard Armor", UpgradeKind::Armor),
            upgrade(2811, "Composite Armor", UpgradeKind::Armor),
            upgrade(3000, "Single Heat Sinks", UpgradeKind::HeatSink),
            upgrade(3001, "Double Heat Sinks", UpgradeKind::HeatSink),
            upgrade(3050, "Standard Guidance", UpgradeKind::Guidance),
            upgrade(3051, "Enhanced Guidance", UpgradeKind::Guidance),
        ]
        .trunc_into(),
        pods: pods.trunc_into(),
        modules: vec![
            module(9001, "Seismic Sensor", ModuleSlot::Support),
            module(9002, "Cool Shot", ModuleSlot::Consumable),
            module(9003, "Laser Range Module", ModuleSlot::Weapon),
        ]
        .trunc_into(),
    }
}
