//! Fixture data shared by this crate's unit tests.

use mech_data::chassis::{Chassis, ChassisKind, LocationKind, LocationSpec};
use mech_data::item::{Hardpoints, Item, ItemKind};
use mech_data::module::{Module, ModuleSlot};
use mech_data::pod::Pod;
use mech_data::upgrade::{Upgrade, UpgradeKind};
use mech_data::{Database, DefinitionData};
use small_fixed_array::TruncatingInto as _;

pub const ENGINE: u32 = 100;
pub const MEDIUM_LASER: u32 = 1001;
pub const LRM_10: u32 = 1002;
pub const DOUBLE_HEAT_SINK: u32 = 1003;
pub const AUTOCANNON_5: u32 = 1004;
pub const JUMP_JET: u32 = 1005;

pub const STD_CHASSIS: u32 = 2;
pub const POD_CHASSIS: u32 = 5;

pub fn database() -> Database {
    Database::from_definition(definition()).expect("fixture data is valid")
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

fn pod(pod_id: u32, family: &str, kind: LocationKind, hardpoints: Hardpoints) -> Pod {
    Pod {
        pod_id,
        name: format!("{family} {}", kind.code()).trunc_into(),
        family: family.to_owned().trunc_into(),
        location: kind,
        hardpoints,
        fixed_item_ids: Vec::new().trunc_into(),
    }
}

const fn energy(count: u8) -> Hardpoints {
    Hardpoints {
        energy: count,
        ..Hardpoints::NONE
    }
}

/// A standard chassis with energy hardpoints in the arms and head,
/// ballistics in the right torso, and missiles in the left torso.
fn standard_chassis() -> Chassis {
    Chassis {
        chassis_id: STD_CHASSIS,
        name: "HBK-4P".to_owned().trunc_into(),
        family: "HBK".to_owned().trunc_into(),
        kind: ChassisKind::Standard,
        max_tonnage: 30.0,
        locations: vec![
            location(LocationKind::RightArm, 8, 40, energy(2), &[]),
            location(
                LocationKind::RightTorso,
                12,
                48,
                Hardpoints {
                    ballistic: 3,
                    ..Hardpoints::NONE
                },
                &[],
            ),
            location(LocationKind::RightLeg, 6, 50, Hardpoints::NONE, &[]),
            location(LocationKind::Head, 6, 18, energy(1), &[]),
            location(LocationKind::CenterTorso, 12, 60, Hardpoints::NONE, &[ENGINE]),
            location(
                LocationKind::LeftTorso,
                12,
                48,
                Hardpoints {
                    missile: 2,
                    ..Hardpoints::NONE
                },
                &[],
            ),
            location(LocationKind::LeftLeg, 6, 50, Hardpoints::NONE, &[]),
            location(LocationKind::LeftArm, 8, 40, energy(2), &[]),
        ]
        .trunc_into(),
    }
}

/// A swappable-pod chassis; all hardpoints come from its pods.
fn pod_chassis() -> Chassis {
    let bare = |kind, slots, max_armor| location(kind, slots, max_armor, Hardpoints::NONE, &[]);
    Chassis {
        chassis_id: POD_CHASSIS,
        name: "NVA-P".to_owned().trunc_into(),
        family: "NVA".to_owned().trunc_into(),
        kind: ChassisKind::Swappable,
        max_tonnage: 50.0,
        locations: vec![
            bare(LocationKind::RightArm, 8, 40),
            bare(LocationKind::RightTorso, 12, 48),
            bare(LocationKind::RightLeg, 6, 50),
            bare(LocationKind::Head, 6, 18),
            location(LocationKind::CenterTorso, 12, 60, Hardpoints::NONE, &[ENGINE]),
            bare(LocationKind::LeftTorso, 12, 48),
            bare(LocationKind::LeftLeg, 6, 50),
            bare(LocationKind::LeftArm, 8, 40),
        ]
        .trunc_into(),
    }
}

/// Pod IDs for the swappable chassis: 7001 through 7008 in canonical
/// location order.
pub fn pod_id_for(kind: LocationKind) -> u32 {
    7001 + kind as u32
}

fn definition() -> DefinitionData {
    let mut pods: Vec<Pod> = LocationKind::ORDER
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
            pod(pod_id_for(kind), "NVA", kind, hardpoints)
        })
        .collect();

    // a foreign-family pod for mismatch tests
    pods.push(pod(7777, "XXX", LocationKind::RightArm, energy(1)));

    DefinitionData {
        chassis: vec![standard_chassis(), pod_chassis()].trunc_into(),
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

/// The stock upgrade set used by tests.
pub fn stock_upgrades() -> crate::UpgradeSet {
    crate::UpgradeSet::new(2800, 2810, 3000, 3050)
}
