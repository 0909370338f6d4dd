//! The mutable loadout model.

use mech_data::Database;
use mech_data::chassis::{Chassis, ChassisKind, LocationKind, LocationSpec};
use mech_data::item::{Hardpoints, Item};
use mech_data::module::Module;
use mech_data::pod::Pod;
use mech_data::upgrade::{Upgrade, UpgradeKind};

use crate::error::EquipError;
use crate::flags::{ActuatorState, Efficiencies};

/// The side of a location armor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    /// Only valid for two-sided locations.
    Back,
}

/// The four upgrade selections of a loadout, stored as upgrade IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSet {
    pub structure: u32,
    pub armor: u32,
    pub heat_sink: u32,
    pub guidance: u32,
}

impl UpgradeSet {
    /// Creates a set from the four slot IDs.
    #[must_use]
    pub const fn new(structure: u32, armor: u32, heat_sink: u32, guidance: u32) -> Self {
        Self {
            structure,
            armor,
            heat_sink,
            guidance,
        }
    }

    /// Gets the upgrade ID for a slot.
    #[must_use]
    pub const fn get(self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Structure => self.structure,
            UpgradeKind::Armor => self.armor,
            UpgradeKind::HeatSink => self.heat_sink,
            UpgradeKind::Guidance => self.guidance,
        }
    }

    /// Replaces the upgrade ID for a slot.
    pub const fn set(&mut self, kind: UpgradeKind, id: u32) {
        match kind {
            UpgradeKind::Structure => self.structure = id,
            UpgradeKind::Armor => self.armor = id,
            UpgradeKind::HeatSink => self.heat_sink = id,
            UpgradeKind::Guidance => self.guidance = id,
        }
    }
}

/// One location component of a [`Loadout`].
#[derive(Debug, Clone)]
pub struct LocationSlot<'d> {
    spec: &'d LocationSpec,
    pod: Option<&'d Pod>,
    armor_front: u8,
    armor_back: u8,
    /// Chassis- or pod-fixed items. Reconstructed, never serialized.
    fixed: Vec<&'d Item>,
    /// Explicitly equipped items, in equip order.
    items: Vec<&'d Item>,
}

impl<'d> LocationSlot<'d> {
    fn new(spec: &'d LocationSpec, fixed: Vec<&'d Item>) -> Self {
        Self {
            spec,
            pod: None,
            armor_front: 0,
            armor_back: 0,
            fixed,
            items: Vec::new(),
        }
    }

    /// Which location this is.
    #[must_use]
    pub fn kind(&self) -> LocationKind {
        self.spec.kind
    }

    /// The static location definition.
    #[must_use]
    pub fn spec(&self) -> &'d LocationSpec {
        self.spec
    }

    /// The mounted pod, if any.
    #[must_use]
    pub fn pod(&self) -> Option<&'d Pod> {
        self.pod
    }

    /// The armor value for a side.
    ///
    /// The back of a single-sided location is always 0.
    #[must_use]
    pub fn armor(&self, side: Side) -> u8 {
        match side {
            Side::Front => self.armor_front,
            Side::Back => self.armor_back,
        }
    }

    /// The explicitly equipped items, in equip order.
    #[must_use]
    pub fn items(&self) -> &[&'d Item] {
        &self.items
    }

    /// The chassis- or pod-fixed items.
    #[must_use]
    pub fn fixed_items(&self) -> &[&'d Item] {
        &self.fixed
    }

    /// The effective hardpoints: the pod's on swappable chassis, the
    /// location spec's otherwise. A podless swappable location has none.
    #[must_use]
    pub fn hardpoints(&self, chassis_kind: ChassisKind) -> Hardpoints {
        match chassis_kind {
            ChassisKind::Standard => self.spec.hardpoints,
            ChassisKind::Swappable => self.pod.map_or(Hardpoints::NONE, |p| p.hardpoints),
        }
    }

    fn used_slots(&self) -> u32 {
        self.fixed
            .iter()
            .chain(&self.items)
            .map(|i| u32::from(i.slots))
            .sum()
    }
}

/// A fully configured combat vehicle instance.
///
/// Borrows all reference data from the [`Database`] it was created with;
/// the loadout itself only holds selections and armor values.
#[derive(Debug, Clone)]
pub struct Loadout<'d> {
    db: &'d Database,
    chassis: &'d Chassis,
    /// One slot per [`LocationKind::ORDER`] entry, in that order.
    slots: Vec<LocationSlot<'d>>,
    upgrades: UpgradeSet,
    efficiencies: Efficiencies,
    actuators: ActuatorState,
    modules: Vec<&'d Module>,
}

impl<'d> Loadout<'d> {
    /// Creates an empty loadout shell for a chassis.
    ///
    /// Resolves the chassis-fixed items for every location.
    ///
    /// # Errors
    ///
    /// Fails if the chassis lacks one of the eight locations or a fixed
    /// item ID does not resolve.
    pub fn new(
        db: &'d Database,
        chassis: &'d Chassis,
        upgrades: UpgradeSet,
    ) -> Result<Self, EquipError> {
        let mut slots = Vec::with_capacity(LocationKind::ORDER.len());
        for &kind in LocationKind::ORDER {
            let spec = chassis
                .location(kind)
                .ok_or(EquipError::MissingLocation { kind })?;

            let fixed = resolve_items(db, &spec.fixed_item_ids)?;
            slots.push(LocationSlot::new(spec, fixed));
        }

        Ok(Self {
            db,
            chassis,
            slots,
            upgrades,
            efficiencies: Efficiencies::empty(),
            actuators: ActuatorState::empty(),
            modules: Vec::new(),
        })
    }

    /// The reference database this loadout resolves against.
    #[must_use]
    pub fn database(&self) -> &'d Database {
        self.db
    }

    /// The loadout's chassis.
    #[must_use]
    pub fn chassis(&self) -> &'d Chassis {
        self.chassis
    }

    /// The location component for a kind.
    #[must_use]
    pub fn location(&self, kind: LocationKind) -> &LocationSlot<'d> {
        &self.slots[order_index(kind)]
    }

    /// All location components, in canonical order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationSlot<'d>> {
        self.slots.iter()
    }

    /// The upgrade selections.
    #[must_use]
    pub fn upgrades(&self) -> UpgradeSet {
        self.upgrades
    }

    /// The pilot talents.
    #[must_use]
    pub fn efficiencies(&self) -> Efficiencies {
        self.efficiencies
    }

    /// The arm actuator toggles.
    #[must_use]
    pub fn actuators(&self) -> ActuatorState {
        self.actuators
    }

    /// The equipped auxiliary modules.
    #[must_use]
    pub fn modules(&self) -> &[&'d Module] {
        &self.modules
    }

    /// The total mass of all fixed and equipped items in tons.
    #[must_use]
    pub fn total_tonnage(&self) -> f64 {
        self.slots
            .iter()
            .flat_map(|s| s.fixed.iter().chain(&s.items))
            .map(|i| i.tonnage)
            .sum()
    }

    /// Sets one armor value.
    ///
    /// # Errors
    ///
    /// Rejects values beyond the location's maximum (no clamping) and back
    /// armor on single-sided locations.
    pub fn set_armor(&mut self, kind: LocationKind, side: Side, value: u8) -> Result<(), EquipError> {
        let slot = &mut self.slots[order_index(kind)];
        if value > slot.spec.max_armor {
            return Err(EquipError::ArmorOutOfRange {
                location: kind,
                value,
                max: slot.spec.max_armor,
            });
        }

        match side {
            Side::Front => slot.armor_front = value,
            Side::Back if slot.spec.kind.two_sided() => slot.armor_back = value,
            Side::Back => return Err(EquipError::NoBackArmor { location: kind }),
        }

        Ok(())
    }

    /// Equips an item to a location.
    ///
    /// # Errors
    ///
    /// Rejects internal items and items the location cannot accept
    /// (hardpoints, slots) or the chassis cannot carry (tonnage).
    pub fn equip(&mut self, kind: LocationKind, item: &'d Item) -> Result<(), EquipError> {
        if item.is_internal() {
            return Err(EquipError::InternalItem {
                item_id: item.item_id,
            });
        }

        let chassis_kind = self.chassis.kind;
        let total = self.total_tonnage();
        let slot = &mut self.slots[order_index(kind)];

        if let Some(hardpoint) = item.kind.hardpoint() {
            let used = slot
                .items
                .iter()
                .filter(|i| i.kind.hardpoint() == Some(hardpoint))
                .count();
            let capacity = usize::from(slot.hardpoints(chassis_kind).count(hardpoint));
            if used >= capacity {
                return Err(EquipError::HardpointsExhausted {
                    location: kind,
                    item_id: item.item_id,
                });
            }
        }

        if slot.used_slots() + u32::from(item.slots) > u32::from(slot.spec.slots) {
            return Err(EquipError::SlotsExhausted {
                location: kind,
                item_id: item.item_id,
            });
        }

        if total + item.tonnage > self.chassis.max_tonnage {
            return Err(EquipError::TonnageExceeded {
                item_id: item.item_id,
            });
        }

        slot.items.push(item);
        Ok(())
    }

    /// Mounts a pod to a location of a swappable chassis.
    ///
    /// Replaces the location's fixed items with the pod's and clears any
    /// explicitly equipped items.
    ///
    /// # Errors
    ///
    /// Rejects pods on standard chassis, pods of a foreign chassis family,
    /// and pods made for a different location.
    pub fn set_pod(&mut self, kind: LocationKind, pod: &'d Pod) -> Result<(), EquipError> {
        if self.chassis.kind != ChassisKind::Swappable {
            return Err(EquipError::PodOnStandardChassis { pod_id: pod.pod_id });
        }

        if pod.family != self.chassis.family {
            return Err(EquipError::PodFamilyMismatch { pod_id: pod.pod_id });
        }

        if pod.location != kind {
            return Err(EquipError::PodLocationMismatch {
                pod_id: pod.pod_id,
                location: kind,
            });
        }

        let fixed = resolve_items(self.db, &pod.fixed_item_ids)?;
        let slot = &mut self.slots[order_index(kind)];
        slot.pod = Some(pod);
        slot.fixed = fixed;
        slot.items.clear();
        Ok(())
    }

    /// Selects an upgrade, replacing the previous one of the same kind.
    pub fn set_upgrade(&mut self, upgrade: &'d Upgrade) {
        self.upgrades.set(upgrade.kind, upgrade.upgrade_id);
    }

    /// Replaces the pilot talents.
    pub fn set_efficiencies(&mut self, efficiencies: Efficiencies) {
        self.efficiencies = efficiencies;
    }

    /// Replaces the arm actuator toggles.
    pub fn set_actuators(&mut self, actuators: ActuatorState) {
        self.actuators = actuators;
    }

    /// Adds an auxiliary module.
    ///
    /// # Errors
    ///
    /// Rejects a module that is already equipped.
    pub fn add_module(&mut self, module: &'d Module) -> Result<(), EquipError> {
        if self.modules.iter().any(|m| m.module_id == module.module_id) {
            return Err(EquipError::DuplicateModule {
                module_id: module.module_id,
            });
        }

        self.modules.push(module);
        Ok(())
    }
}

/// Position of a location in [`LocationKind::ORDER`].
fn order_index(kind: LocationKind) -> usize {
    // ORDER is the declaration order, so the discriminant is the index.
    kind as usize
}

fn resolve_items<'d>(db: &'d Database, ids: &[u32]) -> Result<Vec<&'d Item>, EquipError> {
    ids.iter().map(|&id| Ok(db.item(id)?)).collect()
}
