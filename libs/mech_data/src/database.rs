//! Id-indexed lookup services over the definition data.
//!
//! The original tooling resolved IDs through process-wide static tables;
//! here the [`Database`] is an explicit immutable service handed to the
//! codecs, so encode/decode stay pure functions of their inputs.

use std::collections::HashMap;

use crate::DefinitionData;
use crate::chassis::Chassis;
use crate::data_def::define_data_enum;
use crate::item::Item;
use crate::module::Module;
use crate::pod::Pod;
use crate::upgrade::Upgrade;

define_data_enum! {
    /// The entity families a [`Database`] indexes.
    pub enum EntityKind for EntityKindData {
        /// A lowercase label for error messages.
        pub label: &'static str;

        Chassis("chassis"),
        Item("item"),
        Upgrade("upgrade"),
        Pod("pod"),
        Module("module"),
    }
}

/// Error resolving reference data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DataError {
    /// No entity with the given ID exists.
    #[error("unknown {} id {id}", kind.label())]
    UnknownId {
        /// The entity family that was queried.
        kind: EntityKind,
        /// The ID that failed to resolve.
        id: u32,
    },
    /// The definition data declared the same ID twice.
    #[error("duplicate {} id {id} in definition data", kind.label())]
    DuplicateId {
        /// The entity family the duplicate was found in.
        kind: EntityKind,
        /// The duplicated ID.
        id: u32,
    },
}

/// Immutable id-indexed view over [`DefinitionData`].
#[derive(Debug, Default)]
pub struct Database {
    chassis: Vec<Chassis>,
    items: Vec<Item>,
    upgrades: Vec<Upgrade>,
    pods: Vec<Pod>,
    modules: Vec<Module>,
    chassis_by_id: HashMap<u32, usize>,
    item_by_id: HashMap<u32, usize>,
    upgrade_by_id: HashMap<u32, usize>,
    pod_by_id: HashMap<u32, usize>,
    module_by_id: HashMap<u32, usize>,
}

/// Builds an id-to-index map, rejecting duplicate IDs.
fn index_by_id<T>(
    entries: &[T],
    kind: EntityKind,
    id_of: impl Fn(&T) -> u32,
) -> Result<HashMap<u32, usize>, DataError> {
    let mut map = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = id_of(entry);
        if map.insert(id, index).is_some() {
            return Err(DataError::DuplicateId { kind, id });
        }
    }

    Ok(map)
}

impl Database {
    /// Indexes the definition data.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateId`] if any entity family declares the
    /// same ID twice.
    pub fn from_definition(data: DefinitionData) -> Result<Self, DataError> {
        let chassis = data.chassis.into_vec();
        let items = data.items.into_vec();
        let upgrades = data.upgrades.into_vec();
        let pods = data.pods.into_vec();
        let modules = data.modules.into_vec();

        Ok(Self {
            chassis_by_id: index_by_id(&chassis, EntityKind::Chassis, |c| c.chassis_id)?,
            item_by_id: index_by_id(&items, EntityKind::Item, |i| i.item_id)?,
            upgrade_by_id: index_by_id(&upgrades, EntityKind::Upgrade, |u| u.upgrade_id)?,
            pod_by_id: index_by_id(&pods, EntityKind::Pod, |p| p.pod_id)?,
            module_by_id: index_by_id(&modules, EntityKind::Module, |m| m.module_id)?,
            chassis,
            items,
            upgrades,
            pods,
            modules,
        })
    }

    /// Looks up a chassis by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownId`] if the ID does not resolve.
    pub fn chassis(&self, id: u32) -> Result<&Chassis, DataError> {
        lookup(&self.chassis, &self.chassis_by_id, EntityKind::Chassis, id)
    }

    /// Looks up an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownId`] if the ID does not resolve.
    pub fn item(&self, id: u32) -> Result<&Item, DataError> {
        lookup(&self.items, &self.item_by_id, EntityKind::Item, id)
    }

    /// Looks up an upgrade by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownId`] if the ID does not resolve.
    pub fn upgrade(&self, id: u32) -> Result<&Upgrade, DataError> {
        lookup(&self.upgrades, &self.upgrade_by_id, EntityKind::Upgrade, id)
    }

    /// Looks up a pod by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownId`] if the ID does not resolve.
    pub fn pod(&self, id: u32) -> Result<&Pod, DataError> {
        lookup(&self.pods, &self.pod_by_id, EntityKind::Pod, id)
    }

    /// Looks up a module by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownId`] if the ID does not resolve.
    pub fn module(&self, id: u32) -> Result<&Module, DataError> {
        lookup(&self.modules, &self.module_by_id, EntityKind::Module, id)
    }

    /// Finds a chassis by its display name, ignoring ASCII case.
    #[must_use]
    pub fn chassis_by_name(&self, name: &str) -> Option<&Chassis> {
        self.chassis.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All known chassis, in definition order.
    #[must_use]
    pub fn all_chassis(&self) -> &[Chassis] {
        &self.chassis
    }
}

fn lookup<'d, T>(
    entries: &'d [T],
    by_id: &HashMap<u32, usize>,
    kind: EntityKind,
    id: u32,
) -> Result<&'d T, DataError> {
    by_id
        .get(&id)
        .and_then(|&index| entries.get(index))
        .ok_or(DataError::UnknownId { kind, id })
}
