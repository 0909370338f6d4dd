//! Build recipes: the JSON input the `encode` command turns into a
//! loadout.
//!
//! A recipe goes through the same builder sink as link decoding, so it
//! is validated against the exact same rules.

use mech_data::Database;
use mech_data::chassis::LocationKind;
use mech_loadout::{
    ActuatorState, Efficiencies, Loadout, LoadoutBuilder, LoadoutOp, Side, UpgradeSet,
};
use serde::Deserialize;

/// The four upgrade selections; defaults to the stock IDs.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RecipeUpgrades {
    pub structure: u32,
    pub armor: u32,
    pub heat_sink: u32,
    pub guidance: u32,
}

impl Default for RecipeUpgrades {
    fn default() -> Self {
        Self {
            structure: 2800,
            armor: 2810,
            heat_sink: 3000,
            guidance: 3050,
        }
    }
}

impl From<RecipeUpgrades> for UpgradeSet {
    fn from(value: RecipeUpgrades) -> Self {
        Self::new(value.structure, value.armor, value.heat_sink, value.guidance)
    }
}

/// Armor values for one location.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecipeArmor {
    pub location: LocationKind,
    pub front: u8,
    #[serde(default)]
    pub back: u8,
}

/// A pod selection for one location of a swappable chassis.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecipePod {
    pub location: LocationKind,
    pub pod_id: u32,
}

/// An item equipped to one location.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecipeItem {
    pub location: LocationKind,
    pub item_id: u32,
}

/// A complete build described by ID.
#[derive(Debug, Deserialize)]
pub struct BuildRecipe {
    /// The chassis display name.
    pub chassis: String,
    #[serde(default)]
    pub upgrades: RecipeUpgrades,
    #[serde(default)]
    pub efficiencies: Efficiencies,
    #[serde(default)]
    pub actuators: ActuatorState,
    #[serde(default)]
    pub armor: Vec<RecipeArmor>,
    #[serde(default)]
    pub pods: Vec<RecipePod>,
    #[serde(default)]
    pub items: Vec<RecipeItem>,
    #[serde(default)]
    pub modules: Vec<u32>,
}

impl BuildRecipe {
    /// Builds the loadout this recipe describes.
    ///
    /// # Errors
    ///
    /// Fails if the chassis name is unknown or any queued mutation is
    /// rejected.
    pub fn build<'d>(&self, db: &'d Database) -> anyhow::Result<Loadout<'d>> {
        let chassis = db
            .chassis_by_name(&self.chassis)
            .ok_or_else(|| anyhow::anyhow!("no chassis named `{}`", self.chassis))?;
        let shell = Loadout::new(db, chassis, self.upgrades.into())?;

        let mut builder = LoadoutBuilder::new();
        builder.push(LoadoutOp::SetEfficiencies {
            efficiencies: self.efficiencies,
        });
        builder.push(LoadoutOp::SetActuators {
            actuators: self.actuators,
        });
        for pod in &self.pods {
            builder.push(LoadoutOp::SetPod {
                location: pod.location,
                pod_id: pod.pod_id,
            });
        }
        for armor in &self.armor {
            builder.push(LoadoutOp::SetArmor {
                location: armor.location,
                side: Side::Front,
                value: armor.front,
            });
            if armor.location.two_sided() {
                builder.push(LoadoutOp::SetArmor {
                    location: armor.location,
                    side: Side::Back,
                    value: armor.back,
                });
            }
        }
        for item in &self.items {
            builder.push(LoadoutOp::AddItem {
                location: item.location,
                item_id: item.item_id,
            });
        }
        for &module_id in &self.modules {
            builder.push(LoadoutOp::AddModule { module_id });
        }

        Ok(builder.apply(shell)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipes_parse_with_defaults() {
        let recipe: BuildRecipe = serde_json::from_str(
            r#"{
                "chassis": "HBK-4P",
                "efficiencies": 3,
                "armor": [{ "location": "CenterTorso", "front": 40, "back": 16 }],
                "items": [{ "location": "RightArm", "item_id": 1001 }],
                "modules": [9001]
            }"#,
        )
        .expect("recipe parses");

        assert_eq!(recipe.chassis, "HBK-4P");
        assert_eq!(recipe.upgrades.structure, 2800);
        assert!(recipe.efficiencies.contains(Efficiencies::COOL_RUN));
        assert!(recipe.pods.is_empty());
        assert_eq!(recipe.modules, [9001]);
    }
}
