//! Fixed texts and templates the renderer emits on its own.
//!
//! Every field has a default, so a partial TOML table overrides only what it names.

use std::collections::BTreeMap;

use d2txt_types::CubeActions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub ethereal: String,
    pub enhanced_damage: String,
    pub max_durability: String,
    pub sockets: String,
    pub extra_blood: String,
    pub level_requirement: String,
    /// Diagnostic for an unknown description function: code, then stat name.
    pub unhandled: String,
    /// Names for time-of-day parameters 0..=3.
    pub time_of_day: Vec<String>,
    pub time_of_day_suffix: String,
    pub class_only_separator: String,
    pub cube: CubeConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ethereal: "Ethereal (Cannot be Repaired)".into(),
            enhanced_damage: "+%d%% Enhanced Damage".into(),
            max_durability: "%+d Maximum Durability".into(),
            sockets: "Socketed (%d)".into(),
            extra_blood: "Extra Blood".into(),
            level_requirement: "Required Level: %d".into(),
            unhandled: "<descfunc %d unhandled for %s>".into(),
            time_of_day: ["Day", "Dusk", "Night", "Dawn"].map(String::from).into(),
            time_of_day_suffix: "(Increases near %s)".into(),
            class_only_separator: " ".into(),
            cube: CubeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub any_item: String,
    pub use_item: String,
    pub use_type: String,
    pub portal: String,
    /// `Levels` id the Cow Portal opens to.
    pub cow_level: String,
    pub quantity: String,
    pub socket_count: String,
    /// Qualifier token -> template wrapping the item name (`%s`).
    pub qualifiers: BTreeMap<String, String>,
    /// Output names resolved to fixed text without any lookup.
    pub hardcoded: BTreeMap<String, String>,
    pub prefix: String,
    pub suffix: String,
    pub level: String,
    pub player_level: String,
    pub item_level: String,
    pub chance: String,
    pub actions: ActionLines,
}

impl Default for CubeConfig {
    fn default() -> Self {
        let qualifiers = [
            ("low", "Low Quality %s"),
            ("nor", "Normal %s"),
            ("hiq", "Superior %s"),
            ("mag", "Magic %s"),
            ("set", "Set %s"),
            ("rar", "Rare %s"),
            ("uni", "Unique %s"),
            ("crf", "Crafted %s"),
            ("tmp", "Tempered %s"),
            ("eth", "Ethereal %s"),
            ("noe", "Non-Ethereal %s"),
            ("sock", "Socketed %s"),
            ("nos", "Unsocketed %s"),
            ("bas", "Basic %s"),
            ("exc", "Exceptional %s"),
            ("eli", "Elite %s"),
            ("nru", "%s (not a Runeword)"),
            ("upg", "Upgraded %s"),
            ("lad", "%s (Ladder only)"),
        ];
        let hardcoded = [
            ("Pandemonium Portal", "Portal to Pandemonium"),
            ("Pandemonium Finale Portal", "Portal to the Pandemonium Finale"),
        ];
        Self {
            any_item: "Any Item".into(),
            use_item: "The Same Item".into(),
            use_type: "Item of the Same Type".into(),
            portal: "Portal to %s".into(),
            cow_level: "39".into(),
            quantity: "%s (x%d)".into(),
            socket_count: "%s with %d Sockets".into(),
            qualifiers: qualifiers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            hardcoded: hardcoded
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            prefix: "%s %s".into(),
            suffix: "%s %s".into(),
            level: "Item Level: %d".into(),
            player_level: "Item Level: %d%% of Player Level".into(),
            item_level: "Item Level: %d%% of Input Item Level".into(),
            chance: "%d%% chance: %s".into(),
            actions: ActionLines::default(),
        }
    }
}

/// One line per destructive output qualifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionLines {
    pub destroy_socketed: String,
    pub remove_socketed: String,
    pub regenerate: String,
    pub repair: String,
    pub recharge: String,
}

impl Default for ActionLines {
    fn default() -> Self {
        Self {
            destroy_socketed: "Destroys Socketed Items".into(),
            remove_socketed: "Removes Socketed Items".into(),
            regenerate: "Regenerates Item".into(),
            repair: "Repairs Item".into(),
            recharge: "Recharges Item".into(),
        }
    }
}

impl ActionLines {
    /// Lines for every flag in `actions`, in flag order.
    pub fn lines(&self, actions: CubeActions) -> Vec<String> {
        [
            (CubeActions::DESTROY_SOCKETED, &self.destroy_socketed),
            (CubeActions::REMOVE_SOCKETED, &self.remove_socketed),
            (CubeActions::REGENERATE, &self.regenerate),
            (CubeActions::REPAIR, &self.repair),
            (CubeActions::RECHARGE, &self.recharge),
        ]
        .into_iter()
        .filter(|(flag, _)| actions.contains(*flag))
        .map(|(_, line)| line.clone())
        .collect()
    }
}
