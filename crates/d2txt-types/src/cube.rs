//! Cube recipe records (`CubeMain`).
//!
//! A recipe has up to seven input specifiers and three output blocks: the
//! primary output and the bonus outputs `b` and `c`. Each block carries its
//! own level fields and five chance-gated mod slots.

use bitflags::bitflags;
use serde::Serialize;
use strum::{Display, EnumCount, EnumIter};

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, text};

pub const INPUT_COLUMNS: [&str; 7] = [
    "input 1", "input 2", "input 3", "input 4", "input 5", "input 6", "input 7",
];

/// Column names of one output block.
struct OutputColumns {
    output: &'static str,
    lvl: &'static str,
    plvl: &'static str,
    ilvl: &'static str,
    mods: [(ModSlot, &'static str); 5],
}

const fn cube_mod(
    code: &'static str,
    chance: &'static str,
    param: &'static str,
    min: &'static str,
    max: &'static str,
) -> (ModSlot, &'static str) {
    (ModSlot::new(code, param, min, max), chance)
}

static OUTPUT_A: OutputColumns = OutputColumns {
    output: "output",
    lvl: "lvl",
    plvl: "plvl",
    ilvl: "ilvl",
    mods: [
        cube_mod("mod 1", "mod 1 chance", "mod 1 param", "mod 1 min", "mod 1 max"),
        cube_mod("mod 2", "mod 2 chance", "mod 2 param", "mod 2 min", "mod 2 max"),
        cube_mod("mod 3", "mod 3 chance", "mod 3 param", "mod 3 min", "mod 3 max"),
        cube_mod("mod 4", "mod 4 chance", "mod 4 param", "mod 4 min", "mod 4 max"),
        cube_mod("mod 5", "mod 5 chance", "mod 5 param", "mod 5 min", "mod 5 max"),
    ],
};

static OUTPUT_B: OutputColumns = OutputColumns {
    output: "output b",
    lvl: "b lvl",
    plvl: "b plvl",
    ilvl: "b ilvl",
    mods: [
        cube_mod("b mod 1", "b mod 1 chance", "b mod 1 param", "b mod 1 min", "b mod 1 max"),
        cube_mod("b mod 2", "b mod 2 chance", "b mod 2 param", "b mod 2 min", "b mod 2 max"),
        cube_mod("b mod 3", "b mod 3 chance", "b mod 3 param", "b mod 3 min", "b mod 3 max"),
        cube_mod("b mod 4", "b mod 4 chance", "b mod 4 param", "b mod 4 min", "b mod 4 max"),
        cube_mod("b mod 5", "b mod 5 chance", "b mod 5 param", "b mod 5 min", "b mod 5 max"),
    ],
};

static OUTPUT_C: OutputColumns = OutputColumns {
    output: "output c",
    lvl: "c lvl",
    plvl: "c plvl",
    ilvl: "c ilvl",
    mods: [
        cube_mod("c mod 1", "c mod 1 chance", "c mod 1 param", "c mod 1 min", "c mod 1 max"),
        cube_mod("c mod 2", "c mod 2 chance", "c mod 2 param", "c mod 2 min", "c mod 2 max"),
        cube_mod("c mod 3", "c mod 3 chance", "c mod 3 param", "c mod 3 min", "c mod 3 max"),
        cube_mod("c mod 4", "c mod 4 chance", "c mod 4 param", "c mod 4 min", "c mod 4 max"),
        cube_mod("c mod 5", "c mod 5 chance", "c mod 5 param", "c mod 5 min", "c mod 5 max"),
    ],
};

/// Which output block of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, Display)]
pub enum OutputSlot {
    #[strum(to_string = "a")]
    Primary,
    #[strum(to_string = "b")]
    B,
    #[strum(to_string = "c")]
    C,
}

impl OutputSlot {
    fn columns(self) -> &'static OutputColumns {
        match self {
            Self::Primary => &OUTPUT_A,
            Self::B => &OUTPUT_B,
            Self::C => &OUTPUT_C,
        }
    }
}

/// A mod slot of an output block with its (raw) chance column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CubeMod {
    pub property: PropertyReference,
    pub chance: String,
}

/// One output block of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CubeOutput {
    pub output: String,
    pub lvl: String,
    pub plvl: String,
    pub ilvl: String,
    pub mods: Vec<CubeMod>,
}

impl CubeOutput {
    fn read(row: &dyn Columns, slot: OutputSlot) -> Self {
        let cols = slot.columns();
        Self {
            output: text(row, cols.output),
            lvl: text(row, cols.lvl),
            plvl: text(row, cols.plvl),
            ilvl: text(row, cols.ilvl),
            mods: cols
                .mods
                .iter()
                .filter_map(|(mod_slot, chance)| {
                    mod_slot.read(row).map(|property| CubeMod {
                        property,
                        chance: text(row, chance),
                    })
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// A row of `CubeMain`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CubeRecipe {
    pub description: String,
    pub enabled: String,
    /// Non-blank input specifiers in column order.
    pub inputs: Vec<String>,
    pub outputs: [CubeOutput; 3],
}

impl CubeRecipe {
    pub fn is_enabled(&self) -> bool {
        self.enabled == "1"
    }

    pub fn output(&self, slot: OutputSlot) -> &CubeOutput {
        &self.outputs[slot as usize]
    }
}

impl FromColumns for CubeRecipe {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            description: text(row, "description"),
            enabled: text(row, "enabled"),
            inputs: INPUT_COLUMNS
                .iter()
                .map(|c| text(row, c))
                .filter(|i| !i.is_empty())
                .collect(),
            outputs: [
                CubeOutput::read(row, OutputSlot::Primary),
                CubeOutput::read(row, OutputSlot::B),
                CubeOutput::read(row, OutputSlot::C),
            ],
        }
    }
}

bitflags! {
    /// Destructive output qualifiers, each adding one fixed line to the output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct CubeActions: u8 {
        const DESTROY_SOCKETED = 0x01;
        const REMOVE_SOCKETED  = 0x02;
        const REGENERATE       = 0x04;
        const REPAIR           = 0x08;
        const RECHARGE         = 0x10;
    }
}

impl CubeActions {
    /// The flag for an output qualifier token (`uns`, `rem`, `reg`, `rep`, `rch`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "uns" => Some(Self::DESTROY_SOCKETED),
            "rem" => Some(Self::REMOVE_SOCKETED),
            "reg" => Some(Self::REGENERATE),
            "rep" => Some(Self::REPAIR),
            "rch" => Some(Self::RECHARGE),
            _ => None,
        }
    }
}
