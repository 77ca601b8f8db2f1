pub mod affix;
pub mod char_class;
pub mod columns;
pub mod cube;
pub mod gem;
pub mod item;
pub mod level;
pub mod monster;
pub mod property;
pub mod runeword;
pub mod set;
pub mod skill;
pub mod stat;
pub mod unique;

pub use affix::MagicAffix;
pub use char_class::{CharClass, CharStats};
pub use columns::{Columns, FromColumns, ModSlot, PropertyReference, parse_code, parse_number};
pub use cube::{CubeActions, CubeMod, CubeOutput, CubeRecipe, OutputSlot};
pub use gem::Gem;
pub use item::{BaseItem, ItemKind, ItemType};
pub use level::LevelDef;
pub use monster::{MonStat, MonType};
pub use property::{PROPERTY_SLOTS, PropertyDef, PropertySlot};
pub use runeword::Runeword;
pub use set::{ItemSet, SetItem};
pub use skill::{Skill, SkillDesc};
pub use stat::{DescFormat, ItemStat};
pub use unique::UniqueItem;
