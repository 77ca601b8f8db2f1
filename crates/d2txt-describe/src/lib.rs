//! Turns the property slots of items, sets, runewords, affixes, gems and cube
//! recipes into ordered, human-readable description lines.
//!
//! The pipeline is [`expand_properties`] (property codes to stat entries) then
//! [`Context::render_descriptions`] (stat entries to sorted text). Lookups
//! never fail: unresolved references become `<code>` placeholders or are
//! dropped.

pub mod config;
pub mod cube;
mod descfunc;
pub mod entities;
pub mod expand;
pub mod format;
pub mod localize;
pub mod lookup;
pub mod render;

use d2txt_data::Dataset;
use d2txt_types::PropertyReference;

pub use config::{ActionLines, CubeConfig, RenderConfig};
pub use cube::RecipeSummary;
pub use entities::{GemDescription, RunewordDescription, SetDescription, SetItemDescription};
pub use expand::{EntryStat, ItemStatEntry, expand_properties};
pub use format::{Arg, format_number, format_positional, format_range};
pub use localize::Localizer;
pub use render::{DescriptionLine, finalize};

/// Everything a rendering call reads: the dataset, the strings and the templates.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub data: &'a Dataset,
    pub strings: &'a Localizer,
    pub config: &'a RenderConfig,
}

impl<'a> Context<'a> {
    pub fn new(data: &'a Dataset, strings: &'a Localizer, config: &'a RenderConfig) -> Self {
        Self {
            data,
            strings,
            config,
        }
    }

    /// Expand then render `refs`.
    pub fn describe(&self, refs: &[PropertyReference]) -> Vec<String> {
        self.render_descriptions(&expand_properties(self.data, refs))
    }
}
