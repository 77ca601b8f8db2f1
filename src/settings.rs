//! Run settings: a TOML file, then `D2TXT__*` environment overrides.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use config::{Config, Environment, File, FileFormat};
use d2txt_describe::RenderConfig;
use d2txt_describe::localize::DEFAULT_LANGUAGE;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the `*.txt` Excel tables.
    pub data_dir: PathBuf,
    /// Directory holding the string tables.
    pub strings_dir: PathBuf,
    pub language: String,
    pub render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/global/excel"),
            strings_dir: PathBuf::from("data/local/lng/strings"),
            language: DEFAULT_LANGUAGE.to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings; a missing `file` is only an error when it was named explicitly.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match file {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                builder = builder
                    .add_source(File::new("d2txt", FileFormat::Toml).required(false));
            }
        }
        builder
            .add_source(Environment::with_prefix("D2TXT").separator("__"))
            .build()
            .and_then(|config| config.try_deserialize::<Settings>())
            .wrap_err("reading settings")
    }
}
