use std::path::Path;

use crate::table::Table;
use crate::{DataError, read_table};

/// Column holding the lookup key in every string table.
pub const KEY_COLUMN: &str = "Key";

/// All loaded localized-string tables, searched in load order.
#[derive(Debug, Clone, Default)]
pub struct StringTables {
    tables: Vec<(String, Table)>,
}

impl StringTables {
    pub fn new(tables: Vec<(String, Table)>) -> Self {
        Self { tables }
    }

    /// Load every `*.txt` file under `dir`, in file-name order.
    pub fn load_dir(dir: &Path) -> Result<Self, DataError> {
        let entries = std::fs::read_dir(dir).map_err(|source| DataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt")))
            .collect();
        files.sort();

        let mut tables = Vec::with_capacity(files.len());
        for path in files {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let table = read_table(&path)?;
            log::debug!("{}: {} strings", path.display(), table.len());
            tables.push((name, table));
        }
        Ok(Self { tables })
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// The `language` text of the first entry whose key matches `key`, ignoring case.
    pub fn find(&self, key: &str, language: &str) -> Option<&str> {
        self.tables.iter().find_map(|(_, table)| {
            table
                .rows()
                .find(|row| row.get(KEY_COLUMN).eq_ignore_ascii_case(key))
                .map(|row| row.get(language))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> StringTables {
        let base = Table::parse("Key\tenUS\tdeDE\nstrength\tto Strength\tzu Stärke\n")
            .expect("parse base");
        let patch = Table::parse("Key\tenUS\nStrength\tshadowed\nModStr1j\tFire Resist\n")
            .expect("parse patch");
        StringTables::new(vec![("base".into(), base), ("patch".into(), patch)])
    }

    #[test]
    fn first_table_wins() {
        assert_eq!(tables().find("STRENGTH", "enUS"), Some("to Strength"));
    }

    #[test]
    fn other_language_column() {
        assert_eq!(tables().find("strength", "deDE"), Some("zu Stärke"));
    }

    #[test]
    fn later_tables_are_searched() {
        assert_eq!(tables().find("modstr1j", "enUS"), Some("Fire Resist"));
        assert_eq!(tables().find("nope", "enUS"), None);
    }
}
