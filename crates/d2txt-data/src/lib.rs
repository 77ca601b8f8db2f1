pub mod dataset;
pub mod strings;
pub mod table;

use std::path::{Path, PathBuf};

pub use dataset::{Dataset, TableName};
pub use strings::StringTables;
pub use table::{Row, Table, TableError};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Table { path: PathBuf, source: TableError },
}

/// Read and parse one table file. Bytes that are not UTF-8 are replaced.
pub fn read_table(path: &Path) -> Result<Table, DataError> {
    let bytes = std::fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Table::parse(&String::from_utf8_lossy(&bytes)).map_err(|source| DataError::Table {
        path: path.to_path_buf(),
        source,
    })
}
