//! Theme preference storage
//!
//! Two string entries in the `preferences` table, named after the browser
//! storage keys the dashboard front end already uses:
//!
//! | Key | Value |
//! |-----|-------|
//! | `dabbzoTheme` | JSON `ThemeColors` |
//! | `dabbzoThemeMode` | `light` / `dark` |

use crate::db::StorageResult;
use redb::{Database, ReadableDatabase, TableDefinition};
use shared::models::{ThemeColors, ThemeMode};
use std::sync::Arc;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

pub const COLORS_KEY: &str = "dabbzoTheme";
pub const MODE_KEY: &str = "dabbzoThemeMode";

/// Raw stored values; parsing happens in the service so bad data can fall back
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoredTheme {
    pub colors: Option<String>,
    pub mode: Option<String>,
}

#[derive(Clone)]
pub struct ThemeStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore").finish_non_exhaustive()
    }
}

impl ThemeStore {
    pub fn new(db: Arc<Database>) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db })
    }

    pub fn load(&self) -> StorageResult<StoredTheme> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let colors = table.get(COLORS_KEY)?.map(|v| v.value().to_string());
        let mode = table.get(MODE_KEY)?.map(|v| v.value().to_string());
        Ok(StoredTheme { colors, mode })
    }

    /// Write both entries in one transaction
    pub fn save(&self, colors: &ThemeColors, mode: ThemeMode) -> StorageResult<()> {
        let json = serde_json::to_string(colors)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(COLORS_KEY, json.as_str())?;
            table.insert(MODE_KEY, mode.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Overwrite a single raw entry
    #[cfg(test)]
    pub fn put_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
