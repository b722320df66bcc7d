use std::{fs, path::Path};

use serde::Serialize;

use crate::utils::write_atomic;

use super::{DatasetSnapshot, Result, SnapshotSource};

/// Snapshot store backed by plain JSON files on disk.
#[derive(Debug, Clone, Default)]
pub struct JsonStore;

impl JsonStore {
    pub fn new() -> Self {
        Self
    }

    /// Serializes any report or statement to pretty JSON at `path`, staging
    /// through a temporary file.
    pub fn export<T: Serialize>(&self, value: &T, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(path, &json)
    }
}

impl SnapshotSource for JsonStore {
    fn load_snapshot(&self, path: &Path) -> Result<DatasetSnapshot> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
