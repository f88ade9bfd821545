/// File-backed birthday storage
mod birthday;

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::BirthdayRecord;

/// Errors that can occur while persisting the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write birthdays file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize birthdays: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-memory birthday map, mirrored to a JSON file on every change
///
/// The file is only read once in [`BirthdayStore::load`]; afterwards the
/// in-memory map is authoritative and the file is rewritten as a whole.
pub struct BirthdayStore {
    path: PathBuf,
    records: DashMap<String, BirthdayRecord>,
    // Serializes saves; every save goes through the same temp file
    save_lock: Mutex<()>,
}

impl BirthdayStore {
    /// Load the store from `path`, starting empty if the file is missing or unreadable
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let records = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                match serde_json::from_str::<BTreeMap<String, BirthdayRecord>>(&content) {
                    Ok(map) => {
                        info!("Loaded {} birthday(s) from {}", map.len(), path.display());
                        map.into_iter().collect()
                    }
                    Err(e) => {
                        warn!(
                            "Error loading birthdays file {}, starting fresh: {}",
                            path.display(),
                            e
                        );
                        DashMap::new()
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No birthdays file at {}, starting fresh", path.display());
                DashMap::new()
            }
            Err(e) => {
                warn!(
                    "Failed to read birthdays file {}, starting fresh: {}",
                    path.display(),
                    e
                );
                DashMap::new()
            }
        };

        Self {
            path,
            records,
            save_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole map to disk, replacing the previous file
    ///
    /// Concurrent callers are written one after another; each one snapshots the
    /// map after taking the lock, so the last save to finish holds every change
    /// made before it started.
    pub async fn save(&self) -> Result<(), StoreError> {
        let _guard = self.save_lock.lock().await;

        let snapshot: BTreeMap<String, BirthdayRecord> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let content = serde_json::to_string_pretty(&snapshot)?;
        atomic_write(&self.path, &content).await?;
        Ok(())
    }
}

/// `<file>.tmp`, in the same directory as the target
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomic write: write to temp file, then rename.
async fn atomic_write(path: &Path, content: &str) -> Result<(), std::io::Error> {
    let tmp_path = tmp_path_for(path);
    tokio::fs::write(&tmp_path, content.as_bytes()).await?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e);
    }
    Ok(())
}
