//! Request DTOs.

use serde::Deserialize;
use serde_json::Value;

/// Body of `PUT /api/dash/clients`.
///
/// The client payload is deliberately schemaless: the backend owns the
/// client shape, and this layer only strips fields it must not forward.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientUpdateRequest {
    /// The client object to update; must carry an `id`.
    #[serde(default)]
    pub client: Value,
}

/// Body of `POST /api/dash/backup/restore`.
#[derive(Debug, Clone, Deserialize)]
pub struct RestoreBackupRequest {
    /// Path of the backup to restore.
    #[serde(rename = "backupPath", default)]
    pub backup_path: Option<String>,
}
