//! Database backup handlers — list, create, restore, download links.
//!
//! These endpoints relay the gateway's admin backup API and pass its
//! response bodies through untouched.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use intranet_core::error::AppError;

use crate::dto::request::RestoreBackupRequest;
use crate::extractors::AuthToken;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQuery {
    /// Stored path of the backup to download.
    pub path: Option<String>,
}

/// GET /api/dash/backup
pub async fn list_backups(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<Json<Value>, AppError> {
    let data = state
        .gateway
        .get_json("admin/database/backups", &[], &token)
        .await?;

    Ok(Json(data))
}

/// POST /api/dash/backup
pub async fn create_backup(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<Json<Value>, AppError> {
    let data = state
        .gateway
        .post_json("admin/database/backup", &json!({}), &token)
        .await?;

    Ok(Json(data))
}

/// POST /api/dash/backup/restore
pub async fn restore_backup(
    State(state): State<AppState>,
    token: AuthToken,
    Json(req): Json<RestoreBackupRequest>,
) -> Result<Json<Value>, AppError> {
    let Some(backup_path) = req.backup_path.filter(|p| !p.is_empty()) else {
        return Err(AppError::validation("Backup path is required"));
    };

    let data = state
        .gateway
        .post_json(
            "admin/database/restore",
            &json!({ "backupPath": backup_path }),
            &token,
        )
        .await?;

    Ok(Json(data))
}

/// GET /api/dash/backup/download
///
/// Returns a download descriptor for a stored backup. The stored path
/// may carry the `database_backups/` storage prefix; only the part
/// after it is meaningful to the gateway.
pub async fn download_backup(
    State(state): State<AppState>,
    token: AuthToken,
    Query(query): Query<DownloadQuery>,
) -> Result<Json<Value>, AppError> {
    let Some(path) = query.path.filter(|p| !p.is_empty()) else {
        return Err(AppError::validation("Backup path is required"));
    };

    let relative = path
        .split_once("database_backups/")
        .map_or(path.as_str(), |(_, rest)| rest);

    let data = state
        .gateway
        .get_json(
            &format!("admin/database/backup/download/{relative}"),
            &[],
            &token,
        )
        .await?;

    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_storage_prefix_is_stripped() {
        let path = "s3://bucket/database_backups/2026/backup.sql.gz";
        let relative = path
            .split_once("database_backups/")
            .map_or(path, |(_, rest)| rest);
        assert_eq!(relative, "2026/backup.sql.gz");

        let bare = "2026/backup.sql.gz";
        let relative = bare
            .split_once("database_backups/")
            .map_or(bare, |(_, rest)| rest);
        assert_eq!(relative, bare);
    }
}
