//! Cluster database backup and restore.
//!
//! Backup and restore run in the background on the leader. Start one, then
//! poll [`Scheduler0Client::get_backup_restore_progress`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::account::AccountScoped;
use crate::client::{RequestOptions, Scheduler0Client};
use crate::error::Result;
use crate::method::RestMethod;
use crate::response::Envelope;

/// Which background operation a progress report describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BackupOperation {
    #[default]
    Backup,
    Restore,
    BackupToFile,
    /// A value this client does not know.
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a backup or restore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BackupStatus {
    #[default]
    Idle,
    InProgress,
    Completed,
    Failed,
    /// A value this client does not know.
    #[serde(other)]
    Unknown,
}

impl BackupStatus {
    /// Returns `true` once the operation has stopped, successfully or not.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Progress of the most recent backup or restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupRestoreProgress {
    pub operation_type: BackupOperation,
    pub status: BackupStatus,
    /// Percentage, 0 to 100.
    pub progress: i64,
    /// Progress note, or the failure reason.
    pub message: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Where the backup was written.
    pub backup_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupToFileRequest<'a> {
    dest_path: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RestoreRequest<'a> {
    backup_path: &'a str,
}

impl AccountScoped for BackupToFileRequest<'_> {}
impl AccountScoped for RestoreRequest<'_> {}

/// Acknowledgement returned when an operation starts.
pub type BackupRestoreAck = Envelope<BTreeMap<String, String>>;

impl Scheduler0Client {
    /// Starts a backup of the cluster database.
    pub async fn backup_database(&self) -> Result<BackupRestoreAck> {
        self.fetch(RestMethod::Post, "/cluster/backup", RequestOptions::new())
            .await
    }

    /// Starts a backup written to `dest_path` on the server.
    pub async fn backup_database_to_file(&self, dest_path: &str) -> Result<BackupRestoreAck> {
        self.send(
            RestMethod::Post,
            "/cluster/backup-to-file",
            &BackupToFileRequest { dest_path },
            RequestOptions::new(),
        )
        .await
    }

    /// Starts restoring the cluster database from `backup_path`.
    pub async fn restore_database(&self, backup_path: &str) -> Result<BackupRestoreAck> {
        self.send(
            RestMethod::Post,
            "/cluster/restore",
            &RestoreRequest { backup_path },
            RequestOptions::new(),
        )
        .await
    }

    /// Reads the progress of the current or last operation.
    pub async fn get_backup_restore_progress(&self) -> Result<Envelope<BackupRestoreProgress>> {
        self.fetch(
            RestMethod::Get,
            "/cluster/backup-restore-progress",
            RequestOptions::new(),
        )
        .await
    }
}
