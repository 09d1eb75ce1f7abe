// src/infrastructure/snapshot/mod.rs
// JSON file snapshot repository implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::dto::parser::parse_snapshot;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::repository::{DashboardSnapshot, SnapshotSource};

pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSnapshotSource {
    async fn fetch_snapshot(&self) -> AppResult<DashboardSnapshot> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::Snapshot(format!(
                "Failed to read snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let snapshot = parse_snapshot(&contents)?;
        log::info!(
            "Loaded snapshot from {}: {} produce, {} transactions",
            self.path.display(),
            snapshot.available_produce.len(),
            snapshot.my_transactions.len()
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"my_transactions": [{{"id": "t1", "amount": 10, "quantity": 1, "status": "completed"}}]}}"#
        )
        .unwrap();

        let source = JsonFileSnapshotSource::new(file.path());
        assert_eq!(source.path(), file.path());
        let snapshot = source.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.my_transactions.len(), 1);
        assert!(snapshot.available_produce.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_snapshot_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSnapshotSource::new(dir.path().join("absent.json"));

        match source.fetch_snapshot().await {
            Err(AppError::Snapshot(msg)) => assert!(msg.contains("absent.json")),
            other => panic!("expected snapshot error, got {:?}", other),
        }
    }
}
