use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::evaluation::EvaluationRecord;

/// Append-only file of scored resumes written by the upload form.
///
/// Each entry is one pretty-printed JSON object written directly after the
/// previous one, with no separator and no enclosing array.
#[derive(Clone)]
pub struct ScoreLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` and returns the exact text written.
    pub async fn append(&self, record: &EvaluationRecord) -> std::io::Result<String> {
        let serialized = serde_json::to_string_pretty(record)?;

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(serialized.as_bytes()).await?;
        file.flush().await?;

        info!(
            "Appended {} byte record to {}",
            serialized.len(),
            self.path.display()
        );
        Ok(serialized)
    }
}
