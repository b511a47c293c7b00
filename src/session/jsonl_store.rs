use std::{io::ErrorKind, path::PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tracing::debug;

use super::store::SessionStore;

/// [SessionStore] backed by snapshot files, one JSON document per line. Each
/// granularity lives in its own file inside the snapshot directory. A missing
/// file just means no sessions were exported for that granularity yet.
pub struct JsonlSessionStore {
    snapshot_dir: PathBuf,
}

impl JsonlSessionStore {
    pub fn new(snapshot_dir: PathBuf) -> Self {
        Self { snapshot_dir }
    }

    async fn read_documents(&self, file_name: &str) -> Result<Vec<Value>> {
        let path = self.snapshot_dir.join(file_name);
        debug!("Reading session snapshot {path:?}");

        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e).with_context(|| format!("failed to open {path:?}")),
        };

        let mut lines = BufReader::new(file).lines();
        let mut documents = vec![];
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let document = serde_json::from_str::<Value>(&line)
                .with_context(|| format!("malformed snapshot line in {path:?}"))?;
            documents.push(document);
        }

        Ok(documents)
    }
}

#[async_trait]
impl SessionStore for JsonlSessionStore {
    async fn fetch_daily(&self) -> Result<Vec<Value>> {
        self.read_documents("daily.jsonl").await
    }

    async fn fetch_weekly(&self) -> Result<Vec<Value>> {
        self.read_documents("weekly.jsonl").await
    }

    async fn fetch_monthly(&self) -> Result<Vec<Value>> {
        self.read_documents("monthly.jsonl").await
    }

    async fn fetch_yearly(&self) -> Result<Vec<Value>> {
        self.read_documents("yearly.jsonl").await
    }
}
