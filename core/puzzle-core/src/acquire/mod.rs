pub mod http;
pub mod pacer;

use crate::dataset::layout::DatasetLayout;
use crate::dataset::models::FetchedRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub use http::HttpSource;
pub use pacer::Pacer;

#[async_trait]
pub trait ProblemSource: Send + Sync {
    async fn fetch(&self, id: u32) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct AcquireReport {
    pub fetched: Vec<u32>,
    pub failed: Vec<(u32, String)>,
}

/// Fetches every id in `ids`, one at a time in ascending order, and writes
/// `<out_dir>/<id>.json`. A failed id is logged and skipped.
pub async fn acquire(
    source: &dyn ProblemSource,
    out_dir: &Path,
    ids: RangeInclusive<u32>,
    pacer: &mut Pacer,
) -> Result<AcquireReport> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("create {}", out_dir.display()))?;

    info!(start = *ids.start(), end = *ids.end(), out = %out_dir.display(), "fetching problems");
    let mut report = AcquireReport::default();
    for id in ids {
        pacer.ready().await;
        match fetch_one(source, out_dir, id).await {
            Ok(path) => {
                info!(id, path = %path.display(), "problem fetched");
                report.fetched.push(id);
            }
            Err(e) => {
                let msg = format!("{e:#}");
                error!(id, error = %msg, "error fetching problem");
                report.failed.push((id, msg));
            }
        }
        pacer.mark();
    }
    Ok(report)
}

async fn fetch_one(source: &dyn ProblemSource, out_dir: &Path, id: u32) -> Result<PathBuf> {
    let question = source.fetch(id).await?;
    let record = FetchedRecord { question, answer: String::new() };
    let path = out_dir.join(DatasetLayout::record_file_name(u64::from(id)));
    let body = serde_json::to_vec(&record)?;
    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
