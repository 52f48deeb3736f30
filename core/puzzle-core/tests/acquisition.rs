use anyhow::{anyhow, Result};
use async_trait::async_trait;
use puzzle_core::acquire::{acquire, Pacer, ProblemSource};
use puzzle_core::dataset::models::FetchedRecord;
use puzzle_core::dataset::{validate_dataset, DatasetLayout};
use puzzle_core::storage::FsStorage;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::Instant;

#[derive(Default)]
struct ScriptedSource {
    fail_ids: Vec<u32>,
    calls: Mutex<Vec<(u32, Instant)>>,
}

#[async_trait]
impl ProblemSource for ScriptedSource {
    async fn fetch(&self, id: u32) -> Result<String> {
        self.calls.lock().unwrap().push((id, Instant::now()));
        if self.fail_ids.contains(&id) {
            return Err(anyhow!("remote returned 503 for {id}"));
        }
        Ok(format!("Problem {id} text"))
    }
}

#[tokio::test]
async fn writes_one_record_per_id_with_empty_answer() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("data");
    let source = ScriptedSource::default();
    let mut pacer = Pacer::new(Duration::ZERO);

    let report = acquire(&source, &out, 30..=32, &mut pacer).await.unwrap();
    assert_eq!(report.fetched, vec![30, 31, 32]);
    assert!(report.failed.is_empty());

    let body = std::fs::read_to_string(out.join("31.json")).unwrap();
    let record: FetchedRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(record.question, "Problem 31 text");
    assert_eq!(record.answer, "");
}

#[tokio::test]
async fn failures_do_not_halt_the_sequence() {
    let dir = TempDir::new().unwrap();
    let source = ScriptedSource { fail_ids: vec![2], ..Default::default() };
    let mut pacer = Pacer::new(Duration::ZERO);

    let report = acquire(&source, dir.path(), 1..=3, &mut pacer).await.unwrap();
    assert_eq!(report.fetched, vec![1, 3]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, 2);
    assert!(report.failed[0].1.contains("503"));
    assert!(!dir.path().join("2.json").exists());

    let order: Vec<u32> = source.calls.lock().unwrap().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn requests_are_spaced_by_the_delay() {
    let dir = TempDir::new().unwrap();
    let delay = Duration::from_secs(5);
    let source = ScriptedSource { fail_ids: vec![11], ..Default::default() };
    let mut pacer = Pacer::new(delay);

    acquire(&source, dir.path(), 10..=13, &mut pacer).await.unwrap();

    let calls = source.calls.lock().unwrap();
    assert_eq!(calls.len(), 4);
    for pair in calls.windows(2) {
        let gap = pair[1].1.duration_since(pair[0].1);
        assert_eq!(gap, delay, "between ids {} and {}", pair[0].0, pair[1].0);
    }
}

#[tokio::test]
async fn fetched_records_do_not_satisfy_the_record_schema() {
    let dir = TempDir::new().unwrap();
    let source = ScriptedSource::default();
    let mut pacer = Pacer::new(Duration::ZERO);
    acquire(&source, &dir.path().join("data"), 0..=0, &mut pacer).await.unwrap();
    std::fs::write(
        dir.path().join("index.json"),
        r#"{"length":1,"type":"euler","name":"n","description":"d","email":"e"}"#,
    )
    .unwrap();

    let err = validate_dataset(&FsStorage::new(dir.path()), &DatasetLayout::default()).unwrap_err();
    assert_eq!(err.to_string(), "error in 0.json: Missing required field: solution");
}
