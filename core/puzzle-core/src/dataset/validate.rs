use super::error::ValidationError;
use super::layout::DatasetLayout;
use super::models::{Difficulty, IndexDocument, RecordDocument};
use super::schema::{check_document, INDEX_SCHEMA, RECORD_SCHEMA};
use crate::storage::Storage;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyCounts {
    fn add(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }
}

impl fmt::Display for DifficultyCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EASY, {} MEDIUM, {} HARD", self.easy, self.medium, self.hard)
    }
}

/// Outcome of a run in which every check passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub index: IndexDocument,
    pub records: u64,
    pub difficulties: DifficultyCounts,
}

#[derive(Debug)]
enum Stage {
    LoadingIndex,
    CheckingIndexSchema,
    CountingRecords,
    CheckingRecord(u64),
}

fn enter(stage: Stage) {
    match stage {
        Stage::CheckingRecord(record) => debug!(record, "validation stage: checking record"),
        other => debug!(stage = ?other, "validation stage"),
    }
}

fn to_model<T: DeserializeOwned>(value: Value, file: &str) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|source| ValidationError::Model {
        file: file.to_string(),
        source,
    })
}

/// Validates the index document, the record count and every record, in that
/// order, stopping at the first problem.
pub fn validate_dataset(
    storage: &dyn Storage,
    layout: &DatasetLayout,
) -> Result<DatasetSummary, ValidationError> {
    let index_file = layout.index_file_name();

    enter(Stage::LoadingIndex);
    let raw = storage
        .read_to_string(&layout.index_file)
        .map_err(|source| ValidationError::IndexUnreadable { file: index_file.clone(), source })?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|source| ValidationError::IndexNotJson { file: index_file.clone(), source })?;

    enter(Stage::CheckingIndexSchema);
    check_document(&INDEX_SCHEMA, &value)
        .map_err(|violation| ValidationError::IndexSchema { file: index_file.clone(), violation })?;
    let index: IndexDocument = to_model(value, &index_file)?;
    let expected = index.length;

    enter(Stage::CountingRecords);
    let dir = layout.data_dir_name();
    let entries = storage
        .list_dir(&layout.data_dir)
        .map_err(|source| ValidationError::RecordDirUnreadable { dir: dir.clone(), source })?;
    let found = entries.iter().filter(|name| DatasetLayout::is_record_entry(name)).count();
    if found as u64 != expected {
        return Err(ValidationError::CountMismatch { found, expected });
    }

    let mut difficulties = DifficultyCounts::default();
    for i in 0..expected {
        enter(Stage::CheckingRecord(i));
        let file = DatasetLayout::record_file_name(i);
        let raw = storage.read_to_string(&layout.record_path(i)).map_err(|source| {
            ValidationError::RecordUnreadable { file: file.clone(), dir: dir.clone(), source }
        })?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|source| ValidationError::RecordNotJson { file: file.clone(), source })?;
        check_document(&RECORD_SCHEMA, &value)
            .map_err(|violation| ValidationError::RecordSchema { file: file.clone(), violation })?;
        let record: RecordDocument = to_model(value, &file)?;
        difficulties.add(record.difficulty);
    }

    debug!(records = expected, "validation passed");
    Ok(DatasetSummary { index, records: expected, difficulties })
}
