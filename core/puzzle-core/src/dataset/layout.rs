use std::path::PathBuf;

pub const DEFAULT_INDEX_FILE: &str = "index.json";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const RECORD_SUFFIX: &str = ".json";

/// Where the index and record documents live, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub index_file: PathBuf,
    pub data_dir: PathBuf,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl DatasetLayout {
    pub fn record_file_name(index: u64) -> String {
        format!("{index}{RECORD_SUFFIX}")
    }

    pub fn record_path(&self, index: u64) -> PathBuf {
        self.data_dir.join(Self::record_file_name(index))
    }

    pub fn is_record_entry(name: &str) -> bool {
        name.ends_with(RECORD_SUFFIX)
    }

    /// Display name of the record directory, e.g. `data`.
    pub fn data_dir_name(&self) -> String {
        self.data_dir.display().to_string()
    }

    pub fn index_file_name(&self) -> String {
        self.index_file.display().to_string()
    }
}
