use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a dataset. Paths are relative to the storage root.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Names of the entries directly inside `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Storage for FsStorage {
    /// Invalid UTF-8 is replaced rather than reported, so a file that exists
    /// always reaches the JSON decoder.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(self.root.join(path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.root.join(path))? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
