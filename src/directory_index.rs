use hashbrown::HashMap;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

pub struct LogFileMetaData {
    pub path: PathBuf,
    pub filename: String,
    pub modified: OffsetDateTime,
    pub size_bytes: u64,
    pub is_empty: bool,
}

#[derive(Default)]
pub struct LogFileIndex {
    entries: HashMap<PathBuf, LogFileMetaData>,
}

impl LogFileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_index(dir: &Path) -> Result<Self> {
        let mut index = Self::new();

        if !dir.exists() {
            tracing::warn!(directory = %dir.display(), "log directory not found");
            return Ok(index);
        }

        let mut files: Vec<_> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_log_file(p))
            .collect();
        files.sort();
        for path in files {
            index.add_file(&path);
        }
        Ok(index)
    }

    fn create_entry(path: &Path) -> Option<LogFileMetaData> {
        let filename = path.file_name()?.to_str()?.to_string();
        let metadata = fs::metadata(path).ok()?;
        let size_bytes = metadata.len();
        let modified = metadata.modified().ok().map(OffsetDateTime::from)?;

        Some(LogFileMetaData {
            path: path.to_path_buf(),
            filename,
            modified,
            size_bytes,
            is_empty: size_bytes == 0,
        })
    }

    /// Add or refresh one file. Files whose metadata cannot be read are
    /// left out of the index.
    pub fn add_file(&mut self, path: &Path) -> Option<()> {
        let entry = Self::create_entry(path)?;
        self.entries.insert(entry.path.clone(), entry);
        Some(())
    }

    pub fn remove_file(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    // --- Accessors ---

    /// All entries, most recently modified first.
    pub fn entries(&self) -> Vec<&LogFileMetaData> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        entries
    }

    pub fn newest_file(&self) -> Option<&LogFileMetaData> {
        self.entries.values().max_by_key(|e| e.modified)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn is_log_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("log") || e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
