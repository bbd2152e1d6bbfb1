use memmap2::Mmap;
use std::fs::File;
use std::io::Result;
use std::path::Path;

/// Load a complete log file into memory.
///
/// Server logs occasionally carry bytes that are not valid UTF-8; those are
/// replaced rather than rejected. Zero-length files come back as an empty
/// string, since mapping an empty file is an error on most platforms.
pub fn load_log_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }

    let mmap = unsafe { Mmap::map(&file)? };
    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_file_loads_as_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.log");
        fs::write(&path, "").unwrap();

        assert_eq!(load_log_text(&path).unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.log");
        fs::write(&path, b"1:08 Kill: \xff\xfe\n").unwrap();

        let content = load_log_text(&path).unwrap();
        assert!(content.starts_with("1:08 Kill: "));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_log_text(dir.path().join("nope.log")).is_err());
    }
}
