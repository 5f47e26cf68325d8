//! Persists the assembled document to the output path.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Write `content` to `path`, creating the containing directory if needed.
///
/// The write is a plain overwrite; the tool produces a single artifact per
/// run and is not meant for concurrent invocation against one target.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::Write(format!("creating {}: {}", dir.display(), e)))?;
        }
    }
    fs::write(path, content)
        .map_err(|e| Error::Write(format!("writing {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("contrib3d-output-{}-{}", std::process::id(), name))
    }

    #[test]
    fn creates_missing_directory_and_writes() {
        let dir = temp_path("nested");
        let path = dir.join("deep").join("out.svg");
        write_artifact(&path, "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = temp_path("overwrite");
        let path = dir.join("out.svg");
        write_artifact(&path, "first").unwrap();
        write_artifact(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let _ = fs::remove_dir_all(&dir);
    }
}
