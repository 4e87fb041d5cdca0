//! Comparison of a built site against an expected snapshot.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error returned when a directory cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A difference between the expected and actual directories.
///
/// Paths are relative to the compared roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirDiff {
    /// File exists in the expected directory only.
    Missing(PathBuf),
    /// File exists in both directories with different contents.
    Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
    /// File exists in the actual directory only.
    Unexpected(PathBuf),
}

impl fmt::Display for DirDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => {
                write!(f, "expected file {} is not present", path.display())
            }
            Self::Mismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "contents of file {} do not match:\nexpected: {expected}\nactual: {actual}",
                path.display()
            ),
            Self::Unexpected(path) => write!(f, "file {} is not expected", path.display()),
        }
    }
}

/// Compare two directory trees file by file.
///
/// Returns missing and mismatched files first (sorted by path), followed by
/// unexpected files. An empty result means the trees are identical.
pub fn compare_directories(expected: &Path, actual: &Path) -> Result<Vec<DirDiff>, VerifyError> {
    let expected_files = collect_files(expected)?;
    let actual_files = collect_files(actual)?;
    let mut diffs = Vec::new();

    for path in &expected_files {
        if !actual_files.contains(path) {
            diffs.push(DirDiff::Missing(path.clone()));
            continue;
        }
        let expected_contents = read_file(&expected.join(path))?;
        let actual_contents = read_file(&actual.join(path))?;
        if expected_contents != actual_contents {
            diffs.push(DirDiff::Mismatch {
                path: path.clone(),
                expected: String::from_utf8_lossy(&expected_contents).into_owned(),
                actual: String::from_utf8_lossy(&actual_contents).into_owned(),
            });
        }
    }

    diffs.extend(
        actual_files
            .difference(&expected_files)
            .cloned()
            .map(DirDiff::Unexpected),
    );

    tracing::debug!(
        expected = %expected.display(),
        actual = %actual.display(),
        diffs = diffs.len(),
        "Compared directories"
    );

    Ok(diffs)
}

fn read_file(path: &Path) -> Result<Vec<u8>, VerifyError> {
    fs::read(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect the relative paths of all files below `root`.
fn collect_files(root: &Path) -> Result<BTreeSet<PathBuf>, VerifyError> {
    let mut files = BTreeSet::new();
    walk(root, Path::new(""), &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, prefix: &Path, files: &mut BTreeSet<PathBuf>) -> Result<(), VerifyError> {
    let io_err = |source: std::io::Error| VerifyError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let relative = prefix.join(entry.file_name());
        if entry.file_type().map_err(io_err)?.is_dir() {
            walk(&entry.path(), &relative, files)?;
        } else {
            files.insert(relative);
        }
    }
    Ok(())
}
