//! Copies `.disll` files into `bin/disll` for runtime discovery
//!
//! Patterns are globs resolved against the repository root (`**` recurses).
//! Every matched file gets a [`CopyOutcome`]; a failed copy is recorded and
//! the batch continues.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension picked up by the linker (compared case-insensitively)
pub const DISLL_EXTENSION: &str = "disll";

/// Split comma-separated arguments into trimmed, non-empty patterns
pub fn split_patterns<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Patterns are resolved relative to this directory
    pub root: PathBuf,
    pub out_dir: PathBuf,
    pub extension: String,
}

impl LinkOptions {
    /// `<root>/bin/disll`, `.disll` files
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            out_dir: root.join("bin").join("disll"),
            root,
            extension: DISLL_EXTENSION.to_string(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Result of copying one matched file
#[derive(Debug)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Bytes copied, or the error message
    pub result: Result<u64, String>,
}

#[derive(Debug, Default)]
pub struct LinkReport {
    pub outcomes: Vec<CopyOutcome>,
    /// Patterns the glob parser rejected, with the reason
    pub invalid_patterns: Vec<(String, String)>,
}

impl LinkReport {
    pub fn copied(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// No file matched any pattern
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Copy every file matching `patterns` into `options.out_dir`
///
/// The output directory is created only when there is at least one pattern.
/// Files are copied in match order; a later match with the same file name
/// overwrites an earlier one.
pub fn link_matches(options: &LinkOptions, patterns: &[String]) -> Result<LinkReport> {
    let mut report = LinkReport::default();
    if patterns.is_empty() {
        return Ok(report);
    }

    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("Failed to create {}", options.out_dir.display()))?;

    // Metacharacters in the root itself match literally
    let root = PathBuf::from(glob::Pattern::escape(&options.root.to_string_lossy()));

    for pattern in patterns {
        let search = root.join(pattern);
        let search = search.to_string_lossy();

        let paths = match glob::glob(&search) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!("invalid pattern {pattern:?}: {e}");
                report.invalid_patterns.push((pattern.clone(), e.to_string()));
                continue;
            }
        };

        // Unreadable directories are skipped like non-matches
        for source in paths.filter_map(|entry| entry.ok()) {
            if !options.accepts(&source) {
                continue;
            }
            let Some(file_name) = source.file_name() else {
                continue;
            };
            let destination = options.out_dir.join(file_name);
            let result = copy_file(&source, &destination);
            if let Err(e) = &result {
                tracing::warn!("failed to copy {}: {e}", source.display());
            }
            report.outcomes.push(CopyOutcome {
                source,
                destination,
                result,
            });
        }
    }

    Ok(report)
}

fn copy_file(source: &Path, destination: &Path) -> Result<u64, String> {
    // Copying a file onto itself would truncate it
    if let (Ok(a), Ok(b)) = (source.canonicalize(), destination.canonicalize()) {
        if a == b {
            return fs::metadata(source).map(|m| m.len()).map_err(|e| e.to_string());
        }
    }
    fs::copy(source, destination).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn names(report: &LinkReport) -> Vec<String> {
        let mut names: Vec<String> = report
            .copied()
            .map(|o| o.destination.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_split_patterns() {
        assert_eq!(
            split_patterns(&["a.disll, b.disll", " ", "lib/*.disll,"]),
            vec!["a.disll", "b.disll", "lib/*.disll"]
        );
        assert!(split_patterns::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_for_root() {
        let options = LinkOptions::for_root("/repo");
        assert_eq!(options.out_dir, Path::new("/repo/bin/disll"));
        assert_eq!(options.extension, "disll");
    }

    #[test]
    fn test_no_patterns_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = LinkOptions::for_root(dir.path());

        let report = link_matches(&options, &[]).unwrap();

        assert!(report.is_empty());
        assert!(!dir.path().join("bin").exists());
    }

    #[test]
    fn test_copies_matching_files_only() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("lib1.disll"), b"one");
        touch(&dir.path().join("nested/LIB2.DISLL"), b"two");
        touch(&dir.path().join("readme.txt"), b"no");
        fs::create_dir_all(dir.path().join("folder.disll")).unwrap();
        let out = tempdir().unwrap();
        let options = LinkOptions {
            out_dir: out.path().to_path_buf(),
            ..LinkOptions::for_root(dir.path())
        };

        let report = link_matches(&options, &split_patterns(&["**/*"])).unwrap();

        assert_eq!(names(&report), ["LIB2.DISLL", "lib1.disll"]);
        assert_eq!(report.failed().count(), 0);
        assert_eq!(fs::read(options.out_dir.join("lib1.disll")).unwrap(), b"one");
    }

    #[test]
    fn test_comma_separated_names() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.disll"), b"a");
        touch(&dir.path().join("b.disll"), b"b");
        touch(&dir.path().join("c.disll"), b"c");
        let options = LinkOptions::for_root(dir.path());

        let report = link_matches(&options, &split_patterns(&["a.disll,c.disll"])).unwrap();

        assert_eq!(names(&report), ["a.disll", "c.disll"]);
    }

    #[test]
    fn test_no_matches_creates_out_dir() {
        let dir = tempdir().unwrap();
        let options = LinkOptions::for_root(dir.path());

        let report = link_matches(&options, &split_patterns(&["missing/*.disll"])).unwrap();

        assert!(report.is_empty());
        assert!(options.out_dir.is_dir());
    }

    #[test]
    fn test_failed_copy_does_not_stop_batch() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/blocked.disll"), b"x");
        touch(&dir.path().join("b/fine.disll"), b"y");
        let options = LinkOptions::for_root(dir.path());
        // A directory in the way of the destination file
        fs::create_dir_all(options.out_dir.join("blocked.disll")).unwrap();

        let report = link_matches(&options, &split_patterns(&["a/*.disll,b/*.disll"])).unwrap();

        assert_eq!(report.outcomes.len(), 2);
        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].source.ends_with("blocked.disll"));
        assert_eq!(names(&report), ["fine.disll"]);
    }

    #[test]
    fn test_rematching_output_dir_keeps_contents() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("lib.disll"), b"payload");
        let options = LinkOptions::for_root(dir.path());

        link_matches(&options, &split_patterns(&["*.disll"])).unwrap();
        let report = link_matches(&options, &split_patterns(&["**/*.disll"])).unwrap();

        assert_eq!(report.failed().count(), 0);
        assert_eq!(fs::read(options.out_dir.join("lib.disll")).unwrap(), b"payload");
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("libs [v2]?");
        touch(&root.join("audio.disll"), b"audio");
        let options = LinkOptions::for_root(&root);

        let report = link_matches(&options, &split_patterns(&["*.disll"])).unwrap();

        assert!(report.invalid_patterns.is_empty());
        assert_eq!(names(&report), ["audio.disll"]);
        assert!(options.out_dir.join("audio.disll").is_file());
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let dir = tempdir().unwrap();
        let options = LinkOptions::for_root(dir.path());

        let report = link_matches(&options, &["[".to_string()]).unwrap();

        assert_eq!(report.invalid_patterns.len(), 1);
        assert!(report.is_empty());
    }
}
