//! Output file placement
//!
//! Generated files land in a primary directory and, optionally, a mirror
//! (`release/resources` by default).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default mirror directory for release packaging
pub const RELEASE_RESOURCES: &str = "release/resources";

/// When to write the mirrored copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPolicy {
    /// Create the mirror directory if needed
    Create,
    /// Only mirror when the directory already exists
    IfExists,
}

/// Where generated files go
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub out_dir: PathBuf,
    pub mirror_dir: Option<PathBuf>,
    pub mirror_policy: MirrorPolicy,
}

impl OutputLayout {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            mirror_dir: None,
            mirror_policy: MirrorPolicy::Create,
        }
    }

    pub fn with_mirror(mut self, dir: impl Into<PathBuf>, policy: MirrorPolicy) -> Self {
        self.mirror_dir = Some(dir.into());
        self.mirror_policy = policy;
        self
    }

    /// Mirror directory to use for this run, creating it when allowed
    fn active_mirror(&self) -> Result<Option<&Path>> {
        let Some(dir) = self.mirror_dir.as_deref() else {
            return Ok(None);
        };
        match self.mirror_policy {
            MirrorPolicy::Create => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                Ok(Some(dir))
            }
            MirrorPolicy::IfExists if dir.is_dir() => Ok(Some(dir)),
            MirrorPolicy::IfExists => Ok(None),
        }
    }

    /// Write every `(file_name, bytes)` pair to the output directory, then to
    /// the mirror. Returns the paths written, primary files first.
    pub fn write_all(&self, files: &[(String, Vec<u8>)]) -> Result<Vec<PathBuf>> {
        let mut written = write_files(&self.out_dir, files)?;
        if let Some(mirror) = self.active_mirror()? {
            written.extend(write_files(mirror, files)?);
        }
        Ok(written)
    }
}

/// Write files into `dir`, creating it first
pub fn write_files(dir: &Path, files: &[(String, Vec<u8>)]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    files
        .iter()
        .map(|(name, data)| {
            let path = dir.join(name);
            fs::write(&path, data)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("wrote {} ({} bytes)", path.display(), data.len());
            Ok(path)
        })
        .collect()
}
