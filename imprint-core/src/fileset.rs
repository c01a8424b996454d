//! File-set resolution — base directory plus include/exclude globs.
//!
//! A [`FileSet`] is resolved exactly once per invocation into a sorted
//! snapshot of relative paths. Files that appear under the base directory
//! after resolution are not picked up mid-batch.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{io_err, CoreError};

/// Include pattern used when the caller supplies none.
pub const DEFAULT_INCLUDE: &str = "**/*.json";

/// `*` stays within one path segment; `**` crosses separators.
fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

/// An immutable selection of files under a base directory.
///
/// Constructed once from the invocation parameters and passed by reference;
/// never ambient state.
#[derive(Debug, Clone)]
pub struct FileSet {
    base_dir: PathBuf,
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl FileSet {
    /// Compile include/exclude patterns for `base_dir`.
    ///
    /// An empty `includes` list defaults to [`DEFAULT_INCLUDE`]. A pattern
    /// that fails to compile is a configuration error.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        includes: &[String],
        excludes: &[String],
    ) -> Result<Self, CoreError> {
        let includes = if includes.is_empty() {
            compile_patterns(&[DEFAULT_INCLUDE.to_string()])?
        } else {
            compile_patterns(includes)?
        };
        Ok(FileSet {
            base_dir: base_dir.into(),
            includes,
            excludes: compile_patterns(excludes)?,
        })
    }

    /// The directory relative paths are expressed against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve to the ordered snapshot of matching relative paths.
    ///
    /// Walks the base directory recursively, keeps regular files matching at
    /// least one include and no exclude, and sorts lexicographically so the
    /// processing order is deterministic across runs and platforms.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, CoreError> {
        let mut files = Vec::new();
        collect_files(&self.base_dir, &mut files)?;

        let mut selected: Vec<PathBuf> = files
            .into_iter()
            .filter_map(|path| {
                path.strip_prefix(&self.base_dir)
                    .map(Path::to_path_buf)
                    .ok()
            })
            .filter(|rel| self.matches(rel))
            .collect();
        selected.sort();
        Ok(selected)
    }

    fn matches(&self, relative: &Path) -> bool {
        let opts = match_options();
        self.includes
            .iter()
            .any(|p| p.matches_path_with(relative, opts))
            && !self
                .excludes
                .iter()
                .any(|p| p.matches_path_with(relative, opts))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, CoreError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| CoreError::Pattern {
                pattern: p.clone(),
                source: e,
            })
        })
        .collect()
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CoreError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "{}").unwrap();
    }

    fn resolve(root: &Path, includes: &[&str], excludes: &[&str]) -> Vec<String> {
        let includes: Vec<String> = includes.iter().map(|s| s.to_string()).collect();
        let excludes: Vec<String> = excludes.iter().map(|s| s.to_string()).collect();
        FileSet::new(root, &includes, &excludes)
            .unwrap()
            .resolve()
            .unwrap()
            .into_iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn default_include_selects_json_at_any_depth() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.json");
        touch(dir.path(), "a/b/nested.json");
        touch(dir.path(), "a/readme.txt");
        assert_eq!(
            resolve(dir.path(), &[], &[]),
            vec!["a/b/nested.json", "top.json"]
        );
    }

    #[test]
    fn results_are_sorted_lexicographically() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zz.json");
        touch(dir.path(), "aa.json");
        touch(dir.path(), "mm.json");
        assert_eq!(
            resolve(dir.path(), &[], &[]),
            vec!["aa.json", "mm.json", "zz.json"]
        );
    }

    #[test]
    fn excludes_trump_includes() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "keep.json");
        touch(dir.path(), "drafts/skip.json");
        assert_eq!(
            resolve(dir.path(), &[], &["drafts/**"]),
            vec!["keep.json"]
        );
    }

    #[test]
    fn single_star_does_not_cross_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.json");
        touch(dir.path(), "sub/deep.json");
        assert_eq!(resolve(dir.path(), &["*.json"], &[]), vec!["top.json"]);
    }

    #[test]
    fn multiple_includes_union() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.json");
        touch(dir.path(), "b.yaml");
        touch(dir.path(), "c.txt");
        assert_eq!(
            resolve(dir.path(), &["**/*.json", "**/*.yaml"], &[]),
            vec!["a.json", "b.yaml"]
        );
    }

    #[test]
    fn bad_pattern_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = FileSet::new(dir.path(), &["a[".to_string()], &[]).unwrap_err();
        assert!(matches!(err, CoreError::Pattern { .. }));
    }

    #[test]
    fn missing_base_dir_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let fs = FileSet::new(dir.path().join("absent"), &[], &[]).unwrap();
        assert!(matches!(fs.resolve().unwrap_err(), CoreError::Io { .. }));
    }

    #[test]
    fn empty_directory_resolves_to_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(dir.path(), &[], &[]).is_empty());
    }
}
