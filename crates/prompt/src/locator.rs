//! Repository root discovery.

use std::path::{Path, PathBuf};

/// Name of the directory that marks a repository root.
pub const PROMPTS_DIR: &str = "prompts";

/// Resolve the repository root for a given start directory.
///
/// This function scans the start directory itself and then each of its
/// ancestors, nearest first, and returns the first candidate whose direct
/// children include an entry named `prompts`. The probe is a plain
/// existence check and does not distinguish files from directories.
///
/// When no candidate on the chain qualifies, the grandparent of the start
/// directory is returned unchanged. The fallback is not re-checked for a
/// `prompts` entry.
///
/// Never fails: some path is always returned.
///
/// # Arguments
/// * `start` - Directory the ancestor search begins at
///
/// # Example
/// ```no_run
/// use promptroot_prompt::resolve_root;
/// use std::path::Path;
///
/// let root = resolve_root(Path::new("/repo/experiments/prompt_loader"));
/// println!("Repository root: {}", root.display());
/// ```
pub fn resolve_root(start: &Path) -> PathBuf {
    for candidate in start.ancestors() {
        if candidate.join(PROMPTS_DIR).exists() {
            tracing::debug!("Resolved root: {}", candidate.display());
            return candidate.to_path_buf();
        }
    }

    // Two parent() steps, each a no-op once the filesystem root is reached
    let mut fallback = start;
    for _ in 0..2 {
        if let Some(parent) = fallback.parent() {
            fallback = parent;
        }
    }

    tracing::debug!(
        "No prompts directory on the ancestor chain, falling back to {}",
        fallback.display()
    );

    fallback.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_start_directory_wins_over_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("experiments/prompt_loader");
        fs::create_dir_all(start.join("prompts")).unwrap();
        fs::create_dir_all(temp_dir.path().join("prompts")).unwrap();

        assert_eq!(resolve_root(&start), start);
    }

    #[test]
    fn test_finds_prompts_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("experiments/prompt_loader");
        fs::create_dir_all(&start).unwrap();
        fs::create_dir_all(temp_dir.path().join("prompts")).unwrap();

        assert_eq!(resolve_root(&start), temp_dir.path());
    }

    #[test]
    fn test_falls_back_to_grandparent() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("standalone/tool");
        fs::create_dir_all(&start).unwrap();

        assert_eq!(resolve_root(&start), temp_dir.path());
    }

    #[test]
    fn test_file_named_prompts_satisfies_probe() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("a/b");
        fs::create_dir_all(&start).unwrap();
        fs::write(temp_dir.path().join("a/prompts"), "not a directory").unwrap();

        assert_eq!(resolve_root(&start), temp_dir.path().join("a"));
    }

    #[test]
    fn test_missing_start_directory_still_resolves() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("prompts")).unwrap();
        let start = temp_dir.path().join("never/created");

        assert_eq!(resolve_root(&start), temp_dir.path());
    }
}
