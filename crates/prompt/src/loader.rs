//! Prompt loader for reading prompt files from the repository root.

use crate::locator::{resolve_root, PROMPTS_DIR};
use promptroot_core::{AppError, AppResult};
use std::path::Path;

/// Read the contents of a named prompt file.
///
/// This function resolves the repository root for `start`, joins
/// `prompts/<name>` onto it, and reads the target as UTF-8 text. The name
/// is treated as a relative filename and is not sanitized; names with path
/// separators resolve relative to the `prompts` directory.
///
/// # Arguments
/// * `start` - Directory the root search begins at
/// * `name` - Prompt filename (e.g., "grade8_system.md" or "tutor_mode.md")
///
/// # Returns
/// The file contents, exactly as stored. Fails with
/// [`AppError::PromptNotFound`] when the computed path does not exist; any
/// other filesystem failure on an existing path (permissions, a directory
/// target, invalid UTF-8) propagates as [`AppError::Io`].
///
/// # Example
/// ```no_run
/// use promptroot_prompt::read_prompt;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let text = read_prompt(Path::new("."), "tutor_mode.md")?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub fn read_prompt(start: &Path, name: &str) -> AppResult<String> {
    let root = resolve_root(start);
    let target = root.join(PROMPTS_DIR).join(name);

    tracing::debug!("Reading prompt from: {}", target.display());

    if !target.exists() {
        return Err(AppError::PromptNotFound { path: target });
    }

    let contents = std::fs::read_to_string(&target)?;

    tracing::info!("Loaded prompt: {} ({} bytes)", name, contents.len());

    Ok(contents)
}

/// List the prompt files available under the resolved root.
///
/// Returns the file names (with extension) directly under
/// `<root>/prompts/`, sorted. Subdirectories are not descended into. An
/// absent `prompts` directory yields an empty list rather than an error.
pub fn list_prompts(start: &Path) -> AppResult<Vec<String>> {
    let prompts_dir = resolve_root(start).join(PROMPTS_DIR);

    if !prompts_dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();

    for entry in walkdir::WalkDir::new(&prompts_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() {
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();

    Ok(names)
}
