//! Prompt loading for the promptroot workspace.
//!
//! This crate locates a repository root by walking up the ancestor chain
//! of a caller-supplied start directory until it finds a directory holding
//! a `prompts` entry, and reads named prompt files from `<root>/prompts/`.

pub mod loader;
pub mod locator;

// Re-export main entry points
pub use loader::{list_prompts, read_prompt};
pub use locator::{resolve_root, PROMPTS_DIR};
