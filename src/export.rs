//! Plan export to disk.
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::plan::GeneratedPlan;

/// Write a normalized plan as pretty-printed JSON.
///
/// Intermediate directories are created and an existing file is
/// overwritten. serde_json writes UTF-8 with non-ASCII characters
/// unescaped, so accented exercise names survive verbatim.
pub fn export_plan(plan: &GeneratedPlan, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(plan).context("serialize generated plan")?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
