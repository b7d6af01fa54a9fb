//! Spec document loading.

use crate::error::{CompileError, CompileResult};
use crate::model::SpecDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse the spec file at `path`.
pub fn load(path: &Path) -> Result<SpecDocument> {
    if !path.exists() {
        return Err(CompileError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = parse(&content)?;

    debug!(
        path = %path.display(),
        module = %doc.module_name,
        options = doc.options.len(),
        "loaded spec"
    );
    Ok(doc)
}

/// Parse YAML text into a [`SpecDocument`].
///
/// Only the document shape is checked here; per-section requirements are
/// enforced by the renderers.
pub fn parse(content: &str) -> CompileResult<SpecDocument> {
    Ok(serde_yaml::from_str(content)?)
}
