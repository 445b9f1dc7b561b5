//! Query list loading.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads query URLs from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed. Validation happens later, per query.
pub async fn read_queries_file(path: &Path) -> Result<Vec<String>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read query file {}", path.display()))?;
    Ok(parse_query_lines(&raw))
}

fn parse_query_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
