use std::path::Path;

use anyhow::Context;

/// Reads the whole file and returns its trimmed non-empty lines
pub async fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("error while reading the file {:?}", path))?;

    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}
