use std::path::Path;

use mealplanner_shared::{Error, Result};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Appends one line per item, creating the file when needed.
pub async fn append_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let export_error = |source: std::io::Error| Error::Export {
        path: path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(export_error)?;

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    file.write_all(content.as_bytes())
        .await
        .map_err(export_error)?;
    file.flush().await.map_err(export_error)?;

    tracing::info!(path = %path.display(), lines = lines.len(), "Shopping list exported");

    Ok(())
}
