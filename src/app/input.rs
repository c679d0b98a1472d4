//! URL input from arguments, files, and stdin.

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::Config;

/// Keeps non-blank lines that are not `#` comments, trimmed.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// URLs from the positional arguments followed by those in `--file`
/// (`-` reads stdin).
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
pub async fn collect_urls(config: &Config) -> Result<Vec<String>> {
    let mut urls: Vec<String> = config
        .urls
        .iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();

    if let Some(path) = &config.file {
        let text = if path.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            read_all(tokio::io::stdin())
                .await
                .context("Failed to read URLs from stdin")?
        } else {
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        };
        let from_file = parse_url_lines(&text);
        info!("Total URLs in input: {}", from_file.len());
        urls.extend(from_file);
    }

    Ok(urls)
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    Ok(text)
}
