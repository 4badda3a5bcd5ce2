//! Site commands: generate, publish, show.

use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;

use pagesmith_types::site::PublishRequest;

use crate::state::AppState;

/// Generate a page for `topic` and write it to `out` or stdout.
pub async fn generate(state: &AppState, topic: &str, out: Option<&Path>, json: bool) -> Result<()> {
    let code = state.generation_service.generate(topic).await?;

    if let Some(path) = out {
        tokio::fs::write(path, &code)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if json {
        let value = match out {
            Some(path) => serde_json::json!({"status": "success", "path": path.display().to_string()}),
            None => serde_json::json!({"status": "success", "code": code}),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if let Some(path) = out {
        println!(
            "  {} Wrote {} bytes to {}",
            style("✓").green(),
            code.len(),
            style(path.display()).cyan()
        );
    } else {
        println!("{code}");
    }

    Ok(())
}

/// Publish the HTML in `file` under a fresh slug.
pub async fn publish(state: &AppState, file: &Path, title: Option<String>, json: bool) -> Result<()> {
    let html = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    if html.trim().is_empty() {
        bail!("{} is empty", file.display());
    }

    let request = PublishRequest {
        title,
        html: Some(html),
    };
    let site = state.publish_service.publish(&request).await?;
    let link = match state.config.server.public_url.as_deref() {
        Some(base) => format!("{}/s/{}", base.trim_end_matches('/'), site.slug),
        None => format!("/s/{}", site.slug),
    };

    if json {
        let value = serde_json::json!({"status": "success", "slug": site.slug, "url": link});
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!();
        println!(
            "  {} Published '{}'",
            style("✓").green().bold(),
            style(&site.title).cyan()
        );
        println!("  {}  {}", style("Slug:").bold(), site.slug);
        println!("  {}   {}", style("URL:").bold(), link);
        println!();
    }

    Ok(())
}

/// Print a stored site's metadata without counting a view.
pub async fn show(state: &AppState, slug: &str, json: bool) -> Result<()> {
    let Some(site) = state.publish_service.get(slug).await? else {
        bail!("site '{slug}' not found");
    };

    if json {
        let value = serde_json::json!({
            "slug": site.slug,
            "title": site.title,
            "views": site.views,
            "html_bytes": site.html.len(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&site.title).cyan().bold());
    println!();
    println!("  {}   {}", style("Slug:").bold(), site.slug);
    println!("  {}  {}", style("Views:").bold(), site.views);
    println!("  {}   {} bytes", style("Size:").bold(), site.html.len());
    println!();

    Ok(())
}
