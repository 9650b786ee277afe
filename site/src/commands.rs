//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tiffany_page::types::PageContent;
use tiffany_page::{current_year, render_page_for_year};
use tracing::info;

fn load_content(path: Option<&Path>) -> Result<PageContent> {
    match path {
        Some(path) => PageContent::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display())),
        None => Ok(PageContent::default()),
    }
}

/// `tiffany render`
pub fn render(content: Option<&Path>, out: Option<&Path>, year: Option<i32>) -> Result<()> {
    let page = load_content(content)?;
    let year = year.unwrap_or_else(current_year);

    info!(
        services = page.services.items.len(),
        portfolio = page.portfolio.items.len(),
        testimonials = page.testimonials.items.len(),
        year,
        "Rendering homepage"
    );
    let html = render_page_for_year(&page, year);

    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// `tiffany content`
pub fn dump_content() -> Result<()> {
    let json = PageContent::default()
        .to_json_pretty()
        .context("Failed to serialize default content")?;
    println!("{}", json);
    Ok(())
}

/// `tiffany check`
pub fn check(content: &Path) -> Result<()> {
    let page = load_content(Some(content))?;
    info!(
        path = %content.display(),
        fields = page.contact.fields.len(),
        "Content is valid"
    );
    println!("ok");
    Ok(())
}
