use crate::adapters::memory::{MemoryGrid, MemoryModal};
use crate::adapters::storage::LocalStorage;
use crate::config::{load_catalog, CliConfig, Command, OutputFormat, SiteConfig};
use crate::core::catalog::CatalogPage;
use crate::core::filter::FilterEngine;
use crate::core::page::PageBuilder;
use crate::core::{Project, Storage};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_path;

type MemoryPage = CatalogPage<MemoryGrid, MemoryModal>;

pub const PAGE_FILE: &str = "index.html";

/// Runs one CLI command and returns what should be printed.
pub async fn run(cli: &CliConfig) -> Result<String> {
    let (site, store) = load_catalog(cli.config.as_deref())?;
    let mut page = CatalogPage::new(store, MemoryGrid::default(), MemoryModal::default(), &site);

    match &cli.command {
        Command::List => {
            let projects = page.store().all().to_vec();
            listing(&mut page, cli.format, projects, None, |page| page.load())
        }
        Command::Search { query } => {
            let projects = cloned(FilterEngine::new(page.store()).search_by_text(query));
            tracing::info!("🔍 '{}' matched {} projects", query, projects.len());
            listing(
                &mut page,
                cli.format,
                projects,
                Some(site.no_results_message.as_str()),
                |page| page.search(query),
            )
        }
        Command::Filter { tech } => {
            let projects = cloned(FilterEngine::new(page.store()).filter_by_technology(tech));
            tracing::info!("🔍 '{}' matched {} projects", tech, projects.len());
            listing(
                &mut page,
                cli.format,
                projects,
                Some(site.no_results_message.as_str()),
                |page| page.filter_by_technology(tech),
            )
        }
        Command::Techs => {
            let techs = page.store().technologies();
            Ok(match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&techs)?,
                OutputFormat::Text => techs.join("\n"),
                OutputFormat::Html => techs
                    .iter()
                    .map(|t| {
                        format!(
                            r#"<span class="tech-tag">{}</span>"#,
                            crate::utils::html::escape(t)
                        )
                    })
                    .collect(),
            })
        }
        Command::View { id } => view(&mut page, cli.format, *id),
        Command::Render { output } => render(&mut page, &site, output).await,
    }
}

fn cloned(projects: Vec<&Project>) -> Vec<Project> {
    projects.into_iter().cloned().collect()
}

fn listing<F>(
    page: &mut MemoryPage,
    format: OutputFormat,
    projects: Vec<Project>,
    no_results_message: Option<&str>,
    draw: F,
) -> Result<String>
where
    F: FnOnce(&mut MemoryPage) -> usize,
{
    match format {
        OutputFormat::Html => {
            draw(page);
            Ok(page.list().grid().html())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&projects)?),
        OutputFormat::Text => match no_results_message {
            Some(message) if projects.is_empty() => Ok(message.to_string()),
            _ => Ok(projects
                .iter()
                .map(summary_line)
                .collect::<Vec<_>>()
                .join("\n")),
        },
    }
}

fn summary_line(project: &Project) -> String {
    format!(
        "{}\t{}\t{}",
        project.id,
        project.title,
        project.technologies.join(", ")
    )
}

fn view(page: &mut MemoryPage, format: OutputFormat, id: u32) -> Result<String> {
    let project = page
        .store()
        .find_by_id(id)
        .cloned()
        .ok_or(CatalogError::ProjectNotFound { id })?;

    match format {
        OutputFormat::Html => {
            page.view(id);
            Ok(page.modal().surface().body().as_html().to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&project)?),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("{} (#{})", project.title, project.id),
                project.description.clone(),
                format!("Technologies: {}", project.technologies.join(", ")),
                "Features:".to_string(),
            ];
            lines.extend(project.features.iter().map(|f| format!("  - {}", f)));
            lines.push(format!("Price: {}", project.price));
            lines.push(format!("Order: {}", project.order_link));
            Ok(lines.join("\n"))
        }
    }
}

async fn render(page: &mut MemoryPage, site: &SiteConfig, output: &str) -> Result<String> {
    validate_path("render.output", output)?;

    let count = page.load();
    let document = PageBuilder::new(site).build(&page.list().grid().html());

    let storage = LocalStorage::new(output.to_string());
    storage.write_file(PAGE_FILE, document.as_bytes()).await?;

    let path = std::path::Path::new(output).join(PAGE_FILE);
    tracing::info!("📁 Wrote {} projects to {}", count, path.display());
    Ok(path.display().to_string())
}
