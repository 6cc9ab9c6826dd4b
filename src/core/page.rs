use crate::core::SiteSettings;
use crate::utils::html;
use chrono::{DateTime, Datelike, Utc};

pub const GRID_ID: &str = "projectsGrid";
pub const MODAL_ID: &str = "projectModal";
pub const MODAL_BODY_ID: &str = "modalBody";

/// Wraps rendered grid markup into a standalone HTML document with the
/// hidden modal shell the detail view is drawn into.
pub struct PageBuilder<'a, S: SiteSettings> {
    site: &'a S,
    generated_at: DateTime<Utc>,
}

impl<'a, S: SiteSettings> PageBuilder<'a, S> {
    pub fn new(site: &'a S) -> Self {
        Self {
            site,
            generated_at: Utc::now(),
        }
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn build(&self, grid_html: &str) -> String {
        let title = html::escape(self.site.title());
        let canonical = self
            .site
            .canonical_url()
            .map(|url| format!("\n    <link rel=\"canonical\" href=\"{}\">", html::escape(url)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>{canonical}
</head>
<body>
    <section id="projects" class="projects">
        <h2 class="section-title">{title}</h2>
        <div class="projects-grid" id="{grid_id}">
{grid_html}
        </div>
    </section>
    <div id="{modal_id}" class="modal" style="display: none">
        <div class="modal-content">
            <span class="close">&times;</span>
            <div id="{modal_body_id}"></div>
        </div>
    </div>
    <footer class="footer">
        <p>&copy; {year} {title}. Generated {generated}.</p>
    </footer>
</body>
</html>
"#,
            title = title,
            canonical = canonical,
            grid_id = GRID_ID,
            grid_html = grid_html,
            modal_id = MODAL_ID,
            modal_body_id = MODAL_BODY_ID,
            year = self.generated_at.year(),
            generated = self.generated_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::SiteConfig;
    use chrono::TimeZone;

    #[test]
    fn test_document_has_grid_and_modal_shell() {
        let site = SiteConfig::default();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let doc = PageBuilder::new(&site).generated_at(at).build("<div>card</div>");

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"id="projectsGrid""#));
        assert!(doc.contains("<div>card</div>"));
        assert!(doc.contains(r#"<div id="projectModal" class="modal" style="display: none">"#));
        assert!(doc.contains(r#"<div id="modalBody"></div>"#));
        assert!(doc.contains(r#"<span class="close">"#));
        assert!(doc.contains("&copy; 2025"));
        assert!(doc.contains("2025-03-01 09:30 UTC"));
        assert!(!doc.contains("rel=\"canonical\""));
    }

    #[test]
    fn test_canonical_link_and_escaped_title() {
        let site = SiteConfig {
            title: "Tom & Jerry Projects".to_string(),
            canonical_url: Some("https://example.com/projects".to_string()),
            ..SiteConfig::default()
        };
        let doc = PageBuilder::new(&site).build("");

        assert!(doc.contains("<title>Tom &amp; Jerry Projects</title>"));
        assert!(doc.contains(r#"<link rel="canonical" href="https://example.com/projects">"#));
    }
}
