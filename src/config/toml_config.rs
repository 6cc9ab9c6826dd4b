use crate::core::list_view::DEFAULT_NO_RESULTS_MESSAGE;
use crate::core::store::ProjectStore;
use crate::core::{Project, SiteSettings};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A catalog file: site settings plus the project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub canonical_url: Option<String>,
    pub no_results_message: String,
    pub escape_markup: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Project Catalog".to_string(),
            canonical_url: None,
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            escape_markup: false,
        }
    }
}

impl SiteSettings for SiteConfig {
    fn title(&self) -> &str {
        &self.title
    }

    fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }

    fn no_results_message(&self) -> &str {
        &self.no_results_message
    }

    fn escape_markup(&self) -> bool {
        self.escape_markup
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.title", &self.title)?;
        validate_non_empty_string("site.no_results_message", &self.no_results_message)?;
        if let Some(url) = &self.canonical_url {
            validate_url("site.canonical_url", url)?;
        }
        Ok(())
    }
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Validates and splits the file into its site settings and store.
    pub fn into_parts(self) -> Result<(SiteConfig, ProjectStore)> {
        self.validate()?;
        let store = ProjectStore::new(self.projects)?;
        Ok((self.site, store))
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.site.validate()?;
        if self.projects.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "projects".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[site]
title = "Student Projects"
canonical_url = "https://example.com"

[[projects]]
id = 1
title = "Online Voting System"
description = "Complete online voting solution"
image = "fas fa-shopping-cart"
price = "₹899 = (<s>₹1199</s> after 25% discount)"
technologies = ["HTML", "Flask", "Postgresql"]
features = ["Admin dashboard", "Email notifications"]
orderLink = "https://example.com/order"

[[projects]]
id = 2
title = "Library Manager"
description = "Track books and members"
image = "fas fa-book"
price = "₹499"
order_link = "https://example.com/order2"
"#;

    #[test]
    fn test_parse_catalog() {
        let config = CatalogConfig::from_toml_str(CATALOG).unwrap();
        assert_eq!(config.site.title, "Student Projects");
        assert!(!config.site.escape_markup);
        assert_eq!(config.site.no_results_message, DEFAULT_NO_RESULTS_MESSAGE);
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].order_link, "https://example.com/order");
        assert_eq!(config.projects[0].technologies, vec!["HTML", "Flask", "Postgresql"]);
        assert!(config.projects[1].technologies.is_empty());
    }

    #[test]
    fn test_escape_markup_is_opt_in() {
        let config =
            CatalogConfig::from_toml_str("[site]\ntitle = \"x\"\nescape_markup = true\n").unwrap();
        assert!(config.site.escape_markup);
        assert!(!SiteConfig::default().escape_markup);
    }

    #[test]
    fn test_into_parts_builds_store() {
        let (site, store) = CatalogConfig::from_toml_str(CATALOG)
            .unwrap()
            .into_parts()
            .unwrap();
        assert_eq!(site.canonical_url.as_deref(), Some("https://example.com"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(2).unwrap().title, "Library Manager");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PROJECT_CATALOG_TEST_TITLE", "From Env");
        let config = CatalogConfig::from_toml_str(
            "[site]\ntitle = \"${PROJECT_CATALOG_TEST_TITLE}\"\nno_results_message = \"${PROJECT_CATALOG_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(config.site.title, "From Env");
        assert_eq!(config.site.no_results_message, "${PROJECT_CATALOG_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CatalogConfig::from_toml_str("[[projects]\nid = ").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = CatalogConfig::from_toml_str(CATALOG).unwrap();
        config.site.canonical_url = Some("ftp://example.com".to_string());
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidConfigValueError { .. })
        ));

        let empty = CatalogConfig::from_toml_str("[site]\ntitle = \"x\"\n").unwrap();
        assert!(matches!(
            empty.into_parts(),
            Err(CatalogError::MissingConfigError { .. })
        ));

        let mut dup = CatalogConfig::from_toml_str(CATALOG).unwrap();
        dup.projects[1].id = 1;
        assert!(matches!(
            dup.into_parts(),
            Err(CatalogError::DuplicateProjectId { id: 1 })
        ));
    }
}
