use crate::core::Project;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

/// The fixed, ordered list of projects shown on the page.
///
/// Built once, never mutated. Ids are unique and positive and every project
/// has a title; both are checked in [`ProjectStore::new`].
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id == 0 {
                return Err(CatalogError::InvalidProject {
                    id: project.id,
                    reason: "id must be a positive integer".to_string(),
                });
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::InvalidProject {
                    id: project.id,
                    reason: "title cannot be empty".to_string(),
                });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateProjectId { id: project.id });
            }
        }

        tracing::debug!("Project store built with {} projects", projects.len());
        Ok(Self { projects })
    }

    /// The catalog shipped with the page.
    pub fn builtin() -> Self {
        Self {
            projects: vec![Project {
                id: 1,
                title: "Online Voting System".to_string(),
                description: "Complete online voting solution with high security integration"
                    .to_string(),
                image: "fas fa-shopping-cart".to_string(),
                price: "₹899 = (<s>₹1199</s> after 25% discount)".to_string(),
                technologies: ["HTML", "CSS", "JavaScript", "Flask", "Postgresql"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                features: [
                    "Responsive design for all devices",
                    "Ballot creation and management",
                    "Secure vote casting and encryption",
                    "Admin dashboard",
                    "Candidate and election management system",
                    "User authentication (with OTP)",
                    "Real-time result tracking and analytics",
                    "Email notifications",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
                order_link: "https://docs.google.com/forms/d/e/1FAIpQLSd7QLOxH7y-Odu115muGiarA8kcBEjqgE8oI3CvtN4erLy8qA/viewform?usp=dialog".to_string(),
            }],
        }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Distinct technology tags in order of first appearance.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.technologies.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: u32, title: &str, technologies: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            image: "fas fa-code".to_string(),
            price: "₹499".to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            features: vec!["Admin dashboard".to_string()],
            order_link: format!("https://example.com/order/{}", id),
        }
    }

    pub(crate) fn sample_store() -> ProjectStore {
        ProjectStore::new(vec![
            project(1, "Online Voting System", &["Flask", "Postgresql"]),
            project(2, "Library Manager", &["Django", "SQLite"]),
            project(3, "Chat App", &["Node", "Flask"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id_returns_every_stored_project() {
        let store = sample_store();
        for p in store.all() {
            assert_eq!(store.find_by_id(p.id), Some(p));
        }
    }

    #[test]
    fn test_find_by_id_absent() {
        let store = sample_store();
        assert!(store.find_by_id(4).is_none());
        assert!(store.find_by_id(999).is_none());
        assert!(store.find_by_id(0).is_none());
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let ids: Vec<u32> = sample_store().all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ProjectStore::new(vec![project(1, "A", &[]), project(1, "B", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProjectId { id: 1 }));
    }

    #[test]
    fn test_rejects_zero_id_and_blank_title() {
        assert!(matches!(
            ProjectStore::new(vec![project(0, "A", &[])]),
            Err(CatalogError::InvalidProject { id: 0, .. })
        ));
        assert!(matches!(
            ProjectStore::new(vec![project(5, "  ", &[])]),
            Err(CatalogError::InvalidProject { id: 5, .. })
        ));
    }

    #[test]
    fn test_technologies_are_distinct_in_first_seen_order() {
        assert_eq!(
            sample_store().technologies(),
            vec!["Flask", "Postgresql", "Django", "SQLite", "Node"]
        );
    }

    #[test]
    fn test_builtin_catalog() {
        let store = ProjectStore::builtin();
        assert_eq!(store.len(), 1);
        let voting = store.find_by_id(1).unwrap();
        assert_eq!(voting.title, "Online Voting System");
        assert!(voting.has_technology("Flask"));
        assert_eq!(voting.features.len(), 8);
    }
}
