use crate::core::store::ProjectStore;
use crate::core::Project;

/// Read-only queries over a [`ProjectStore`]. Results keep store order.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    store: &'a ProjectStore,
}

impl<'a> FilterEngine<'a> {
    pub fn new(store: &'a ProjectStore) -> Self {
        Self { store }
    }

    /// Case-insensitive substring match on title, description or any
    /// technology. An empty query matches everything.
    pub fn search_by_text(&self, query: &str) -> Vec<&'a Project> {
        let needle = query.to_lowercase();
        let matches: Vec<&'a Project> = self
            .store
            .all()
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p
                        .technologies
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect();
        tracing::debug!("Search {:?} matched {} projects", query, matches.len());
        matches
    }

    /// Exact, case-sensitive membership in a project's technologies.
    pub fn filter_by_technology(&self, tech: &str) -> Vec<&'a Project> {
        let matches: Vec<&'a Project> = self
            .store
            .all()
            .iter()
            .filter(|p| p.has_technology(tech))
            .collect();
        tracing::debug!("Technology {:?} matched {} projects", tech, matches.len());
        matches
    }

    pub fn reset(&self) -> Vec<&'a Project> {
        self.store.all().iter().collect()
    }
}
