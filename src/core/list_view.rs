use crate::core::card::CardRenderer;
use crate::core::{Fragment, GridSurface, Project};
use crate::utils::html;

pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No projects found matching your search.";

/// Renders project sequences into a grid surface, replacing whatever the
/// grid held before.
pub struct ListView<G: GridSurface> {
    grid: G,
    renderer: CardRenderer,
    no_results_message: String,
}

impl<G: GridSurface> ListView<G> {
    pub fn new(grid: G, renderer: CardRenderer) -> Self {
        Self {
            grid,
            renderer,
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
        }
    }

    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Clears the grid and appends one card per project. Empty input leaves
    /// the grid empty.
    pub fn render<'a, I>(&mut self, projects: I) -> usize
    where
        I: IntoIterator<Item = &'a Project>,
    {
        self.grid.clear();
        let mut count = 0;
        for project in projects {
            self.grid.append(self.renderer.render_card(project));
            count += 1;
        }
        tracing::debug!("Rendered {} project cards", count);
        count
    }

    /// Like [`ListView::render`], but an empty result shows the
    /// "no results" message instead of an empty grid.
    pub fn render_filtered<'a, I>(&mut self, projects: I) -> usize
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let count = self.render(projects);
        if count == 0 {
            tracing::debug!("No matching projects, showing empty-result message");
            self.grid.append(Fragment::new(format!(
                r#"<p class="no-results">{}</p>"#,
                html::escape(&self.no_results_message)
            )));
        }
        count
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }
}
