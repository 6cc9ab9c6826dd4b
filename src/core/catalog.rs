use crate::core::card::CardRenderer;
use crate::core::filter::FilterEngine;
use crate::core::list_view::ListView;
use crate::core::modal::DetailModal;
use crate::core::store::ProjectStore;
use crate::core::{GridSurface, ModalSurface, SiteSettings, UiEvent};

/// The catalog page: one store, one grid, one modal.
///
/// Every operation runs to completion against the owned surfaces, so the
/// page is driven by calling these methods from whatever event loop hosts it.
pub struct CatalogPage<G: GridSurface, M: ModalSurface> {
    store: ProjectStore,
    list: ListView<G>,
    modal: DetailModal<M>,
}

impl<G: GridSurface, M: ModalSurface> CatalogPage<G, M> {
    pub fn new<S: SiteSettings>(store: ProjectStore, grid: G, modal: M, site: &S) -> Self {
        let renderer = CardRenderer::new(site.escape_markup());
        Self {
            store,
            list: ListView::new(grid, renderer).with_no_results_message(site.no_results_message()),
            modal: DetailModal::new(modal, renderer),
        }
    }

    /// Renders the full list.
    pub fn load(&mut self) -> usize {
        let count = self.list.render(self.store.all());
        tracing::debug!("Catalog loaded with {} projects", count);
        count
    }

    pub fn search(&mut self, query: &str) -> usize {
        let matches = FilterEngine::new(&self.store).search_by_text(query);
        self.list.render_filtered(matches)
    }

    pub fn filter_by_technology(&mut self, tech: &str) -> usize {
        let matches = FilterEngine::new(&self.store).filter_by_technology(tech);
        self.list.render_filtered(matches)
    }

    pub fn reset(&mut self) -> usize {
        let all = FilterEngine::new(&self.store).reset();
        self.list.render(all)
    }

    pub fn view(&mut self, id: u32) -> bool {
        self.modal.view(&self.store, id)
    }

    /// Routes a UI event. Returns `true` when the event changed the modal.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::ViewClicked(id) => self.view(*id),
            other => self.modal.handle_event(other),
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn list(&self) -> &ListView<G> {
        &self.list
    }

    pub fn modal(&self) -> &DetailModal<M> {
        &self.modal
    }
}
