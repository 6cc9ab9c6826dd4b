use crate::core::card::CardRenderer;
use crate::core::store::ProjectStore;
use crate::core::{Fragment, ModalState, ModalSurface, PointerTarget, Project, UiEvent};

const ORDER_NOTE: &str = "Click below to fill out our order form. We'll verify your details and contact you on Instagram within 24 hours.";

/// Two-state details overlay.
///
/// Opening is only possible through [`DetailModal::view`]; every close
/// trigger funnels into the same transition and does nothing while the modal
/// is already closed.
pub struct DetailModal<M: ModalSurface> {
    surface: M,
    renderer: CardRenderer,
    state: ModalState,
}

impl<M: ModalSurface> DetailModal<M> {
    pub fn new(surface: M, renderer: CardRenderer) -> Self {
        Self {
            surface,
            renderer,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    /// Shows the project with `id`. An unknown id leaves the modal as it was
    /// and returns `false`.
    pub fn view(&mut self, store: &ProjectStore, id: u32) -> bool {
        let Some(project) = store.find_by_id(id) else {
            tracing::debug!("View requested for unknown project {}, ignoring", id);
            return false;
        };

        let body = self.render_detail(project);
        self.surface.replace_body(body);
        self.surface.show();
        self.surface.set_background_scroll(false);
        self.state = ModalState::Open;
        tracing::debug!("Modal opened for project {}", id);
        true
    }

    /// Returns `true` if the modal was open and is now closed.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.surface.hide();
        self.surface.set_background_scroll(true);
        self.state = ModalState::Closed;
        tracing::debug!("Modal closed");
        true
    }

    /// Applies a close trigger. Clicks on the content and keys other than
    /// Escape are ignored; view clicks are routed by the page, not here.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::CloseClicked | UiEvent::Pointer(PointerTarget::Backdrop) => self.close(),
            UiEvent::KeyDown(key) if key == "Escape" => self.close(),
            UiEvent::Pointer(PointerTarget::Content)
            | UiEvent::KeyDown(_)
            | UiEvent::ViewClicked(_) => false,
        }
    }

    pub fn render_detail(&self, project: &Project) -> Fragment {
        let features: String = project
            .features
            .iter()
            .map(|f| format!("<li>{}</li>", self.renderer.text(f)))
            .collect();

        Fragment::new(format!(
            r#"<div class="modal-header">
    <h2>{title}</h2>
    <p>{description}</p>
</div>
<div class="modal-body">
    <div class="modal-image">
        <i class="{image}"></i>
    </div>
    <div class="modal-details">
        <div class="modal-info">
            <h4>Technologies Used</h4>
            <div class="project-tech">{tags}</div>
            <div class="modal-features">
                <h4>Features Included</h4>
                <ul>{features}</ul>
            </div>
        </div>
        <div class="modal-order">
            <h4>Ready to Order?</h4>
            <div class="project-price">{price}</div>
            <p>{note}</p>
            <a href="{order_link}" target="_blank" class="btn btn-primary">Order This Project</a>
        </div>
    </div>
</div>"#,
            title = self.renderer.text(&project.title),
            description = self.renderer.text(&project.description),
            image = self.renderer.text(&project.image),
            tags = self.renderer.tech_tags(project),
            features = features,
            price = project.price,
            note = ORDER_NOTE,
            order_link = self.renderer.text(&project.order_link),
        ))
    }
}
