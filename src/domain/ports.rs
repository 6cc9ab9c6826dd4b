use crate::domain::model::Fragment;
use crate::utils::error::Result;

/// The container the project cards are drawn into.
pub trait GridSurface {
    fn clear(&mut self);
    fn append(&mut self, fragment: Fragment);
}

/// The overlay that shows one project's details.
pub trait ModalSurface {
    fn replace_body(&mut self, fragment: Fragment);
    fn show(&mut self);
    fn hide(&mut self);
    /// Toggles scrolling of the page behind the modal.
    fn set_background_scroll(&mut self, enabled: bool);
}

/// Site-wide settings the renderers read.
pub trait SiteSettings {
    fn title(&self) -> &str;
    fn canonical_url(&self) -> Option<&str>;
    fn no_results_message(&self) -> &str;
    fn escape_markup(&self) -> bool;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
