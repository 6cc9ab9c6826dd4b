pub mod card;
pub mod catalog;
pub mod filter;
pub mod list_view;
pub mod modal;
pub mod page;
pub mod store;

pub use crate::domain::model::{Fragment, ModalState, PointerTarget, Project, UiEvent};
pub use crate::domain::ports::{GridSurface, ModalSurface, SiteSettings, Storage};
pub use crate::utils::error::Result;
