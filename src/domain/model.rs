use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon class list, e.g. `fas fa-shopping-cart`.
    pub image: String,
    /// Display price. May carry trusted inline markup such as `<s>`.
    pub price: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(alias = "orderLink")]
    pub order_link: String,
}

impl Project {
    pub fn has_technology(&self, tech: &str) -> bool {
        self.technologies.iter().any(|t| t == tech)
    }
}

/// A rendered unit of markup, not yet attached to a surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Where a pointer event landed relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ViewClicked(u32),
    CloseClicked,
    Pointer(PointerTarget),
    KeyDown(String),
}

impl UiEvent {
    pub fn key(key: &str) -> Self {
        UiEvent::KeyDown(key.to_string())
    }
}
