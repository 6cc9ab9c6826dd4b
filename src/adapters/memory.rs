use crate::domain::model::Fragment;
use crate::domain::ports::{GridSurface, ModalSurface};

/// Grid surface that keeps appended fragments in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    fragments: Vec<Fragment>,
}

impl MemoryGrid {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Concatenated markup of everything currently in the grid.
    pub fn html(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::as_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl GridSurface for MemoryGrid {
    fn clear(&mut self) {
        self.fragments.clear();
    }

    fn append(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }
}

/// Modal surface that records its visual state instead of drawing it.
#[derive(Debug, Clone)]
pub struct MemoryModal {
    body: Fragment,
    visible: bool,
    background_scroll: bool,
    hide_calls: usize,
}

impl Default for MemoryModal {
    fn default() -> Self {
        Self {
            body: Fragment::default(),
            visible: false,
            background_scroll: true,
            hide_calls: 0,
        }
    }
}

impl MemoryModal {
    pub fn body(&self) -> &Fragment {
        &self.body
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn background_scroll(&self) -> bool {
        self.background_scroll
    }

    pub fn hide_calls(&self) -> usize {
        self.hide_calls
    }
}

impl ModalSurface for MemoryModal {
    fn replace_body(&mut self, fragment: Fragment) {
        self.body = fragment;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hide_calls += 1;
    }

    fn set_background_scroll(&mut self, enabled: bool) {
        self.background_scroll = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_clear_drops_previous_fragments() {
        let mut grid = MemoryGrid::default();
        grid.append(Fragment::new("<p>a</p>"));
        grid.append(Fragment::new("<p>b</p>"));
        assert_eq!(grid.html(), "<p>a</p>\n<p>b</p>");

        grid.clear();
        assert!(grid.fragments().is_empty());
        assert_eq!(grid.html(), "");
    }

    #[test]
    fn test_modal_records_visual_state() {
        let mut modal = MemoryModal::default();
        modal.replace_body(Fragment::new("<h2>x</h2>"));
        modal.show();
        modal.set_background_scroll(false);
        assert!(modal.is_visible());
        assert!(!modal.background_scroll());

        modal.hide();
        assert!(!modal.is_visible());
        assert_eq!(modal.hide_calls(), 1);
        assert_eq!(modal.body().as_html(), "<h2>x</h2>");
    }
}
