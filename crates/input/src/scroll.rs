use serde::{Deserialize, Serialize};

/// The visible section changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

/// Page scroll over a stack of full-viewport-height sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    scroll_y: f32,
    page_height: f32,
    sections: usize,
    section: usize,
}

impl ScrollState {
    pub fn new(sections: usize, page_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            page_height: page_height.max(1.0),
            sections: sections.max(1),
            section: 0,
        }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Index of the section nearest the top of the viewport.
    pub fn section(&self) -> usize {
        self.section
    }

    /// Scroll offset measured in sections (0.0 at the top, 1.0 one page down).
    pub fn progress(&self) -> f32 {
        self.scroll_y / self.page_height
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.sections - 1) as f32 * self.page_height
    }

    pub fn set_scroll(&mut self, y: f32) -> Option<SectionChange> {
        self.scroll_y = if y.is_finite() {
            y.clamp(0.0, self.max_scroll())
        } else {
            0.0
        };
        self.update_section()
    }

    pub fn scroll_by(&mut self, dy: f32) -> Option<SectionChange> {
        self.set_scroll(self.scroll_y + dy)
    }

    /// Snap to the section `pages` away from the current one.
    pub fn scroll_pages(&mut self, pages: i32) -> Option<SectionChange> {
        let target = (self.section as i64 + pages as i64).clamp(0, self.sections as i64 - 1);
        self.set_scroll(target as f32 * self.page_height)
    }

    /// Change the page height (viewport resize). The pixel offset is kept, as
    /// a browser keeps `scrollY`, and re-clamped to the new page.
    pub fn resize(&mut self, page_height: f32) -> Option<SectionChange> {
        self.page_height = page_height.max(1.0);
        self.set_scroll(self.scroll_y)
    }

    fn update_section(&mut self) -> Option<SectionChange> {
        let next = ((self.scroll_y / self.page_height).round() as usize).min(self.sections - 1);
        if next == self.section {
            return None;
        }
        let change = SectionChange {
            from: self.section,
            to: next,
        };
        self.section = next;
        tracing::debug!(from = change.from, to = change.to, "section changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_section() {
        let s = ScrollState::new(3, 720.0);
        assert_eq!(s.section(), 0);
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.max_scroll(), 1440.0);
    }

    #[test]
    fn section_rounds_to_nearest() {
        let mut s = ScrollState::new(3, 100.0);
        assert_eq!(s.set_scroll(49.0), None);
        assert_eq!(s.set_scroll(50.0), Some(SectionChange { from: 0, to: 1 }));
        assert_eq!(s.set_scroll(140.0), None);
        assert_eq!(s.set_scroll(151.0), Some(SectionChange { from: 1, to: 2 }));
        assert_eq!(s.section(), 2);
    }

    #[test]
    fn change_reported_once_per_transition() {
        let mut s = ScrollState::new(3, 100.0);
        let changes: Vec<_> = (0..=200)
            .step_by(5)
            .filter_map(|y| s.set_scroll(y as f32))
            .collect();
        assert_eq!(
            changes,
            vec![SectionChange { from: 0, to: 1 }, SectionChange { from: 1, to: 2 }]
        );
    }

    #[test]
    fn scroll_is_clamped_to_page() {
        let mut s = ScrollState::new(3, 100.0);
        s.set_scroll(-50.0);
        assert_eq!(s.scroll_y(), 0.0);
        s.set_scroll(10_000.0);
        assert_eq!(s.scroll_y(), 200.0);
        assert_eq!(s.section(), 2);
        s.set_scroll(f32::NAN);
        assert_eq!(s.scroll_y(), 0.0);
    }

    #[test]
    fn scroll_pages_snaps_to_sections() {
        let mut s = ScrollState::new(3, 100.0);
        s.set_scroll(30.0);
        assert_eq!(s.scroll_pages(1), Some(SectionChange { from: 0, to: 1 }));
        assert_eq!(s.scroll_y(), 100.0);
        assert_eq!(s.scroll_pages(5), Some(SectionChange { from: 1, to: 2 }));
        assert_eq!(s.scroll_pages(-9), Some(SectionChange { from: 2, to: 0 }));
        assert_eq!(s.scroll_y(), 0.0);
    }

    #[test]
    fn resize_keeps_pixel_offset() {
        let mut s = ScrollState::new(3, 100.0);
        s.set_scroll(100.0);
        // Taller page: 100px is now less than half a section.
        assert_eq!(s.resize(300.0), Some(SectionChange { from: 1, to: 0 }));
        assert_eq!(s.scroll_y(), 100.0);
        // Shorter page clamps the offset.
        s.set_scroll(600.0);
        s.resize(50.0);
        assert_eq!(s.scroll_y(), 100.0);
        assert_eq!(s.section(), 2);
    }

    #[test]
    fn single_section_page_never_scrolls() {
        let mut s = ScrollState::new(0, 100.0);
        assert_eq!(s.sections(), 1);
        assert_eq!(s.scroll_by(500.0), None);
        assert_eq!(s.scroll_y(), 0.0);
    }
}
