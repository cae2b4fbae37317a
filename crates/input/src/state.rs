use crate::action::{InputAction, InputEffect};
use crate::scroll::ScrollState;
use crate::viewport::{Cursor, Viewport};

/// Accumulated input state for one window.
#[derive(Debug, Clone)]
pub struct InputState {
    viewport: Viewport,
    cursor: Cursor,
    scroll: ScrollState,
    normals_on: bool,
    debug_panel: bool,
}

impl InputState {
    pub fn new(viewport: Viewport, sections: usize) -> Self {
        Self {
            scroll: ScrollState::new(sections, viewport.height),
            viewport,
            cursor: Cursor::default(),
            normals_on: false,
            debug_panel: true,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn normals_on(&self) -> bool {
        self.normals_on
    }

    pub fn debug_panel_visible(&self) -> bool {
        self.debug_panel
    }

    /// Fold one action into the state and return what changed.
    pub fn apply(&mut self, action: InputAction) -> Vec<InputEffect> {
        let mut effects = Vec::new();
        match action {
            InputAction::PointerMoved { x, y } => {
                self.cursor = Cursor::from_pointer(x, y, &self.viewport);
            }
            InputAction::ScrollTo(y) => {
                effects.extend(self.scroll.set_scroll(y).map(InputEffect::SectionChanged));
            }
            InputAction::ScrollBy(dy) => {
                effects.extend(self.scroll.scroll_by(dy).map(InputEffect::SectionChanged));
            }
            InputAction::ScrollPages(pages) => {
                effects.extend(self.scroll.scroll_pages(pages).map(InputEffect::SectionChanged));
            }
            InputAction::Resized {
                width,
                height,
                scale_factor,
            } => {
                self.viewport = Viewport::new(width, height, scale_factor)
                    .with_pixel_ratio_cap(self.viewport.pixel_ratio_cap);
                tracing::debug!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    pixel_ratio = self.viewport.pixel_ratio(),
                    "viewport resized"
                );
                effects.push(InputEffect::Resized);
                effects.extend(
                    self.scroll
                        .resize(self.viewport.height)
                        .map(InputEffect::SectionChanged),
                );
            }
            InputAction::ToggleNormals => {
                self.normals_on = !self.normals_on;
                effects.push(InputEffect::NormalsToggled(self.normals_on));
            }
            InputAction::ToggleDebugPanel => {
                self.debug_panel = !self.debug_panel;
                effects.push(InputEffect::DebugPanelToggled(self.debug_panel));
            }
            InputAction::Noop => {}
        }
        effects
    }

    /// Set the normals flag directly (debug panel checkbox).
    pub fn set_normals(&mut self, on: bool) -> Option<InputEffect> {
        if self.normals_on == on {
            return None;
        }
        self.normals_on = on;
        Some(InputEffect::NormalsToggled(on))
    }
}
