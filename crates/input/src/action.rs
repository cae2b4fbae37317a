use crate::scroll::SectionChange;

/// A high-level input action produced by any windowing backend.
///
/// The scene never sees raw window events, only these actions and the
/// [`InputEffect`]s they produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Pointer moved to a position in logical pixels.
    PointerMoved { x: f32, y: f32 },
    /// Jump the page to an absolute scroll offset in logical pixels.
    ScrollTo(f32),
    /// Scroll the page by a relative amount in logical pixels.
    ScrollBy(f32),
    /// Scroll by whole viewport heights (page up/down keys).
    ScrollPages(i32),
    /// Viewport resized to a logical size and device scale factor.
    Resized {
        width: f32,
        height: f32,
        scale_factor: f32,
    },
    /// Switch section meshes between toon and normal shading.
    ToggleNormals,
    /// Show or hide the debug panel.
    ToggleDebugPanel,
    /// No-op (used for input that hasn't been bound).
    Noop,
}

/// Something the scene or app must react to after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEffect {
    SectionChanged(SectionChange),
    Resized,
    NormalsToggled(bool),
    DebugPanelToggled(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_pointer_is_constructible() {
        let a = InputAction::PointerMoved { x: 10.0, y: 20.0 };
        assert!(matches!(a, InputAction::PointerMoved { .. }));
    }

    #[test]
    fn effect_carries_section_change() {
        let e = InputEffect::SectionChanged(SectionChange { from: 0, to: 1 });
        assert!(matches!(e, InputEffect::SectionChanged(SectionChange { to: 1, .. })));
    }
}
