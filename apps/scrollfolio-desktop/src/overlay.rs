use egui::{Align2, Color32, Pos2, RichText};
use scrollfolio_common::Color;
use scrollfolio_input::{InputState, Viewport};
use scrollfolio_scene::{HeaderIntro, Scene};

/// Horizontal page padding, as a fraction of the viewport width.
const PAGE_PADDING: f32 = 0.1;
/// Header font size, as a fraction of the smaller viewport side.
const HEADER_SIZE: f32 = 0.07;

/// Where a section header sits on screen, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPlacement {
    pub anchor: Pos2,
    pub align: Align2,
    pub font_size: f32,
}

/// Headers alternate sides: even sections on the left, odd on the right.
/// Each is vertically centered in its section and shifted by `offset_x`.
pub fn header_placement(
    index: usize,
    viewport: &Viewport,
    scroll_y: f32,
    offset_x: f32,
) -> HeaderPlacement {
    let y = index as f32 * viewport.height - scroll_y + viewport.height * 0.5;
    let (x, align) = if index % 2 == 0 {
        (viewport.width * PAGE_PADDING, Align2::LEFT_CENTER)
    } else {
        (viewport.width * (1.0 - PAGE_PADDING), Align2::RIGHT_CENTER)
    };
    HeaderPlacement {
        anchor: Pos2::new(x + offset_x, y),
        align,
        font_size: viewport.width.min(viewport.height) * HEADER_SIZE,
    }
}

fn color32(color: Color) -> Color32 {
    let [r, g, b] = color.to_srgb_u8();
    Color32::from_rgb(r, g, b)
}

/// Paint the section headers behind any windows.
pub fn draw_headers(ctx: &egui::Context, intro: &HeaderIntro, input: &InputState, color: Color) {
    let viewport = input.viewport();
    let scroll_y = input.scroll().scroll_y();
    for index in 0..intro.len() {
        let (Some(text), Some(offset)) = (intro.text(index), intro.offset(index)) else {
            continue;
        };
        let placement = header_placement(index, viewport, scroll_y, offset);
        // Fully scrolled out of view.
        if (placement.anchor.y - viewport.height * 0.5).abs() > viewport.height * 1.5 {
            continue;
        }
        egui::Area::new(egui::Id::new(("section_header", index)))
            .order(egui::Order::Background)
            .interactable(false)
            .pivot(placement.align)
            .fixed_pos(placement.anchor)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(text.to_uppercase())
                        .size(placement.font_size)
                        .strong()
                        .color(color32(color)),
                );
            });
    }
}

/// Edits made in the debug panel this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelChanges {
    pub material_color: Option<Color>,
    pub normals: Option<bool>,
}

pub fn draw_debug_panel(ctx: &egui::Context, scene: &Scene, input: &InputState) -> PanelChanges {
    let mut changes = PanelChanges::default();
    if !input.debug_panel_visible() {
        return changes;
    }

    egui::Window::new("Debug")
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            let mut rgb = scene.material_color().to_srgb_u8();
            ui.horizontal(|ui| {
                ui.label("materialColor");
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    changes.material_color = Some(Color::from_srgb_u8(rgb));
                }
            });

            let mut normals = input.normals_on();
            if ui.checkbox(&mut normals, "normals").changed() {
                changes.normals = Some(normals);
            }

            ui.separator();
            let scroll = input.scroll();
            ui.label(format!(
                "Section {}/{}  scroll {:.0}px",
                scroll.section() + 1,
                scroll.sections(),
                scroll.scroll_y()
            ));
            ui.label(format!("Frame {}  t={:.1}s", scene.frame(), scene.elapsed()));
            ui.small("Wheel/PgUp/PgDn: scroll | N: normals | F1: panel");
        });

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Pos2, b: Pos2) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn headers_alternate_sides() {
        let viewport = Viewport::new(1000.0, 800.0, 1.0);
        let first = header_placement(0, &viewport, 0.0, 0.0);
        assert_near(first.anchor, Pos2::new(100.0, 400.0));
        assert_eq!(first.align, Align2::LEFT_CENTER);
        assert!((first.font_size - 56.0).abs() < 1e-4);

        let second = header_placement(1, &viewport, 0.0, 0.0);
        assert_near(second.anchor, Pos2::new(900.0, 1200.0));
        assert_eq!(second.align, Align2::RIGHT_CENTER);
    }

    #[test]
    fn headers_scroll_with_page_and_slide_by_offset() {
        let viewport = Viewport::new(1000.0, 800.0, 1.0);
        let second = header_placement(1, &viewport, 800.0, -50.0);
        assert_near(second.anchor, Pos2::new(850.0, 400.0));
        let third = header_placement(2, &viewport, 800.0, -1200.0);
        assert_near(third.anchor, Pos2::new(-1100.0, 1200.0));
    }

    #[test]
    fn header_color_matches_material() {
        let color = Color::from_hex("#ffeded").unwrap();
        assert_eq!(color32(color), Color32::from_rgb(0xff, 0xed, 0xed));
    }
}
