//! 3D Viewport panel

use glam::Vec2;

use cube_core::{PointerEvent, Viewport};
use cube_renderer::DrawPrimitive;

use super::Panel;
use crate::state::EditorState;

/// 3D viewport panel: feeds pointer input to the editor and paints the
/// frame's draw list
#[derive(Default)]
pub struct ViewportPanel {
    last_size: egui::Vec2,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "3D Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState) {
        let available_size = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let rect = response.rect;

        if available_size != self.last_size {
            state.resize(Viewport::new(rect.width(), rect.height()));
            self.last_size = available_size;
        }

        for event in collect_pointer_events(ui, rect) {
            state.handle_pointer(event);
        }

        painter.rect_filled(rect, 0.0, to_color32(state.renderer().background_color()));

        let offset = rect.min.to_vec2();
        let to_pos = |p: Vec2| egui::pos2(p.x, p.y) + offset;

        for primitive in state.render().primitives() {
            match *primitive {
                DrawPrimitive::Triangle { points, color } => {
                    painter.add(egui::Shape::convex_polygon(
                        points.iter().map(|p| to_pos(*p)).collect(),
                        to_color32(color),
                        egui::Stroke::NONE,
                    ));
                }
                DrawPrimitive::Disc {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(to_pos(center), radius, to_color32(color));
                }
                DrawPrimitive::Line {
                    points,
                    color,
                    width,
                } => {
                    painter.line_segment(
                        [to_pos(points[0]), to_pos(points[1])],
                        egui::Stroke::new(width, to_color32(color)),
                    );
                }
            }
        }
    }
}

/// This frame's primary-button and motion events, in delivery order and in
/// viewport-relative coordinates. Presses only count inside the viewport;
/// moves and releases count anywhere.
fn collect_pointer_events(ui: &egui::Ui, rect: egui::Rect) -> Vec<PointerEvent> {
    let local = |pos: egui::Pos2| {
        let p = pos - rect.min;
        Vec2::new(p.x, p.y)
    };

    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(PointerEvent::Move(local(*pos))),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } if rect.contains(*pos) => Some(PointerEvent::Down(local(*pos))),
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => Some(PointerEvent::Up),
                _ => None,
            })
            .collect()
    })
}

fn to_color32(color: [f32; 3]) -> egui::Color32 {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgb(r, g, b)
}
