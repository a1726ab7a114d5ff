pub(crate) mod header;
pub(crate) mod map;
pub(crate) mod tabs;

use eframe::egui;

use chipmap_core::PixelPoint;

/// Logical panel size; all layout below is in these units with y up.
pub(crate) const PANEL_WIDTH: f32 = 320.0;
pub(crate) const PANEL_HEIGHT: f32 = 480.0;

pub(crate) const MENU_TEXT_SIZE: f32 = 20.0;
pub(crate) const TAB_TEXT_SIZE: f32 = 16.0;
pub(crate) const SCREEN_TEXT_SIZE: f32 = 10.0;
pub(crate) const INFO_BAR_HEIGHT: f32 = 24.0;

/// Painter over the fixed-size panel, addressed bottom-up like the
/// overlay geometry.
pub(crate) struct Canvas {
    pub(crate) painter: egui::Painter,
    pub(crate) rect: egui::Rect,
    pub(crate) color: egui::Color32,
}

impl Canvas {
    pub(crate) fn pos(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(self.rect.left() + x, self.rect.bottom() - y)
    }

    pub(crate) fn at(&self, p: PixelPoint) -> egui::Pos2 {
        self.pos(p.x as f32, p.y as f32)
    }

    pub(crate) fn stroke(&self, width: f32) -> egui::Stroke {
        egui::Stroke::new(width, self.color)
    }

    /// Draw text anchored at a panel position; returns its screen rect.
    pub(crate) fn text(
        &self,
        x: f32,
        y: f32,
        anchor: egui::Align2,
        text: impl ToString,
        size: f32,
    ) -> egui::Rect {
        self.painter.text(
            self.pos(x, y),
            anchor,
            text,
            egui::FontId::monospace(size),
            self.color,
        )
    }

    pub(crate) fn polyline(&self, points: &[PixelPoint], width: f32) {
        let pts: Vec<egui::Pos2> = points.iter().map(|&p| self.at(p)).collect();
        self.painter
            .add(egui::Shape::line(pts, self.stroke(width)));
    }
}
