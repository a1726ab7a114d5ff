use eframe::egui;

use chipmap_core::Tab;

use super::{Canvas, PANEL_HEIGHT, PANEL_WIDTH, SCREEN_TEXT_SIZE};
use crate::app::ChipMapApp;

const ABOUT_TEXT: &str = "ChipOS v0.0.1 beta\n\n\
COPYRIGHT 2021 Squirrel Computers(R)\n\
LOADER V1.0\n\
EXEC VERSION 21.10";

const EXPANSION_TEXT: &str = "LOAD EXPANSION MODULE";

/// Document box on the ARCHIVES tab, top-left anchored.
const ARCHIVE_LEFT: f32 = 10.0;
const ARCHIVE_TOP: f32 = PANEL_HEIGHT * 3.0 / 4.0;
const ARCHIVE_WIDTH: f32 = 300.0;
const ARCHIVE_HEIGHT: f32 = 240.0;

impl ChipMapApp {
    /// Text content of every tab except CHIPMAP.
    pub(crate) fn draw_tab_text(&self, canvas: &Canvas) {
        let center = (PANEL_WIDTH / 2.0, PANEL_HEIGHT / 2.0);
        match self.console.active_tab() {
            Tab::About => self.centered_block(canvas, center, ABOUT_TEXT),
            Tab::Audio => {
                let text = format!("VOLUME: {}%", self.console.volume());
                self.centered_block(canvas, center, &text);
            }
            Tab::Expansion => self.centered_block(canvas, center, EXPANSION_TEXT),
            Tab::Environment => {
                let text = self.console.sensors.lines().join("\n");
                self.centered_block(canvas, center, &text);
            }
            Tab::Archives => self.draw_archive(canvas),
            Tab::Chipmap => {}
        }
    }

    fn centered_block(&self, canvas: &Canvas, (x, y): (f32, f32), text: &str) {
        let galley = canvas.painter.layout(
            text.to_owned(),
            egui::FontId::monospace(SCREEN_TEXT_SIZE),
            canvas.color,
            PANEL_WIDTH,
        );
        let size = galley.size();
        let top_left = canvas.pos(x - size.x / 2.0, y + size.y / 2.0);
        canvas.painter.galley(top_left, galley, canvas.color);
    }

    fn draw_archive(&self, canvas: &Canvas) {
        let viewport = egui::Rect::from_min_size(
            canvas.pos(ARCHIVE_LEFT, ARCHIVE_TOP),
            egui::vec2(ARCHIVE_WIDTH, ARCHIVE_HEIGHT),
        );
        let galley = canvas.painter.layout(
            self.archive_text.clone(),
            egui::FontId::monospace(SCREEN_TEXT_SIZE),
            canvas.color,
            ARCHIVE_WIDTH,
        );
        let scroll = self.console.archive_scroll() as f32;
        canvas
            .painter
            .with_clip_rect(viewport)
            .galley(viewport.min - egui::vec2(0.0, scroll), galley, canvas.color);
    }
}
