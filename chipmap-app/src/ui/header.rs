use chrono::{DateTime, Local, TimeZone};
use eframe::egui;

use chipmap_core::Menu;

use super::{
    Canvas, INFO_BAR_HEIGHT, MENU_TEXT_SIZE, PANEL_HEIGHT, PANEL_WIDTH, SCREEN_TEXT_SIZE,
    TAB_TEXT_SIZE,
};
use crate::app::ChipMapApp;

/// Horizontal gap between menu labels.
const MENU_GAP: f32 = 16.0;

fn text_width(canvas: &Canvas, text: &str, size: f32) -> f32 {
    canvas
        .painter
        .layout_no_wrap(text.to_string(), egui::FontId::monospace(size), canvas.color)
        .size()
        .x
}

impl ChipMapApp {
    /// Menu labels with the active-menu brackets, and the tab strip.
    pub(crate) fn draw_header(&self, canvas: &Canvas) {
        let y = PANEL_HEIGHT - MENU_TEXT_SIZE / 2.0;
        let widths: Vec<f32> = Menu::ALL
            .iter()
            .map(|m| text_width(canvas, m.label(), MENU_TEXT_SIZE))
            .collect();
        let mid = PANEL_WIDTH / 2.0;
        let centers = [
            mid - widths[0] / 2.0 - widths[1] / 2.0 - MENU_GAP,
            mid,
            mid + widths[2] / 2.0 + widths[1] / 2.0 + MENU_GAP,
        ];

        for (menu, &x) in Menu::ALL.iter().zip(&centers) {
            canvas.text(x, y, egui::Align2::CENTER_CENTER, menu.label(), MENU_TEXT_SIZE);
        }

        let active = self.console.menu.menu();
        let i = Menu::ALL.iter().position(|&m| m == active).unwrap_or(0);
        let half = widths[i] / 2.0;
        let (cx, low) = (centers[i], y - MENU_TEXT_SIZE / 2.0);
        let high = y + MENU_TEXT_SIZE / 2.0 - 4.0;
        let stroke = canvas.stroke(2.0);
        let left = [
            canvas.pos(2.0, low - 4.0),
            canvas.pos(2.0, low),
            canvas.pos(cx - half - 8.0, low),
            canvas.pos(cx - half - 8.0, high),
            canvas.pos(cx - half - 4.0, high),
        ];
        let right = [
            canvas.pos(cx + half + 4.0, high),
            canvas.pos(cx + half + 8.0, high),
            canvas.pos(cx + half + 8.0, low),
            canvas.pos(PANEL_WIDTH - 2.0, low),
            canvas.pos(PANEL_WIDTH - 2.0, low - 4.0),
        ];
        canvas.painter.add(egui::Shape::line(left.to_vec(), stroke));
        canvas.painter.add(egui::Shape::line(right.to_vec(), stroke));

        self.draw_tab_strip(canvas);
    }

    fn draw_tab_strip(&self, canvas: &Canvas) {
        let y = PANEL_HEIGHT - TAB_TEXT_SIZE * 3.0;
        let tabs = self.console.menu.menu().tabs();
        let space = text_width(canvas, " ", TAB_TEXT_SIZE);
        let widths: Vec<f32> = tabs
            .iter()
            .map(|t| text_width(canvas, t.label(), TAB_TEXT_SIZE))
            .collect();
        let total: f32 = widths.iter().sum::<f32>() + space * (tabs.len() as f32 - 1.0);

        let mut x = PANEL_WIDTH / 2.0 - total / 2.0;
        for (i, (tab, w)) in tabs.iter().zip(&widths).enumerate() {
            canvas.text(x, y, egui::Align2::LEFT_CENTER, tab.label(), TAB_TEXT_SIZE);
            if i == self.console.menu.tab_index() {
                let underline = y - TAB_TEXT_SIZE / 2.0 - 4.0;
                canvas.painter.line_segment(
                    [canvas.pos(x, underline), canvas.pos(x + w, underline)],
                    canvas.stroke(2.0),
                );
            }
            x += w + space;
        }
    }

    /// Dimmed bar along the bottom edge with the clock.
    pub(crate) fn draw_info_bar(&self, canvas: &Canvas) {
        let bar = egui::Rect::from_min_max(
            canvas.pos(0.0, INFO_BAR_HEIGHT),
            canvas.pos(PANEL_WIDTH, 0.0),
        );
        canvas
            .painter
            .rect_filled(bar, 0.0, canvas.color.gamma_multiply(0.5));

        canvas.text(
            PANEL_WIDTH / 2.0,
            INFO_BAR_HEIGHT / 2.0 + 1.0,
            egui::Align2::CENTER_CENTER,
            clock_text(&Local::now()),
            SCREEN_TEXT_SIZE,
        );
    }
}

fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M | %m.%d.%Y").to_string()
}
