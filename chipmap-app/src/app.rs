use std::path::Path;
use std::time::Duration;

use eframe::egui;
use tracing::info;

use chipmap_core::{Console, GeoProjector, Tab};
use chipmap_render::MapView;

use crate::audio::CuePlayer;
use crate::preferences::{config_path, AppPreferences};
use crate::ui::map::{draw_selection_rules, MapTexture};
use crate::ui::{Canvas, PANEL_HEIGHT, PANEL_WIDTH};

/// The info bar clock ticks once a second.
const CLOCK_REFRESH: Duration = Duration::from_secs(1);

/// The running panel: console state, the map view it zooms, and the
/// display resources derived from them.
pub(crate) struct ChipMapApp {
    pub(crate) preferences: AppPreferences,
    pub(crate) projector: GeoProjector,
    pub(crate) console: Console,
    pub(crate) map_view: MapView,
    pub(crate) cues: CuePlayer,
    pub(crate) map_texture: Option<MapTexture>,
    pub(crate) archive_text: String,
}

impl ChipMapApp {
    pub(crate) fn new(
        preferences: AppPreferences,
        projector: GeoProjector,
        console: Console,
        map_view: MapView,
        archive_text: String,
    ) -> Self {
        let mut cues = CuePlayer::default();
        cues.set_volume(console.volume());
        Self {
            preferences,
            projector,
            console,
            map_view,
            cues,
            map_texture: None,
            archive_text,
        }
    }

    /// Write display preferences. Reticle, target and fix stay at their
    /// startup values; a session's waypoints are not carried over.
    pub(crate) fn save_preferences(&self, path: &Path) {
        self.preferences.save_to(path);
    }

    fn ui_color(&self) -> egui::Color32 {
        let [r, g, b, a] = self.preferences.ui_color.rgba();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// `C` cycles the display colour.
    fn handle_color_key(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::C)) {
            self.preferences.ui_color = self.preferences.ui_color.next();
            info!(color = ?self.preferences.ui_color, "UI colour changed");
        }
    }

    fn draw_panel(&mut self, ctx: &egui::Context, ui: &egui::Ui) {
        let rect = egui::Rect::from_center_size(
            ui.max_rect().center(),
            egui::vec2(PANEL_WIDTH, PANEL_HEIGHT),
        );
        let canvas = Canvas {
            painter: ui.painter_at(rect),
            rect,
            color: self.ui_color(),
        };

        self.draw_info_bar(&canvas);
        self.draw_header(&canvas);
        if self.console.nav.is_selected() {
            draw_selection_rules(&canvas);
        }
        if self.console.active_tab() == Tab::Chipmap {
            self.draw_map(ctx, &canvas);
        } else {
            self.draw_tab_text(&canvas);
        }
    }
}

impl eframe::App for ChipMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.handle_color_key(ctx);
        ctx.request_repaint_after(CLOCK_REFRESH);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| self.draw_panel(ctx, ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_preferences(&config_path());
        info!("Saved preferences on exit");
    }
}
