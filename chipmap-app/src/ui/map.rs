use eframe::egui;

use chipmap_core::{FocusRect, PixelPoint, CHROME_OFFSET_PX};
use chipmap_render::MapOverlay;

use super::{Canvas, PANEL_WIDTH, SCREEN_TEXT_SIZE};
use crate::app::ChipMapApp;

const GPS_DOT_RADIUS: f32 = 4.0;
const RETICLE_DOT_RADIUS: f32 = 3.0;
const LINK_DASH: f32 = 4.0;
const LINK_GAP: f32 = 3.0;

/// Top edge of the map strip, in panel units.
const MAP_TOP: f32 = 380.0;

/// Texture of the visible region, tagged with the zoom level and focus it
/// was cut from.
pub(crate) struct MapTexture {
    pub(crate) handle: egui::TextureHandle,
    pub(crate) key: (usize, FocusRect),
    pub(crate) size: [usize; 2],
}

impl ChipMapApp {
    /// Re-upload the visible region only when zoom or focus changed.
    fn ensure_map_texture(&mut self, ctx: &egui::Context) {
        let key = (self.map_view.current_level().index(), self.map_view.focus());
        if self.map_texture.as_ref().is_some_and(|t| t.key == key) {
            return;
        }

        let region = self.map_view.visible_region();
        let size = [region.width() as usize, region.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, region.as_raw());
        let handle = ctx.load_texture("chipmap-level", image, egui::TextureOptions::LINEAR);
        tracing::debug!(level = key.0, w = size[0], h = size[1], "map texture uploaded");
        self.map_texture = Some(MapTexture { handle, key, size });
    }

    /// Map image, overlay glyphs and the target readouts.
    pub(crate) fn draw_map(&mut self, ctx: &egui::Context, canvas: &Canvas) {
        self.ensure_map_texture(ctx);

        let bottom = CHROME_OFFSET_PX as f32;
        if let Some(tex) = &self.map_texture {
            let [w, h] = tex.size;
            let rect = egui::Rect::from_min_max(
                canvas.pos(0.0, bottom + h as f32),
                canvas.pos(w as f32, bottom),
            );
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            canvas
                .painter
                .image(tex.handle.id(), rect, uv, egui::Color32::WHITE);
        }

        let level = self.map_view.current_level();
        let overlay = MapOverlay::compute(
            &self.console.nav,
            &self.projector,
            level.width(),
            level.height(),
        );
        draw_overlay(canvas, &overlay);

        let target = self.console.nav.target();
        canvas.text(
            PANEL_WIDTH / 2.0,
            bottom - 20.0,
            egui::Align2::CENTER_CENTER,
            target.distance_label(),
            SCREEN_TEXT_SIZE,
        );
        canvas.text(
            PANEL_WIDTH / 2.0,
            MAP_TOP + 20.0,
            egui::Align2::CENTER_CENTER,
            target.coordinate_label(),
            SCREEN_TEXT_SIZE,
        );
    }
}

fn draw_overlay(canvas: &Canvas, overlay: &MapOverlay) {
    let (from, to) = overlay.link;
    canvas.painter.add(egui::Shape::dashed_line(
        &[canvas.at(from), canvas.at(to)],
        canvas.stroke(1.0),
        LINK_DASH,
        LINK_GAP,
    ));

    canvas
        .painter
        .circle_filled(canvas.at(overlay.gps), GPS_DOT_RADIUS, canvas.color);

    let marker = overlay.target;
    canvas.polyline(&[marker.anchor, marker.stem_top], 2.0);
    let (lo, hi) = marker.flag;
    canvas.painter.rect_filled(
        egui::Rect::from_two_pos(canvas.at(lo), canvas.at(hi)),
        0.0,
        canvas.color,
    );

    let r = overlay.reticle;
    canvas
        .painter
        .circle_filled(canvas.at(r.center), RETICLE_DOT_RADIUS, canvas.color);
    canvas.polyline(&r.left, 1.0);
    canvas.polyline(&r.right, 1.0);
}

/// Ticked rules above and below the map strip, shown while a tab item is
/// selected.
pub(crate) fn draw_selection_rules(canvas: &Canvas) {
    let bottom = CHROME_OFFSET_PX;
    let top = MAP_TOP as i32;
    let right = PANEL_WIDTH as i32 - 1;
    canvas.polyline(
        &[
            PixelPoint::new(1, top),
            PixelPoint::new(1, top + 4),
            PixelPoint::new(right, top + 4),
            PixelPoint::new(right, top),
        ],
        1.0,
    );
    canvas.polyline(
        &[
            PixelPoint::new(1, bottom),
            PixelPoint::new(1, bottom - 4),
            PixelPoint::new(right, bottom - 4),
            PixelPoint::new(right, bottom),
        ],
        1.0,
    );
}
