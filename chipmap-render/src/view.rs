use image::{imageops, RgbaImage};
use tracing::debug;

use chipmap_core::{FocusRect, ZoomControl};

use crate::pyramid::{ZoomLevel, ZoomPyramid};

/// The zoom pyramid together with the focus window into its active level.
///
/// The focus origin is measured from the bottom-left of the level image,
/// matching the y-up viewport coordinates used for overlays.
#[derive(Debug, Clone)]
pub struct MapView {
    pyramid: ZoomPyramid,
    focus: FocusRect,
}

impl MapView {
    pub fn new(pyramid: ZoomPyramid) -> Self {
        let level = pyramid.current_level();
        let focus = FocusRect::default().clamp(level.width(), level.height());
        Self { pyramid, focus }
    }

    pub fn pyramid(&self) -> &ZoomPyramid {
        &self.pyramid
    }

    pub fn focus(&self) -> FocusRect {
        self.focus
    }

    pub fn current_level(&self) -> &ZoomLevel {
        self.pyramid.current_level()
    }

    /// Zooming recentres the window on the new image instead of keeping
    /// the previously visible area in view.
    fn recenter(&mut self) {
        let level = self.pyramid.current_level();
        self.focus = FocusRect::centered(level.width(), level.height());
        debug!(
            level = level.index(),
            x = self.focus.x,
            y = self.focus.y,
            "focus recentred"
        );
    }

    /// Pixels of the active level under the focus window, top row first.
    ///
    /// Smaller than the viewport when the level itself is.
    pub fn visible_region(&self) -> RgbaImage {
        let level = self.pyramid.current_level();
        let (w, h) = (level.width(), level.height());
        let f = self.focus;
        let crop_w = (f.w as u32).min(w);
        let crop_h = (f.h as u32).min(h);
        let left = f.x as u32;
        let top = h - (f.y as u32 + crop_h);
        imageops::crop_imm(level.image(), left, top, crop_w, crop_h).to_image()
    }
}

impl ZoomControl for MapView {
    fn zoom_in(&mut self) {
        self.pyramid.zoom_in();
        self.recenter();
    }

    fn zoom_out(&mut self) {
        self.pyramid.zoom_out();
        self.recenter();
    }

    fn zoom_index(&self) -> usize {
        self.pyramid.current_index()
    }
}
