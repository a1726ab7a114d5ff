use crate::coords::{GeoBounds, GeoPoint, PixelPoint};
use crate::focus::VIEWPORT_SIZE;

// Calibration between the raster asset and its bounding box. The charted
// area is an inset rectangle of the full image.
pub const MAP_LEFT_FRACTION: f64 = 0.140;
pub const MAP_RIGHT_FRACTION: f64 = 0.862;
pub const MAP_BOTTOM_FRACTION: f64 = 0.143;
pub const MAP_TOP_FRACTION: f64 = 0.903;

/// Height of the header chrome below the map viewport. The viewport is
/// drawn this many pixels above the bottom edge of the window.
pub const CHROME_OFFSET_PX: i32 = 60;

/// Largest x a projected point may take.
pub const MAX_X: i32 = VIEWPORT_SIZE as i32;
/// Largest y a projected point may take (viewport plus chrome offset).
pub const MAX_Y: i32 = VIEWPORT_SIZE as i32 + CHROME_OFFSET_PX;

/// Pixel extents of the charted area inside a raster of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableArea {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl DrawableArea {
    pub fn for_image(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            left: (MAP_LEFT_FRACTION * w) as i32,
            right: (MAP_RIGHT_FRACTION * w) as i32,
            bottom: (MAP_BOTTOM_FRACTION * h) as i32 + CHROME_OFFSET_PX,
            top: (MAP_TOP_FRACTION * h) as i32 + CHROME_OFFSET_PX,
        }
    }

    /// Centre of the area in fractional pixels.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) as f64 / 2.0,
            (self.bottom + self.top) as f64 / 2.0,
        )
    }
}

/// Maps geographic coordinates onto the map viewport.
///
/// Stateless apart from the immutable bounds, so identical inputs always
/// give identical outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoProjector {
    bounds: GeoBounds,
}

impl GeoProjector {
    pub fn new(bounds: GeoBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    /// Project `point` into viewport pixels for a zoom image of
    /// `image_width` × `image_height`.
    ///
    /// The point is first clamped to the bounds, then linearly mapped onto
    /// the [`DrawableArea`], and finally clamped to
    /// `[0, MAX_X] × [0, MAX_Y]`. Never fails.
    pub fn project(&self, point: GeoPoint, image_width: u32, image_height: u32) -> PixelPoint {
        let b = &self.bounds;
        let p = b.clamp(point);
        let area = DrawableArea::for_image(image_width, image_height);

        let x = lerp(p.lon, b.min_lon(), b.max_lon(), area.left, area.right);
        let y = lerp(p.lat, b.min_lat(), b.max_lat(), area.bottom, area.top);

        PixelPoint::new((x as i32).clamp(0, MAX_X), (y as i32).clamp(0, MAX_Y))
    }
}

#[inline]
fn lerp(v: f64, v0: f64, v1: f64, p0: i32, p1: i32) -> f64 {
    let t = (v - v0) / (v1 - v0);
    p0 as f64 + t * (p1 - p0) as f64
}
