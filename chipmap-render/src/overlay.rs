use chipmap_core::{GeoProjector, NavigationState, PixelPoint};

const MARKER_STEM_PX: i32 = 12;
const MARKER_HALF_WIDTH_PX: i32 = 6;
const BRACKET_INNER_PX: i32 = 6;
const BRACKET_OUTER_PX: i32 = 12;

/// Target marker: a short stem rising from the point, capped by a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub anchor: PixelPoint,
    pub stem_top: PixelPoint,
    /// Lower-left and upper-right corners of the box.
    pub flag: (PixelPoint, PixelPoint),
}

impl Marker {
    fn at(p: PixelPoint) -> Self {
        Self {
            anchor: p,
            stem_top: p.offset(0, MARKER_STEM_PX),
            flag: (
                p.offset(-MARKER_HALF_WIDTH_PX, MARKER_STEM_PX),
                p.offset(MARKER_HALF_WIDTH_PX, 2 * MARKER_STEM_PX),
            ),
        }
    }
}

/// Reticle: a centre dot flanked by two open brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reticle {
    pub center: PixelPoint,
    pub left: [PixelPoint; 4],
    pub right: [PixelPoint; 4],
}

impl Reticle {
    fn at(p: PixelPoint) -> Self {
        let bracket = |sign: i32| {
            [
                p.offset(sign * BRACKET_INNER_PX, BRACKET_OUTER_PX),
                p.offset(sign * BRACKET_OUTER_PX, BRACKET_OUTER_PX),
                p.offset(sign * BRACKET_OUTER_PX, -BRACKET_OUTER_PX),
                p.offset(sign * BRACKET_INNER_PX, -BRACKET_OUTER_PX),
            ]
        };
        Self {
            center: p,
            left: bracket(-1),
            right: bracket(1),
        }
    }
}

/// Everything the renderer draws on top of the map image for one frame,
/// in viewport pixels with y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOverlay {
    pub gps: PixelPoint,
    pub target: Marker,
    pub reticle: Reticle,
    /// Dashed line from the GPS dot to the target.
    pub link: (PixelPoint, PixelPoint),
}

impl MapOverlay {
    pub fn compute(
        nav: &NavigationState,
        projector: &GeoProjector,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let project = |p| projector.project(p, image_width, image_height);
        let gps = project(nav.gps_fix());
        let target = project(nav.target().position());
        Self {
            gps,
            target: Marker::at(target),
            reticle: Reticle::at(project(nav.reticle())),
            link: (gps, target),
        }
    }
}
