use geo::{Distance, Geodesic};
use tracing::{debug, info};

use crate::coords::{GeoPoint, LatCardinal, LonCardinal};
use crate::input::{AudioCue, CueSink, InputEvent};

/// Reticle movement per directional press, in degrees.
pub const RETICLE_STEP_DEG: f64 = 0.0025;

const METERS_PER_MILE: f64 = 1609.344;

/// Whether directional input moves the reticle or browses tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Browsing,
    Selected,
}

/// The last committed point of interest with its derived display values.
///
/// All fields are computed together in [`Target::locked_on`]; there is no
/// way to change the position without recomputing the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    position: GeoPoint,
    distance_mi: f64,
    lat_cardinal: LatCardinal,
    lon_cardinal: LonCardinal,
}

impl Target {
    /// Target at `position`, measured from `origin`.
    pub fn locked_on(position: GeoPoint, origin: GeoPoint) -> Self {
        Self {
            position,
            distance_mi: geodesic_distance_mi(origin, position),
            lat_cardinal: position.lat_cardinal(),
            lon_cardinal: position.lon_cardinal(),
        }
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn distance_mi(&self) -> f64 {
        self.distance_mi
    }

    pub fn lat_cardinal(&self) -> LatCardinal {
        self.lat_cardinal
    }

    pub fn lon_cardinal(&self) -> LonCardinal {
        self.lon_cardinal
    }

    pub fn distance_label(&self) -> String {
        format!("DISTANCE: {:.2}mi", self.distance_mi)
    }

    pub fn coordinate_label(&self) -> String {
        format!(
            "TARGET: {:.3}{}, {:.3}{}",
            self.position.lat.abs(),
            self.lat_cardinal,
            self.position.lon.abs(),
            self.lon_cardinal,
        )
    }
}

/// Distance along the WGS-84 ellipsoid, in statute miles.
pub fn geodesic_distance_mi(a: GeoPoint, b: GeoPoint) -> f64 {
    Geodesic.distance(a.into(), b.into()) / METERS_PER_MILE
}

/// Reticle, target and GPS state for the map tab.
///
/// Mutated only through discrete input events. Reticle coordinates are
/// stored as-is, even outside the chart; the projector clamps them for
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    reticle: GeoPoint,
    target: Target,
    gps_fix: GeoPoint,
    gps_locked: bool,
    mode: InteractionMode,
    zoom_index: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(
            GeoPoint::new(-121.3125, 38.5625),
            GeoPoint::new(-121.33, 38.55),
            GeoPoint::new(-121.332, 38.608),
        )
    }
}

impl NavigationState {
    pub fn new(reticle: GeoPoint, target: GeoPoint, gps_fix: GeoPoint) -> Self {
        Self {
            reticle,
            target: Target::locked_on(target, gps_fix),
            gps_fix,
            gps_locked: false,
            mode: InteractionMode::Browsing,
            zoom_index: 0,
        }
    }

    pub fn reticle(&self) -> GeoPoint {
        self.reticle
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn gps_fix(&self) -> GeoPoint {
        self.gps_fix
    }

    pub fn gps_locked(&self) -> bool {
        self.gps_locked
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_selected(&self) -> bool {
        self.mode == InteractionMode::Selected
    }

    /// Zoom level the map view was on after the last routed event.
    pub fn zoom_index(&self) -> usize {
        self.zoom_index
    }

    pub(crate) fn set_zoom_index(&mut self, index: usize) {
        self.zoom_index = index;
    }

    pub fn select(&mut self) {
        self.mode = InteractionMode::Selected;
    }

    pub fn deselect(&mut self) {
        self.mode = InteractionMode::Browsing;
    }

    /// Apply a map-tab event.
    ///
    /// `Confirm` while already selected commits the reticle as the new
    /// target; `Confirm` always leaves the state selected. Directional
    /// events move the reticle only while selected, and horizontal moves
    /// cue [`AudioCue::Scroll`].
    pub fn handle(&mut self, event: InputEvent, cues: &mut dyn CueSink) {
        match (self.mode, event) {
            (InteractionMode::Selected, InputEvent::Confirm) => self.commit_target(),
            (InteractionMode::Browsing, InputEvent::Confirm) => self.select(),
            (_, InputEvent::Cancel) => self.deselect(),
            (InteractionMode::Selected, InputEvent::DirUp) => {
                self.move_reticle(0.0, RETICLE_STEP_DEG);
            }
            (InteractionMode::Selected, InputEvent::DirDown) => {
                self.move_reticle(0.0, -RETICLE_STEP_DEG);
            }
            (InteractionMode::Selected, InputEvent::DirRight) => {
                self.move_reticle(RETICLE_STEP_DEG, 0.0);
                cues.cue(AudioCue::Scroll);
            }
            (InteractionMode::Selected, InputEvent::DirLeft) => {
                self.move_reticle(-RETICLE_STEP_DEG, 0.0);
                cues.cue(AudioCue::Scroll);
            }
            _ => {}
        }
    }

    pub fn move_reticle(&mut self, dlon: f64, dlat: f64) {
        self.reticle.lon += dlon;
        self.reticle.lat += dlat;
        debug!(lon = self.reticle.lon, lat = self.reticle.lat, "reticle moved");
    }

    /// Copy the reticle into the target, measured from the current fix.
    pub fn commit_target(&mut self) {
        self.target = Target::locked_on(self.reticle, self.gps_fix);
        info!(
            lon = self.target.position.lon,
            lat = self.target.position.lat,
            distance_mi = self.target.distance_mi,
            "target committed"
        );
    }

    /// Replace the GPS fix and re-measure the existing target from it.
    pub fn update_gps_fix(&mut self, fix: GeoPoint) {
        self.gps_fix = fix;
        self.gps_locked = true;
        self.target = Target::locked_on(self.target.position, fix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn starts_browsing_with_measured_target() {
        let nav = NavigationState::default();
        assert_eq!(nav.mode(), InteractionMode::Browsing);
        assert!(!nav.gps_locked());
        assert!(nav.target().distance_mi() > 0.0);
    }

    #[test]
    fn confirm_then_cancel() {
        let mut nav = NavigationState::default();
        nav.handle(InputEvent::Confirm, &mut ());
        assert!(nav.is_selected());
        nav.handle(InputEvent::Cancel, &mut ());
        assert!(!nav.is_selected());
    }

    #[test]
    fn first_confirm_does_not_commit() {
        let mut nav = NavigationState::default();
        let before = *nav.target();
        nav.handle(InputEvent::Confirm, &mut ());
        assert_eq!(*nav.target(), before);
    }

    #[test]
    fn browsing_ignores_directions() {
        let mut nav = NavigationState::default();
        let mut cues = Vec::new();
        nav.handle(InputEvent::DirRight, &mut cues);
        nav.handle(InputEvent::DirUp, &mut cues);
        assert_eq!(nav.reticle(), GeoPoint::new(-121.3125, 38.5625));
        assert!(cues.is_empty());
    }

    #[test]
    fn four_right_steps() {
        let mut nav = NavigationState::default();
        nav.select();
        for _ in 0..4 {
            nav.handle(InputEvent::DirRight, &mut ());
        }
        assert!((nav.reticle().lon - (-121.3025)).abs() < EPSILON);
        assert!((nav.reticle().lat - 38.5625).abs() < EPSILON);
    }

    #[test]
    fn horizontal_moves_cue_scroll() {
        let mut nav = NavigationState::default();
        nav.select();
        let mut cues = Vec::new();
        nav.handle(InputEvent::DirLeft, &mut cues);
        nav.handle(InputEvent::DirUp, &mut cues);
        nav.handle(InputEvent::DirDown, &mut cues);
        nav.handle(InputEvent::DirRight, &mut cues);
        assert_eq!(cues, vec![AudioCue::Scroll, AudioCue::Scroll]);
        assert!((nav.reticle().lat - 38.5625).abs() < EPSILON);
    }

    #[test]
    fn reticle_may_leave_the_chart() {
        let mut nav = NavigationState::default();
        nav.select();
        for _ in 0..100 {
            nav.handle(InputEvent::DirUp, &mut ());
        }
        assert!((nav.reticle().lat - (38.5625 + 0.25)).abs() < 1e-6);
    }

    #[test]
    fn confirm_while_selected_commits_reticle() {
        let mut nav = NavigationState::new(
            GeoPoint::new(-121.33, 38.55),
            GeoPoint::new(-121.3125, 38.5625),
            GeoPoint::new(-121.332, 38.608),
        );
        nav.select();
        nav.handle(InputEvent::Confirm, &mut ());

        let t = nav.target();
        assert_eq!(t.position(), GeoPoint::new(-121.33, 38.55));
        assert_eq!(t.lat_cardinal(), LatCardinal::N);
        assert_eq!(t.lon_cardinal(), LonCardinal::W);
        // ~6.44 km due south with a small westward component.
        assert!(t.distance_mi() > 3.95 && t.distance_mi() < 4.05, "{}", t.distance_mi());
        assert!(nav.is_selected());
    }

    #[test]
    fn committed_distance_matches_fresh_measurement() {
        let mut nav = NavigationState::default();
        nav.select();
        nav.handle(InputEvent::DirDown, &mut ());
        nav.handle(InputEvent::Confirm, &mut ());
        let t = *nav.target();
        let expected = geodesic_distance_mi(nav.gps_fix(), t.position());
        assert_eq!(t.distance_mi(), expected);
    }

    #[test]
    fn southern_eastern_cardinals() {
        let t = Target::locked_on(GeoPoint::new(151.2, -33.9), GeoPoint::new(151.0, -33.8));
        assert_eq!(t.lat_cardinal(), LatCardinal::S);
        assert_eq!(t.lon_cardinal(), LonCardinal::E);
    }

    #[test]
    fn geodesic_is_close_to_but_not_flat_earth() {
        // One degree of latitude at the equator is ~68.7 miles on WGS-84.
        let d = geodesic_distance_mi(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - 68.7).abs() < 0.1, "{d}");
    }

    #[test]
    fn gps_update_remeasures_target() {
        let mut nav = NavigationState::default();
        let target = nav.target().position();
        nav.update_gps_fix(target);
        assert!(nav.gps_locked());
        assert_eq!(nav.target().position(), target);
        assert!(nav.target().distance_mi().abs() < EPSILON);
    }

    #[test]
    fn labels() {
        let t = Target::locked_on(GeoPoint::new(-121.33, 38.55), GeoPoint::new(-121.33, 38.55));
        assert_eq!(t.distance_label(), "DISTANCE: 0.00mi");
        assert_eq!(t.coordinate_label(), "TARGET: 38.550N, 121.330W");
    }
}
