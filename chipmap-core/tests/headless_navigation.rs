use chipmap_core::{
    AudioCue, Console, FocusRect, GeoBounds, GeoPoint, GeoProjector, InputEvent, LatCardinal,
    LonCardinal, NavigationState, Tab, ZoomCursor,
};

fn chart() -> GeoBounds {
    GeoBounds::new(-121.375, -121.250, 38.500, 38.625).unwrap()
}

/// Sample a grid of points spanning `[lon0, lon1] × [lat0, lat1]`.
fn grid(lon0: f64, lon1: f64, lat0: f64, lat1: f64, n: usize) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let tx = i as f64 / (n - 1) as f64;
            let ty = j as f64 / (n - 1) as f64;
            points.push(GeoPoint::new(
                lon0 + tx * (lon1 - lon0),
                lat0 + ty * (lat1 - lat0),
            ));
        }
    }
    points
}

const LEVEL_SIZES: [(u32, u32); 4] = [(320, 320), (640, 480), (1600, 1200), (2880, 2880)];

#[test]
fn in_bounds_points_stay_in_viewport() {
    let projector = GeoProjector::new(chart());
    for (w, h) in LEVEL_SIZES {
        for p in grid(-121.375, -121.250, 38.500, 38.625, 21) {
            let px = projector.project(p, w, h);
            assert!((0..=320).contains(&px.x), "{p:?} at {w}x{h} -> {px:?}");
            assert!((0..=380).contains(&px.y), "{p:?} at {w}x{h} -> {px:?}");
        }
    }
}

#[test]
fn out_of_bounds_points_match_nearest_in_bounds_point() {
    let bounds = chart();
    let projector = GeoProjector::new(bounds);
    for p in grid(-122.0, -120.5, 37.9, 39.2, 15) {
        let clamped = bounds.clamp(p);
        for (w, h) in LEVEL_SIZES {
            assert_eq!(projector.project(p, w, h), projector.project(clamped, w, h));
        }
    }
}

#[test]
fn projection_is_order_independent() {
    let projector = GeoProjector::new(chart());
    let points = grid(-121.4, -121.2, 38.45, 38.7, 9);
    let forward: Vec<_> = points.iter().map(|&p| projector.project(p, 960, 720)).collect();
    let mut backward: Vec<_> = points
        .iter()
        .rev()
        .map(|&p| projector.project(p, 960, 720))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn focus_clamp_holds_for_wild_inputs() {
    let origins = [-100_000, -321, -1, 0, 1, 159, 320, 2559, 100_000];
    for (w, h) in LEVEL_SIZES {
        for &x in &origins {
            for &y in &origins {
                let r = FocusRect::at(x, y).clamp(w, h);
                assert_eq!(r.clamp(w, h), r);
                assert!(r.x >= 0 && r.y >= 0);
                assert!(r.x <= (w as i32 - r.w).max(0));
                assert!(r.y <= (h as i32 - r.h).max(0));
            }
        }
    }
}

#[test]
fn map_session_commits_target_atomically() {
    let mut console = Console::new(NavigationState::default());
    let mut zoom = ZoomCursor::new(9);
    let mut cues = Vec::new();

    console.handle(InputEvent::MenuSelect(2), &mut zoom, &mut cues);
    assert_eq!(console.active_tab(), Tab::Chipmap);

    console.handle(InputEvent::Confirm, &mut zoom, &mut cues);
    for _ in 0..4 {
        console.handle(InputEvent::DirRight, &mut zoom, &mut cues);
    }
    assert!((console.nav.reticle().lon - (-121.3025)).abs() < 1e-9);

    let before = *console.nav.target();
    console.handle(InputEvent::Confirm, &mut zoom, &mut cues);
    let after = *console.nav.target();

    assert_ne!(before.position(), after.position());
    assert_eq!(after.position(), console.nav.reticle());
    assert_eq!(after.lat_cardinal(), LatCardinal::N);
    assert_eq!(after.lon_cardinal(), LonCardinal::W);

    // Recomputing from scratch gives exactly the stored pairing.
    let fresh = chipmap_core::Target::locked_on(after.position(), console.nav.gps_fix());
    assert_eq!(fresh, after);
}

#[test]
fn zoom_saturates_through_console() {
    let mut console = Console::default();
    console.menu.select_tab(Tab::Chipmap);
    let mut zoom = ZoomCursor::new(9);
    for _ in 0..3 {
        console.handle(InputEvent::ZoomOut, &mut zoom, &mut ());
    }
    assert_eq!(console.nav.zoom_index(), 0);
    for _ in 0..12 {
        console.handle(InputEvent::ZoomIn, &mut zoom, &mut ());
    }
    assert_eq!(console.nav.zoom_index(), 8);
}

#[test]
fn every_menu_or_tab_change_drops_selection() {
    let changes = [
        InputEvent::TabNext,
        InputEvent::TabPrev,
        InputEvent::MenuSelect(0),
        InputEvent::MenuSelect(1),
        InputEvent::MenuSelect(2),
    ];
    for tab in [Tab::Audio, Tab::Chipmap, Tab::Archives] {
        for change in changes {
            let mut console = Console::default();
            console.menu.select_tab(tab);
            let mut zoom = ZoomCursor::new(9);
            let mut cues = Vec::new();

            console.handle(InputEvent::Confirm, &mut zoom, &mut cues);
            assert!(console.nav.is_selected(), "{tab:?} did not select");

            console.handle(change, &mut zoom, &mut cues);
            assert!(
                !console.nav.is_selected(),
                "{change:?} on {tab:?} kept the selection"
            );
            let expected = match change {
                InputEvent::MenuSelect(_) => AudioCue::Menu,
                _ => AudioCue::Tab,
            };
            assert_eq!(cues.last(), Some(&expected));
        }
    }
}
