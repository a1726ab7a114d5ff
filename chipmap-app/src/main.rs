mod app;
mod app_dir;
mod audio;
mod input;
mod preferences;
mod ui;

use std::fs;
use std::process::ExitCode;

use eframe::egui;
use tracing::{error, info, warn};

use chipmap_core::{Console, GeoProjector, NavigationState};
use chipmap_render::{MapView, ZoomPyramid};

use app::ChipMapApp;
use preferences::AppPreferences;

const MISSING_ARCHIVE_TEXT: &str = "NO ARCHIVE LOADED";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting ChipMap");

    let prefs = AppPreferences::load();

    let bounds = match prefs.bounds.validated() {
        Ok(b) => b,
        Err(e) => {
            error!("Invalid map bounds in preferences: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Every zoom level must exist before the first frame.
    let map_path = prefs.map_image_path();
    let pyramid = match ZoomPyramid::load_or_build(&map_path, &prefs.cache_root()) {
        Ok(p) => p,
        Err(e) => {
            error!("Could not prepare map {}: {e}", map_path.display());
            return ExitCode::FAILURE;
        }
    };

    let archive_text = match fs::read_to_string(prefs.archive_path()) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read archive {}: {e}", prefs.archive_path().display());
            MISSING_ARCHIVE_TEXT.to_string()
        }
    };

    let nav = NavigationState::new(prefs.reticle, prefs.target, prefs.gps_fix);
    let console = Console::new(nav);
    let projector = GeoProjector::new(bounds);
    let map_view = MapView::new(pyramid);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ChipMap")
            .with_inner_size([prefs.window_width, prefs.window_height])
            .with_fullscreen(prefs.fullscreen),
        ..Default::default()
    };

    let result = eframe::run_native(
        "ChipMap",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ChipMapApp::new(
                prefs,
                projector,
                console,
                map_view,
                archive_text,
            )))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Window closed with error: {e}");
            ExitCode::FAILURE
        }
    }
}
