use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use chipmap_core::{GeoBounds, GeoPoint};

// ---------------------------------------------------------------------------
// Map extent
// ---------------------------------------------------------------------------

/// Geographic extent of the map raster, as stored on disk.
///
/// Validated into a [`GeoBounds`] at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            min_lon: -121.375,
            max_lon: -121.250,
            min_lat: 38.500,
            max_lat: 38.625,
        }
    }
}

impl MapBounds {
    pub fn validated(&self) -> chipmap_core::Result<GeoBounds> {
        GeoBounds::new(self.min_lon, self.max_lon, self.min_lat, self.max_lat)
    }
}

// ---------------------------------------------------------------------------
// UI colour
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiColor {
    Green,
    Amber,
    #[default]
    White,
}

impl UiColor {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            UiColor::Green => [25, 255, 132, 255],
            UiColor::Amber => [215, 156, 41, 255],
            UiColor::White => [250, 250, 250, 255],
        }
    }

    pub fn next(self) -> Self {
        match self {
            UiColor::Green => UiColor::Amber,
            UiColor::Amber => UiColor::White,
            UiColor::White => UiColor::Green,
        }
    }
}

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub fullscreen: bool,
    /// Source raster. Relative paths resolve next to the executable.
    #[serde(default = "default_map_image")]
    pub map_image: String,
    /// Plain-text document shown on the ARCHIVES tab.
    #[serde(default = "default_archive_file")]
    pub archive_file: String,
    /// Root for cached zoom levels. Empty means the OS cache directory.
    #[serde(default)]
    pub cache_dir: String,
    #[serde(default)]
    pub bounds: MapBounds,
    /// Startup positions. Read once; the session's own positions are
    /// never written back.
    #[serde(default = "default_gps_fix")]
    pub gps_fix: GeoPoint,
    #[serde(default = "default_reticle")]
    pub reticle: GeoPoint,
    #[serde(default = "default_target")]
    pub target: GeoPoint,
    #[serde(default)]
    pub ui_color: UiColor,
}

fn default_window_width() -> f32 {
    320.0
}
fn default_window_height() -> f32 {
    480.0
}
fn default_map_image() -> String {
    "Map.png".to_string()
}
fn default_archive_file() -> String {
    "us_constitution.txt".to_string()
}
fn default_gps_fix() -> GeoPoint {
    GeoPoint::new(-121.332, 38.608)
}
fn default_reticle() -> GeoPoint {
    GeoPoint::new(-121.3125, 38.5625)
}
fn default_target() -> GeoPoint {
    GeoPoint::new(-121.33, 38.55)
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            fullscreen: false,
            map_image: default_map_image(),
            archive_file: default_archive_file(),
            cache_dir: String::new(),
            bounds: MapBounds::default(),
            gps_fix: default_gps_fix(),
            reticle: default_reticle(),
            target: default_target(),
            ui_color: UiColor::default(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs;
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    /// Persist preferences to `path`.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    pub fn map_image_path(&self) -> PathBuf {
        resolve(&self.map_image)
    }

    pub fn archive_path(&self) -> PathBuf {
        resolve(&self.archive_file)
    }

    pub fn cache_root(&self) -> PathBuf {
        if self.cache_dir.is_empty() {
            crate::app_dir::default_cache_directory()
        } else {
            resolve(&self.cache_dir)
        }
    }
}

fn resolve(path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        crate::app_dir::exe_directory().join(p)
    }
}

pub(crate) fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}
