use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use chipmap_core::ZoomCursor;

use crate::cache::{LevelCache, SourceKey};
use crate::error::RenderError;

/// Number of levels in every pyramid. Level `i` is `(i + 1) / 10` of the
/// source size, so the full-resolution source itself is never a level.
pub const LEVEL_COUNT: usize = 9;

/// Smoothing filter used for every downsample. Bicubic keeps edges clean
/// when stepping between adjacent levels.
const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Pixel size of level `index` for a source of `width` × `height`.
///
/// Integer arithmetic, truncating, never below 1×1.
pub fn level_size(index: usize, width: u32, height: u32) -> (u32, u32) {
    let step = index as u64 + 1;
    let scale = |v: u32| ((v as u64 * step / 10) as u32).max(1);
    (scale(width), scale(height))
}

/// One downsampled raster of the map.
#[derive(Debug, Clone)]
pub struct ZoomLevel {
    index: usize,
    image: RgbaImage,
}

impl ZoomLevel {
    pub(crate) fn new(index: usize, image: RgbaImage) -> Self {
        Self { index, image }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The ordered zoom levels plus the active level index.
///
/// Built once before the first frame and never resized afterwards.
#[derive(Debug, Clone)]
pub struct ZoomPyramid {
    levels: Vec<ZoomLevel>,
    source_size: (u32, u32),
    cursor: ZoomCursor,
}

impl ZoomPyramid {
    /// Downsample `source` into [`LEVEL_COUNT`] levels, in parallel.
    pub fn build(source: &RgbaImage) -> crate::Result<Self> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let levels: Vec<ZoomLevel> = (0..LEVEL_COUNT)
            .into_par_iter()
            .map(|index| {
                let (w, h) = level_size(index, width, height);
                debug!(index, w, h, "resampling zoom level");
                ZoomLevel::new(index, imageops::resize(source, w, h, RESAMPLE_FILTER))
            })
            .collect();

        Ok(Self::from_levels(levels, (width, height)))
    }

    pub(crate) fn from_levels(levels: Vec<ZoomLevel>, source_size: (u32, u32)) -> Self {
        let cursor = ZoomCursor::new(levels.len());
        Self {
            levels,
            source_size,
            cursor,
        }
    }

    /// Load the pyramid for `source_path` from the cache under `cache_root`,
    /// or generate it from the source and persist it.
    ///
    /// Blocks until every level exists. An unreadable source is fatal; a
    /// failure to write the cache only costs a regeneration next run.
    pub fn load_or_build(source_path: &Path, cache_root: &Path) -> crate::Result<Self> {
        let key =
            SourceKey::for_file(source_path).map_err(|source| RenderError::SourceUnreadable {
                path: source_path.to_path_buf(),
                source,
            })?;
        let cache = LevelCache::new(cache_root, key);

        match cache.load() {
            Ok(pyramid) => {
                info!("Loaded zoom pyramid from {}", cache.dir().display());
                return Ok(pyramid);
            }
            Err(RenderError::ImageCacheMissing { path }) => {
                info!("No usable cached level at {}; regenerating", path.display());
            }
            Err(e) => warn!("Discarding zoom level cache: {e}"),
        }

        let source = open_source(source_path)?;
        let pyramid = Self::build(&source)?;
        info!(
            "Built {} zoom levels from {} ({}×{})",
            pyramid.levels.len(),
            source_path.display(),
            source.width(),
            source.height()
        );

        if let Err(e) = cache.store(&pyramid) {
            warn!("Could not persist zoom levels: {e}");
        }
        Ok(pyramid)
    }

    pub fn levels(&self) -> &[ZoomLevel] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&ZoomLevel> {
        self.levels.get(index)
    }

    pub fn source_size(&self) -> (u32, u32) {
        self.source_size
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn current_level(&self) -> &ZoomLevel {
        &self.levels[self.cursor.index()]
    }

    /// Step one level in, saturating at the largest image.
    pub fn zoom_in(&mut self) -> &ZoomLevel {
        if self.cursor.zoom_in() {
            debug!(index = self.cursor.index(), "zoomed in");
        }
        self.current_level()
    }

    /// Step one level out, saturating at the smallest image.
    pub fn zoom_out(&mut self) -> &ZoomLevel {
        if self.cursor.zoom_out() {
            debug!(index = self.cursor.index(), "zoomed out");
        }
        self.current_level()
    }
}

fn open_source(path: &Path) -> crate::Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| RenderError::PyramidBuild {
            path: path.to_path_buf(),
            source,
        })
}
