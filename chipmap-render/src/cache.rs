//! On-disk cache of zoom levels, one PNG per level with identifying tEXt chunks.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::error::RenderError;
use crate::pyramid::{level_size, ZoomLevel, ZoomPyramid, LEVEL_COUNT};

const KEY_SOURCE: &str = "ChipMap.Source";
const KEY_SOURCE_SIZE: &str = "ChipMap.SourceSize";
const KEY_LEVEL: &str = "ChipMap.Level";

/// Identity of a source raster: file stem, byte length and modification time.
///
/// Any edit to the source changes at least one component, which moves the
/// cache to a fresh directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey(String);

impl SourceKey {
    pub fn for_file(path: &Path) -> std::io::Result<Self> {
        let meta = fs::metadata(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "map".to_string());
        let mtime = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Ok(Self(format!("{stem}-{}-{mtime}", meta.len())))
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Directory of cached levels for one [`SourceKey`].
#[derive(Debug, Clone)]
pub struct LevelCache {
    dir: PathBuf,
    key: SourceKey,
}

impl LevelCache {
    pub fn new(root: &Path, key: SourceKey) -> Self {
        Self {
            dir: root.join(key.as_str()),
            key,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding level `index` (0-based); names run `level1.png`..`level9.png`.
    pub fn level_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("level{}.png", index + 1))
    }

    /// Read every level back.
    ///
    /// Any missing, undecodable or mismatched level yields
    /// [`RenderError::ImageCacheMissing`] for that level; partial pyramids
    /// are never returned.
    pub fn load(&self) -> crate::Result<ZoomPyramid> {
        let mut levels = Vec::with_capacity(LEVEL_COUNT);
        let mut source_size = None;
        for index in 0..LEVEL_COUNT {
            let path = self.level_path(index);
            match self.read_level(&path, index, &mut source_size) {
                Ok(level) => levels.push(level),
                Err(reason) => {
                    debug!("Cache miss for {}: {reason}", path.display());
                    return Err(RenderError::ImageCacheMissing { path });
                }
            }
        }
        let source_size = source_size.unwrap_or((0, 0));
        Ok(ZoomPyramid::from_levels(levels, source_size))
    }

    /// Write every level, in parallel.
    pub fn store(&self, pyramid: &ZoomPyramid) -> crate::Result<()> {
        fs::create_dir_all(&self.dir)?;
        pyramid
            .levels()
            .par_iter()
            .try_for_each(|level| self.write_level(level, pyramid.source_size()))?;
        debug!("Stored {} levels in {}", pyramid.levels().len(), self.dir.display());
        Ok(())
    }

    fn write_level(&self, level: &ZoomLevel, source_size: (u32, u32)) -> crate::Result<()> {
        let path = self.level_path(level.index());
        let fail = |reason: String| RenderError::CacheWrite {
            path: path.clone(),
            reason,
        };

        let writer = BufWriter::new(File::create(&path)?);
        let mut encoder = png::Encoder::new(writer, level.width(), level.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);

        let chunks = [
            (KEY_SOURCE, self.key.as_str().to_string()),
            (KEY_SOURCE_SIZE, format!("{}x{}", source_size.0, source_size.1)),
            (KEY_LEVEL, level.index().to_string()),
        ];
        for (keyword, text) in chunks {
            encoder
                .add_text_chunk(keyword.to_string(), text)
                .map_err(|e| fail(format!("text chunk '{keyword}': {e}")))?;
        }

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| fail(format!("header: {e}")))?;
        png_writer
            .write_image_data(level.image().as_raw())
            .map_err(|e| fail(format!("image data: {e}")))?;
        Ok(())
    }

    fn read_level(
        &self,
        path: &Path,
        index: usize,
        source_size: &mut Option<(u32, u32)>,
    ) -> Result<ZoomLevel, String> {
        let file = File::open(path).map_err(|e| e.to_string())?;
        let decoder = png::Decoder::new(BufReader::new(file));
        let mut reader = decoder.read_info().map_err(|e| e.to_string())?;

        let text = |keyword: &str| {
            reader
                .info()
                .uncompressed_latin1_text
                .iter()
                .find(|t| t.keyword == keyword)
                .map(|t| t.text.clone())
        };
        if text(KEY_SOURCE).as_deref() != Some(self.key.as_str()) {
            return Err("source key mismatch".into());
        }
        if text(KEY_LEVEL) != Some(index.to_string()) {
            return Err("level index mismatch".into());
        }
        let size = text(KEY_SOURCE_SIZE)
            .as_deref()
            .and_then(parse_size)
            .ok_or("missing source size")?;
        if *source_size.get_or_insert(size) != size {
            return Err("source size differs between levels".into());
        }

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;
        if frame.color_type != png::ColorType::Rgba || frame.bit_depth != png::BitDepth::Eight {
            return Err(format!("unexpected pixel format {:?}", frame.color_type));
        }
        if (frame.width, frame.height) != level_size(index, size.0, size.1) {
            return Err(format!("unexpected size {}×{}", frame.width, frame.height));
        }
        buf.truncate(frame.buffer_size());

        let image = RgbaImage::from_raw(frame.width, frame.height, buf)
            .ok_or("pixel buffer too short")?;
        Ok(ZoomLevel::new(index, image))
    }
}

fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}
