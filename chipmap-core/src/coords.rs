use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A geographic position in decimal degrees.
///
/// No range restriction is applied at construction; points are only
/// clamped against a [`GeoBounds`] when they are projected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Hemisphere of the latitude: north only when strictly positive.
    pub fn lat_cardinal(self) -> LatCardinal {
        if self.lat > 0.0 {
            LatCardinal::N
        } else {
            LatCardinal::S
        }
    }

    /// Hemisphere of the longitude: east only when strictly positive.
    pub fn lon_cardinal(self) -> LonCardinal {
        if self.lon > 0.0 {
            LonCardinal::E
        } else {
            LonCardinal::W
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

/// Real-world extent covered by the map raster.
///
/// Both spans are strictly positive; this is checked once in
/// [`GeoBounds::new`] and the value is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    min_lon: f64,
    max_lon: f64,
    min_lat: f64,
    max_lat: f64,
}

impl GeoBounds {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> crate::Result<Self> {
        check_span("longitude", min_lon, max_lon)?;
        check_span("latitude", min_lat, max_lat)?;
        Ok(Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        })
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Geometric centre of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }

    /// Nearest point inside the box.
    pub fn clamp(&self, p: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            p.lon.clamp(self.min_lon, self.max_lon),
            p.lat.clamp(self.min_lat, self.max_lat),
        )
    }
}

fn check_span(axis: &'static str, min: f64, max: f64) -> crate::Result<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(CoreError::InvalidBounds { axis, min, max });
    }
    Ok(())
}

/// A position in viewport pixels, origin at the bottom-left, y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatCardinal {
    N,
    S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LonCardinal {
    E,
    W,
}

impl fmt::Display for LatCardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::N => "N",
            Self::S => "S",
        })
    }
}

impl fmt::Display for LonCardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::E => "E",
            Self::W => "W",
        })
    }
}
