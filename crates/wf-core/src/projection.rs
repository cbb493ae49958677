//! Geographic → canvas projection.
//!
//! A plain affine stretch of the configured bounding box onto the canvas.
//! Over a venue-sized area the curvature error is far below a pixel, so no
//! map projection is involved.
//!
//! ```text
//! x = (lon − min_lon) / (max_lon − min_lon) · width
//! y = (max_lat − lat) / (max_lat − min_lat) · height   // screen y grows downward
//! ```
//!
//! Points outside the box project outside the canvas; nothing is clamped.

use crate::{CanvasSize, Coordinate, DisplayConfig, MapBounds, WfResult};

/// A position on the map canvas, in pixels from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects coordinates onto a fixed canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoProjector {
    bounds: MapBounds,
    canvas: CanvasSize,
}

impl GeoProjector {
    /// Build a projector after validating `config`.
    pub fn new(config: DisplayConfig) -> WfResult<Self> {
        config.validate()?;
        Ok(Self { bounds: config.bounds, canvas: config.canvas })
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[inline]
    pub fn project(&self, point: Coordinate) -> DisplayPoint {
        let b = &self.bounds;
        let x = (point.lon - b.min_lon) / (b.max_lon - b.min_lon) * self.canvas.width;
        let y = (b.max_lat - point.lat) / (b.max_lat - b.min_lat) * self.canvas.height;
        DisplayPoint { x, y }
    }

    /// Inverse of [`project`](Self::project): canvas pixel → coordinate.
    pub fn unproject(&self, point: DisplayPoint) -> Coordinate {
        let b = &self.bounds;
        let lon = b.min_lon + point.x / self.canvas.width * (b.max_lon - b.min_lon);
        let lat = b.max_lat - point.y / self.canvas.height * (b.max_lat - b.min_lat);
        Coordinate { lat, lon }
    }
}

impl Default for GeoProjector {
    /// Projector for the default venue configuration.
    fn default() -> Self {
        let config = DisplayConfig::default();
        Self { bounds: config.bounds, canvas: config.canvas }
    }
}
