//! Runtime configuration for display projection and walk-time estimates.
//!
//! # Design
//!
//! The display mapping is configuration, not data: the bounding box is the
//! geographic extent of the venue's background map image and the canvas is
//! that image's pixel size.  Neither is derived from the path graph, so a
//! graph node may legitimately lie outside the box.
//!
//! The defaults reproduce the bundled water-park venue:
//!
//! | Field          | Default                   |
//! |----------------|---------------------------|
//! | latitude       | 25.6670 … 25.6715         |
//! | longitude      | −100.2510 … −100.2450     |
//! | canvas         | 800 × 1200 px             |
//! | walking speed  | 4 km/h                    |

use crate::{WfError, WfResult};

// ── MapBounds ────────────────────────────────────────────────────────────────

/// Geographic bounding box covered by the map canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    pub fn validate(&self) -> WfResult<()> {
        let all_finite = [self.min_lat, self.max_lat, self.min_lon, self.max_lon]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(WfError::Config(format!("map bounds must be finite: {self:?}")));
        }
        if self.min_lat >= self.max_lat {
            return Err(WfError::Config(format!(
                "min_lat {} must be below max_lat {}",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon >= self.max_lon {
            return Err(WfError::Config(format!(
                "min_lon {} must be below max_lon {}",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            min_lat: 25.6670,
            max_lat: 25.6715,
            min_lon: -100.2510,
            max_lon: -100.2450,
        }
    }
}

// ── CanvasSize ───────────────────────────────────────────────────────────────

/// Pixel dimensions of the map canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSize {
    pub width:  f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: 800.0, height: 1200.0 }
    }
}

// ── DisplayConfig ────────────────────────────────────────────────────────────

/// Everything [`GeoProjector`](crate::GeoProjector) needs.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct DisplayConfig {
    pub bounds: MapBounds,
    pub canvas: CanvasSize,
}

impl DisplayConfig {
    /// Reject degenerate or non-finite settings that would make the
    /// projection divide by zero or emit NaN.
    pub fn validate(&self) -> WfResult<()> {
        self.bounds.validate()?;
        let CanvasSize { width, height } = self.canvas;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(WfError::Config(format!(
                "canvas must be positive and finite, got {width} x {height}"
            )));
        }
        Ok(())
    }
}

// ── WalkingSpeed ─────────────────────────────────────────────────────────────

/// Assumed visitor walking speed used to turn distances into minutes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkingSpeed {
    pub kmh: f64,
}

impl WalkingSpeed {
    pub const DEFAULT_KMH: f64 = 4.0;

    pub fn new(kmh: f64) -> WfResult<Self> {
        if kmh.is_finite() && kmh > 0.0 {
            Ok(Self { kmh })
        } else {
            Err(WfError::Config(format!("walking speed must be positive, got {kmh} km/h")))
        }
    }

    #[inline]
    pub fn metres_per_minute(self) -> f64 {
        self.kmh * 1_000.0 / 60.0
    }

    /// Whole minutes needed to walk `distance_m`, rounded up so an estimate
    /// never undershoots.  Zero distance is zero minutes.
    pub fn minutes_for(self, distance_m: f64) -> u32 {
        (distance_m.max(0.0) / self.metres_per_minute()).ceil() as u32
    }
}

impl Default for WalkingSpeed {
    fn default() -> Self {
        Self { kmh: Self::DEFAULT_KMH }
    }
}

// ── WayfindingConfig ─────────────────────────────────────────────────────────

/// Top-level configuration document.
///
/// Every section is optional when deserialized; missing sections fall back
/// to the defaults above.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct WayfindingConfig {
    pub display: DisplayConfig,
    pub walking: WalkingSpeed,
}

impl WayfindingConfig {
    pub fn validate(&self) -> WfResult<()> {
        self.display.validate()?;
        WalkingSpeed::new(self.walking.kmh)?;
        Ok(())
    }
}
