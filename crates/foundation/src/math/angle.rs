//! Degree arithmetic on the compass circle.
//!
//! Headings and bearings are kept in `[0, 360)`, measured clockwise from
//! North. All helpers here are pure and wraparound-correct.

use super::precision::canonical_f64;

/// Normalize any finite angle into `[0, 360)`.
pub fn normalize_deg(v: f64) -> f64 {
    let r = v % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // `r + 360.0` rounds to exactly 360.0 when |r| is below half an ulp of
    // 360, and `%` preserves the sign of negative zero. Both collapse to 0.
    if r >= 360.0 { 0.0 } else { canonical_f64(r) }
}

/// Shortest angular distance between two bearings, in `[0, 180]`.
///
/// `wrap_delta_deg(350.0, 10.0) == 20.0`, not 340.
pub fn wrap_delta_deg(a: f64, b: f64) -> f64 {
    let mut delta = (normalize_deg(a) - normalize_deg(b)).abs();
    if delta > 180.0 {
        delta = 360.0 - delta;
    }
    delta
}

/// Width of one compass-rose sector.
pub const SECTOR_DEG: f64 = 45.0;

/// Eight-point compass rose.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Cardinal {
    /// Classify a heading into its 45°-wide sector.
    ///
    /// Sectors are centered on the cardinal directions, so North covers
    /// `[337.5, 360) ∪ [0, 22.5)`. Each boundary is half-open: a value
    /// exactly on an edge belongs to the sector starting at that edge
    /// (`from_degrees(22.5) == Northeast`).
    pub fn from_degrees(heading_deg: f64) -> Self {
        let h = normalize_deg(heading_deg);
        // Rotate by half a sector so sector 0 starts at 337.5.
        let sector = ((h + SECTOR_DEG / 2.0) / SECTOR_DEG) as usize % 8;
        match sector {
            0 => Cardinal::North,
            1 => Cardinal::Northeast,
            2 => Cardinal::East,
            3 => Cardinal::Southeast,
            4 => Cardinal::South,
            5 => Cardinal::Southwest,
            6 => Cardinal::West,
            _ => Cardinal::Northwest,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cardinal::North => "North",
            Cardinal::Northeast => "Northeast",
            Cardinal::East => "East",
            Cardinal::Southeast => "Southeast",
            Cardinal::South => "South",
            Cardinal::Southwest => "Southwest",
            Cardinal::West => "West",
            Cardinal::Northwest => "Northwest",
        }
    }
}

impl std::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
