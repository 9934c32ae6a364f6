//! Radial anchor placement.
//!
//! Real-world distances can span meters to kilometers, far outside the
//! camera's clip range. Placement therefore maps each POI's distance into a
//! fixed radial band around the observer: a deliberate distortion of true
//! scale in exchange for every anchor being guaranteed renderable.

use foundation::math::{Vec3, normalize_deg};
use poi::PoiSet;

use crate::anchor::Anchor;

/// Band and lift constants for anchor placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacementBand {
    /// Radius for the nearest POIs (scene units).
    pub radius_min: f64,
    /// Radius for the farthest POI in the set.
    pub radius_max: f64,
    /// Phase step per POI index for the vertical lift.
    pub lift_step_rad: f64,
    /// Vertical lift amplitude; spreads labels that share a bearing.
    pub lift_amplitude: f64,
}

impl Default for PlacementBand {
    fn default() -> Self {
        Self {
            radius_min: 200.0,
            radius_max: 500.0,
            lift_step_rad: 0.5,
            lift_amplitude: 40.0,
        }
    }
}

/// Place one anchor per POI on the radial band.
///
/// Bearings are re-expressed relative to `reference_heading_deg` (the
/// direction the user faced when tracking began), since the device has no
/// trustworthy magnetic heading. Radii are normalized against the set's
/// maximum distance; a set whose distances are uniformly zero collapses to
/// `radius_min` rather than dividing by zero.
pub fn place_anchors(
    pois: &PoiSet,
    reference_heading_deg: f64,
    band: PlacementBand,
) -> Vec<Anchor> {
    let max_distance = pois.max_distance_m();

    pois.iter()
        .enumerate()
        .map(|(index, p)| {
            let relative_bearing_deg = normalize_deg(p.bearing_deg - reference_heading_deg);

            let radius = if max_distance > 0.0 {
                band.radius_min
                    + (p.distance_m / max_distance) * (band.radius_max - band.radius_min)
            } else {
                band.radius_min
            };

            let rel_rad = relative_bearing_deg.to_radians();
            let x = radius * rel_rad.sin();
            let z = -radius * rel_rad.cos();
            // Not semantically meaningful; only de-overlaps stacked labels.
            let y = (index as f64 * band.lift_step_rad).sin() * band.lift_amplitude;

            Anchor {
                label: p.label.clone(),
                relative_bearing_deg,
                radius,
                position: Vec3::new(x, y, z),
                action_url: p.action_url.clone(),
                visible: true,
            }
        })
        .collect()
}
