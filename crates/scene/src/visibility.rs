//! Per-frame field-of-view culling.
//!
//! An anchor is on screen when the shortest angular distance between its
//! relative bearing and the current heading fits inside the FOV half-angle.
//! Culling only flips the `visible` flag; anchors are never removed.

use foundation::math::wrap_delta_deg;

use crate::world::AnchorWorld;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FovGate {
    /// Angular tolerance either side of the current heading.
    pub half_angle_deg: f64,
}

impl Default for FovGate {
    fn default() -> Self {
        // Roughly half the camera's 60° horizontal field of view.
        Self {
            half_angle_deg: 30.0,
        }
    }
}

impl FovGate {
    /// Pure visibility predicate; the boundary itself is visible.
    pub fn is_in_fov(&self, relative_bearing_deg: f64, heading_deg: f64) -> bool {
        wrap_delta_deg(relative_bearing_deg, heading_deg) <= self.half_angle_deg
    }
}

/// Re-evaluate visibility for every anchor. Returns the visible count.
pub fn cull_anchors(world: &mut AnchorWorld, heading_deg: f64, gate: FovGate) -> usize {
    let mut visible = 0;
    for anchor in world.anchors_mut() {
        anchor.visible = gate.is_in_fov(anchor.relative_bearing_deg, heading_deg);
        if anchor.visible {
            visible += 1;
        }
    }
    visible
}
