//! Compass heading derived from camera orientation.
//!
//! Convention (documented here because observed implementations disagree):
//! heading is clockwise-positive in `[0, 360)`, with the local `+z` axis as
//! North. For a world-forward vector `f` the heading is
//! `normalize_deg(360 - atan2(f.x, f.z).to_degrees())`, and
//! [`forward_from_heading_deg`] is its exact inverse.

use foundation::math::{Cardinal, Vec3, normalize_deg};

use crate::orientation::OrientationSample;

/// Published heading snapshot for display and culling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeadingState {
    /// Current heading, `[0, 360)`.
    pub heading_deg: f64,
    /// Heading latched on the first sample of the session; never rewritten.
    pub reference_deg: Option<f64>,
    pub cardinal: Cardinal,
}

impl std::fmt::Display for HeadingState {
    /// HUD text: `"127° - Southeast"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}° - {}", self.heading_deg.round(), self.cardinal)
    }
}

/// Heading from a camera world-forward direction.
///
/// A degenerate (zero horizontal) forward maps to heading 0; the surrounding
/// platform treats missing sensor data the same way.
pub fn heading_from_forward(forward: Vec3) -> f64 {
    if forward.x == 0.0 && forward.z == 0.0 {
        return 0.0;
    }
    normalize_deg(360.0 - forward.x.atan2(forward.z).to_degrees())
}

/// Unit forward vector whose [`heading_from_forward`] equals `heading_deg`.
pub fn forward_from_heading_deg(heading_deg: f64) -> Vec3 {
    let rad = heading_deg.to_radians();
    Vec3::new(-rad.sin(), 0.0, rad.cos())
}

/// Tracks the device heading across a session.
///
/// The reference heading is a write-once latch: whatever direction the user
/// faces when tracking starts becomes bearing zero for anchor placement,
/// since true magnetic North is not reliably available.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingTracker {
    heading_deg: f64,
    reference_deg: Option<f64>,
    cardinal: Cardinal,
}

impl Default for HeadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingTracker {
    pub fn new() -> Self {
        Self {
            heading_deg: 0.0,
            reference_deg: None,
            cardinal: Cardinal::North,
        }
    }

    /// Consume one camera world-forward direction and publish the new state.
    pub fn observe_forward(&mut self, forward: Vec3) -> HeadingState {
        let heading = heading_from_forward(forward);
        if self.reference_deg.is_none() {
            self.reference_deg = Some(heading);
        }
        self.heading_deg = heading;
        self.cardinal = Cardinal::from_degrees(heading);
        self.state()
    }

    /// Consume one raw sensor sample (yaw interpreted as a heading).
    pub fn observe_sample(&mut self, sample: OrientationSample) -> HeadingState {
        self.observe_forward(forward_from_heading_deg(sample.yaw_deg))
    }

    pub fn state(&self) -> HeadingState {
        HeadingState {
            heading_deg: self.heading_deg,
            reference_deg: self.reference_deg,
            cardinal: self.cardinal,
        }
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// `None` until the first sample arrives.
    pub fn reference_deg(&self) -> Option<f64> {
        self.reference_deg
    }

    pub fn cardinal(&self) -> Cardinal {
        self.cardinal
    }
}

#[cfg(test)]
mod tests {
    use super::{
        HeadingTracker, forward_from_heading_deg, heading_from_forward,
    };
    use foundation::math::{Cardinal, Vec3};
    use foundation::time::Time;

    use crate::orientation::OrientationSample;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn forward_and_heading_round_trip() {
        for h in [0.0, 40.0, 90.0, 179.5, 180.0, 270.0, 359.0] {
            let f = forward_from_heading_deg(h);
            assert_close(heading_from_forward(f), h, 1e-9);
        }
    }

    #[test]
    fn plus_z_is_north() {
        assert_close(heading_from_forward(Vec3::new(0.0, 0.0, 1.0)), 0.0, 1e-9);
        assert_close(
            heading_from_forward(Vec3::new(-1.0, 0.0, 0.0)),
            90.0,
            1e-9,
        );
    }

    #[test]
    fn degenerate_forward_maps_to_zero() {
        assert_eq!(heading_from_forward(Vec3::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn reference_latches_on_first_sample_only() {
        let mut tracker = HeadingTracker::new();
        assert_eq!(tracker.reference_deg(), None);

        tracker.observe_sample(OrientationSample::new(40.0, 90.0, Time::ZERO));
        assert_eq!(tracker.reference_deg(), Some(40.0));

        tracker.observe_sample(OrientationSample::new(50.0, 90.0, Time(0.1)));
        assert_eq!(tracker.reference_deg(), Some(40.0));
        assert_close(tracker.heading_deg(), 50.0, 1e-9);
    }

    #[test]
    fn classifies_current_heading() {
        let mut tracker = HeadingTracker::new();
        let state = tracker.observe_sample(OrientationSample::new(200.0, 90.0, Time::ZERO));
        assert_eq!(state.cardinal, Cardinal::South);
        let state = tracker.observe_sample(OrientationSample::new(202.5, 90.0, Time(0.1)));
        assert_eq!(state.cardinal, Cardinal::Southwest);
    }

    #[test]
    fn state_displays_as_hud_text() {
        let mut tracker = HeadingTracker::new();
        let state = tracker.observe_sample(OrientationSample::new(126.6, 90.0, Time::ZERO));
        assert_eq!(state.to_string(), "127° - Southeast");
    }
}
