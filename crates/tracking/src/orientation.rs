use foundation::time::Time;

/// One raw sample from the device orientation sensor.
///
/// Ephemeral: consumed on arrival, never stored beyond the current frame.
/// The sensor's yaw reference frame is arbitrary (device-fused, not magnetic
/// North); pitch follows the camera-frame convention where 90° is the
/// horizon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrientationSample {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub time: Time,
}

impl OrientationSample {
    pub fn new(yaw_deg: f64, pitch_deg: f64, time: Time) -> Self {
        Self {
            yaw_deg,
            pitch_deg,
            time,
        }
    }
}
