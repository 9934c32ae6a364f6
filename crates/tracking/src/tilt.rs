/// Three-state tilt guidance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TiltStatus {
    Neutral,
    TooHigh,
    TooLow,
}

impl TiltStatus {
    /// User-facing warning text, `None` when the pose is usable.
    pub fn guidance(self) -> Option<&'static str> {
        match self {
            TiltStatus::Neutral => None,
            TiltStatus::TooHigh => Some("You are tilting the phone too far upward"),
            TiltStatus::TooLow => Some("You are tilting the phone too far downward"),
        }
    }
}

/// Classifies front-back tilt against a target pose.
///
/// Pitch of 90° means the camera looks at the horizon. The classification is
/// a pure function of the latest sample; there is no smoothing, so the
/// signal may flicker right at the band edge. Boundary values are
/// inclusive-neutral (strict `>`/`<` comparisons).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TiltGuard {
    pub target_deg: f64,
    pub band_deg: f64,
}

impl Default for TiltGuard {
    fn default() -> Self {
        Self {
            target_deg: 90.0,
            band_deg: 15.0,
        }
    }
}

impl TiltGuard {
    pub fn classify(&self, pitch_deg: f64) -> TiltStatus {
        if pitch_deg > self.target_deg + self.band_deg {
            TiltStatus::TooHigh
        } else if pitch_deg < self.target_deg - self.band_deg {
            TiltStatus::TooLow
        } else {
            TiltStatus::Neutral
        }
    }
}
