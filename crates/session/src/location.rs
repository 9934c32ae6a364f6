//! One-shot geolocation acquisition with bounded retry, plus the geofence
//! gate.
//!
//! Acquisition itself is the host's job (platform geolocation API); this
//! module owns the policy: what to request, how to treat a useless fix, when
//! to retry and when to give up.

use foundation::math::{Geodetic, haversine_distance_m};
use foundation::time::Time;
use runtime::retry::{RetryDecision, RetryPolicy, RetryState};

/// Configuration handed to the external geolocation collaborator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub max_age_ms: u32,
}

impl Default for FixRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_age_ms: 1_000,
        }
    }
}

/// Platform-reported acquisition failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FixError {
    PermissionDenied,
    Unavailable,
    Timeout,
}

impl std::fmt::Display for FixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixError::PermissionDenied => f.write_str("position permission denied"),
            FixError::Unavailable => f.write_str("position update unavailable"),
            FixError::Timeout => f.write_str("position request timed out"),
        }
    }
}

impl std::error::Error for FixError {}

/// Distance gate around the experience's fixed origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geofence {
    pub origin: Geodetic,
    pub max_distance_m: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeofenceRejection {
    pub distance_m: f64,
    pub max_distance_m: f64,
}

impl Geofence {
    pub fn check(&self, position: Geodetic) -> Result<(), GeofenceRejection> {
        let distance_m = haversine_distance_m(self.origin, position);
        if distance_m > self.max_distance_m {
            return Err(GeofenceRejection {
                distance_m,
                max_distance_m: self.max_distance_m,
            });
        }
        Ok(())
    }
}

/// User response to a geofence rejection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeofenceAction {
    /// Re-run the whole acquisition.
    Retry,
    /// Proceed anyway, anchored at the fixed origin. Bypasses the gate.
    Proceed,
}

/// Result of dismissing a geofence rejection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeofenceResolution {
    /// Re-run acquisition with this request.
    Rerun(FixRequest),
    /// Continue the session anchored at this position.
    ProceedAt(Geodetic),
}

/// What the host should do after reporting a fix result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AcquisitionOutcome {
    /// Position accepted; the session is anchored here.
    Ready(Geodetic),
    /// Request another fix once engine time reaches the instant.
    RetryAt(Time),
    /// Attempt budget spent; surface a blocking message.
    GaveUp { attempts: u32 },
    /// Fix is good but outside the geofence; dismissible.
    Rejected(GeofenceRejection),
}

/// Acquisition policy state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAcquisition {
    request: FixRequest,
    geofence: Option<Geofence>,
    retry: RetryState,
}

impl LocationAcquisition {
    pub fn new(request: FixRequest, geofence: Option<Geofence>, policy: RetryPolicy) -> Self {
        Self {
            request,
            geofence,
            retry: RetryState::new(policy),
        }
    }

    pub fn request(&self) -> FixRequest {
        self.request
    }

    pub fn geofence(&self) -> Option<Geofence> {
        self.geofence
    }

    /// Consume one fix result from the platform.
    ///
    /// A "fix" at exactly lat 0, lon 0 is the platform's no-fix-yet shape
    /// and is retried like an error.
    pub fn on_fix_result(
        &mut self,
        result: Result<Geodetic, FixError>,
        now: Time,
    ) -> AcquisitionOutcome {
        let position = match result {
            Ok(p) if p.lat_rad != 0.0 || p.lon_rad != 0.0 => p,
            _ => return self.schedule_retry(now),
        };

        if let Some(fence) = self.geofence
            && let Err(rejection) = fence.check(position)
        {
            return AcquisitionOutcome::Rejected(rejection);
        }

        AcquisitionOutcome::Ready(position)
    }

    /// Apply the user's response to a geofence rejection.
    ///
    /// `Retry` resets the attempt budget and returns the request to re-run;
    /// `Proceed` yields the fixed origin as the accepted position. Without a
    /// configured geofence there is nothing to bypass, so `Proceed` degrades
    /// to a re-run.
    pub fn resolve_rejection(&mut self, action: GeofenceAction) -> GeofenceResolution {
        match (action, self.geofence) {
            (GeofenceAction::Proceed, Some(fence)) => GeofenceResolution::ProceedAt(fence.origin),
            _ => {
                self.retry.reset();
                GeofenceResolution::Rerun(self.request)
            }
        }
    }

    fn schedule_retry(&mut self, now: Time) -> AcquisitionOutcome {
        match self.retry.record_failure(now) {
            RetryDecision::RetryAt(at) => AcquisitionOutcome::RetryAt(at),
            RetryDecision::GiveUp => AcquisitionOutcome::GaveUp {
                attempts: self.retry.failures(),
            },
        }
    }
}
