//! Session error taxonomy.
//!
//! Nothing here is fatal to the process; each variant ends or gates the
//! current session only. Feed-fetch failures are deliberately absent: those
//! recover locally (log + empty anchor set) and never become an error value.

use crate::location::GeofenceRejection;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Required device capability is missing; blocking, no retry.
    SensorUnavailable { what: &'static str },
    /// GPS acquisition exhausted its retry budget.
    GpsUnavailable { attempts: u32 },
    /// Current position is too far from the experience's origin.
    ///
    /// Dismissible: the host offers "retry" (re-run acquisition) and
    /// "close" (proceed anyway, anchored at the fixed origin).
    GeofenceRejected {
        distance_m: f64,
        max_distance_m: f64,
    },
    /// Directly ingested records failed POI validation.
    ///
    /// Only reachable through the geodetic ingest path; fetched feeds report
    /// their failures through [`PoiError`](poi::PoiError) before the session
    /// sees them.
    InvalidPois { detail: String },
}

impl SessionError {
    pub fn sensor_unavailable(what: &'static str) -> Self {
        SessionError::SensorUnavailable { what }
    }
}

impl From<GeofenceRejection> for SessionError {
    fn from(r: GeofenceRejection) -> Self {
        SessionError::GeofenceRejected {
            distance_m: r.distance_m,
            max_distance_m: r.max_distance_m,
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::SensorUnavailable { what } => {
                write!(f, "{what} is not available on this device")
            }
            SessionError::GpsUnavailable { attempts } => {
                write!(f, "no GPS fix after {attempts} attempts")
            }
            SessionError::GeofenceRejected {
                distance_m,
                max_distance_m,
            } => write!(
                f,
                "current position is {distance_m:.0} m from the experience origin (limit {max_distance_m:.0} m)"
            ),
            SessionError::InvalidPois { detail } => {
                write!(f, "invalid POI records: {detail}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::SessionError;

    #[test]
    fn messages_are_user_readable() {
        assert_eq!(
            SessionError::sensor_unavailable("geolocation").to_string(),
            "geolocation is not available on this device"
        );
        assert_eq!(
            SessionError::GpsUnavailable { attempts: 20 }.to_string(),
            "no GPS fix after 20 attempts"
        );
        let e = SessionError::GeofenceRejected {
            distance_m: 1520.4,
            max_distance_m: 500.0,
        };
        assert_eq!(
            e.to_string(),
            "current position is 1520 m from the experience origin (limit 500 m)"
        );
        assert_eq!(
            SessionError::InvalidPois {
                detail: "POI #0: bearing NaN outside [0, 360)".into()
            }
            .to_string(),
            "invalid POI records: POI #0: bearing NaN outside [0, 360)"
        );
    }
}
