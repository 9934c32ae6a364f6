//! Feed parsing and validation.
//!
//! The feed is fetched once per session by the host; a parsed set replaces
//! the previous one atomically. A malformed or unreachable feed leaves the
//! session with zero anchors rather than failing it.

use crate::record::Poi;

#[derive(Debug)]
pub enum PoiError {
    Parse(serde_json::Error),
    BearingOutOfRange { index: usize, value: f64 },
    NegativeDistance { index: usize, value: f64 },
}

impl std::fmt::Display for PoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoiError::Parse(e) => write!(f, "failed to parse POI feed: {e}"),
            PoiError::BearingOutOfRange { index, value } => {
                write!(f, "POI #{index}: bearing {value} outside [0, 360)")
            }
            PoiError::NegativeDistance { index, value } => {
                write!(f, "POI #{index}: negative distance {value}")
            }
        }
    }
}

impl std::error::Error for PoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoiError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// An ordered, validated POI set.
///
/// Immutable once constructed; record order is the feed order (anchor lift
/// offsets depend on it, so it must be stable).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoiSet {
    records: Vec<Poi>,
}

impl PoiSet {
    /// Validate and wrap a list of records.
    pub fn from_records(records: Vec<Poi>) -> Result<Self, PoiError> {
        for (index, poi) in records.iter().enumerate() {
            if !poi.bearing_deg.is_finite() || poi.bearing_deg < 0.0 || poi.bearing_deg >= 360.0 {
                return Err(PoiError::BearingOutOfRange {
                    index,
                    value: poi.bearing_deg,
                });
            }
            if !poi.distance_m.is_finite() || poi.distance_m < 0.0 {
                return Err(PoiError::NegativeDistance {
                    index,
                    value: poi.distance_m,
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse the feed's JSON array payload.
    pub fn from_json_str(payload: &str) -> Result<Self, PoiError> {
        let records: Vec<Poi> = serde_json::from_str(payload).map_err(PoiError::Parse)?;
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Poi> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.records.iter()
    }

    /// Largest distance in the set; 0 for an empty set.
    pub fn max_distance_m(&self) -> f64 {
        self.records
            .iter()
            .map(|p| p.distance_m)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::{PoiError, PoiSet};
    use crate::record::Poi;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_feed_payload() {
        let payload = r#"[
            {"label": "Tower", "heading": 70.5, "distance": 120.0},
            {"label": "Museum", "heading": 200.0, "distance": 45.0, "url": "https://example.com/museum"}
        ]"#;
        let set = PoiSet::from_json_str(payload).expect("parse");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().label, "Tower");
        assert_eq!(set.get(0).unwrap().action_url, None);
        assert_eq!(
            set.get(1).unwrap().action_url.as_deref(),
            Some("https://example.com/museum")
        );
        assert_eq!(set.max_distance_m(), 120.0);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PoiSet::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PoiError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_bearing() {
        let err =
            PoiSet::from_records(vec![Poi::new("A", 0.0, 1.0), Poi::new("B", 360.0, 1.0)])
                .unwrap_err();
        match err {
            PoiError::BearingOutOfRange { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, 360.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let err = PoiSet::from_records(vec![Poi::new("A", 10.0, -0.5)]).unwrap_err();
        assert!(matches!(err, PoiError::NegativeDistance { index: 0, .. }));
    }

    #[test]
    fn empty_set_has_zero_max_distance() {
        let set = PoiSet::default();
        assert!(set.is_empty());
        assert_eq!(set.max_distance_m(), 0.0);
    }
}
