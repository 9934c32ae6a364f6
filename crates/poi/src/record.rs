use foundation::math::{Geodetic, haversine_distance_m, initial_bearing_deg};
use serde::{Deserialize, Serialize};

/// One point of interest, as delivered by the remote feed.
///
/// Wire names follow the feed: `heading` is the true bearing from the
/// experience's fixed origin, `distance` is meters from it. The optional
/// `url` is opened when the user taps the rendered anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub label: String,
    #[serde(rename = "heading")]
    pub bearing_deg: f64,
    #[serde(rename = "distance")]
    pub distance_m: f64,
    #[serde(default, rename = "url", skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Poi {
    pub fn new(label: impl Into<String>, bearing_deg: f64, distance_m: f64) -> Self {
        Self {
            label: label.into(),
            bearing_deg,
            distance_m,
            action_url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// Derive a bearing/distance record from a raw lat/lon position.
    ///
    /// This is the ingest path for feeds that publish coordinates instead of
    /// precomputed polar records.
    pub fn from_geodetic(origin: Geodetic, position: Geodetic, label: impl Into<String>) -> Self {
        Self::new(
            label,
            initial_bearing_deg(origin, position),
            haversine_distance_m(origin, position),
        )
    }
}
