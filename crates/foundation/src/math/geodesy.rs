use super::angle::normalize_deg;

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// Mean Earth radius (meters), used by the spherical distance/bearing model.
pub const EARTH_RADIUS_MEAN: f64 = (2.0 * WGS84_A + WGS84_B) / 3.0;

/// Geodetic surface coordinates in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
}

impl Geodetic {
    pub fn new(lat_rad: f64, lon_rad: f64) -> Self {
        Self { lat_rad, lon_rad }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(lat_deg.to_radians(), lon_deg.to_radians())
    }
}

/// Great-circle distance (meters) on the mean-radius sphere.
///
/// Accurate to ~0.5% against the ellipsoid, plenty for geofencing and for
/// ranking nearby points of interest.
pub fn haversine_distance_m(a: Geodetic, b: Geodetic) -> f64 {
    let dlat = b.lat_rad - a.lat_rad;
    let dlon = b.lon_rad - a.lon_rad;

    let s_lat = (dlat / 2.0).sin();
    let s_lon = (dlon / 2.0).sin();
    let h = s_lat * s_lat + a.lat_rad.cos() * b.lat_rad.cos() * s_lon * s_lon;

    2.0 * EARTH_RADIUS_MEAN * h.sqrt().min(1.0).asin()
}

/// Initial great-circle bearing from `a` to `b`, degrees clockwise from
/// North, in `[0, 360)`.
pub fn initial_bearing_deg(a: Geodetic, b: Geodetic) -> f64 {
    let dlon = b.lon_rad - a.lon_rad;
    let y = dlon.sin() * b.lat_rad.cos();
    let x = a.lat_rad.cos() * b.lat_rad.sin() - a.lat_rad.sin() * b.lat_rad.cos() * dlon.cos();
    normalize_deg(y.atan2(x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::{Geodetic, haversine_distance_m, initial_bearing_deg};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn distance_is_zero_at_same_point() {
        let p = Geodetic::from_degrees(48.8584, 2.2945);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Geodetic::from_degrees(51.5007, -0.1246);
        let b = Geodetic::from_degrees(48.8584, 2.2945);
        let d_ab = haversine_distance_m(a, b);
        let d_ba = haversine_distance_m(b, a);
        assert_close(d_ab, d_ba, 1e-6);
        // London -> Paris is roughly 340 km.
        assert!(d_ab > 330_000.0 && d_ab < 350_000.0, "got {d_ab}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Geodetic::from_degrees(0.0, 0.0);
        let b = Geodetic::from_degrees(0.0, 1.0);
        // ~111.2 km on the mean sphere.
        let d = haversine_distance_m(a, b);
        assert!(d > 110_000.0 && d < 112_500.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Geodetic::from_degrees(0.0, 0.0);
        assert_close(
            initial_bearing_deg(origin, Geodetic::from_degrees(1.0, 0.0)),
            0.0,
            1e-9,
        );
        assert_close(
            initial_bearing_deg(origin, Geodetic::from_degrees(0.0, 1.0)),
            90.0,
            1e-9,
        );
        assert_close(
            initial_bearing_deg(origin, Geodetic::from_degrees(-1.0, 0.0)),
            180.0,
            1e-9,
        );
        assert_close(
            initial_bearing_deg(origin, Geodetic::from_degrees(0.0, -1.0)),
            270.0,
            1e-9,
        );
    }

    #[test]
    fn bearing_an_epsilon_west_of_north_stays_in_range() {
        let origin = Geodetic::from_degrees(0.0, 0.0);
        let b = initial_bearing_deg(origin, Geodetic::from_degrees(1.0, -1e-18));
        assert!((0.0..360.0).contains(&b), "got {b}");
        assert_eq!(b, 0.0);
    }
}
