use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance in kilometres (Haversine formula).
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::city_coordinates;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(6.9271, 79.8612);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Coordinates::new(6.9271, 79.8612);
        let b = Coordinates::new(9.6615, 80.0255);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn colombo_to_kandy() {
        let colombo = city_coordinates("Colombo").unwrap();
        let kandy = city_coordinates("Kandy").unwrap();
        let d = haversine_km(colombo, kandy);
        assert!((d - 94.4).abs() < 1.0, "got {d}");
    }
}
