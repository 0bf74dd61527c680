//! Great-circle distance helpers.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between (lat1, lon1) and (lat2, lon2), rounded to
/// the nearest meter.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_km(
        GeoPoint::new(lat1, lon1),
        GeoPoint::new(lat2, lon2),
        EARTH_RADIUS_KM,
    )
}

/// Haversine distance between two points on a sphere of the given radius,
/// rounded to 3 decimals.
pub fn haversine_km(a: GeoPoint, b: GeoPoint, earth_radius_km: f64) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());

    let h = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);

    round_to_meter(2.0 * earth_radius_km * h.sqrt().asin())
}

fn round_to_meter(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
