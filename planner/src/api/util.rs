use super::models::GeoPoint;

pub(super) fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::new(
        (a.latitude + b.latitude) / 2.0,
        (a.longitude + b.longitude) / 2.0,
    )
}

pub(super) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
