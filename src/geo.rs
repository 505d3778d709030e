//! Pure geometry over fixed-point coordinates.

use crate::models::{Point, Rectangle};

/// Scale factor between fixed-point coordinates and decimal degrees.
const COORD_FACTOR: f64 = 1e7;
/// Mean Earth radius in meters.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Checks whether a point falls inside a rectangle, inclusive on all edges.
///
/// The rectangle's corners may arrive in any order; bounds are normalized
/// per axis before the comparison.
pub fn in_range(point: Point, rect: Rectangle) -> bool {
    let left = rect.low.longitude.min(rect.high.longitude);
    let right = rect.low.longitude.max(rect.high.longitude);
    let bottom = rect.low.latitude.min(rect.high.latitude);
    let top = rect.low.latitude.max(rect.high.latitude);

    point.longitude >= left
        && point.longitude <= right
        && point.latitude >= bottom
        && point.latitude <= top
}

/// Great-circle distance between two points in whole meters, truncated.
///
/// Haversine formula, based on http://mathforum.org/library/drmath/view/51879.html.
pub fn distance(p1: Point, p2: Point) -> i64 {
    let lat1 = (f64::from(p1.latitude) / COORD_FACTOR).to_radians();
    let lat2 = (f64::from(p2.latitude) / COORD_FACTOR).to_radians();
    let lng1 = (f64::from(p1.longitude) / COORD_FACTOR).to_radians();
    let lng2 = (f64::from(p2.longitude) / COORD_FACTOR).to_radians();
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS * c) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(low: (i32, i32), high: (i32, i32)) -> Rectangle {
        Rectangle {
            low: Point::new(low.0, low.1),
            high: Point::new(high.0, high.1),
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let points = [
            Point::new(0, 0),
            Point::new(310235000, 121437403),
            Point::new(-453000000, -1700000000),
        ];
        for point in points {
            assert_eq!(distance(point, point), 0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(310235000, 121437403);
        let b = Point::new(312978870, 121503457);
        assert_eq!(distance(a, b), distance(b, a));

        let c = Point::new(-50000000, 1700000000);
        assert_eq!(distance(a, c), distance(c, a));
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        // 1 degree of arc on a 6371 km sphere is 111194.92... m, truncated.
        let origin = Point::new(0, 0);
        let east = Point::new(0, 10_000_000);
        assert_eq!(distance(origin, east), 111_194);
    }

    #[test]
    fn in_range_is_inclusive_on_all_edges() {
        let r = rect((-5, -5), (5, 5));
        assert!(in_range(Point::new(5, 5), r));
        assert!(in_range(Point::new(-5, -5), r));
        assert!(in_range(Point::new(0, 0), r));
        assert!(!in_range(Point::new(6, 0), r));
        assert!(!in_range(Point::new(0, -6), r));
    }

    #[test]
    fn in_range_accepts_swapped_corners() {
        let canonical = rect((-5, -5), (5, 5));
        let swapped = rect((5, 5), (-5, -5));
        let mixed = rect((5, -5), (-5, 5));

        for point in [Point::new(0, 0), Point::new(5, -5), Point::new(7, 0)] {
            assert_eq!(in_range(point, canonical), in_range(point, swapped));
            assert_eq!(in_range(point, canonical), in_range(point, mixed));
        }
    }
}
