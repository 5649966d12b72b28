use serde::{Deserialize, Serialize};

/// WGS84 position in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Axis-aligned lat/lng box.
///
/// Built incrementally; an empty box has no extent and cannot be fitted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        GeoBounds {
            south_west,
            north_east,
        }
    }

    pub fn from_point(p: LatLng) -> Self {
        GeoBounds::new(p, p)
    }

    /// Smallest box covering every position, or `None` for an empty input.
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(GeoBounds::from_point(first), |b, p| b.extend(p)))
    }

    pub fn extend(self, p: LatLng) -> Self {
        GeoBounds {
            south_west: LatLng::new(self.south_west.lat.min(p.lat), self.south_west.lng.min(p.lng)),
            north_east: LatLng::new(self.north_east.lat.max(p.lat), self.north_east.lng.max(p.lng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_empty_is_none() {
        assert!(GeoBounds::covering(Vec::<LatLng>::new()).is_none());
    }

    #[test]
    fn covering_spans_all_points() {
        let b = GeoBounds::covering([
            LatLng::new(-26.9, -48.6),
            LatLng::new(-27.1, -48.7),
            LatLng::new(-26.8, -48.5),
        ])
        .unwrap();
        assert_eq!(b.south_west, LatLng::new(-27.1, -48.7));
        assert_eq!(b.north_east, LatLng::new(-26.8, -48.5));
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let p = LatLng::new(1.0, 2.0);
        let b = GeoBounds::covering([p]).unwrap();
        assert_eq!(b.south_west, p);
        assert_eq!(b.north_east, p);
    }
}
