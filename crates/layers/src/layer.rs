use std::collections::{BTreeMap, HashMap};

use content::MapPoint;
use foundation::GeoBounds;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// Points of one category; toggled on and off as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLayer {
    pub id: LayerId,
    pub category: String,
    /// Indices into the source point list, in source order.
    pub points: Vec<usize>,
}

/// Flat point list regrouped into one layer per category.
///
/// Layer order is lexicographic by category and `LayerId(i)` is the
/// position in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointLayers {
    layers: Vec<CategoryLayer>,
    by_name: HashMap<String, usize>,
    bounds: Option<GeoBounds>,
}

impl PointLayers {
    pub fn build(points: &[MapPoint]) -> Self {
        let mut grouped: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        let mut by_name = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            grouped.entry(p.category.as_str()).or_default().push(i);
            // Later duplicates win, like re-registering a marker under the same key.
            by_name.insert(p.name.clone(), i);
        }

        let layers = grouped
            .into_iter()
            .enumerate()
            .map(|(i, (category, points))| CategoryLayer {
                id: LayerId(i),
                category: category.to_string(),
                points,
            })
            .collect();

        Self {
            layers,
            by_name,
            bounds: GeoBounds::covering(points.iter().map(MapPoint::position)),
        }
    }

    pub fn layers(&self) -> &[CategoryLayer] {
        &self.layers
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.layers.iter().map(|l| l.category.as_str())
    }

    pub fn layer_for(&self, category: &str) -> Option<&CategoryLayer> {
        self.layers.iter().find(|l| l.category == category)
    }

    /// Index of the point registered under `name`.
    pub fn point_named(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Box around every point; `None` when there are no points.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::LatLng;

    fn point(name: &str, category: &str, lat: f64, lng: f64) -> MapPoint {
        MapPoint {
            name: name.into(),
            lat,
            lng,
            category: category.into(),
            info: None,
        }
    }

    #[test]
    fn one_layer_per_category_in_order() {
        let points = vec![
            point("Ponto A", "Vidro", 0.0, 0.0),
            point("Ponto B", "Óleo", 1.0, 1.0),
            point("Ponto C", "Vidro", 2.0, -1.0),
        ];
        let layers = PointLayers::build(&points);
        let cats: Vec<_> = layers.categories().collect();
        assert_eq!(cats, vec!["Vidro", "Óleo"]);
        assert_eq!(layers.layer_for("Vidro").unwrap().points, vec![0, 2]);
        assert_eq!(layers.layer_for("Óleo").unwrap().id, LayerId(1));

        let b = layers.bounds().unwrap();
        assert_eq!(b.south_west, LatLng::new(0.0, -1.0));
        assert_eq!(b.north_east, LatLng::new(2.0, 1.0));
    }

    #[test]
    fn duplicate_names_resolve_to_last_point() {
        let points = vec![
            point("Ecoponto", "Vidro", 0.0, 0.0),
            point("Ecoponto", "Óleo", 1.0, 1.0),
        ];
        let layers = PointLayers::build(&points);
        assert_eq!(layers.point_named("Ecoponto"), Some(1));
        assert_eq!(layers.point_named("Outro"), None);
    }

    #[test]
    fn empty_input_has_no_layers_or_bounds() {
        let layers = PointLayers::build(&[]);
        assert!(layers.is_empty());
        assert!(layers.bounds().is_none());
    }
}
