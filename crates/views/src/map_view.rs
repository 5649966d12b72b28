use content::MapPoint;
use foundation::text::escape_html;
use layers::{PointLayers, category_style};
use selection::{CategorySelection, CategoryToggle};

use crate::backend::{FilterControl, ListEntry, MapBackend, MapPanel};
use crate::config::MapConfig;
use crate::motion::Motion;

pub const EMPTY_MAP_MESSAGE: &str = "Nenhum ponto cadastrado ainda. Volte em breve!";
pub const MAP_UNAVAILABLE_MESSAGE: &str = "Mapa indisponível no momento. Verifique sua conexão.";

const NO_POPUP_INFO: &str = "Sem informações adicionais";
const NO_LIST_INFO: &str = "Sem horário informado";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapViewError {
    #[error("no map point named {0:?}")]
    UnknownPoint(String),
}

/// Point map with one toggleable layer per category and a list that
/// mirrors which categories are on.
pub struct MapView<B: MapBackend, P: MapPanel> {
    backend: B,
    panel: P,
    points: Vec<MapPoint>,
    layers: PointLayers,
    /// Indexed by `LayerId`.
    layer_handles: Vec<B::Layer>,
    /// Indexed by point.
    markers: Vec<B::Marker>,
    selection: CategorySelection,
    entries: Vec<ListEntry>,
    focus_zoom: u8,
    motion: Motion,
}

impl<B: MapBackend, P: MapPanel> MapView<B, P> {
    /// Populates the map and its panel. An empty point list only shows the
    /// empty notice.
    pub fn mount(
        mut backend: B,
        mut panel: P,
        points: Vec<MapPoint>,
        config: &MapConfig,
        motion: Motion,
    ) -> Self {
        backend.add_tile_layer(&config.tile_url, &config.attribution, config.max_zoom);

        let layers = PointLayers::build(&points);
        let selection = CategorySelection::new(layers.categories());

        if points.is_empty() {
            panel.show_empty_notice(EMPTY_MAP_MESSAGE);
            return Self {
                backend,
                panel,
                points,
                layers,
                layer_handles: Vec::new(),
                markers: Vec::new(),
                selection,
                entries: Vec::new(),
                focus_zoom: config.focus_zoom,
                motion,
            };
        }

        let layer_handles: Vec<B::Layer> = layers
            .layers()
            .iter()
            .map(|_| {
                let handle = backend.create_layer();
                backend.show_layer(&handle);
                handle
            })
            .collect();

        let mut markers = Vec::with_capacity(points.len());
        for layer in layers.layers() {
            let handle = &layer_handles[layer.id.0];
            for &i in &layer.points {
                let p = &points[i];
                let marker = backend.create_marker(p.position(), &popup_html(p));
                backend.add_to_layer(&marker, handle);
                markers.push((i, marker));
            }
        }
        markers.sort_by_key(|(i, _)| *i);
        let markers: Vec<B::Marker> = markers.into_iter().map(|(_, m)| m).collect();

        if let Some(bounds) = layers.bounds() {
            backend.fit_bounds(bounds, config.fit_padding);
        }

        let filters: Vec<FilterControl> = selection
            .categories()
            .iter()
            .map(|c| FilterControl {
                category: c.clone(),
                style: category_style(c),
                active: true,
            })
            .collect();
        panel.build_filters(&filters);

        let entries: Vec<ListEntry> = points
            .iter()
            .map(|p| {
                let style = category_style(&p.category);
                ListEntry {
                    name: p.name.clone(),
                    category: p.category.clone(),
                    detail: format!(
                        "{} • {}",
                        style.label,
                        p.info.as_deref().unwrap_or(NO_LIST_INFO)
                    ),
                    style,
                    visible: true,
                }
            })
            .collect();
        panel.build_list(&entries);

        log::debug!(
            "map mounted: {} points in {} layers",
            points.len(),
            layer_handles.len()
        );

        let mut view = Self {
            backend,
            panel,
            points,
            layers,
            layer_handles,
            markers,
            selection,
            entries,
            focus_zoom: config.focus_zoom,
            motion,
        };
        view.sync_list();
        view
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Filter-chip click. The last active category stays on.
    pub fn toggle_category(&mut self, category: &str) -> CategoryToggle {
        let outcome = self.selection.toggle(category);
        if !outcome.changed() {
            return outcome;
        }
        let active = outcome == CategoryToggle::Activated;
        if let Some(layer) = self.layers.layer_for(category) {
            let handle = &self.layer_handles[layer.id.0];
            if active {
                self.backend.show_layer(handle);
            } else {
                self.backend.hide_layer(handle);
            }
        }
        self.panel.set_filter_active(category, active);
        self.sync_list();
        log::debug!("map category {category:?} -> {outcome:?}");
        outcome
    }

    /// Centers the map on the named point and opens its popup, switching
    /// its category back on if needed.
    pub fn focus_by_name(&mut self, name: &str) -> Result<(), MapViewError> {
        let index = self
            .layers
            .point_named(name)
            .ok_or_else(|| MapViewError::UnknownPoint(name.to_string()))?;
        let category = self.points[index].category.clone();
        let position = self.points[index].position();

        if self.selection.activate(&category) {
            if let Some(layer) = self.layers.layer_for(&category) {
                self.backend.show_layer(&self.layer_handles[layer.id.0]);
            }
            self.panel.set_filter_active(&category, true);
        }
        self.sync_list();

        self.backend
            .set_view(position, self.focus_zoom, self.motion.animate());
        self.backend.open_popup(&self.markers[index]);
        self.panel.reveal_map(self.motion);
        Ok(())
    }

    /// Entry visibility follows category activity.
    fn sync_list(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let visible = self.selection.is_active(&entry.category);
            entry.visible = visible;
            self.panel.set_entry_visible(i, visible);
        }
    }
}

fn popup_html(point: &MapPoint) -> String {
    format!(
        "<strong>{}</strong><br/><span>{}</span>",
        escape_html(&point.name),
        escape_html(point.info.as_deref().unwrap_or(NO_POPUP_INFO))
    )
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::collections::BTreeMap;

    use foundation::{GeoBounds, LatLng};

    use crate::backend::{FilterControl, ListEntry, MapBackend, MapPanel};
    use crate::motion::Motion;

    #[derive(Debug, Clone, PartialEq)]
    pub struct FakeMarker {
        pub at: LatLng,
        pub popup: String,
    }

    #[derive(Debug, Default)]
    pub struct FakeMap {
        pub tile_layers: usize,
        /// Layer id -> marker ids.
        pub layers: Vec<Vec<usize>>,
        pub markers: Vec<FakeMarker>,
        pub shown: Vec<bool>,
        pub fitted: Option<(GeoBounds, [u32; 2])>,
        pub view: Option<(LatLng, u8, bool)>,
        pub open_popup: Option<usize>,
    }

    impl MapBackend for FakeMap {
        type Layer = usize;
        type Marker = usize;

        fn add_tile_layer(&mut self, _url_template: &str, _attribution: &str, _max_zoom: u8) {
            self.tile_layers += 1;
        }

        fn create_layer(&mut self) -> usize {
            self.layers.push(Vec::new());
            self.shown.push(false);
            self.layers.len() - 1
        }

        fn create_marker(&mut self, at: LatLng, popup_html: &str) -> usize {
            self.markers.push(FakeMarker {
                at,
                popup: popup_html.to_string(),
            });
            self.markers.len() - 1
        }

        fn add_to_layer(&mut self, marker: &usize, layer: &usize) {
            self.layers[*layer].push(*marker);
        }

        fn show_layer(&mut self, layer: &usize) {
            self.shown[*layer] = true;
        }

        fn hide_layer(&mut self, layer: &usize) {
            self.shown[*layer] = false;
        }

        fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: [u32; 2]) {
            self.fitted = Some((bounds, padding_px));
        }

        fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool) {
            self.view = Some((center, zoom, animate));
        }

        fn open_popup(&mut self, marker: &usize) {
            self.open_popup = Some(*marker);
        }
    }

    #[derive(Debug, Default)]
    pub struct FakePanel {
        pub filters: BTreeMap<String, bool>,
        pub entries: Vec<(String, bool)>,
        pub empty_notice: Option<String>,
        pub revealed: Vec<Motion>,
    }

    impl FakePanel {
        pub fn visible_names(&self) -> Vec<&str> {
            self.entries
                .iter()
                .filter(|(_, v)| *v)
                .map(|(n, _)| n.as_str())
                .collect()
        }
    }

    impl MapPanel for FakePanel {
        fn build_filters(&mut self, filters: &[FilterControl]) {
            self.filters = filters
                .iter()
                .map(|f| (f.category.clone(), f.active))
                .collect();
        }

        fn set_filter_active(&mut self, category: &str, active: bool) {
            self.filters.insert(category.to_string(), active);
        }

        fn build_list(&mut self, entries: &[ListEntry]) {
            self.entries = entries
                .iter()
                .map(|e| (e.name.clone(), e.visible))
                .collect();
        }

        fn set_entry_visible(&mut self, index: usize, visible: bool) {
            self.entries[index].1 = visible;
        }

        fn show_empty_notice(&mut self, message: &str) {
            self.empty_notice = Some(message.to_string());
        }

        fn reveal_map(&mut self, motion: Motion) {
            self.revealed.push(motion);
        }
    }
}
