//! Capabilities the views drive. The browser build binds them to Leaflet,
//! GLightbox and the page DOM; tests use recording fakes.

use foundation::{GeoBounds, LatLng};
use layers::CategoryStyle;

use crate::card::ProjectCard;
use crate::motion::Motion;

/// Map rendering library. Creating the backend creates the map canvas.
pub trait MapBackend {
    type Layer;
    type Marker;

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: u8);
    fn create_layer(&mut self) -> Self::Layer;
    fn create_marker(&mut self, at: LatLng, popup_html: &str) -> Self::Marker;
    fn add_to_layer(&mut self, marker: &Self::Marker, layer: &Self::Layer);
    fn show_layer(&mut self, layer: &Self::Layer);
    fn hide_layer(&mut self, layer: &Self::Layer);
    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: [u32; 2]);
    fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool);
    fn open_popup(&mut self, marker: &Self::Marker);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub category: String,
    pub style: CategoryStyle,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub category: String,
    pub style: CategoryStyle,
    /// `"{label} • {info}"`
    pub detail: String,
    pub visible: bool,
}

/// Filter toggles and point list next to the map.
pub trait MapPanel {
    fn build_filters(&mut self, filters: &[FilterControl]);
    fn set_filter_active(&mut self, category: &str, active: bool);
    fn build_list(&mut self, entries: &[ListEntry]);
    fn set_entry_visible(&mut self, index: usize, visible: bool);
    fn show_empty_notice(&mut self, message: &str);
    /// Bring the map section into view.
    fn reveal_map(&mut self, motion: Motion);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    /// `"{tag} ({count})"`
    pub label: String,
    pub pressed: bool,
}

/// Chips, search box and card grid of the project catalog.
pub trait CatalogSurface {
    /// An empty slice hides the chip container.
    fn build_chips(&mut self, chips: &[TagChip]);
    fn set_chip_pressed(&mut self, tag: &str, pressed: bool);
    fn set_search_value(&mut self, term: &str);
    /// Replaces every rendered card.
    fn show_cards(&mut self, cards: &[ProjectCard]);
    fn set_empty_state(&mut self, visible: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryOptions {
    pub selector: String,
    pub touch_navigation: bool,
    pub loop_slides: bool,
    pub open_effect: &'static str,
    pub close_effect: &'static str,
}

impl GalleryOptions {
    pub fn new(selector: impl Into<String>, motion: Motion) -> Self {
        Self {
            selector: selector.into(),
            touch_navigation: true,
            loop_slides: false,
            open_effect: motion.lightbox_open_effect(),
            close_effect: motion.lightbox_close_effect(),
        }
    }
}

/// Lightbox library: binds to whatever currently matches the selector.
pub trait GalleryBackend {
    type Instance;

    /// `None` when the library is not loaded.
    fn register(&mut self, options: &GalleryOptions) -> Option<Self::Instance>;
    fn destroy(&mut self, instance: Self::Instance);
}
