//! Leaflet (`L`) bindings and the map backend built on them.

use foundation::{GeoBounds, LatLng};
use views::MapBackend;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::{js_function, js_object, log_err};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMapHandle;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn l_map(el: &HtmlElement, options: &JsValue) -> Result<LeafletMapHandle, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMapHandle, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMapHandle, center: &JsValue, zoom: u8, options: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMapHandle, layer: &LeafletLayer);

    pub type LeafletLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LeafletLayer, target: &JsValue);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> LeafletLayer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LeafletLayer;

    #[wasm_bindgen(extends = LeafletLayer)]
    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(at: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, html: &str);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletMarker);
}

fn lat_lng(p: LatLng) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(p.lat), &JsValue::from_f64(p.lng)).into()
}

/// Whether the Leaflet script has loaded.
pub fn available() -> bool {
    let Ok(l) = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L")) else {
        return false;
    };
    !l.is_undefined() && js_function(&l, "map").is_some()
}

pub struct LeafletMap {
    map: LeafletMapHandle,
}

impl LeafletMap {
    /// Creates the map canvas inside `el`; `None` when Leaflet is missing.
    pub fn create(el: &HtmlElement) -> Option<Self> {
        if !available() {
            return None;
        }
        let options = js_object(&[("scrollWheelZoom", JsValue::FALSE)]).ok()?;
        match l_map(el, &options) {
            Ok(map) => Some(Self { map }),
            Err(err) => {
                log::error!("leaflet map creation failed: {err:?}");
                None
            }
        }
    }
}

impl MapBackend for LeafletMap {
    type Layer = LeafletLayer;
    type Marker = LeafletMarker;

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: u8) {
        match js_object(&[
            ("attribution", JsValue::from_str(attribution)),
            ("maxZoom", JsValue::from(max_zoom)),
        ]) {
            Ok(options) => tile_layer(url_template, &options).add_to(&self.map),
            Err(err) => log_err("tile layer options", Err(err)),
        }
    }

    fn create_layer(&mut self) -> LeafletLayer {
        layer_group()
    }

    fn create_marker(&mut self, at: LatLng, popup_html: &str) -> LeafletMarker {
        let m = marker(&lat_lng(at));
        m.bind_popup(popup_html);
        m
    }

    fn add_to_layer(&mut self, marker: &LeafletMarker, layer: &LeafletLayer) {
        marker.add_to(layer);
    }

    fn show_layer(&mut self, layer: &LeafletLayer) {
        layer.add_to(&self.map);
    }

    fn hide_layer(&mut self, layer: &LeafletLayer) {
        self.map.remove_layer(layer);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: [u32; 2]) {
        let corners = js_sys::Array::of2(&lat_lng(bounds.south_west), &lat_lng(bounds.north_east));
        let padding = js_sys::Array::of2(&padding_px[0].into(), &padding_px[1].into());
        match js_object(&[("padding", padding.into())]) {
            Ok(options) => self.map.fit_bounds(&corners, &options),
            Err(err) => log_err("fit bounds options", Err(err)),
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: u8, animate: bool) {
        match js_object(&[("animate", JsValue::from_bool(animate))]) {
            Ok(options) => self.map.set_view(&lat_lng(center), zoom, &options),
            Err(err) => log_err("set view options", Err(err)),
        }
    }

    fn open_popup(&mut self, marker: &LeafletMarker) {
        marker.open_popup();
    }
}
