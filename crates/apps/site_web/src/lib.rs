use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, RequestCache};

use content::{ContentDocument, ContentError};
use storage::PageStore;
use views::{MAP_UNAVAILABLE_MESSAGE, MapView, Motion, ProjectCatalogView, SiteConfig};

mod chrome;
mod dom;
mod leaflet;
mod lightbox;
mod panels;
mod sections;

use dom::{by_id, log_err};
use leaflet::LeafletMap;
use lightbox::GLightboxGallery;
use panels::{DomCatalog, DomMapPanel};

// Guard against running the page setup twice (hot reload, double script tags).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

const CONTENT_ERROR_MESSAGE: &str =
    "Erro ao carregar conteúdo. Recarregue a página ou tente novamente mais tarde.";

type SiteMap = MapView<LeafletMap, DomMapPanel>;
type SiteCatalog = ProjectCatalogView<DomCatalog, GLightboxGallery, PageStore>;

#[derive(Default)]
struct SiteState {
    map: Option<SiteMap>,
    catalog: Option<SiteCatalog>,
}

thread_local! {
    static STATE: RefCell<SiteState> = RefCell::new(SiteState::default());
}

fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&mut SiteState) -> R,
    R: Default,
{
    STATE
        .try_with(|state| match state.try_borrow_mut() {
            Ok(mut s) => f(&mut s),
            Err(_) => {
                log::warn!("site state busy; event dropped");
                R::default()
            }
        })
        .unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let doc = dom::document()?;
    let config = load_config(&doc);
    chrome::setup(&doc, &config.storage.theme, &config.qr);

    spawn_local(async move {
        match fetch_content(&config.content_url).await {
            Ok(content) => log_err("page setup", mount(&doc, &config, content)),
            Err(err) => {
                log::error!("could not load content: {err}");
                log_err("content error state", show_content_error(&doc));
            }
        }
    });
    Ok(())
}

/// Centers the map on the named point. Returns whether the point exists.
#[wasm_bindgen]
pub fn focus_map_point(name: &str) -> bool {
    with_state(|s| match s.map.as_mut().map(|m| m.focus_by_name(name)) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::debug!("{err}");
            false
        }
        None => false,
    })
}

pub(crate) fn focus_point(name: &str) {
    focus_map_point(name);
}

pub(crate) fn toggle_map_category(category: &str) {
    with_state(|s| {
        if let Some(map) = s.map.as_mut() {
            map.toggle_category(category);
        }
    })
}

pub(crate) fn toggle_project_tag(tag: &str) {
    with_state(|s| {
        if let Some(catalog) = s.catalog.as_mut() {
            catalog.toggle_tag(tag);
        }
    })
}

pub(crate) fn set_project_search(term: &str) {
    with_state(|s| {
        if let Some(catalog) = s.catalog.as_mut() {
            catalog.set_search_term(term);
        }
    })
}

/// Defaults, overridden by `<script id="site-config" type="application/json">`.
fn load_config(doc: &Document) -> SiteConfig {
    let Some(raw) = doc
        .get_element_by_id("site-config")
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::with_overrides(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring malformed site config: {err}");
        SiteConfig::default()
    })
}

async fn fetch_content(url: &str) -> Result<ContentDocument, ContentError> {
    let resp = Request::get(url)
        .cache(RequestCache::NoCache)
        .send()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ContentError::Status(resp.status()));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;
    ContentDocument::from_json(&text)
}

fn show_content_error(doc: &Document) -> Result<(), JsValue> {
    let Some(grid) = by_id::<HtmlElement>(doc, "project-grid") else {
        return Ok(());
    };
    grid.set_attribute("aria-busy", "false")?;
    grid.set_inner_html(&format!(r#"<p role="status">{CONTENT_ERROR_MESSAGE}</p>"#));
    Ok(())
}

fn mount(doc: &Document, config: &SiteConfig, content: ContentDocument) -> Result<(), JsValue> {
    let motion = Motion::from_reduced_preference(dom::media_matches(
        "(prefers-reduced-motion: reduce)",
    ));

    log_err("about", sections::populate_about(doc, content.about.as_ref()));
    log_err("references", sections::populate_references(doc, &content.refs));
    log_err("agenda cta", sections::render_agenda_cta(doc, content.agenda_cta.as_ref()));
    log_err("agenda", sections::populate_agenda(doc, &content.events));

    let map = mount_map(doc, config, content.map_points().to_vec(), motion);

    log_err("partner", sections::render_partner(doc, content.partner.as_ref()));

    let catalog = by_id::<HtmlElement>(doc, "project-grid").map(|grid| {
        let surface = DomCatalog::new(doc, grid, config.gallery.clone());
        log_err("search box", surface.bind_search());
        ProjectCatalogView::mount(
            surface,
            GLightboxGallery,
            PageStore::open(),
            config.storage.filter.clone(),
            content.projects.clone(),
            &config.gallery.selector(),
            motion,
        )
    });

    with_state(|s| {
        s.map = map;
        s.catalog = catalog;
    });

    sections::inject_structured_data(doc, &content)?;
    log::info!(
        "site ready: {} projects, {} map points, {} events",
        content.projects.len(),
        content.map_points().len(),
        content.events.len()
    );
    Ok(())
}

fn mount_map(
    doc: &Document,
    config: &SiteConfig,
    points: Vec<content::MapPoint>,
    motion: Motion,
) -> Option<SiteMap> {
    let map_el = by_id::<HtmlElement>(doc, "map")?;
    let Some(backend) = LeafletMap::create(&map_el) else {
        map_el.set_inner_html(&format!(r#"<p role="status">{MAP_UNAVAILABLE_MESSAGE}</p>"#));
        return None;
    };
    let panel = DomMapPanel::new(doc, map_el, &config.map.section_id);
    Some(MapView::mount(backend, panel, points, &config.map, motion))
}
