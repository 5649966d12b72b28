//! DOM implementations of the map panel and the catalog surface.

use std::collections::BTreeMap;

use views::{
    CardMedia, CatalogSurface, FilterControl, GalleryConfig, ListEntry, MapPanel, Motion,
    ProjectCard, TagChip,
};
use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::dom::{by_id, clear, create, external_link, log_err, on, set_pressed, text_element};

const FILTER_ACTIVE_CLASS: &str = "map-filter--active";
const CHIP_ACTIVE_CLASS: &str = "chip--active";

pub struct DomMapPanel {
    doc: Document,
    map_el: HtmlElement,
    filters: Option<Element>,
    list: Option<Element>,
    section_id: String,
    filter_buttons: BTreeMap<String, Element>,
    items: Vec<HtmlElement>,
}

impl DomMapPanel {
    pub fn new(doc: &Document, map_el: HtmlElement, section_id: &str) -> Self {
        Self {
            doc: doc.clone(),
            map_el,
            filters: by_id(doc, "map-filters"),
            list: by_id(doc, "map-list"),
            section_id: section_id.to_string(),
            filter_buttons: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    fn build_filters_inner(&mut self, filters: &[FilterControl]) -> Result<(), JsValue> {
        let Some(container) = &self.filters else {
            return Ok(());
        };
        clear(container);
        self.filter_buttons.clear();
        for f in filters {
            let button: Element = create(&self.doc, "button", "map-filter")?;
            button.set_attribute("type", "button")?;
            button.set_attribute("data-type", &f.category)?;
            button.class_list().toggle_with_force(FILTER_ACTIVE_CLASS, f.active)?;
            set_pressed(&button, f.active)?;

            let icon = text_element(&self.doc, "span", "map-filter__icon", f.style.icon)?;
            icon.set_attribute("aria-hidden", "true")?;
            let label = text_element(&self.doc, "span", "", &f.style.label)?;
            button.append_with_node_2(&icon, &label)?;

            let category = f.category.clone();
            on(&button, "click", move |_| crate::toggle_map_category(&category))?;

            container.append_child(&button)?;
            self.filter_buttons.insert(f.category.clone(), button);
        }
        Ok(())
    }

    fn build_list_inner(&mut self, entries: &[ListEntry]) -> Result<(), JsValue> {
        let Some(list) = &self.list else {
            return Ok(());
        };
        clear(list);
        self.items.clear();
        for entry in entries {
            let li: HtmlElement = create(&self.doc, "li", "map-item")?;
            li.set_attribute("data-type", &entry.category)?;
            li.set_hidden(!entry.visible);

            let button: Element = create(&self.doc, "button", "map-item__button")?;
            button.set_attribute("type", "button")?;
            button.set_attribute("aria-label", &format!("Focar {} no mapa", entry.name))?;

            let icon = text_element(&self.doc, "span", "map-item__icon", entry.style.icon)?;
            icon.set_attribute("aria-hidden", "true")?;
            let body: Element = create(&self.doc, "span", "map-item__content")?;
            body.append_with_node_2(
                &text_element(&self.doc, "strong", "", &entry.name)?.into(),
                &text_element(&self.doc, "span", "map-item__meta", &entry.detail)?.into(),
            )?;
            button.append_with_node_2(&icon, &body)?;

            let name = entry.name.clone();
            on(&button, "click", move |_| crate::focus_point(&name))?;

            li.append_child(&button)?;
            list.append_child(&li)?;
            self.items.push(li);
        }
        Ok(())
    }
}

impl MapPanel for DomMapPanel {
    fn build_filters(&mut self, filters: &[FilterControl]) {
        let result = self.build_filters_inner(filters);
        log_err("map filters", result);
    }

    fn set_filter_active(&mut self, category: &str, active: bool) {
        if let Some(button) = self.filter_buttons.get(category) {
            log_err(
                "map filter state",
                button
                    .class_list()
                    .toggle_with_force(FILTER_ACTIVE_CLASS, active)
                    .and_then(|_| set_pressed(button, active)),
            );
        }
    }

    fn build_list(&mut self, entries: &[ListEntry]) {
        let result = self.build_list_inner(entries);
        log_err("map list", result);
    }

    fn set_entry_visible(&mut self, index: usize, visible: bool) {
        if let Some(item) = self.items.get(index) {
            item.set_hidden(!visible);
        }
    }

    fn show_empty_notice(&mut self, message: &str) {
        let target: &Element = match &self.list {
            Some(list) => list,
            None => &self.map_el,
        };
        target.set_inner_html(&format!(r#"<p role="status">{message}</p>"#));
    }

    fn reveal_map(&mut self, motion: Motion) {
        let Some(section) = self.doc.get_element_by_id(&self.section_id) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if motion.animate() {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub struct DomCatalog {
    doc: Document,
    grid: HtmlElement,
    filters: Option<HtmlElement>,
    search: Option<HtmlInputElement>,
    empty: Option<HtmlElement>,
    chips: BTreeMap<String, Element>,
    gallery: GalleryConfig,
}

impl DomCatalog {
    pub fn new(doc: &Document, grid: HtmlElement, gallery: GalleryConfig) -> Self {
        Self {
            doc: doc.clone(),
            grid,
            filters: by_id(doc, "project-filters"),
            search: by_id(doc, "project-search"),
            empty: by_id(doc, "project-empty"),
            chips: BTreeMap::new(),
            gallery,
        }
    }

    /// Forwards search-box input to the catalog.
    pub fn bind_search(&self) -> Result<(), JsValue> {
        let Some(input) = self.search.clone() else {
            return Ok(());
        };
        let source = input.clone();
        on(&input, "input", move |_| crate::set_project_search(&source.value()))
    }

    fn build_chips_inner(&mut self, chips: &[TagChip]) -> Result<(), JsValue> {
        let Some(container) = &self.filters else {
            return Ok(());
        };
        clear(container);
        self.chips.clear();
        container.set_hidden(chips.is_empty());
        for chip in chips {
            let button = text_element(&self.doc, "button", "chip chip--theme", &chip.label)?;
            button.set_attribute("type", "button")?;
            button.set_attribute("data-tag", &chip.tag)?;
            button.class_list().toggle_with_force(CHIP_ACTIVE_CLASS, chip.pressed)?;
            set_pressed(&button, chip.pressed)?;

            let tag = chip.tag.clone();
            on(&button, "click", move |_| crate::toggle_project_tag(&tag))?;

            container.append_child(&button)?;
            self.chips.insert(chip.tag.clone(), button);
        }
        Ok(())
    }

    fn show_cards_inner(&self, cards: &[ProjectCard]) -> Result<(), JsValue> {
        self.grid.set_attribute("aria-busy", "true")?;
        clear(&self.grid);
        for card in cards {
            self.grid.append_child(&self.card_element(card)?.into())?;
        }
        self.grid.set_attribute("aria-busy", "false")
    }

    fn card_element(&self, card: &ProjectCard) -> Result<Element, JsValue> {
        let doc = &self.doc;
        let article: Element = create(doc, "article", "project-card")?;
        article.set_attribute("role", "listitem")?;

        let media: Element = create(doc, "div", "project-card__media")?;
        match &card.media {
            CardMedia::Thumbnail { src, alt } => {
                let img: HtmlImageElement = create(doc, "img", "")?;
                img.set_src(src);
                img.set_alt(alt);
                img.set_width(320);
                img.set_height(180);
                img.set_attribute("loading", "lazy")?;
                img.set_attribute("decoding", "async")?;
                media.append_child(&img)?;
            }
            CardMedia::Placeholder(label) => {
                media.append_child(&text_element(doc, "div", "project-card__placeholder", label)?.into())?;
            }
        }

        let body: Element = create(doc, "div", "project-card__body")?;
        body.append_child(&text_element(doc, "h3", "", &card.title)?.into())?;
        if let Some(desc) = &card.description {
            body.append_child(&text_element(doc, "p", "", desc)?.into())?;
        }
        if !card.tags.is_empty() {
            let group: Element = create(doc, "div", "tag-group")?;
            for tag in &card.tags {
                group.append_child(&text_element(doc, "span", "tag", tag)?.into())?;
            }
            body.append_child(&group)?;
        }

        let footer: Element = create(doc, "div", "project-card__footer")?;
        if let Some(preview) = &card.preview {
            let class = format!("button button--ghost {}", self.gallery.link_class);
            let link = text_element(doc, "a", &class, "Visualizar")?;
            link.set_attribute("href", &preview.href)?;
            link.set_attribute("data-type", preview.kind.as_str())?;
            link.set_attribute("data-gallery", &self.gallery.group)?;
            link.set_attribute("aria-label", &preview.aria_label)?;
            if let Some(title) = &preview.iframe_title {
                link.set_attribute("data-iframe-title", title)?;
                link.set_attribute("data-iframe-allow", "fullscreen")?;
            }
            footer.append_child(&link)?;
        }
        if let Some(original) = &card.original {
            let link = text_element(doc, "a", "button button--brand", "Abrir original")?;
            external_link(&link, &original.href)?;
            link.set_attribute("aria-label", &original.aria_label)?;
            footer.append_child(&link)?;
        }

        article.append_with_node_3(&media, &body, &footer)?;
        Ok(article)
    }
}

impl CatalogSurface for DomCatalog {
    fn build_chips(&mut self, chips: &[TagChip]) {
        let result = self.build_chips_inner(chips);
        log_err("tag chips", result);
    }

    fn set_chip_pressed(&mut self, tag: &str, pressed: bool) {
        if let Some(button) = self.chips.get(tag) {
            log_err(
                "tag chip state",
                button
                    .class_list()
                    .toggle_with_force(CHIP_ACTIVE_CLASS, pressed)
                    .and_then(|_| set_pressed(button, pressed)),
            );
        }
    }

    fn set_search_value(&mut self, term: &str) {
        if let Some(input) = &self.search {
            input.set_value(term);
        }
    }

    fn show_cards(&mut self, cards: &[ProjectCard]) {
        log_err("project cards", self.show_cards_inner(cards));
    }

    fn set_empty_state(&mut self, visible: bool) {
        if let Some(empty) = &self.empty {
            empty.set_hidden(!visible);
        }
    }
}
