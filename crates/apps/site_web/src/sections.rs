//! Page sections filled once from the content document.

use content::agenda::event_labels;
use content::partner::PartnerProfile;
use content::references::host_label;
use content::structured_data::{page_base_url, structured_data};
use content::{About, AgendaCta, ContentDocument, Event, Partner, Reference};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

use crate::dom::{by_id, clear, create, external_link, once, text_element, window};

pub const EMPTY_REFERENCES_MESSAGE: &str = "Referências serão publicadas em breve.";
pub const EMPTY_AGENDA_MESSAGE: &str = "Ainda não há eventos confirmados. Volte em breve!";

pub fn populate_about(doc: &Document, about: Option<&About>) -> Result<(), JsValue> {
    let Some(about) = about else {
        return Ok(());
    };
    if let Some(list) = by_id::<Element>(doc, "team-list") {
        clear(&list);
        for member in &about.team {
            list.append_child(&text_element(doc, "li", "", member)?.into())?;
        }
    }
    if let (Some(el), Some(term)) = (by_id::<Element>(doc, "term-label"), &about.term) {
        el.set_text_content(Some(term));
    }
    if let (Some(el), Some(label)) = (by_id::<Element>(doc, "course-label"), about.course_label()) {
        el.set_text_content(Some(&label));
    }
    Ok(())
}

pub fn populate_references(doc: &Document, refs: &[Reference]) -> Result<(), JsValue> {
    let Some(list) = by_id::<Element>(doc, "references-list") else {
        return Ok(());
    };
    clear(&list);

    if refs.is_empty() {
        let item = text_element(
            doc,
            "li",
            "reference-card reference-card--empty",
            EMPTY_REFERENCES_MESSAGE,
        )?;
        list.append_child(&item)?;
        return Ok(());
    }

    for r in refs {
        let li: Element = create(doc, "li", "reference-card")?;
        let link = text_element(doc, "a", "reference-card__link", "Abrir referência")?;
        external_link(&link, &r.url)?;
        link.set_attribute("aria-label", &format!("{} (abre em nova aba)", r.label))?;
        li.append_with_node_3(
            &text_element(doc, "strong", "", &r.label)?.into(),
            &text_element(doc, "span", "reference-card__meta", &host_label(&r.url))?.into(),
            &link,
        )?;
        list.append_child(&li)?;
    }
    Ok(())
}

pub fn render_agenda_cta(doc: &Document, cta: Option<&AgendaCta>) -> Result<(), JsValue> {
    let Some(container) = by_id::<HtmlElement>(doc, "agenda-cta") else {
        return Ok(());
    };
    clear(&container);
    let Some(cta) = cta else {
        container.set_hidden(true);
        return Ok(());
    };
    container.set_hidden(false);

    let callout: Element = create(doc, "div", "callout")?;
    callout.set_attribute("role", "region")?;
    callout.set_attribute("aria-labelledby", "agenda-cta-title")?;

    let icon = text_element(doc, "span", "callout__icon", "📅")?;
    icon.set_attribute("aria-hidden", "true")?;

    let text: Element = create(doc, "div", "")?;
    let title = text_element(doc, "h3", "", &cta.title)?;
    title.set_id("agenda-cta-title");
    text.append_with_node_3(
        &text_element(doc, "p", "kicker", "Agenda colaborativa")?.into(),
        &title,
        &text_element(doc, "p", "", &cta.text)?.into(),
    )?;

    let buttons: Element = create(doc, "div", "button-grid button-grid--inline")?;
    let links = [
        (cta.site.as_deref(), "button button--brand", "Ver agenda final"),
        (cta.instagram.as_deref(), "button button--ghost", "Instagram @itajai.lixozero"),
    ];
    for (href, class, label) in links {
        if let Some(href) = href.filter(|h| !h.is_empty()) {
            let a = text_element(doc, "a", class, label)?;
            external_link(&a, href)?;
            buttons.append_child(&a)?;
        }
    }

    callout.append_with_node_3(&icon, &text, &buttons)?;
    container.append_child(&callout)?;
    Ok(())
}

pub fn populate_agenda(doc: &Document, events: &[Event]) -> Result<(), JsValue> {
    let Some(list) = by_id::<Element>(doc, "agenda-list") else {
        return Ok(());
    };
    clear(&list);

    if events.is_empty() {
        list.append_child(&text_element(doc, "p", "", EMPTY_AGENDA_MESSAGE)?.into())?;
        return Ok(());
    }

    for event in events {
        let labels = event_labels(event);
        let card: Element = create(doc, "article", "agenda-card")?;
        card.set_attribute("role", "listitem")?;

        let meta: Element = create(doc, "div", "agenda-card__meta")?;
        let time = text_element(doc, "time", "", &labels.date)?;
        time.set_attribute("datetime", &event.date)?;
        let schedule = if labels.time.is_empty() {
            labels.mode.to_string()
        } else {
            format!("{} • {}", labels.time, labels.mode)
        };
        meta.append_with_node_1(&time)?;
        meta.append_with_node_1(&create::<Element>(doc, "br", "")?.into())?;
        meta.append_with_str_1(&schedule)?;

        card.append_with_node_3(
            &meta,
            &text_element(doc, "h3", "", &event.title)?.into(),
            &text_element(doc, "p", "", event.summary.as_deref().unwrap_or(""))?.into(),
        )?;
        if let Some(location) = event.location.as_deref() {
            card.append_child(&text_element(doc, "p", "agenda-card__meta", location)?.into())?;
        }
        if let Some(cta) = event.cta.as_deref() {
            let link = text_element(doc, "a", "button button--ghost agenda-card__cta", "Inscrever-se")?;
            external_link(&link, cta)?;
            card.append_child(&link)?;
        }
        list.append_child(&card)?;
    }
    Ok(())
}

pub fn render_partner(doc: &Document, partner: Option<&Partner>) -> Result<(), JsValue> {
    let Some(section) = by_id::<HtmlElement>(doc, "parceiro") else {
        return Ok(());
    };
    let Some(partner) = partner else {
        section.set_hidden(true);
        return Ok(());
    };
    section.set_hidden(false);
    let profile = PartnerProfile::from_partner(partner);

    if let Some(el) = by_id::<Element>(doc, "partner-title") {
        el.set_text_content(Some(&profile.title));
    }
    if let Some(el) = by_id::<Element>(doc, "partner-about") {
        el.set_text_content(Some(&profile.about));
    }

    if let Some(button) = by_id::<HtmlAnchorElement>(doc, "partner-maps") {
        match &profile.maps {
            Some(href) => {
                button.set_href(href);
                button.set_hidden(false);
                button.set_attribute("aria-label", &profile.maps_aria_label())?;
            }
            None => button.set_hidden(true),
        }
    }

    if let Some(button) = by_id::<HtmlAnchorElement>(doc, "partner-site") {
        match &profile.site {
            Some(site) => {
                button.set_href(&site.href);
                button.set_text_content(Some(&site.label));
                button.set_hidden(false);
                button.set_attribute("aria-label", &site.aria_label)?;
            }
            None => button.set_hidden(true),
        }
    }

    if let Some(tips) = by_id::<Element>(doc, "partner-tips") {
        clear(&tips);
        for tip in &profile.tips {
            tips.append_child(&text_element(doc, "li", "", tip)?.into())?;
        }
        if let Some(card) = by_id::<HtmlElement>(doc, "partner-tips-card") {
            card.set_hidden(profile.tips.is_empty());
        }
    }

    let fallback = by_id::<HtmlElement>(doc, "partner-fallback");
    if let Some(fallback) = &fallback {
        fallback.set_text_content(Some(&profile.initials));
        show_fallback(fallback, false)?;
    }

    if let Some(image) = by_id::<HtmlImageElement>(doc, "partner-image") {
        image.set_alt(&profile.image_alt);
        image.set_hidden(false);

        let failed = image.clone();
        let fallback_on_error = fallback.clone();
        once(&image, "error", move |_| {
            failed.set_hidden(true);
            if let Some(f) = &fallback_on_error {
                let _ = show_fallback(f, true);
            }
        })?;
        once(&image, "load", move |_| {
            if let Some(f) = &fallback {
                let _ = show_fallback(f, false);
            }
        })?;
        image.set_src(&profile.image);
    }
    Ok(())
}

fn show_fallback(fallback: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    fallback.set_hidden(!visible);
    if visible {
        fallback.remove_attribute("aria-hidden")
    } else {
        fallback.set_attribute("aria-hidden", "true")
    }
}

/// Appends the JSON-LD graph to `<head>`.
pub fn inject_structured_data(doc: &Document, content: &ContentDocument) -> Result<(), JsValue> {
    let location = window()?.location();
    let base = page_base_url(&location.origin()?, &location.pathname()?);
    let json = serde_json::to_string(&structured_data(content, &base))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let script: Element = create(doc, "script", "")?;
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&json));
    doc.head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&script)?;
    Ok(())
}
