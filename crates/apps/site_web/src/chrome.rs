//! Page chrome that works without content: theme, share, QR download and
//! the collapsible navigation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use storage::PageStore;
use views::{MOBILE_QUERY, NavMenu, QrConfig, Theme, load_theme, save_theme};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    KeyboardEvent, Url,
};

use crate::dom::{
    by_id, create, js_function, js_object, log_err, media_matches, on, set_pressed, window,
};

const SHARE_TEXT: &str = "Conheça o Lixo Zero Express: guia de separação, mapa de ecopontos e projetos da Semana Lixo Zero UNIVALI.";
const COPIED_FEEDBACK_MS: i32 = 2000;

pub fn setup(doc: &Document, theme_key: &str, qr: &QrConfig) {
    log_err("theme toggle", setup_theme(doc, theme_key));
    log_err("share button", setup_share(doc));
    log_err("qr download", setup_qr_download(doc, qr.clone()));
    log_err("navigation toggle", setup_navigation(doc));
}

fn apply_theme(doc: &Document, theme: Theme) -> Result<(), JsValue> {
    if let Some(body) = doc.body() {
        body.set_attribute("data-theme", theme.as_str())?;
    }
    let Some(toggle) = by_id::<Element>(doc, "themeToggle") else {
        return Ok(());
    };
    if let Some(label) = toggle.query_selector(".theme-toggle__label")? {
        label.set_text_content(Some(theme.toggle_label()));
    }
    set_pressed(&toggle, theme.is_dark())
}

fn setup_theme(doc: &Document, key: &str) -> Result<(), JsValue> {
    let store = PageStore::open();
    let theme = load_theme(&store, key, media_matches("(prefers-color-scheme: dark)"));
    apply_theme(doc, theme)?;

    let Some(toggle) = by_id::<Element>(doc, "themeToggle") else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new((theme, store)));
    let doc = doc.clone();
    let key = key.to_string();
    on(&toggle, "click", move |_| {
        let mut guard = state.borrow_mut();
        let (theme, store) = &mut *guard;
        *theme = theme.toggled();
        save_theme(store, &key, *theme);
        log_err("theme toggle", apply_theme(&doc, *theme));
    })
}

fn setup_share(doc: &Document) -> Result<(), JsValue> {
    let Some(button) = by_id::<HtmlElement>(doc, "shareButton") else {
        return Ok(());
    };
    let title = doc.title();
    let source = button.clone();
    on(&button, "click", move |_| {
        let button = source.clone();
        let title = title.clone();
        spawn_local(async move {
            if let Err(err) = share_page(&button, &title).await {
                log::error!("share failed: {err:?}");
                if let Ok(w) = window() {
                    let _ = w.alert_with_message(
                        "Não foi possível compartilhar agora. Tente novamente em instantes.",
                    );
                }
            }
        });
    })
}

/// Web Share when available, then clipboard copy, then a prompt.
async fn share_page(button: &HtmlElement, title: &str) -> Result<(), JsValue> {
    let w = window()?;
    let url = w.location().href()?;
    let navigator: JsValue = w.navigator().into();

    if let Some(share) = js_function(&navigator, "share") {
        let data = js_object(&[
            ("title", JsValue::from_str(title)),
            ("text", JsValue::from_str(SHARE_TEXT)),
            ("url", JsValue::from_str(&url)),
        ])?;
        let promise: js_sys::Promise = share.call1(&navigator, &data)?.dyn_into()?;
        JsFuture::from(promise).await?;
        return Ok(());
    }

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if let Some(write_text) = js_function(&clipboard, "writeText") {
        let promise: js_sys::Promise = write_text.call1(&clipboard, &JsValue::from_str(&url))?.dyn_into()?;
        JsFuture::from(promise).await?;
        show_copied_feedback(button)?;
        w.alert_with_message("Link copiado para a área de transferência.")?;
        return Ok(());
    }

    w.prompt_with_message_and_default("Copie o link para compartilhar:", &url)?;
    Ok(())
}

fn show_copied_feedback(button: &HtmlElement) -> Result<(), JsValue> {
    button.set_attribute("data-feedback", "Link copiado!")?;
    button.class_list().add_1("chip--brand")?;
    let target = button.clone();
    let reset = Closure::once_into_js(move || {
        let _ = target.class_list().remove_1("chip--brand");
        let _ = target.remove_attribute("data-feedback");
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        reset.unchecked_ref(),
        COPIED_FEEDBACK_MS,
    )?;
    Ok(())
}

fn setup_qr_download(doc: &Document, qr: QrConfig) -> Result<(), JsValue> {
    let Some(button) = by_id::<HtmlButtonElement>(doc, "qrButton") else {
        return Ok(());
    };

    if let Some(hero) = by_id::<Element>(doc, "heroQr") {
        let main = button.clone();
        on(&hero, "click", move |event| {
            event.prevent_default();
            main.click();
        })?;
    }

    let source = button.clone();
    let doc = doc.clone();
    on(&button, "click", move |_| {
        let button = source.clone();
        let doc = doc.clone();
        let qr = qr.clone();
        spawn_local(async move {
            let label = button.query_selector("span:last-child").ok().flatten();
            let original = label
                .as_ref()
                .and_then(|l| l.text_content())
                .unwrap_or_else(|| "Baixar QR".to_string());

            button.set_disabled(true);
            let _ = button.set_attribute("aria-busy", "true");
            if let Some(l) = &label {
                l.set_text_content(Some("Gerando..."));
            }

            if let Err(err) = download_qr(&doc, &qr).await {
                log::error!("qr download failed: {err:?}");
                if let Ok(w) = window() {
                    let _ = w.alert_with_message(
                        "Não foi possível gerar o QR Code agora. Tente novamente em instantes.",
                    );
                }
            }

            button.set_disabled(false);
            let _ = button.remove_attribute("aria-busy");
            if let Some(l) = &label {
                l.set_text_content(Some(&original));
            }
        });
    })
}

async fn download_qr(doc: &Document, qr: &QrConfig) -> Result<(), JsValue> {
    let page_url = window()?.location().href()?;
    let resp = Request::get(&qr.request_url(&page_url))
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "unexpected QR response: {}",
            resp.status()
        )));
    }
    let bytes = resp
        .binary()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let props = BlobPropertyBag::new();
    props.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;
    let blob_url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = create(doc, "a", "")?;
    link.set_href(&blob_url);
    link.set_download(&qr.filename);
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&blob_url)?;
    Ok(())
}

fn setup_navigation(doc: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(nav), Some(topbar)) = (
        by_id::<Element>(doc, "menuToggle"),
        by_id::<Element>(doc, "topbarNav"),
        doc.query_selector(".topbar")?,
    ) else {
        return Ok(());
    };

    let menu = Rc::new(RefCell::new(NavMenu::new(media_matches(MOBILE_QUERY))));
    let apply = {
        let (toggle, nav, topbar) = (toggle.clone(), nav.clone(), topbar.clone());
        move |menu: &NavMenu| {
            let p = menu.presentation();
            let result = topbar
                .class_list()
                .toggle_with_force("topbar--open", p.open)
                .and_then(|_| toggle.set_attribute("aria-expanded", if p.open { "true" } else { "false" }))
                .and_then(|_| nav.toggle_attribute_with_force("hidden", p.hidden))
                .and_then(|_| match p.aria_hidden {
                    Some(hidden) => nav.set_attribute("aria-hidden", if hidden { "true" } else { "false" }),
                    None => nav.remove_attribute("aria-hidden"),
                });
            log_err("navigation state", result);
        }
    };
    let apply = Rc::new(apply);
    apply(&*menu.borrow());

    let handler = |change: fn(&mut NavMenu)| {
        let menu = Rc::clone(&menu);
        let apply = Rc::clone(&apply);
        move |_event: web_sys::Event| {
            change(&mut menu.borrow_mut());
            apply(&*menu.borrow());
        }
    };

    on(&toggle, "click", handler(NavMenu::toggle))?;

    let links = nav.query_selector_all("a")?;
    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            on(&link, "click", handler(NavMenu::link_clicked))?;
        }
    }

    {
        let menu = Rc::clone(&menu);
        let apply = Rc::clone(&apply);
        on(doc, "keyup", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if escape {
                menu.borrow_mut().close();
                apply(&*menu.borrow());
            }
        })?;
    }

    if let Some(query) = window()?.match_media(MOBILE_QUERY)? {
        let menu = Rc::clone(&menu);
        let apply = Rc::clone(&apply);
        on(&query, "change", move |_| {
            menu.borrow_mut().set_mobile(media_matches(MOBILE_QUERY));
            apply(&*menu.borrow());
        })?;
    }
    Ok(())
}

