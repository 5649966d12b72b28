//! Small DOM helpers shared by the adapters.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element with `id`, if present and of type `T`.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn create<T: JsCast>(doc: &Document, tag: &str, class: &str) -> Result<T, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has an unexpected type")))
}

/// `<tag class=…>text</tag>`
pub fn text_element(doc: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el: Element = create(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

pub fn clear(el: &Element) {
    el.set_inner_html("");
}

pub fn set_pressed(el: &Element, pressed: bool) -> Result<(), JsValue> {
    el.set_attribute("aria-pressed", if pressed { "true" } else { "false" })
}

/// Opens in a new tab without leaking the opener.
pub fn external_link(anchor: &Element, href: &str) -> Result<(), JsValue> {
    anchor.set_attribute("href", href)?;
    anchor.set_attribute("target", "_blank")?;
    anchor.set_attribute("rel", "noopener noreferrer")
}

/// Attaches `handler` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`on`], but the browser drops the listener after one call.
pub fn once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// `window.matchMedia(query).matches`, false when unsupported.
pub fn media_matches(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|m| m.matches())
}

/// Reads `obj[key]` as a function, if it is one.
pub fn js_function(obj: &JsValue, key: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Plain `{key: value}` object for library option bags.
pub fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

pub fn log_err(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{context}: {err:?}");
    }
}
