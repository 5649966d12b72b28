use views::{GalleryBackend, GalleryOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{js_function, js_object};

#[wasm_bindgen]
extern "C" {
    pub type GLightboxInstance;

    #[wasm_bindgen(method)]
    fn destroy(this: &GLightboxInstance);
}

/// GLightbox, looked up on `window` at each registration.
#[derive(Debug, Default)]
pub struct GLightboxGallery;

impl GalleryBackend for GLightboxGallery {
    type Instance = GLightboxInstance;

    fn register(&mut self, options: &GalleryOptions) -> Option<GLightboxInstance> {
        let factory = js_function(&js_sys::global(), "GLightbox")?;
        let options = js_object(&[
            ("selector", JsValue::from_str(&options.selector)),
            ("touchNavigation", JsValue::from_bool(options.touch_navigation)),
            ("loop", JsValue::from_bool(options.loop_slides)),
            ("openEffect", JsValue::from_str(options.open_effect)),
            ("closeEffect", JsValue::from_str(options.close_effect)),
        ])
        .ok()?;
        match factory.call1(&JsValue::NULL, &options) {
            Ok(instance) => Some(instance.unchecked_into()),
            Err(err) => {
                log::warn!("lightbox registration failed: {err:?}");
                None
            }
        }
    }

    fn destroy(&mut self, instance: GLightboxInstance) {
        instance.destroy();
    }
}
