mod event;
mod intersection_handle;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

pub use self::event::intersect_detail;
pub(crate) use self::event::dispatch_intersect;
pub(crate) use self::intersection_handle::IntersectionObserverHandle;

thread_local! {
    static INTERSECTION_OBSERVER_SUPPORT: bool = {
        #[wasm_bindgen]
        extern "C" {
            type Global;

            #[wasm_bindgen(method, getter, js_name = IntersectionObserver)]
            fn intersection_observer(this: &Global) -> JsValue;
        }

        let global: Global = js_sys::global().unchecked_into();
        !global.intersection_observer().is_undefined()
    };
}

/// Whether the global scope provides `IntersectionObserver`.
pub fn has_intersection_observer() -> bool {
    INTERSECTION_OBSERVER_SUPPORT.with(|support| *support)
}

/// Best effort description of a value thrown by the host.
pub(crate) fn error_message(error: &JsValue) -> String {
    match error.dyn_ref::<js_sys::Error>() {
        Some(error) => {
            format!("{}: {}", String::from(error.name()), String::from(error.message()))
        },
        None => error.as_string().unwrap_or_else(|| format!("{error:?}")),
    }
}
