use js_sys::{Array, Reflect};
use tracing::trace;
use viewport_line_core::{AttachError, ViewportBand, THRESHOLD};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverInit};

/// Owns an `IntersectionObserver` watching a single element against a [`ViewportBand`].
///
/// Dropping the handle disconnects the observer; the browser discards any queued reports at that
/// point, so the callback is never invoked afterwards.
pub(crate) struct IntersectionObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

impl IntersectionObserverHandle {
    /// `callback` runs at most once per observer invocation, so a listener detaching from inside
    /// it is never followed by another report from the same invocation.
    pub fn new<F>(
        element: &Element,
        band: &ViewportBand,
        mut callback: F,
    ) -> Result<Self, AttachError>
    where
        F: 'static + FnMut(bool),
    {
        let closure = Closure::new(move |entries: Array| {
            if let Some(is_intersecting) = latest_report(&entries) {
                callback(is_intersecting);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin().to_string());
        options.set_threshold(&JsValue::from_f64(THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(|error| AttachError::Os(super::error_message(&error)))?;
        observer.observe(element);

        Ok(Self { observer, _closure: closure })
    }
}

impl Drop for IntersectionObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect()
    }
}

/// The `isIntersecting` of the newest `IntersectionObserverEntry`.
///
/// Reports for a single target get coalesced when it crosses more than once per frame, only the
/// last one describes where the element is now.
fn latest_report(entries: &Array) -> Option<bool> {
    if entries.length() > 1 {
        trace!(count = entries.length(), "coalesced intersection reports");
    }

    let entry = entries.get(entries.length().checked_sub(1)?);
    Reflect::get(&entry, &JsValue::from_str("isIntersecting")).ok()?.as_bool()
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use js_sys::Object;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn entry(is_intersecting: bool) -> JsValue {
        let entry = Object::new();
        Reflect::set(&entry, &"isIntersecting".into(), &is_intersecting.into()).unwrap();
        entry.into()
    }

    #[wasm_bindgen_test]
    fn single_report() {
        assert_eq!(latest_report(&Array::of1(&entry(true))), Some(true));
        assert_eq!(latest_report(&Array::of1(&entry(false))), Some(false));
    }

    #[wasm_bindgen_test]
    fn coalesced_reports_yield_the_newest() {
        assert_eq!(latest_report(&Array::of2(&entry(true), &entry(false))), Some(false));
        assert_eq!(
            latest_report(&Array::of3(&entry(false), &entry(true), &entry(true))),
            Some(true)
        );
    }

    #[wasm_bindgen_test]
    fn empty_or_malformed_reports() {
        assert_eq!(latest_report(&Array::new()), None);
        assert_eq!(latest_report(&Array::of1(&Object::new().into())), None);
    }
}
