//! JS entry point following the element action lifecycle: calling the action on mount returns an
//! object whose `destroy()` is called on unmount, and whose `update()` receives new parameters.
//!
//! ```js
//! import { viewport } from "viewport-line";
//!
//! const action = viewport(header);
//! header.addEventListener("intersect", (event) => {
//!     toolbar.classList.toggle("stuck", !event.detail.isIntersecting);
//! });
//! // later
//! action.destroy();
//! ```

use ::web_sys::Element;
use viewport_line_core::{AttachError, ObserverAttributes, ViewportBand};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsError, JsValue};

use crate::observer::ViewportLineObserver;

/// Handle returned to JS by [`viewport()`].
#[wasm_bindgen]
pub struct ViewportAction {
    observer: ViewportLineObserver,
}

#[wasm_bindgen]
impl ViewportAction {
    /// Re-attaches with a new root margin, or the default top line if `undefined`.
    ///
    /// The state last dispatched carries over, so the new band only produces an event when the
    /// element's position relative to it differs from what listeners were told.
    pub fn update(&mut self, root_margin: Option<String>) -> Result<(), JsError> {
        let band = band(root_margin)?;
        self.observer.set_band(band)?;
        Ok(())
    }

    /// Stops observing. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.observer.detach();
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.observer.is_attached()
    }

    #[wasm_bindgen(getter, js_name = rootMargin)]
    pub fn root_margin(&self) -> String {
        self.observer.band().root_margin().to_string()
    }
}

/// Starts dispatching `intersect` events on `node`.
///
/// `root_margin` uses the CSS margin syntax with `px` or `%` values and defaults to
/// `0px 0px -100% 0px`, a line along the top edge of the viewport.
#[wasm_bindgen(js_name = viewport)]
pub fn viewport(node: JsValue, root_margin: Option<String>) -> Result<ViewportAction, JsError> {
    let target: Element = node.dyn_into().map_err(|_| AttachError::InvalidTarget)?;
    let attributes = ObserverAttributes::default().with_band(band(root_margin)?);
    let observer = ViewportLineObserver::attach_with_attributes(&target, attributes)?;

    Ok(ViewportAction { observer })
}

fn band(root_margin: Option<String>) -> Result<ViewportBand, AttachError> {
    match root_margin {
        Some(root_margin) => Ok(root_margin.parse::<ViewportBand>()?),
        None => Ok(ViewportBand::top_line()),
    }
}
