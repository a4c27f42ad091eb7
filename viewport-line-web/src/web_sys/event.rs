use js_sys::{Object, Reflect};
use tracing::{error, trace};
use viewport_line_core::{IntersectDetail, INTERSECT_EVENT};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, Event};

use super::error_message;

/// Dispatches a non-bubbling [`INTERSECT_EVENT`] on `target`.
///
/// Failures are logged: this runs inside the observer callback where nobody could handle them.
pub(crate) fn dispatch_intersect(target: &Element, detail: IntersectDetail) {
    let event = match intersect_event(detail) {
        Ok(event) => event,
        Err(error) => {
            error!("Failed to create `{INTERSECT_EVENT}` event: {}", error_message(&error));
            return;
        },
    };

    trace!(is_intersecting = detail.is_intersecting, "dispatching `{INTERSECT_EVENT}`");
    if let Err(error) = target.dispatch_event(&event) {
        error!("Failed to dispatch `{INTERSECT_EVENT}` event: {}", error_message(&error));
    }
}

fn intersect_event(detail: IntersectDetail) -> Result<CustomEvent, JsValue> {
    let payload = Object::new();
    Reflect::set(
        &payload,
        &JsValue::from_str(IntersectDetail::IS_INTERSECTING),
        &JsValue::from_bool(detail.is_intersecting),
    )?;

    let init = CustomEventInit::new();
    init.set_bubbles(false);
    init.set_detail(&payload);

    CustomEvent::new_with_event_init_dict(INTERSECT_EVENT, &init)
}

/// Reads the [`IntersectDetail`] back out of an [`INTERSECT_EVENT`].
///
/// Returns [`None`] for any other event, or if the payload doesn't have the expected shape.
pub fn intersect_detail(event: &Event) -> Option<IntersectDetail> {
    if event.type_() != INTERSECT_EVENT {
        return None;
    }

    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let is_intersecting =
        Reflect::get(&detail, &JsValue::from_str(IntersectDetail::IS_INTERSECTING)).ok()?;

    is_intersecting.as_bool().map(IntersectDetail::new)
}
