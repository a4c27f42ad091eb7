//! Shows a compact toolbar once the page header has scrolled past the top of the viewport.
//!
//! Run with `cargo run-wasm --example sticky_header`.

#[cfg(web_platform)]
fn main() {
    web::run();
}

#[cfg(not(web_platform))]
fn main() {
    println!("This example only runs in a browser, use `cargo run-wasm --example sticky_header`.");
}

#[cfg(web_platform)]
mod web {
    use std::cell::RefCell;

    use tracing::info;
    use viewport_line::{intersect_detail, ViewportLineObserver, INTERSECT_EVENT};
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement};

    thread_local! {
        static OBSERVER: RefCell<Option<ViewportLineObserver>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        init_tracing();

        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let toolbar = element(
            &document,
            "position: fixed; top: 0; left: 0; right: 0; padding: 8px; background: #333; color: \
             #fff; visibility: hidden",
            "viewport-line",
        );
        let header = element(
            &document,
            "height: 200px; display: flex; align-items: center; justify-content: center; \
             background: #eee; font-size: 32px",
            "Scroll down",
        );
        let content = element(&document, "height: 3000px", "");

        body.append_child(&toolbar).unwrap();
        body.append_child(&header).unwrap();
        body.append_child(&content).unwrap();

        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(detail) = intersect_detail(&event) else { return };
            info!(is_intersecting = detail.is_intersecting, "header crossed the viewport top");

            // the header touches the line while it is still (partly) on screen
            let visibility = if detail.is_intersecting { "hidden" } else { "visible" };
            toolbar.style().set_property("visibility", visibility).unwrap();
        });
        header
            .add_event_listener_with_callback(INTERSECT_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();
        listener.forget();

        let observer = ViewportLineObserver::attach(&header).expect("failed to attach observer");
        OBSERVER.with(|cell| *cell.borrow_mut() = Some(observer));
    }

    fn element(document: &Document, style: &str, text: &str) -> HtmlElement {
        let element: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        element.style().set_css_text(style);
        element.set_text_content(Some(text));
        element
    }

    fn init_tracing() {
        use tracing_subscriber::fmt::format::Pretty;
        use tracing_subscriber::prelude::*;
        use tracing_web::{performance_layer, MakeWebConsoleWriter};

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(MakeWebConsoleWriter::new());
        let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

        tracing_subscriber::registry().with(fmt_layer).with(perf_layer).init();
    }
}
