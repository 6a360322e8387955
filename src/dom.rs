use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An attached event listener. Dropping it detaches the handler and frees
/// the closure.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Box<dyn AsRef<wasm_bindgen::JsValue>>>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static) -> Option<Self>
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("[dom] cannot listen for {event}: {e:?}");
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure: Some(Box::new(closure)),
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let func: &js_sys::Function = (*closure).as_ref().unchecked_ref();
            _ = self.target.remove_event_listener_with_callback(self.event, func);
        }
    }
}

/// Click listener on the element with `element_id`, if it exists.
pub fn on_click(document: &web::Document, element_id: &str, mut handler: impl FnMut() + 'static) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Listener::new(&el, "click", move |_ev: web::Event| handler())
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn set_canvas_backing_size(canvas: &web::HtmlCanvasElement, (w_px, h_px): (u32, u32)) {
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Create `<tag class="...">` with optional text.
pub fn element(document: &web::Document, tag: &str, class: &str, text: Option<&str>) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Some(el)
}

pub fn append(parent: &web::Element, child: &web::Element) {
    if let Err(e) = parent.append_child(child) {
        log::debug!("[dom] append failed: {e:?}");
    }
}

/// Remove every child of `el`.
pub fn clear(el: &web::Element) {
    el.set_inner_html("");
}

pub fn elements_by_class(document: &web::Document, class: &str) -> Vec<web::HtmlElement> {
    let list = document.get_elements_by_class_name(class);
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("[dom] {property}: {e:?}");
    }
}

pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("[dom] class {class}: {e:?}");
    }
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn document_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to_top(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn smooth_scroll_into_view(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
