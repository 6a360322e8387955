use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::HIGHLIGHT_CLASS;
use crate::core::error::CoreError;
use crate::core::reveal::{ElementRect, Stage};
use crate::core::style::ElementStyle;
use crate::dom;

/// Reveal stage over the live document; keys are element ids.
pub struct DomStage {
    document: web::Document,
}

impl DomStage {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn html_element(&self, key: &str) -> Option<web::HtmlElement> {
        self.document
            .get_element_by_id(key)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

impl Stage for DomStage {
    fn rect(&self, key: &str) -> Option<ElementRect> {
        let el = self.document.get_element_by_id(key)?;
        let r = el.get_bounding_client_rect();
        Some(ElementRect::new(
            r.top() as f32,
            r.left() as f32,
            r.width() as f32,
            r.height() as f32,
        ))
    }

    fn apply(&mut self, key: &str, style: &ElementStyle) -> Result<(), CoreError> {
        let el = self.html_element(key).ok_or_else(|| CoreError::missing(key))?;
        if let Some(opacity) = style.opacity {
            dom::set_style(&el, "opacity", &format!("{opacity:.3}"));
        }
        if let Some(transform) = style.transform_css() {
            dom::set_style(&el, "transform", &transform);
        }
        if let Some(origin) = style.transform_origin {
            dom::set_style(&el, "transform-origin", origin);
        }
        if let Some(pct) = style.width_pct {
            dom::set_style(&el, "width", &format!("{pct:.2}%"));
        }
        if let Some(on) = style.highlighted {
            dom::toggle_class(&el, HIGHLIGHT_CLASS, on);
        }
        Ok(())
    }
}
