//! DOM-backed presenter and page helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{GameError, Result};
use crate::ui::{Overlay, Presenter, RETRY_BUTTON_ID};

/// Look up a required element and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::Dom(format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| GameError::Dom(format!("#{id} has the wrong element type")))
}

/// Current `innerWidth` x `innerHeight` in CSS pixels
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: std::result::Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(1.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Presenter writing to `#overlay`, `#overlayText` and `#score`
pub struct DomPresenter {
    overlay: HtmlElement,
    overlay_text: Element,
    score: Element,
}

impl DomPresenter {
    pub fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            overlay: element_by_id(document, "overlay")?,
            overlay_text: element_by_id(document, "overlayText")?,
            score: element_by_id(document, "score")?,
        })
    }

    /// Call `on_retry` whenever the retry control inside the overlay is
    /// clicked. The listener is delegated on the overlay itself, so it
    /// survives the markup being rewritten.
    pub fn on_retry(&self, mut on_retry: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let clicked_retry = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == RETRY_BUTTON_ID);
            if clicked_retry {
                on_retry();
            }
        });
        let _ = self
            .overlay
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_visible(&self, visible: bool) {
        let style = self.overlay.style();
        let (display, pointer) = if visible {
            ("flex", "auto")
        } else {
            ("none", "none")
        };
        let _ = style.set_property("display", display);
        let _ = style.set_property("pointer-events", pointer);
    }
}

impl Presenter for DomPresenter {
    fn show_overlay(&mut self, overlay: &Overlay) {
        self.set_visible(true);
        self.overlay_text.set_inner_html(&overlay.markup());
    }

    fn hide_overlay(&mut self) {
        self.set_visible(false);
    }

    fn set_score(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }
}
