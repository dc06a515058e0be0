use folio_core::PageGeometry;
use folio_protocol::{Rect, SectionId, Size};
use web_sys::Window;

use crate::dom::Registry;

/// Geometry read straight from the live page.
pub struct LiveGeometry<'a> {
    pub window: &'a Window,
    pub registry: &'a Registry,
}

pub fn viewport_of(window: &Window) -> Size {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

impl PageGeometry for LiveGeometry<'_> {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport(&self) -> Size {
        viewport_of(self.window)
    }

    fn section_rect(&self, id: &SectionId) -> Option<Rect> {
        let r = self.registry.fragment_target(id)?.get_bounding_client_rect();
        Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
    }
}
