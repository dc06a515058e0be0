use folio_protocol::{DomCommand, Rect, SectionId, Size};
use serde::{Deserialize, Serialize};

/// Read-only view of the live page geometry.
///
/// The browser host answers from `window` and `getBoundingClientRect`; tests
/// and the replay tool use [`StaticGeometry`].
pub trait PageGeometry {
    /// `window.scrollY`
    fn scroll_y(&self) -> f64;

    fn viewport(&self) -> Size;

    /// Viewport-relative bounding box of the section with `id`, or `None`
    /// when no such section exists.
    fn section_rect(&self, id: &SectionId) -> Option<Rect>;
}

/// A section's box in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

/// Fixed page geometry: sections at absolute positions and a scroll offset
/// that only moves when told to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticGeometry {
    pub scroll_y: f64,
    pub viewport: Size,
    pub sections: Vec<SectionBox>,
}

impl Default for StaticGeometry {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport: Size::new(1280.0, 800.0),
            sections: Vec::new(),
        }
    }
}

impl StaticGeometry {
    /// Stack sections of the given heights from the top of the document.
    pub fn stacked(viewport: Size, sections: &[(&str, f64)]) -> Self {
        let mut top = 0.0;
        let sections = sections
            .iter()
            .map(|&(id, height)| {
                let b = SectionBox {
                    id: SectionId::from(id),
                    top,
                    height,
                };
                top += height;
                b
            })
            .collect();
        Self {
            scroll_y: 0.0,
            viewport,
            sections,
        }
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.max(0.0);
    }

    /// Follow the scroll requests in `commands` as if they completed
    /// instantly.
    pub fn follow(&mut self, commands: &[DomCommand]) {
        for cmd in commands {
            if let DomCommand::ScrollTo { top, .. } = cmd {
                self.set_scroll_y(*top);
            }
        }
    }
}

impl PageGeometry for StaticGeometry {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn section_rect(&self, id: &SectionId) -> Option<Rect> {
        self.sections.iter().find(|s| &s.id == id).map(|s| {
            Rect::new(0.0, s.top - self.scroll_y, self.viewport.width, s.height)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_are_viewport_relative() {
        let mut geo = StaticGeometry::stacked(
            Size::new(1000.0, 800.0),
            &[("home", 800.0), ("about", 600.0)],
        );
        let about = SectionId::from("about");
        assert_eq!(geo.section_rect(&about).map(|r| r.y), Some(800.0));
        geo.set_scroll_y(500.0);
        assert_eq!(geo.section_rect(&about).map(|r| r.y), Some(300.0));
        assert_eq!(geo.section_rect(&SectionId::from("missing")), None);
    }

    #[test]
    fn follows_scroll_requests() {
        let mut geo = StaticGeometry::default();
        geo.follow(&[DomCommand::ScrollTo {
            top: 720.0,
            smooth: true,
        }]);
        assert_eq!(geo.scroll_y(), 720.0);
    }
}
