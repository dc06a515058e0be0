use folio_protocol::{DomCommand, SectionId};

use crate::geometry::PageGeometry;

/// A resolved smooth-scroll request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    /// Document offset to scroll to, already corrected for the fixed header.
    pub top: f64,
}

impl ScrollRequest {
    pub fn command(&self) -> DomCommand {
        DomCommand::ScrollTo {
            top: self.top,
            smooth: true,
        }
    }
}

/// Why a link click did not produce a scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// `#`, an empty href, or a link that leaves the page.
    NotAFragment,
    /// The fragment names no section on the page.
    MissingSection(SectionId),
}

/// Turns in-page link clicks into scroll targets that land a section just
/// below the fixed header.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    header_height: f64,
}

impl SmoothScroll {
    pub fn new(header_height: f64) -> Self {
        Self { header_height }
    }

    /// `elementTop + scrollY - headerHeight` for the section `href` names.
    pub fn resolve(
        &self,
        href: &str,
        geometry: &dyn PageGeometry,
    ) -> Result<ScrollRequest, Unresolved> {
        let section = SectionId::from_fragment(href).ok_or(Unresolved::NotAFragment)?;
        let Some(rect) = geometry.section_rect(&section) else {
            return Err(Unresolved::MissingSection(section));
        };
        Ok(ScrollRequest {
            top: rect.top() + geometry.scroll_y() - self.header_height,
            section,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;
    use folio_protocol::Size;

    fn geometry() -> StaticGeometry {
        StaticGeometry::stacked(
            Size::new(1200.0, 800.0),
            &[("home", 800.0), ("about", 700.0), ("contact", 600.0)],
        )
    }

    #[test]
    fn target_is_offset_by_header() {
        let mut geo = geometry();
        geo.set_scroll_y(250.0);
        let req = SmoothScroll::new(80.0).resolve("#about", &geo);
        assert_eq!(
            req,
            Ok(ScrollRequest {
                section: SectionId::from("about"),
                top: 720.0,
            })
        );
    }

    #[test]
    fn missing_section_is_reported() {
        let req = SmoothScroll::new(80.0).resolve("#blog", &geometry());
        assert_eq!(req, Err(Unresolved::MissingSection(SectionId::from("blog"))));
    }

    #[test]
    fn bare_hash_is_not_a_fragment() {
        let req = SmoothScroll::new(80.0).resolve("#", &geometry());
        assert_eq!(req, Err(Unresolved::NotAFragment));
    }
}
