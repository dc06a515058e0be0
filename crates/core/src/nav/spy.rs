//! Scroll spy: which section the reader is looking at.
//!
//! The browser does the heavy lifting through an `IntersectionObserver`
//! whose root margin shrinks the viewport to a band below the header. The
//! same band arithmetic is exposed here so the active section can also be
//! recomputed from geometry on demand.

use folio_protocol::{IntersectionEntry, Rect, SectionId, Target};

use crate::config::NavConfig;
use crate::geometry::PageGeometry;

/// Viewport-relative vertical band in which sections count as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationBand {
    pub top: f64,
    pub bottom: f64,
}

impl ObservationBand {
    /// Band for a viewport of `height`: `top_inset` pixels below the top,
    /// `bottom_ratio` of the height above the bottom.
    pub fn for_viewport(height: f64, top_inset: f64, bottom_ratio: f64) -> Self {
        let top = top_inset;
        let bottom = (height * (1.0 - bottom_ratio)).max(top);
        Self { top, bottom }
    }

    /// The equivalent `rootMargin` string.
    pub fn root_margin(top_inset: f64, bottom_ratio: f64) -> String {
        let percent = (bottom_ratio * 10_000.0).round() / 100.0;
        format!("-{top_inset}px 0px -{percent}% 0px")
    }

    /// Fraction of `rect` inside the band, in `0..=1`.
    pub fn visible_ratio(&self, rect: Rect) -> f64 {
        if rect.h <= 0.0 {
            return 0.0;
        }
        let overlap = rect.bottom().min(self.bottom) - rect.top().max(self.top);
        (overlap / rect.h).clamp(0.0, 1.0)
    }
}

/// Tracks the active section from observer batches.
#[derive(Debug, Clone)]
pub struct SectionSpy {
    sections: Vec<SectionId>,
    threshold: f64,
    top_inset: f64,
    bottom_ratio: f64,
    active: Option<SectionId>,
}

impl SectionSpy {
    pub fn new(sections: Vec<SectionId>, config: &NavConfig) -> Self {
        Self {
            sections,
            threshold: config.spy_threshold,
            top_inset: config.spy_top_inset,
            bottom_ratio: config.spy_bottom_inset_ratio,
            active: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> String {
        ObservationBand::root_margin(self.top_inset, self.bottom_ratio)
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Fold one callback batch. Every intersecting entry becomes the active
    /// section in turn, so the last one in callback order wins. Returns the
    /// new active id if the batch reported any intersecting section.
    pub fn observe_batch(&mut self, entries: &[IntersectionEntry]) -> Option<SectionId> {
        let mut reported = None;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Target::Section(index) = entry.target else {
                continue;
            };
            match self.sections.get(index) {
                Some(id) => reported = Some(id.clone()),
                None => tracing::debug!(index, "intersection for unknown section"),
            }
        }
        if let Some(id) = &reported {
            self.active = Some(id.clone());
        }
        reported
    }

    /// Recompute the active section from live geometry: the section with the
    /// largest share inside the band, provided it meets the threshold. Ties
    /// go to the earlier section. Falls back to the last observed section.
    pub fn evaluate(&mut self, geometry: &dyn PageGeometry) -> Option<SectionId> {
        let band = ObservationBand::for_viewport(
            geometry.viewport().height,
            self.top_inset,
            self.bottom_ratio,
        );
        let mut best: Option<(f64, &SectionId)> = None;
        for id in &self.sections {
            let Some(rect) = geometry.section_rect(id) else {
                continue;
            };
            let ratio = band.visible_ratio(rect);
            if ratio < self.threshold || ratio <= 0.0 {
                continue;
            }
            if best.is_none_or(|(r, _)| ratio > r) {
                best = Some((ratio, id));
            }
        }
        if let Some((_, id)) = best {
            self.active = Some(id.clone());
        }
        self.active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;
    use folio_protocol::Size;

    fn spy() -> SectionSpy {
        SectionSpy::new(
            ["about", "skills", "contact"]
                .into_iter()
                .map(SectionId::from)
                .collect(),
            &NavConfig::default(),
        )
    }

    #[test]
    fn root_margin_matches_observer_options() {
        assert_eq!(spy().root_margin(), "-80px 0px -60% 0px");
    }

    #[test]
    fn band_for_default_viewport() {
        let band = ObservationBand::for_viewport(1000.0, 80.0, 0.6);
        assert_eq!(band.top, 80.0);
        assert!((band.bottom - 400.0).abs() < 1e-9);
        assert_eq!(band.visible_ratio(Rect::new(0.0, 80.0, 10.0, 320.0)), 1.0);
        assert_eq!(band.visible_ratio(Rect::new(0.0, 500.0, 10.0, 100.0)), 0.0);
        assert!((band.visible_ratio(Rect::new(0.0, 300.0, 10.0, 200.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let mut spy = spy();
        let active = spy.observe_batch(&[
            IntersectionEntry::entering(Target::Section(0)),
            IntersectionEntry::entering(Target::Section(1)),
            IntersectionEntry::leaving(Target::Section(2)),
        ]);
        assert_eq!(active.as_deref(), Some("skills"));
        assert_eq!(spy.active().map(|s| s.as_str()), Some("skills"));
    }

    #[test]
    fn batch_without_intersections_keeps_active() {
        let mut spy = spy();
        spy.observe_batch(&[IntersectionEntry::entering(Target::Section(2))]);
        assert_eq!(
            spy.observe_batch(&[IntersectionEntry::leaving(Target::Section(2))]),
            None
        );
        assert_eq!(spy.active().map(|s| s.as_str()), Some("contact"));
    }

    #[test]
    fn evaluate_picks_section_filling_band() {
        let mut geo = StaticGeometry::stacked(
            Size::new(1200.0, 1000.0),
            &[("about", 900.0), ("skills", 900.0), ("contact", 900.0)],
        );
        geo.set_scroll_y(900.0 - 80.0);
        let mut spy = spy();
        assert_eq!(spy.evaluate(&geo).as_deref(), Some("skills"));
    }

    #[test]
    fn evaluate_falls_back_to_last_observed() {
        let geo = StaticGeometry::default();
        let mut spy = spy();
        spy.observe_batch(&[IntersectionEntry::entering(Target::Section(0))]);
        assert_eq!(spy.evaluate(&geo).as_deref(), Some("about"));
    }
}
