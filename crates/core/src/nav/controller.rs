use folio_protocol::{DomCommand, IntersectionEntry, ObserverKind, SectionId, Target};

use super::dispatch::{ScrollRequest, SmoothScroll, Unresolved};
use super::header::{HeaderChrome, HeaderState};
use super::highlight::NavHighlighter;
use super::menu::{MenuState, MobileMenu};
use super::scroll::{ScrollSample, ScrollTracker};
use super::spy::SectionSpy;
use crate::config::NavConfig;
use crate::geometry::PageGeometry;
use crate::layout::PageLayout;
use crate::outbox::Outbox;
use crate::schedule::TaskKey;

/// Owns every piece of navigation state: scroll tracking, scroll spy, link
/// highlighting, smooth scrolling, the mobile menu and the header chrome.
#[derive(Debug, Clone)]
pub struct NavController {
    tracker: ScrollTracker,
    spy: SectionSpy,
    highlighter: NavHighlighter,
    smooth_scroll: SmoothScroll,
    menu: MobileMenu,
    /// `None` when the page has no header.
    chrome: Option<HeaderChrome>,
    header_state: Option<HeaderState>,
    rehighlight_ms: f64,
}

impl NavController {
    pub fn new(config: &NavConfig, layout: &PageLayout, initial_scroll_y: f64) -> Self {
        Self {
            tracker: ScrollTracker::new(initial_scroll_y),
            spy: SectionSpy::new(layout.sections.clone(), config),
            highlighter: NavHighlighter::new(&layout.nav_links),
            smooth_scroll: SmoothScroll::new(config.header_height),
            menu: MobileMenu::new(layout.has_mobile_menu(), config.menu_close_ms),
            chrome: layout
                .has_header
                .then(|| HeaderChrome::new(config.hide_after, config.opaque_after)),
            header_state: None,
            rehighlight_ms: config.rehighlight_ms,
        }
    }

    /// Setup: start the section observer when there is anything to observe.
    pub fn start(&mut self, out: &mut Outbox<'_>) {
        if self.spy.sections().is_empty() {
            tracing::debug!("no sections; scroll spy disabled");
            return;
        }
        out.push(DomCommand::Observe {
            observer: ObserverKind::Sections,
            threshold: self.spy.threshold(),
            root_margin: self.spy.root_margin().into(),
        });
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn has_mobile_menu(&self) -> bool {
        self.menu.is_enabled()
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.spy.active()
    }

    pub fn active_links(&self) -> &[usize] {
        self.highlighter.marked()
    }

    pub fn header_state(&self) -> Option<HeaderState> {
        self.header_state
    }

    /// Re-seed the scroll baseline, e.g. when the page starts already
    /// scrolled after a reload.
    pub fn reset_scroll(&mut self, scroll_y: f64) {
        self.tracker = ScrollTracker::new(scroll_y);
    }

    /// Scroll notification: track, then restyle the header.
    pub fn on_scroll(&mut self, scroll_y: f64, out: &mut Outbox<'_>) -> ScrollSample {
        let sample = self.tracker.record(scroll_y);
        if let Some(chrome) = &self.chrome {
            let state = chrome.evaluate(sample);
            self.header_state = Some(state);
            out.extend(HeaderChrome::commands(state));
        }
        sample
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], out: &mut Outbox<'_>) {
        if let Some(active) = self.spy.observe_batch(entries) {
            let mut cmds = Vec::new();
            self.highlighter.apply(Some(&active), &mut cmds);
            out.extend(cmds);
        }
    }

    /// In-page link click. On success emits the scroll request, closes the
    /// menu and schedules a re-highlight; the caller adds click feedback
    /// afterwards.
    pub fn on_link_clicked(
        &mut self,
        source: Target,
        href: &str,
        geometry: &dyn PageGeometry,
        out: &mut Outbox<'_>,
    ) -> Option<ScrollRequest> {
        match self.smooth_scroll.resolve(href, geometry) {
            Ok(request) => {
                tracing::debug!(section = %request.section, top = request.top, "smooth scroll");
                out.push(request.command());
                self.menu.close(out);
                out.after(self.rehighlight_ms, TaskKey::Rehighlight);
                Some(request)
            }
            Err(reason) => {
                match reason {
                    Unresolved::MissingSection(id) => {
                        tracing::warn!(%id, "target section not found");
                    }
                    Unresolved::NotAFragment => {
                        tracing::debug!(href, "link is not an in-page fragment");
                    }
                }
                // Nav links always dismiss the drawer, even when dead.
                if matches!(source, Target::NavLink(_)) {
                    self.menu.close(out);
                }
                None
            }
        }
    }

    pub fn on_menu_toggle(&mut self, out: &mut Outbox<'_>) {
        self.menu.toggle(out);
    }

    pub fn on_document_click(&mut self, inside_nav: bool, out: &mut Outbox<'_>) {
        if !inside_nav {
            self.menu.close(out);
        }
    }

    pub fn on_escape(&mut self, out: &mut Outbox<'_>) {
        self.menu.close(out);
    }

    /// Re-evaluate the active section from live geometry, for the window
    /// where a smooth scroll has not yet triggered the observer.
    pub fn rehighlight(&mut self, geometry: &dyn PageGeometry, out: &mut Outbox<'_>) {
        let active = self.spy.evaluate(geometry);
        let mut cmds = Vec::new();
        self.highlighter.apply(active.as_ref(), &mut cmds);
        out.extend(cmds);
    }

    pub fn settle_menu(&mut self, out: &mut Outbox<'_>) {
        self.menu.settle(out);
    }
}
