//! Navigation behavior observed through the page entry points: smooth
//! scrolling, scroll spy, mobile menu timing and header chrome.

use folio_core::nav::{HeaderPosition, HeaderSurface, MenuState};
use folio_core::{Page, PageConfig, PageLayout, SequenceRandom, StartupContext, StaticGeometry};
use folio_protocol::{
    DomCommand, IntersectionEntry, ObserverKind, PageEvent, PointerInfo, Size, Target,
};

const SECTION_HEIGHT: f64 = 800.0;

fn geometry() -> StaticGeometry {
    StaticGeometry::stacked(
        Size::new(1280.0, 800.0),
        &[
            ("home", SECTION_HEIGHT),
            ("about", SECTION_HEIGHT),
            ("skills", SECTION_HEIGHT),
            ("projects", SECTION_HEIGHT),
            ("certificates", SECTION_HEIGHT),
            ("contact", SECTION_HEIGHT),
        ],
    )
}

fn page() -> Page {
    let layout = PageLayout {
        has_loading_screen: false,
        ..PageLayout::portfolio()
    };
    let mut page = Page::new(
        PageConfig::default(),
        &layout,
        Box::new(SequenceRandom::constant(0.5)),
    )
    .expect("default config is valid");
    page.start(&StartupContext {
        viewport: Size::new(1280.0, 800.0),
        ..StartupContext::default()
    });
    page
}

fn click(source: Target, href: &str) -> PageEvent {
    PageEvent::LinkClicked {
        source,
        href: href.into(),
        pointer: PointerInfo::default(),
    }
}

fn toggle() -> PageEvent {
    PageEvent::MenuToggleClicked {
        pointer: PointerInfo::default(),
    }
}

fn scroll_requests(cmds: &[DomCommand]) -> Vec<f64> {
    cmds.iter()
        .filter_map(|c| match c {
            DomCommand::ScrollTo { top, .. } => Some(*top),
            _ => None,
        })
        .collect()
}

#[test]
fn link_to_existing_section_scrolls_once_and_closes_menu() {
    let mut page = page();
    let mut geo = geometry();
    geo.set_scroll_y(300.0);

    page.handle(&toggle(), &geo, 0.0);
    assert_eq!(page.nav().menu_state(), MenuState::Open);

    let cmds = page.handle(&click(Target::NavLink(5), "#contact"), &geo, 10.0);
    // contact starts at 4000; its viewport top is 3700 at scrollY 300.
    assert_eq!(scroll_requests(&cmds), vec![4000.0 - 80.0]);
    assert_eq!(page.nav().menu_state(), MenuState::Closing);
    assert!(cmds.contains(&DomCommand::style(
        Target::NavMenu,
        "animation",
        "slideUp 0.3s ease-out forwards"
    )));
}

#[test]
fn link_to_missing_section_is_a_quiet_no_op() {
    let mut page = page();
    let geo = geometry();
    let cmds = page.handle(&click(Target::Anchor(0), "#blog"), &geo, 0.0);
    assert!(cmds.is_empty());
    assert!(page.live_ripples().is_empty());
    assert_eq!(page.nav().menu_state(), MenuState::Closed);
}

#[test]
fn latest_intersecting_section_owns_the_highlight() {
    let mut page = page();
    let geo = geometry();
    for index in [1, 2, 5] {
        page.handle(
            &PageEvent::Intersections {
                observer: ObserverKind::Sections,
                entries: vec![IntersectionEntry::entering(Target::Section(index))],
            },
            &geo,
            0.0,
        );
    }
    assert_eq!(page.nav().active_links(), &[5]);
    assert_eq!(
        page.nav().active_section().map(|s| s.as_str()),
        Some("contact")
    );
}

#[test]
fn batch_tie_break_takes_last_intersecting_entry() {
    let mut page = page();
    let geo = geometry();
    let cmds = page.handle(
        &PageEvent::Intersections {
            observer: ObserverKind::Sections,
            entries: vec![
                IntersectionEntry::entering(Target::Section(1)),
                IntersectionEntry::entering(Target::Section(2)),
                IntersectionEntry::leaving(Target::Section(3)),
            ],
        },
        &geo,
        0.0,
    );
    assert_eq!(page.nav().active_links(), &[2]);
    assert!(cmds.contains(&DomCommand::add_class(Target::NavLink(2), "active")));
    assert!(!cmds.contains(&DomCommand::add_class(Target::NavLink(1), "active")));
}

#[test]
fn toggle_opens_and_stays_open() {
    let mut page = page();
    let geo = geometry();
    page.handle(&toggle(), &geo, 0.0);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
    page.advance_to(1000.0, &geo);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
}

#[test]
fn close_settles_after_transition_and_releases_scroll_lock_then() {
    let mut page = page();
    let geo = geometry();
    page.handle(&toggle(), &geo, 0.0);
    let cmds = page.handle(&PageEvent::KeyDown { key: "Escape".into() }, &geo, 1000.0);
    assert_eq!(page.nav().menu_state(), MenuState::Closing);
    let release = DomCommand::clear_style(Target::Body, "overflow");
    assert!(!cmds.contains(&release));

    let early = page.advance_to(1299.0, &geo);
    assert_eq!(page.nav().menu_state(), MenuState::Closing);
    assert!(!early.contains(&release));

    let settled = page.advance_to(1300.0, &geo);
    assert_eq!(page.nav().menu_state(), MenuState::Closed);
    assert!(settled.contains(&release));
}

#[test]
fn reopening_during_close_cancels_the_settle() {
    let mut page = page();
    let geo = geometry();
    page.handle(&toggle(), &geo, 0.0);
    page.handle(&toggle(), &geo, 100.0);
    assert_eq!(page.nav().menu_state(), MenuState::Closing);
    page.handle(&toggle(), &geo, 200.0);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
    page.advance_to(5000.0, &geo);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
}

#[test]
fn outside_click_closes_menu() {
    let mut page = page();
    let geo = geometry();
    page.handle(&toggle(), &geo, 0.0);
    page.handle(&PageEvent::DocumentClicked { inside_nav: true }, &geo, 10.0);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
    page.handle(&PageEvent::DocumentClicked { inside_nav: false }, &geo, 20.0);
    assert_eq!(page.nav().menu_state(), MenuState::Closing);
}

#[test]
fn header_hides_on_the_way_down_and_returns_on_the_way_up() {
    let mut page = page();
    let geo = geometry();
    let scroll = |y: f64| PageEvent::Scroll { scroll_y: y };

    page.handle(&scroll(150.0), &geo, 0.0);
    let state = page.nav().header_state().expect("header present");
    assert_eq!(state.position, HeaderPosition::Hidden);
    assert_eq!(state.surface, HeaderSurface::Opaque);

    page.handle(&scroll(120.0), &geo, 10.0);
    let state = page.nav().header_state().expect("header present");
    assert_eq!(state.position, HeaderPosition::Shown);
    assert_eq!(state.surface, HeaderSurface::Opaque);

    page.handle(&scroll(40.0), &geo, 20.0);
    let state = page.nav().header_state().expect("header present");
    assert_eq!(state.surface, HeaderSurface::Translucent);

    // Going down below the hide threshold keeps the header; opacity
    // follows the offset alone.
    page.handle(&scroll(60.0), &geo, 30.0);
    let state = page.nav().header_state().expect("header present");
    assert_eq!(state.position, HeaderPosition::Shown);
    assert_eq!(state.surface, HeaderSurface::Opaque);
}

#[test]
fn rehighlight_follows_the_smooth_scroll_target() {
    let mut page = page();
    let mut geo = geometry();
    let cmds = page.handle(&click(Target::NavLink(2), "#skills"), &geo, 0.0);
    geo.follow(&cmds);
    page.advance_to(100.0, &geo);
    assert_eq!(page.nav().active_links(), &[2]);
}

#[test]
fn link_click_ripples_once() {
    let mut page = page();
    let geo = geometry();
    page.handle(&click(Target::NavLink(1), "#about"), &geo, 0.0);
    assert_eq!(page.live_ripples().len(), 1);
    page.advance_to(600.0, &geo);
    assert!(page.live_ripples().is_empty());
}

#[test]
fn clicks_inside_the_nav_bar_keep_the_menu_open() {
    let mut page = page();
    let geo = geometry();
    page.handle(&toggle(), &geo, 0.0);
    page.handle(
        &PageEvent::ThemeToggleClicked {
            pointer: PointerInfo::default(),
        },
        &geo,
        50.0,
    );
    assert_eq!(page.nav().menu_state(), MenuState::Open);
    page.handle(&PageEvent::DocumentClicked { inside_nav: true }, &geo, 60.0);
    assert_eq!(page.nav().menu_state(), MenuState::Open);
    assert!(!page.is_pending(folio_core::TaskKey::MenuSettle));
}
