//! Whole-page runs: loading screen into main animations, theme start-up,
//! counters, skill bars and the contact form round trip.

use folio_core::features::typing::TAGLINE;
use folio_core::features::{LoadingPhase, SubmitPhase};
use folio_core::{Page, PageConfig, PageLayout, SequenceRandom, StartupContext, StaticGeometry};
use folio_protocol::{
    DomCommand, FormField, FormValues, IntersectionEntry, ObserverKind, PageEvent, Size, Target,
};

fn viewport() -> Size {
    Size::new(1280.0, 800.0)
}

fn geometry() -> StaticGeometry {
    StaticGeometry::stacked(viewport(), &[("home", 800.0), ("contact", 800.0)])
}

fn started(stored_theme: Option<&str>) -> (Page, Vec<DomCommand>) {
    let mut page = Page::new(
        PageConfig::default(),
        &PageLayout::portfolio(),
        Box::new(SequenceRandom::constant(0.5)),
    )
    .expect("default config is valid");
    let cmds = page.start(&StartupContext {
        now_ms: 0.0,
        scroll_y: 0.0,
        viewport: viewport(),
        stored_theme: stored_theme.map(String::from),
    });
    (page, cmds)
}

fn loaded() -> Page {
    let (mut page, _) = started(None);
    page.advance_to(2500.0, &geometry());
    assert!(page.is_loaded());
    page
}

#[test]
fn startup_applies_stored_theme_and_prepares_reveal() {
    let (page, cmds) = started(Some("light"));
    assert!(cmds.contains(&DomCommand::SetAttribute {
        target: Target::Root,
        name: "data-color-scheme".into(),
        value: "light".into(),
    }));
    assert!(cmds.contains(&DomCommand::add_class(Target::Reveal(0), "fade-in")));
    let particles = cmds
        .iter()
        .filter(|c| matches!(c, DomCommand::Spawn { parent: Target::LoadingScreen, .. }))
        .count();
    assert_eq!(particles, 20);
    assert_eq!(page.loading_phase(), LoadingPhase::Showing);
    assert!(!page.is_loaded());
}

#[test]
fn loading_screen_hands_over_to_main_animations() {
    let (mut page, _) = started(None);
    let geo = geometry();

    let hide = page.advance_to(2000.0, &geo);
    assert!(hide.contains(&DomCommand::add_class(Target::LoadingScreen, "hidden")));
    assert!(hide.contains(&DomCommand::add_class(Target::Body, "loaded")));
    assert_eq!(page.loading_phase(), LoadingPhase::Hiding);

    let main = page.advance_to(2500.0, &geo);
    assert_eq!(page.loading_phase(), LoadingPhase::Done);
    assert!(main.contains(&DomCommand::Remove {
        target: Target::LoadingScreen
    }));
    assert!(main.contains(&DomCommand::text(Target::TypedText, "")));
    assert!(main.iter().any(|c| matches!(
        c,
        DomCommand::Observe {
            observer: ObserverKind::Counters,
            ..
        }
    )));
    assert!(page.cursor().is_created());
}

#[test]
fn tagline_is_typed_out_and_cursor_blinks() {
    let mut page = loaded();
    let cmds = page.advance_to(20_000.0, &geometry());
    assert!(page.typewriter().is_finished());
    assert_eq!(page.typewriter().typed(), TAGLINE);
    let typed: String = cmds
        .iter()
        .filter_map(|c| match c {
            DomCommand::AppendText {
                target: Target::TypedText,
                text,
            } => Some(&**text),
            _ => None,
        })
        .collect();
    assert_eq!(typed, TAGLINE);
    assert!(cmds.contains(&DomCommand::style(
        Target::TypingCursor,
        "animation",
        "blink 1s infinite"
    )));
}

#[test]
fn counter_runs_to_its_target_on_frames() {
    let mut page = loaded();
    let geo = geometry();
    page.handle(
        &PageEvent::Intersections {
            observer: ObserverKind::Counters,
            entries: vec![IntersectionEntry::entering(Target::Counter(0))],
        },
        &geo,
        3000.0,
    );
    assert!(page.wants_frame());
    let cmds = page.advance_to(5100.0, &geo);
    let last_text = cmds.iter().rev().find_map(|c| match c {
        DomCommand::SetText {
            target: Target::Counter(0),
            text,
        } => Some(text.to_string()),
        _ => None,
    });
    assert_eq!(last_text.as_deref(), Some("15"));
    assert!(cmds.contains(&DomCommand::style(
        Target::Counter(0),
        "animation",
        "pulse 0.5s ease-out"
    )));
    assert!(!page.wants_frame());
}

#[test]
fn skill_bar_fills_then_glows() {
    let mut page = loaded();
    let geo = geometry();
    page.handle(
        &PageEvent::Intersections {
            observer: ObserverKind::SkillBars,
            entries: vec![IntersectionEntry::entering(Target::SkillBar(1))],
        },
        &geo,
        3000.0,
    );
    let fill = page.advance_to(3200.0, &geo);
    assert!(fill.contains(&DomCommand::style(Target::SkillBar(1), "width", "85%")));
    let glow = page.advance_to(3700.0, &geo);
    assert!(glow.contains(&DomCommand::style(
        Target::SkillBar(1),
        "box-shadow",
        "0 0 20px rgba(99, 102, 241, 0.6)"
    )));
}

#[test]
fn contact_form_round_trip() {
    let mut page = loaded();
    let geo = geometry();
    let mut values = FormValues::default();
    values.set(FormField::Name, "Grace Hopper");
    values.set(FormField::Email, "grace@navy.mil");
    values.set(FormField::Subject, "COBOL");
    values.set(FormField::Message, "Let us talk about compilers.");

    let submit = PageEvent::FormSubmitted { values };
    page.handle(&submit, &geo, 10_000.0);
    assert_eq!(page.submit_phase(), SubmitPhase::Sending);

    let sent = page.advance_to(12_000.0, &geo);
    assert_eq!(page.submit_phase(), SubmitPhase::Sent);
    assert!(sent.iter().any(|c| matches!(
        c,
        DomCommand::Spawn {
            target: Target::SuccessMessage,
            ..
        }
    )));

    let reset = page.advance_to(15_000.0, &geo);
    assert_eq!(page.submit_phase(), SubmitPhase::Idle);
    assert!(reset.contains(&DomCommand::ResetForm));
    assert!(reset.contains(&DomCommand::SetDisabled {
        target: Target::SubmitButton,
        disabled: false,
    }));

    let gone = page.advance_to(16_300.0, &geo);
    assert!(gone.contains(&DomCommand::Remove {
        target: Target::SuccessMessage
    }));
}

#[test]
fn invalid_field_feedback_clears_on_focus() {
    let mut page = loaded();
    let geo = geometry();
    let cmds = page.handle(
        &PageEvent::FieldBlur {
            field: FormField::Email,
            value: "not-an-email".into(),
        },
        &geo,
        4000.0,
    );
    assert!(cmds.contains(&DomCommand::text(
        Target::FieldError(FormField::Email),
        "Please enter a valid email address"
    )));
    let cmds = page.handle(&PageEvent::FieldFocus { field: FormField::Email }, &geo, 4100.0);
    assert!(cmds.contains(&DomCommand::text(Target::FieldError(FormField::Email), "")));
}

#[test]
fn resize_never_creates_a_second_cursor() {
    let mut page = loaded();
    let geo = geometry();
    page.handle(&PageEvent::Resize { width: 1400.0, height: 900.0 }, &geo, 3000.0);
    let cmds = page.advance_to(3300.0, &geo);
    assert!(!cmds.iter().any(|c| matches!(
        c,
        DomCommand::Spawn {
            target: Target::Cursor,
            ..
        }
    )));
}

#[test]
fn parallax_moves_hero_after_load() {
    let mut page = loaded();
    let geo = geometry();
    let cmds = page.handle(&PageEvent::Scroll { scroll_y: 200.0 }, &geo, 3000.0);
    assert!(cmds.contains(&DomCommand::style(
        Target::HeroBackground,
        "transform",
        "translateY(-100px)"
    )));
}

#[test]
fn window_load_marks_body_fully_loaded() {
    let (mut page, _) = started(None);
    let cmds = page.handle(&PageEvent::WindowLoaded, &geometry(), 300.0);
    assert_eq!(
        cmds,
        vec![DomCommand::add_class(Target::Body, "fully-loaded")]
    );
}
