//! The whole page: navigation core plus every feature, behind one event
//! entry point and one timer entry point.

use folio_protocol::{DomCommand, ObserverKind, PageEvent, Size, Target};

use crate::config::PageConfig;
use crate::error::FolioError;
use crate::features::typing::TAGLINE;
use crate::features::{
    ContactForm, Counters, CustomCursor, LoadingPhase, LoadingScreen, Parallax, Reveal, Ripples,
    SkillBars, SubmitPhase, ThemeToggle, Typewriter, hover, styles,
};
use crate::geometry::PageGeometry;
use crate::layout::PageLayout;
use crate::nav::NavController;
use crate::outbox::Outbox;
use crate::random::RandomSource;
use crate::schedule::{Scheduler, TaskKey};

/// Animation frame period used when the page drives its own frames
/// ([`Page::advance_to`]).
pub const FRAME_MS: f64 = 16.0;

/// Upper bound on scheduler drain rounds within one tick.
const MAX_TICK_ROUNDS: usize = 64;

/// What the host knows at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupContext {
    pub now_ms: f64,
    pub scroll_y: f64,
    pub viewport: Size,
    /// Value previously stored under the theme preference key.
    pub stored_theme: Option<String>,
}

pub struct Page {
    config: PageConfig,
    scheduler: Scheduler,
    rng: Box<dyn RandomSource>,
    nav: NavController,
    loading: LoadingScreen,
    theme: ThemeToggle,
    typing: Typewriter,
    counters: Counters,
    skills: SkillBars,
    reveal: Reveal,
    parallax: Parallax,
    cursor: CustomCursor,
    ripples: Ripples,
    form: ContactForm,
    keyboard_navigation: bool,
    started: bool,
    main_started: bool,
    frame_due: Option<f64>,
}

impl Page {
    pub fn new(
        config: PageConfig,
        layout: &PageLayout,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, FolioError> {
        config.validate()?;
        let anim = &config.animation;
        Ok(Self {
            scheduler: Scheduler::new(),
            rng,
            nav: NavController::new(&config.nav, layout, 0.0),
            loading: LoadingScreen::new(layout.has_loading_screen, config.loading.clone()),
            theme: ThemeToggle::new(layout.has_theme_toggle, anim.theme_transition_ms),
            typing: Typewriter::new(layout.has_typed_text, TAGLINE, config.loading.typing_start_ms),
            counters: Counters::new(
                layout.counter_targets.clone(),
                anim.counter_duration_ms,
                anim.counter_threshold,
            ),
            skills: SkillBars::new(
                layout.skill_widths.clone(),
                anim.skill_threshold,
                anim.skill_fill_delay_ms,
                anim.skill_glow_delay_ms,
            ),
            reveal: Reveal::new(layout.reveal_kinds.clone(), anim),
            parallax: Parallax::new(layout.has_hero_background, layout.particle_count, anim),
            cursor: CustomCursor::new(anim.cursor_min_width, anim.resize_settle_ms),
            ripples: Ripples::new(anim.ripple_ms),
            form: ContactForm::new(
                layout.has_contact_form,
                layout.form_fields.clone(),
                layout.has_submit_button,
                layout.submit_button_html.clone(),
                config.form.clone(),
            ),
            keyboard_navigation: false,
            started: false,
            main_started: false,
            frame_due: None,
            config,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn loading_phase(&self) -> LoadingPhase {
        self.loading.phase()
    }

    pub fn theme(&self) -> &ThemeToggle {
        &self.theme
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typing
    }

    pub fn submit_phase(&self) -> SubmitPhase {
        self.form.phase()
    }

    pub fn cursor(&self) -> &CustomCursor {
        &self.cursor
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn live_ripples(&self) -> &[u64] {
        self.ripples.live()
    }

    pub fn keyboard_navigation(&self) -> bool {
        self.keyboard_navigation
    }

    /// Whether the main animations (typing, counters, skill bars, parallax,
    /// cursor) have started.
    pub fn is_loaded(&self) -> bool {
        self.main_started
    }

    /// When the host should next call [`Page::tick`].
    pub fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.scheduler.is_pending(key)
    }

    /// Whether the host should call [`Page::frame`] on the next animation
    /// frame.
    pub fn wants_frame(&self) -> bool {
        self.counters.wants_frame()
    }

    /// Run `f` with an outbox over the page's own scheduler.
    fn with_outbox(
        &mut self,
        now_ms: f64,
        f: impl FnOnce(&mut Self, &mut Outbox<'_>),
    ) -> Vec<DomCommand> {
        let mut scheduler = std::mem::take(&mut self.scheduler);
        let mut out = Outbox::new(now_ms, &mut scheduler);
        f(self, &mut out);
        let cmds = out.into_commands();
        self.scheduler = scheduler;
        if self.frame_due.is_none() && self.wants_frame() {
            self.frame_due = Some(now_ms + FRAME_MS);
        }
        cmds
    }

    /// One-time setup. Later calls do nothing.
    pub fn start(&mut self, ctx: &StartupContext) -> Vec<DomCommand> {
        if self.started {
            tracing::warn!("page already started");
            return Vec::new();
        }
        self.started = true;
        tracing::info!(
            scroll_y = ctx.scroll_y,
            width = ctx.viewport.width,
            height = ctx.viewport.height,
            "page starting"
        );
        self.with_outbox(ctx.now_ms, |page, out| {
            styles::inject(out);
            page.loading.start(page.rng.as_mut(), out);
            page.nav.reset_scroll(ctx.scroll_y);
            page.nav.start(out);
            page.theme.start(ctx.stored_theme.as_deref(), out);
            page.reveal.start(out);
        })
    }

    /// Dispatch one browser event.
    pub fn handle(
        &mut self,
        event: &PageEvent,
        geometry: &dyn PageGeometry,
        now_ms: f64,
    ) -> Vec<DomCommand> {
        self.with_outbox(now_ms, |page, out| page.dispatch(event, geometry, out))
    }

    fn dispatch(&mut self, event: &PageEvent, geometry: &dyn PageGeometry, out: &mut Outbox<'_>) {
        match event {
            PageEvent::Scroll { scroll_y } => {
                self.nav.on_scroll(*scroll_y, out);
                self.parallax
                    .on_scroll(*scroll_y, geometry.viewport().height, out);
            }
            PageEvent::Resize { .. } => self.cursor.on_resize(out),
            PageEvent::WindowLoaded => {
                tracing::debug!("window loaded");
                out.push(DomCommand::add_class(Target::Body, "fully-loaded"));
            }
            PageEvent::Intersections { observer, entries } => match observer {
                ObserverKind::Sections => self.nav.on_intersections(entries, out),
                ObserverKind::Reveal => self.reveal.on_intersections(entries, out),
                ObserverKind::Counters => self.counters.on_intersections(entries, out),
                ObserverKind::SkillBars => self.skills.on_intersections(entries, out),
            },
            PageEvent::LinkClicked {
                source,
                href,
                pointer,
            } => {
                let scrolled = self
                    .nav
                    .on_link_clicked(*source, href, geometry, out)
                    .is_some();
                if scrolled || matches!(source, Target::NavLink(_)) {
                    self.ripples.spawn(*source, *pointer, out);
                }
            }
            PageEvent::MenuToggleClicked { pointer } => {
                if self.nav.has_mobile_menu() {
                    self.nav.on_menu_toggle(out);
                    self.ripples.spawn(Target::MenuToggle, *pointer, out);
                }
            }
            PageEvent::ThemeToggleClicked { pointer } => {
                if self.theme.is_enabled() {
                    self.theme.toggle(out);
                    self.ripples.spawn(Target::ThemeToggle, *pointer, out);
                    self.theme.persist(out);
                }
            }
            PageEvent::ElementClicked { source, pointer } => {
                self.ripples.spawn(*source, *pointer, out);
            }
            PageEvent::DocumentClicked { inside_nav } => {
                self.nav.on_document_click(*inside_nav, out);
            }
            PageEvent::KeyDown { key } => match key.as_str() {
                "Escape" => self.nav.on_escape(out),
                "Tab" if !self.keyboard_navigation => {
                    self.keyboard_navigation = true;
                    out.push(DomCommand::add_class(Target::Body, "keyboard-navigation"));
                }
                _ => {}
            },
            PageEvent::MouseDown => {
                if self.keyboard_navigation {
                    self.keyboard_navigation = false;
                    out.push(DomCommand::remove_class(Target::Body, "keyboard-navigation"));
                }
            }
            PageEvent::MouseMove { position } => self.cursor.on_move(*position, out),
            PageEvent::PointerEnter { target } => match target {
                Target::Hoverable(_) => self.cursor.on_hover(true, out),
                _ => hover::on_enter(*target, out),
            },
            PageEvent::PointerLeave { target } => match target {
                Target::Hoverable(_) => self.cursor.on_hover(false, out),
                _ => hover::on_leave(*target, out),
            },
            PageEvent::FieldInput { field, value } | PageEvent::FieldBlur { field, value } => {
                self.form.check_field(*field, value, out);
            }
            PageEvent::FieldFocus { field } => self.form.on_focus(*field, out),
            PageEvent::FormSubmitted { values } => self.form.submit(values, out),
        }
    }

    /// Run every task due at `now_ms`, including tasks they schedule for the
    /// same instant.
    pub fn tick(&mut self, now_ms: f64, geometry: &dyn PageGeometry) -> Vec<DomCommand> {
        self.with_outbox(now_ms, |page, out| {
            for _ in 0..MAX_TICK_ROUNDS {
                let due = out.take_due();
                if due.is_empty() {
                    return;
                }
                for key in due {
                    page.run_task(key, geometry, out);
                }
            }
            tracing::warn!(now_ms, "scheduled tasks kept rescheduling at the same instant");
        })
    }

    fn run_task(&mut self, key: TaskKey, geometry: &dyn PageGeometry, out: &mut Outbox<'_>) {
        tracing::trace!(?key, "task due");
        match key {
            TaskKey::MenuSettle => self.nav.settle_menu(out),
            TaskKey::Rehighlight => self.nav.rehighlight(geometry, out),
            TaskKey::ThemeTransitionEnd => self.theme.end_transition(out),
            TaskKey::LoadingHide => self.loading.on_hide(out),
            TaskKey::LoadingRemove => {
                if self.loading.on_remove(out) {
                    self.start_main(geometry.viewport().width, out);
                }
            }
            TaskKey::TypeNext => self.typing.on_tick(self.rng.as_mut(), out),
            TaskKey::RippleExpire(id) => self.ripples.expire(id, out),
            TaskKey::SkillFill(i) => self.skills.fill(i, out),
            TaskKey::SkillGlow(i) => self.skills.glow(i, out),
            TaskKey::ResizeSettled => self.cursor.maybe_create(geometry.viewport().width, out),
            TaskKey::FormSent => self.form.on_sent(out),
            TaskKey::FormReset => self.form.on_reset(out),
            TaskKey::FormShakeEnd => self.form.on_shake_end(out),
            TaskKey::SuccessShow => self.form.on_success_show(out),
            TaskKey::SuccessHide => self.form.on_success_hide(out),
            TaskKey::SuccessRemove => self.form.on_success_remove(out),
        }
    }

    fn start_main(&mut self, viewport_width: f64, out: &mut Outbox<'_>) {
        if std::mem::replace(&mut self.main_started, true) {
            return;
        }
        tracing::info!("main animations starting");
        self.typing.start(out);
        self.counters.start(out);
        self.skills.start(out);
        self.parallax.activate();
        self.cursor.maybe_create(viewport_width, out);
    }

    /// One animation frame.
    pub fn frame(&mut self, now_ms: f64) -> Vec<DomCommand> {
        self.frame_due = None;
        self.with_outbox(now_ms, |page, out| page.counters.frame(out))
    }

    /// Drive timers and animation frames up to `target_ms` in time order, as
    /// a browser would. Used by the replay tool and tests.
    pub fn advance_to(&mut self, target_ms: f64, geometry: &dyn PageGeometry) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        loop {
            let task = self.next_deadline().filter(|&t| t <= target_ms);
            let frame = self.frame_due.filter(|&f| f <= target_ms);
            match (task, frame) {
                (Some(t), f) if f.is_none_or(|f| t <= f) => cmds.extend(self.tick(t, geometry)),
                (_, Some(f)) => cmds.extend(self.frame(f)),
                _ => break,
            }
        }
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;
    use crate::random::SequenceRandom;
    use folio_protocol::{PointerInfo, Size};

    fn page() -> Page {
        let layout = PageLayout {
            has_header: true,
            has_nav_menu: true,
            has_menu_toggle: true,
            has_theme_toggle: true,
            ..PageLayout::default()
        };
        let rng = Box::new(SequenceRandom::constant(0.5));
        match Page::new(PageConfig::default(), &layout, rng) {
            Ok(page) => page,
            Err(e) => unreachable!("default config is valid: {e}"),
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = PageConfig::default();
        config.nav.menu_close_ms = f64::NAN;
        let rng = Box::new(SequenceRandom::default());
        assert!(Page::new(config, &PageLayout::default(), rng).is_err());
    }

    #[test]
    fn start_injects_styles_once() {
        let mut p = page();
        let ctx = StartupContext {
            viewport: Size::new(1280.0, 800.0),
            ..StartupContext::default()
        };
        let cmds = p.start(&ctx);
        assert!(matches!(cmds[0], DomCommand::InjectStyles { .. }));
        assert!(p.start(&ctx).is_empty());
    }

    #[test]
    fn tab_then_mouse_toggles_keyboard_mode() {
        let mut p = page();
        let geo = StaticGeometry::default();
        let tab = PageEvent::KeyDown { key: "Tab".into() };
        assert_eq!(p.handle(&tab, &geo, 0.0).len(), 1);
        assert!(p.handle(&tab, &geo, 0.0).is_empty());
        assert!(p.keyboard_navigation());
        let cmds = p.handle(&PageEvent::MouseDown, &geo, 0.0);
        assert_eq!(
            cmds,
            vec![DomCommand::remove_class(Target::Body, "keyboard-navigation")]
        );
    }

    #[test]
    fn theme_click_applies_ripples_then_persists() {
        let mut p = page();
        let geo = StaticGeometry::default();
        let cmds = p.handle(
            &PageEvent::ThemeToggleClicked {
                pointer: PointerInfo::default(),
            },
            &geo,
            0.0,
        );
        let spawn = cmds
            .iter()
            .position(|c| matches!(c, DomCommand::Spawn { .. }));
        let store = cmds
            .iter()
            .position(|c| matches!(c, DomCommand::StorePreference { .. }));
        assert!(spawn.is_some() && store.is_some() && spawn < store);
        assert!(p.is_pending(TaskKey::ThemeTransitionEnd));
    }

    #[test]
    fn tick_drains_only_due_tasks() {
        let mut p = page();
        let geo = StaticGeometry::default();
        p.handle(
            &PageEvent::MenuToggleClicked {
                pointer: PointerInfo::default(),
            },
            &geo,
            0.0,
        );
        p.handle(&PageEvent::KeyDown { key: "Escape".into() }, &geo, 50.0);
        assert_eq!(p.next_deadline(), Some(350.0));
        assert!(p.tick(349.0, &geo).is_empty());
        assert_eq!(p.tick(350.0, &geo).len(), 3);
    }
}
