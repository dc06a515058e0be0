//! Glue between the browser and [`Page`]: listeners, observers, timers and
//! animation frames in, DOM mutations out.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::features::theme::STORAGE_KEY;
use folio_core::{Page, PageConfig, RandomSource, StartupContext};
use folio_protocol::{
    DomCommand, FormValues, IntersectionEntry, ObserverKind, PageEvent, Point,
    PointerInfo, Rect, Target,
};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions, Storage, Window,
};

use crate::dom::{NAV_BAR, Registry};
use crate::geometry::{LiveGeometry, viewport_of};

/// Attribute on `<body>` holding a JSON config override.
const CONFIG_ATTRIBUTE: &str = "data-folio-config";

struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ArmedTimer {
    handle: i32,
    deadline: f64,
}

pub struct Host {
    me: Weak<Host>,
    window: Window,
    page: RefCell<Page>,
    registry: RefCell<Registry>,
    observers: RefCell<HashMap<ObserverKind, (IntersectionObserver, ObserverCallback)>>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
    timer: RefCell<Option<ArmedTimer>>,
    on_timer: Closure<dyn FnMut()>,
    on_frame: Closure<dyn FnMut(f64)>,
    frame_requested: Cell<bool>,
}

fn storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

fn read_config(registry: &Registry) -> PageConfig {
    let raw = registry
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring {CONFIG_ATTRIBUTE}");
            PageConfig::default()
        }
    }
}

/// Scan the page, wire every listener and run startup.
pub fn boot() -> Result<Rc<Host>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let (registry, layout) = Registry::scan(document);
    let config = read_config(&registry);
    let page = Page::new(config, &layout, Box::new(MathRandom))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let stored_theme = storage(&window).and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());

    let host = Host::new(window, page, registry);
    host.install_listeners()?;
    let ctx = StartupContext {
        now_ms: host.now(),
        scroll_y: host.window.scroll_y().unwrap_or(0.0),
        viewport: viewport_of(&host.window),
        stored_theme,
    };
    let cmds = host.page.borrow_mut().start(&ctx);
    host.apply_all(&cmds);
    host.rearm();
    if host.window.document().is_some_and(|d| d.ready_state() == "complete") {
        host.dispatch(&PageEvent::WindowLoaded);
    }
    Ok(host)
}

impl Host {
    fn new(window: Window, page: Page, registry: Registry) -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Host>| {
            let timer_owner = me.clone();
            let frame_owner = me.clone();
            Host {
                me: me.clone(),
                window,
                page: RefCell::new(page),
                registry: RefCell::new(registry),
                observers: RefCell::new(HashMap::new()),
                listeners: RefCell::new(Vec::new()),
                timer: RefCell::new(None),
                on_timer: Closure::new(move || {
                    if let Some(host) = timer_owner.upgrade() {
                        host.timer_fired();
                    }
                }),
                on_frame: Closure::new(move |_ts: f64| {
                    if let Some(host) = frame_owner.upgrade() {
                        host.frame_fired();
                    }
                }),
                frame_requested: Cell::new(false),
            }
        })
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_default()
    }

    /// Run `f` against the page with live geometry, then apply what it
    /// returned. Re-entrant calls are dropped.
    fn drive(&self, f: impl FnOnce(&mut Page, &LiveGeometry<'_>, f64) -> Vec<DomCommand>) {
        let now = self.now();
        let cmds = {
            let Ok(mut page) = self.page.try_borrow_mut() else {
                tracing::warn!("page busy; dropping re-entrant call");
                return;
            };
            let Ok(registry) = self.registry.try_borrow() else {
                tracing::warn!("registry busy; dropping re-entrant call");
                return;
            };
            let geometry = LiveGeometry {
                window: &self.window,
                registry: &registry,
            };
            f(&mut page, &geometry, now)
        };
        self.apply_all(&cmds);
        self.rearm();
    }

    fn dispatch(&self, event: &PageEvent) {
        self.drive(|page, geometry, now| page.handle(event, geometry, now));
    }

    fn timer_fired(&self) {
        self.timer.borrow_mut().take();
        self.drive(|page, geometry, now| page.tick(now, geometry));
    }

    fn frame_fired(&self) {
        self.frame_requested.set(false);
        self.drive(|page, _, now| page.frame(now));
    }

    /// Point the single `setTimeout` at the page's next deadline and request
    /// a frame when an animation is running.
    fn rearm(&self) {
        let Ok(page) = self.page.try_borrow() else {
            return;
        };
        let deadline = page.next_deadline();
        let wants_frame = page.wants_frame();
        drop(page);

        let mut timer = self.timer.borrow_mut();
        if timer.as_ref().map(|t| t.deadline) != deadline {
            if let Some(armed) = timer.take() {
                self.window.clear_timeout_with_handle(armed.handle);
            }
            if let Some(deadline) = deadline {
                let delay = (deadline - self.now()).max(0.0).ceil() as i32;
                match self
                    .window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        self.on_timer.as_ref().unchecked_ref(),
                        delay,
                    ) {
                    Ok(handle) => *timer = Some(ArmedTimer { handle, deadline }),
                    Err(err) => tracing::warn!(?err, "setTimeout failed"),
                }
            }
        }

        if wants_frame && !self.frame_requested.get() {
            match self
                .window
                .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            {
                Ok(_) => self.frame_requested.set(true),
                Err(err) => tracing::warn!(?err, "requestAnimationFrame failed"),
            }
        }
    }

    fn apply_all(&self, cmds: &[DomCommand]) {
        for cmd in cmds {
            if let Err(err) = self.apply(cmd) {
                tracing::warn!(?err, ?cmd, "command failed");
            }
        }
    }

    fn apply(&self, cmd: &DomCommand) -> Result<(), JsValue> {
        match cmd {
            DomCommand::Observe {
                observer,
                threshold,
                root_margin,
            } => self.observe(*observer, *threshold, root_margin),
            DomCommand::Unobserve { observer, target } => {
                let element = self.registry.borrow().resolve(*target);
                if let (Some((obs, _)), Some(el)) = (self.observers.borrow().get(observer), element)
                {
                    obs.unobserve(&el);
                }
                Ok(())
            }
            DomCommand::ScrollTo { top, smooth } => {
                let opts = ScrollToOptions::new();
                opts.set_top(*top);
                opts.set_behavior(if *smooth {
                    ScrollBehavior::Smooth
                } else {
                    ScrollBehavior::Auto
                });
                self.window.scroll_to_with_scroll_to_options(&opts);
                Ok(())
            }
            DomCommand::StorePreference { key, value } => {
                match storage(&self.window) {
                    Some(s) => s.set_item(key, value)?,
                    None => tracing::debug!(%key, "localStorage unavailable"),
                }
                Ok(())
            }
            _ => self.registry.borrow_mut().apply(cmd),
        }
    }

    fn observe(&self, kind: ObserverKind, threshold: f64, root_margin: &str) -> Result<(), JsValue> {
        if self.observers.borrow().contains_key(&kind) {
            tracing::debug!(?kind, "observer already running");
            return Ok(());
        }
        let owner = self.me.clone();
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _: IntersectionObserver| {
                let Some(host) = owner.upgrade() else {
                    return;
                };
                let entries = host.translate_entries(kind, &entries);
                if !entries.is_empty() {
                    host.dispatch(&PageEvent::Intersections {
                        observer: kind,
                        entries,
                    });
                }
            });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in self.registry.borrow().observed(kind) {
            observer.observe(&el);
        }
        self.observers.borrow_mut().insert(kind, (observer, callback));
        Ok(())
    }

    fn translate_entries(&self, kind: ObserverKind, entries: &Array) -> Vec<IntersectionEntry> {
        let registry = self.registry.borrow();
        entries
            .iter()
            .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let target = registry.observed_target(kind, &entry.target())?;
                Some(IntersectionEntry {
                    target,
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect()
    }

    fn listen(
        &self,
        on: &EventTarget,
        kind: &str,
        handler: impl Fn(&Host, Event) + 'static,
    ) -> Result<(), JsValue> {
        let owner = self.me.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(host) = owner.upgrade() {
                handler(&host, event);
            }
        });
        on.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push(callback);
        Ok(())
    }

    fn install_listeners(&self) -> Result<(), JsValue> {
        let registry = self.registry.borrow();
        let document = registry.document().clone();

        self.listen(&self.window, "scroll", |host, _| {
            let scroll_y = host.window.scroll_y().unwrap_or(0.0);
            host.dispatch(&PageEvent::Scroll { scroll_y });
        })?;
        self.listen(&self.window, "resize", |host, _| {
            let size = viewport_of(&host.window);
            host.dispatch(&PageEvent::Resize {
                width: size.width,
                height: size.height,
            });
        })?;
        self.listen(&self.window, "load", |host, _| {
            host.dispatch(&PageEvent::WindowLoaded);
        })?;
        self.listen(&document, "click", |host, event| {
            let inside_nav = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(NAV_BAR).ok().flatten())
                .is_some();
            host.dispatch(&PageEvent::DocumentClicked { inside_nav });
        })?;
        self.listen(&document, "keydown", |host, event| {
            if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                host.dispatch(&PageEvent::KeyDown { key: key.key() });
            }
        })?;
        self.listen(&document, "mousedown", |host, _| {
            host.dispatch(&PageEvent::MouseDown);
        })?;
        self.listen(&document, "mousemove", |host, event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let position = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                host.dispatch(&PageEvent::MouseMove { position });
            }
        })?;

        for (el, source) in registry.links() {
            let link = el.clone();
            self.listen(&el, "click", move |host, event| {
                let href = link.get_attribute("href").unwrap_or_default();
                if href.starts_with('#') && href.len() > 1 {
                    event.prevent_default();
                }
                let pointer = pointer_info(&event, &link);
                host.dispatch(&PageEvent::LinkClicked {
                    source,
                    href,
                    pointer,
                });
            })?;
        }
        if let Some(toggle) = registry.resolve(Target::MenuToggle) {
            let el = toggle.clone();
            self.listen(&toggle, "click", move |host, event| {
                let pointer = pointer_info(&event, &el);
                host.dispatch(&PageEvent::MenuToggleClicked { pointer });
            })?;
        }
        if let Some(toggle) = registry.resolve(Target::ThemeToggle) {
            let el = toggle.clone();
            self.listen(&toggle, "click", move |host, event| {
                event.stop_propagation();
                let pointer = pointer_info(&event, &el);
                host.dispatch(&PageEvent::ThemeToggleClicked { pointer });
            })?;
        }
        for (el, source) in registry.click_feedback() {
            let target = el.clone();
            self.listen(&el, "click", move |host, event| {
                let pointer = pointer_info(&event, &target);
                host.dispatch(&PageEvent::ElementClicked { source, pointer });
            })?;
        }
        for (el, target) in registry.hover_targets() {
            self.listen(&el, "mouseenter", move |host, _| {
                host.dispatch(&PageEvent::PointerEnter { target });
            })?;
            self.listen(&el, "mouseleave", move |host, _| {
                host.dispatch(&PageEvent::PointerLeave { target });
            })?;
        }
        for (field, el) in registry.fields() {
            let input = el.clone();
            self.listen(&el, "input", move |host, _| {
                let value = read_value(&input);
                host.dispatch(&PageEvent::FieldInput { field, value });
            })?;
            let input = el.clone();
            self.listen(&el, "blur", move |host, _| {
                let value = read_value(&input);
                host.dispatch(&PageEvent::FieldBlur { field, value });
            })?;
            self.listen(&el, "focus", move |host, _| {
                host.dispatch(&PageEvent::FieldFocus { field });
            })?;
        }
        if let Some(form) = registry.form() {
            let fields = registry.fields();
            self.listen(form, "submit", move |host, event| {
                event.prevent_default();
                let mut values = FormValues::default();
                for (field, el) in &fields {
                    values.set(*field, read_value(el));
                }
                host.dispatch(&PageEvent::FormSubmitted { values });
            })?;
        }
        tracing::debug!(count = self.listeners.borrow().len(), "listeners installed");
        Ok(())
    }
}

fn pointer_info(event: &Event, element: &Element) -> PointerInfo {
    let click = event
        .dyn_ref::<MouseEvent>()
        .map(|m| Point::new(f64::from(m.client_x()), f64::from(m.client_y())))
        .unwrap_or_default();
    let r = element.get_bounding_client_rect();
    PointerInfo::new(click, Rect::new(r.x(), r.y(), r.width(), r.height()))
}

/// The live `value` of an input or textarea.
fn read_value(element: &Element) -> String {
    js_sys::Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

