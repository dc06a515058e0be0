//! Page scan and element-level command application.

use std::collections::HashMap;

use folio_core::PageLayout;
use folio_protocol::{DomCommand, FormField, ObserverKind, RevealKind, SectionId, Target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::attrs::parse_leading_int;

const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]:not([href="#"])"##;
const CLICK_FEEDBACK: &str = ".btn, .social-link, .project-link";
const REVEAL: &str =
    ".skill-card, .project-card, .certificate-card, .timeline-item, .contact-item, .stat";
const HOVERABLE: &str = "a, button, .skill-card, .project-card";
/// The whole navigation bar. Clicks inside it never dismiss the drawer.
pub const NAV_BAR: &str = ".nav";

fn all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn matches(element: &Element, selector: &str) -> bool {
    element.matches(selector).unwrap_or(false)
}

fn as_html(element: &Element) -> Result<&HtmlElement, JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("not an HTML element"))
}

/// Every element the page controller can address, keyed the same way as
/// [`Target`].
pub struct Registry {
    document: Document,
    loading_screen: Option<Element>,
    header: Option<Element>,
    nav_menu: Option<Element>,
    menu_toggle: Option<Element>,
    theme_toggle: Option<Element>,
    theme_icon: Option<Element>,
    sections: Vec<(SectionId, Element)>,
    nav_links: Vec<Element>,
    anchors: Vec<Element>,
    interactive: Vec<Element>,
    hero_background: Option<Element>,
    particles: Vec<Element>,
    typed_text: Option<Element>,
    typing_cursor: Option<Element>,
    counters: Vec<Element>,
    skill_bars: Vec<Element>,
    skill_bar_cards: Vec<Option<Element>>,
    skill_cards: Vec<Element>,
    skill_card_bars: Vec<Option<Element>>,
    reveal: Vec<Element>,
    project_cards: Vec<Element>,
    certificate_cards: Vec<Element>,
    hoverables: Vec<Element>,
    form: Option<HtmlFormElement>,
    submit_button: Option<Element>,
    fields: HashMap<FormField, Element>,
    field_errors: HashMap<FormField, Element>,
    /// Elements created by commands: particles, ripples, cursor, overlay.
    spawned: HashMap<Target, Element>,
}

impl Registry {
    /// Scan the document once and describe what was found.
    pub fn scan(document: Document) -> (Self, PageLayout) {
        let sections: Vec<(SectionId, Element)> = all(&document, "section[id]")
            .into_iter()
            .map(|el| (SectionId::from(el.id()), el))
            .collect();
        let nav_links = all(&document, ".nav-link");
        let anchors: Vec<Element> = all(&document, IN_PAGE_ANCHORS)
            .into_iter()
            .filter(|el| !matches(el, ".nav-link"))
            .collect();
        let interactive: Vec<Element> = all(&document, CLICK_FEEDBACK)
            .into_iter()
            .filter(|el| !matches(el, ".nav-link") && !matches(el, IN_PAGE_ANCHORS))
            .collect();
        let skill_bars = all(&document, ".progress-bar");
        let skill_bar_cards = skill_bars
            .iter()
            .map(|bar| bar.closest(".skill-card").ok().flatten())
            .collect();
        let skill_cards = all(&document, ".skill-card");
        let skill_card_bars = skill_cards
            .iter()
            .map(|card| card.query_selector(".progress-bar").ok().flatten())
            .collect();
        let reveal = all(&document, REVEAL);
        let form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let submit_button = form
            .as_ref()
            .and_then(|f| f.query_selector(r#"button[type="submit"]"#).ok().flatten());
        let fields: HashMap<FormField, Element> = FormField::ALL
            .into_iter()
            .filter_map(|f| document.get_element_by_id(f.id()).map(|el| (f, el)))
            .collect();
        let field_errors = FormField::ALL
            .into_iter()
            .filter_map(|f| document.get_element_by_id(f.error_id()).map(|el| (f, el)))
            .collect();
        let counters = all(&document, ".stat-number");

        let registry = Self {
            loading_screen: document.get_element_by_id("loading-screen"),
            header: one(&document, ".header"),
            nav_menu: one(&document, ".nav-menu"),
            menu_toggle: one(&document, ".mobile-menu-toggle"),
            theme_toggle: one(&document, ".theme-toggle"),
            theme_icon: one(&document, ".theme-toggle i"),
            sections,
            nav_links,
            anchors,
            interactive,
            hero_background: one(&document, ".hero-background"),
            particles: all(&document, ".particle"),
            typed_text: document.get_element_by_id("typed-text"),
            typing_cursor: one(&document, ".cursor"),
            counters,
            skill_bars,
            skill_bar_cards,
            skill_cards,
            skill_card_bars,
            reveal,
            project_cards: all(&document, ".project-card"),
            certificate_cards: all(&document, ".certificate-card"),
            hoverables: all(&document, HOVERABLE),
            form,
            submit_button,
            fields,
            field_errors,
            spawned: HashMap::new(),
            document,
        };
        let layout = registry.layout();
        tracing::info!(
            sections = layout.sections.len(),
            nav_links = layout.nav_links.len(),
            reveal = layout.reveal_kinds.len(),
            form = layout.has_contact_form,
            "page scanned"
        );
        if layout.sections.is_empty() {
            tracing::warn!("no section[id] found; scroll spy disabled");
        }
        if registry.menu_toggle.is_some() != registry.nav_menu.is_some() {
            tracing::warn!("mobile menu needs both .mobile-menu-toggle and .nav-menu");
        }
        (registry, layout)
    }

    fn layout(&self) -> PageLayout {
        PageLayout {
            has_loading_screen: self.loading_screen.is_some(),
            has_header: self.header.is_some(),
            has_nav_menu: self.nav_menu.is_some(),
            has_menu_toggle: self.menu_toggle.is_some(),
            has_theme_toggle: self.theme_toggle.is_some(),
            sections: self.sections.iter().map(|(id, _)| id.clone()).collect(),
            nav_links: self
                .nav_links
                .iter()
                .map(|el| el.get_attribute("href").unwrap_or_default())
                .collect(),
            has_hero_background: self.hero_background.is_some(),
            particle_count: self.particles.len(),
            has_typed_text: self.typed_text.is_some(),
            counter_targets: self
                .counters
                .iter()
                .map(|el| {
                    el.get_attribute("data-target")
                        .as_deref()
                        .and_then(parse_leading_int)
                })
                .collect(),
            skill_widths: self
                .skill_bars
                .iter()
                .map(|el| el.get_attribute("data-width").unwrap_or_default())
                .collect(),
            reveal_kinds: self
                .reveal
                .iter()
                .map(|el| RevealKind::from_classes(el.class_name().split_whitespace()))
                .collect(),
            has_contact_form: self.form.is_some(),
            form_fields: FormField::ALL
                .into_iter()
                .filter(|f| self.fields.contains_key(f))
                .collect(),
            has_submit_button: self.submit_button.is_some(),
            submit_button_html: self
                .submit_button
                .as_ref()
                .map(Element::inner_html)
                .unwrap_or_default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    /// The element a fragment points at: a section, or any element with
    /// that id.
    pub fn fragment_target(&self, id: &SectionId) -> Option<Element> {
        self.sections
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, el)| el.clone())
            .or_else(|| self.document.get_element_by_id(id))
    }

    pub fn resolve(&self, target: Target) -> Option<Element> {
        let pick = |list: &[Element], i: usize| list.get(i).cloned();
        match target {
            Target::Root => self.document.document_element(),
            Target::Body => self.body(),
            Target::LoadingScreen => self.loading_screen.clone(),
            Target::Header => self.header.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::MenuToggle => self.menu_toggle.clone(),
            Target::ThemeToggle => self.theme_toggle.clone(),
            Target::ThemeIcon => self.theme_icon.clone(),
            Target::Section(i) => self.sections.get(i).map(|(_, el)| el.clone()),
            Target::NavLink(i) => pick(&self.nav_links, i),
            Target::Anchor(i) => pick(&self.anchors, i),
            Target::Interactive(i) => pick(&self.interactive, i),
            Target::HeroBackground => self.hero_background.clone(),
            Target::Particle(i) => pick(&self.particles, i),
            Target::TypedText => self.typed_text.clone(),
            Target::TypingCursor => self.typing_cursor.clone(),
            Target::Counter(i) => pick(&self.counters, i),
            Target::SkillBar(i) => pick(&self.skill_bars, i),
            Target::SkillBarCard(i) => self.skill_bar_cards.get(i).cloned().flatten(),
            Target::SkillCard(i) => pick(&self.skill_cards, i),
            Target::SkillCardBar(i) => self.skill_card_bars.get(i).cloned().flatten(),
            Target::Reveal(i) => pick(&self.reveal, i),
            Target::ProjectCard(i) => pick(&self.project_cards, i),
            Target::CertificateCard(i) => pick(&self.certificate_cards, i),
            Target::Hoverable(i) => pick(&self.hoverables, i),
            Target::ContactForm => self.form.clone().map(Into::into),
            Target::SubmitButton => self.submit_button.clone(),
            Target::Field(f) => self.fields.get(&f).cloned(),
            Target::FieldError(f) => self.field_errors.get(&f).cloned(),
            Target::LoadingParticle(_)
            | Target::SuccessMessage
            | Target::Cursor
            | Target::CursorDot
            | Target::Ripple(_)
            | Target::DynamicStyles => self.spawned.get(&target).cloned(),
        }
    }

    /// Elements watched by one observer, in target index order.
    pub fn observed(&self, kind: ObserverKind) -> Vec<Element> {
        match kind {
            ObserverKind::Sections => self.sections.iter().map(|(_, el)| el.clone()).collect(),
            ObserverKind::Reveal => self.reveal.clone(),
            ObserverKind::Counters => self.counters.clone(),
            ObserverKind::SkillBars => self.skill_bars.clone(),
        }
    }

    /// Map an observed element back to its target.
    pub fn observed_target(&self, kind: ObserverKind, element: &Element) -> Option<Target> {
        let index = self.observed(kind).iter().position(|el| el == element)?;
        Some(match kind {
            ObserverKind::Sections => Target::Section(index),
            ObserverKind::Reveal => Target::Reveal(index),
            ObserverKind::Counters => Target::Counter(index),
            ObserverKind::SkillBars => Target::SkillBar(index),
        })
    }

    /// In-page link elements with their targets.
    pub fn links(&self) -> Vec<(Element, Target)> {
        let nav = self
            .nav_links
            .iter()
            .enumerate()
            .map(|(i, el)| (el.clone(), Target::NavLink(i)));
        let anchors = self
            .anchors
            .iter()
            .enumerate()
            .map(|(i, el)| (el.clone(), Target::Anchor(i)));
        nav.chain(anchors).collect()
    }

    pub fn click_feedback(&self) -> Vec<(Element, Target)> {
        self.interactive
            .iter()
            .enumerate()
            .map(|(i, el)| (el.clone(), Target::Interactive(i)))
            .collect()
    }

    /// Elements with hover behavior. One element may appear under several
    /// targets, e.g. a project card is also a cursor hover target.
    pub fn hover_targets(&self) -> Vec<(Element, Target)> {
        let indexed = |list: &[Element], make: fn(usize) -> Target| {
            list.iter()
                .enumerate()
                .map(|(i, el)| (el.clone(), make(i)))
                .collect::<Vec<_>>()
        };
        let mut out = indexed(&self.hoverables, Target::Hoverable);
        out.extend(indexed(&self.project_cards, Target::ProjectCard));
        out.extend(indexed(&self.certificate_cards, Target::CertificateCard));
        out.extend(indexed(&self.skill_cards, Target::SkillCard));
        out
    }

    pub fn fields(&self) -> Vec<(FormField, Element)> {
        FormField::ALL
            .into_iter()
            .filter_map(|f| self.fields.get(&f).map(|el| (f, el.clone())))
            .collect()
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    fn forget(&mut self, target: Target) {
        if target == Target::LoadingScreen {
            self.loading_screen = None;
        }
        self.spawned.remove(&target);
    }

    /// Apply a command that only touches elements.
    pub fn apply(&mut self, cmd: &DomCommand) -> Result<(), JsValue> {
        match cmd {
            DomCommand::Spawn {
                target,
                parent,
                tag,
                class,
                css,
                html,
            } => {
                let Some(parent) = self.resolve(*parent) else {
                    tracing::debug!(?parent, "spawn parent missing");
                    return Ok(());
                };
                let el = self.document.create_element(tag)?;
                el.set_class_name(class);
                if let Some(css) = css {
                    as_html(&el)?.style().set_css_text(css);
                }
                if let Some(html) = html {
                    el.set_inner_html(html);
                }
                parent.append_child(&el)?;
                self.spawned.insert(*target, el);
                return Ok(());
            }
            DomCommand::InjectStyles { id, css } => {
                if self.document.get_element_by_id(id).is_some() {
                    return Ok(());
                }
                let style = self.document.create_element("style")?;
                style.set_id(id);
                style.set_text_content(Some(&**css));
                let head = self
                    .document
                    .head()
                    .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
                head.append_child(&style)?;
                self.spawned.insert(Target::DynamicStyles, style);
                return Ok(());
            }
            DomCommand::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
                return Ok(());
            }
            _ => {}
        }

        let Some(target) = cmd.target() else {
            return Ok(());
        };
        let Some(el) = self.resolve(target) else {
            tracing::debug!(?target, "no element for target");
            return Ok(());
        };
        match cmd {
            DomCommand::AddClass { class, .. } => el.class_list().add_1(class)?,
            DomCommand::RemoveClass { class, .. } => el.class_list().remove_1(class)?,
            DomCommand::SetStyle {
                property, value, ..
            } => {
                let style = as_html(&el)?.style();
                if value.is_empty() {
                    style.remove_property(property)?;
                } else {
                    style.set_property(property, value)?;
                }
            }
            DomCommand::SetAttribute { name, value, .. } => el.set_attribute(name, value)?,
            DomCommand::SetClassName { class_name, .. } => el.set_class_name(class_name),
            DomCommand::SetText { text, .. } => el.set_text_content(Some(&**text)),
            DomCommand::AppendText { text, .. } => {
                let mut current = el.text_content().unwrap_or_default();
                current.push_str(text);
                el.set_text_content(Some(current.as_str()));
            }
            DomCommand::SetInnerHtml { html, .. } => el.set_inner_html(html),
            DomCommand::SetDisabled { disabled, .. } => {
                if *disabled {
                    el.set_attribute("disabled", "")?;
                } else {
                    el.remove_attribute("disabled")?;
                }
            }
            DomCommand::Remove { target } => {
                el.remove();
                self.forget(*target);
            }
            _ => {}
        }
        Ok(())
    }
}
