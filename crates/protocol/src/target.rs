use serde::{Deserialize, Serialize};

/// A logical handle on a page element.
///
/// The core never sees DOM nodes. Hosts resolve each `Target` to the element
/// they found while scanning the page; indexed variants refer to the n-th
/// match of the corresponding selector in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum Target {
    /// `document.documentElement`
    Root,
    Body,
    /// `#loading-screen`
    LoadingScreen,
    LoadingParticle(usize),
    /// `.header`
    Header,
    /// `.nav-menu`
    NavMenu,
    /// `.mobile-menu-toggle`
    MenuToggle,
    /// `.theme-toggle`
    ThemeToggle,
    /// `.theme-toggle i`
    ThemeIcon,
    /// `section[id]`
    Section(usize),
    /// `.nav-link`
    NavLink(usize),
    /// In-page anchors that are not nav links (`a[href^="#"]`).
    Anchor(usize),
    /// `.btn, .social-link, .project-link` that are not in-page anchors.
    Interactive(usize),
    /// `.hero-background`
    HeroBackground,
    /// `.particle`
    Particle(usize),
    /// `#typed-text`
    TypedText,
    /// `.cursor` next to the typed text.
    TypingCursor,
    /// `.stat-number`
    Counter(usize),
    /// `.progress-bar`
    SkillBar(usize),
    /// The `.skill-card` enclosing progress bar `n`.
    SkillBarCard(usize),
    /// `.skill-card`
    SkillCard(usize),
    /// The `.progress-bar` inside skill card `n`.
    SkillCardBar(usize),
    /// Elements receiving the scroll reveal treatment.
    Reveal(usize),
    /// `.project-card`
    ProjectCard(usize),
    /// `.certificate-card`
    CertificateCard(usize),
    /// `a, button, .skill-card, .project-card` (custom cursor hover set).
    Hoverable(usize),
    /// `#contactForm`
    ContactForm,
    /// `#contactForm button[type="submit"]`
    SubmitButton,
    Field(FormField),
    /// `#<field>Error`
    FieldError(FormField),
    /// Overlay created after a successful submission.
    SuccessMessage,
    /// Custom cursor ring.
    Cursor,
    /// Custom cursor dot.
    CursorDot,
    /// Ripple span, numbered by the core.
    Ripple(u64),
    /// `<style id="portfolio-dynamic-styles">`
    DynamicStyles,
}

/// The four contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// The input's element id.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// The id of the element that shows this field's validation message.
    pub fn error_id(self) -> &'static str {
        match self {
            FormField::Name => "nameError",
            FormField::Email => "emailError",
            FormField::Subject => "subjectError",
            FormField::Message => "messageError",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// The intersection observers the page runs. Each observes every element of
/// one selector family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObserverKind {
    /// `section[id]` for the scroll spy.
    Sections,
    /// Scroll reveal elements.
    Reveal,
    /// `.stat-number`
    Counters,
    /// `.progress-bar`
    SkillBars,
}

/// Which entrance animation a reveal element gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealKind {
    SkillCard,
    ProjectCard,
    CertificateCard,
    #[default]
    Plain,
}

impl RevealKind {
    /// Classify an element by its class list. Skill cards win over project
    /// cards, which win over certificate cards, whatever the class order.
    pub fn from_classes<'a>(classes: impl Iterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.collect();
        [
            ("skill-card", RevealKind::SkillCard),
            ("project-card", RevealKind::ProjectCard),
            ("certificate-card", RevealKind::CertificateCard),
        ]
        .into_iter()
        .find(|(class, _)| classes.contains(class))
        .map(|(_, kind)| kind)
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_ids() {
        assert_eq!(FormField::Email.error_id(), "emailError");
        assert_eq!(FormField::from_id("subject"), Some(FormField::Subject));
        assert_eq!(FormField::from_id("phone"), None);
    }

    #[test]
    fn reveal_kind_from_classes() {
        let kind = RevealKind::from_classes(["fade-in", "project-card"].into_iter());
        assert_eq!(kind, RevealKind::ProjectCard);
        assert_eq!(
            RevealKind::from_classes(["timeline-item"].into_iter()),
            RevealKind::Plain
        );
    }

    #[test]
    fn reveal_kind_priority_ignores_class_order() {
        let kind = RevealKind::from_classes(["certificate-card", "project-card"].into_iter());
        assert_eq!(kind, RevealKind::ProjectCard);
        let kind = RevealKind::from_classes(["project-card", "skill-card"].into_iter());
        assert_eq!(kind, RevealKind::SkillCard);
    }

    #[test]
    fn target_json_shape() {
        let json = serde_json::to_string(&Target::NavLink(2)).unwrap_or_default();
        assert_eq!(json, r#"{"kind":"navLink","index":2}"#);
        let json = serde_json::to_string(&Target::Header).unwrap_or_default();
        assert_eq!(json, r#"{"kind":"header"}"#);
    }
}
