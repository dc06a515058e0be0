use folio_protocol::{FormField, RevealKind, SectionId};
use serde::{Deserialize, Serialize};

/// What the host found when it scanned the page.
///
/// Indexed collections line up with the indexed `Target` variants: the n-th
/// entry of `nav_links` is `Target::NavLink(n)`, and so on. Every feature
/// whose elements are missing stays idle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageLayout {
    pub has_loading_screen: bool,
    pub has_header: bool,
    pub has_nav_menu: bool,
    pub has_menu_toggle: bool,
    pub has_theme_toggle: bool,
    /// `section[id]` in document order.
    pub sections: Vec<SectionId>,
    /// Raw `href` of every `.nav-link`.
    pub nav_links: Vec<String>,
    pub has_hero_background: bool,
    pub particle_count: usize,
    pub has_typed_text: bool,
    /// Parsed `data-target` of each `.stat-number`.
    pub counter_targets: Vec<Option<i64>>,
    /// Raw `data-width` of each `.progress-bar`.
    pub skill_widths: Vec<String>,
    pub reveal_kinds: Vec<RevealKind>,
    pub has_contact_form: bool,
    pub form_fields: Vec<FormField>,
    pub has_submit_button: bool,
    /// Markup of the submit button as found, restored after a submission.
    pub submit_button_html: String,
}

impl PageLayout {
    /// Whether the mobile menu can be driven at all.
    pub fn has_mobile_menu(&self) -> bool {
        self.has_menu_toggle && self.has_nav_menu
    }

    /// The stock portfolio page: six sections with a nav link each, plus one
    /// of every decorated element family.
    pub fn portfolio() -> Self {
        let sections: Vec<SectionId> = [
            "home",
            "about",
            "skills",
            "projects",
            "certificates",
            "contact",
        ]
        .into_iter()
        .map(SectionId::from)
        .collect();
        let nav_links = sections.iter().map(SectionId::to_fragment).collect();

        Self {
            has_loading_screen: true,
            has_header: true,
            has_nav_menu: true,
            has_menu_toggle: true,
            has_theme_toggle: true,
            sections,
            nav_links,
            has_hero_background: true,
            particle_count: 3,
            has_typed_text: true,
            counter_targets: vec![Some(15), Some(8), Some(3)],
            skill_widths: vec!["90".into(), "85".into(), "75".into()],
            reveal_kinds: vec![
                RevealKind::SkillCard,
                RevealKind::SkillCard,
                RevealKind::SkillCard,
                RevealKind::ProjectCard,
                RevealKind::ProjectCard,
                RevealKind::CertificateCard,
                RevealKind::Plain,
            ],
            has_contact_form: true,
            form_fields: FormField::ALL.to_vec(),
            has_submit_button: true,
            submit_button_html: r#"<i class="fas fa-paper-plane"></i> Send Message"#.into(),
        }
    }
}
