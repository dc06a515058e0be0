use folio_protocol::{DomCommand, SectionId, Target};

const ACTIVE: &str = "active";

/// Keeps the `active` class on the nav link(s) pointing at the active
/// section.
#[derive(Debug, Clone)]
pub struct NavHighlighter {
    /// Section each `.nav-link` points at; `None` for hrefs that are not
    /// in-page fragments.
    links: Vec<Option<SectionId>>,
    /// Links currently marked active. `None` until the first application,
    /// which clears every link regardless of markup.
    marked: Option<Vec<usize>>,
}

impl NavHighlighter {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            links: hrefs
                .into_iter()
                .map(|h| SectionId::from_fragment(h.as_ref()))
                .collect(),
            marked: None,
        }
    }

    /// Link indices whose target is `id`.
    pub fn links_for(&self, id: &SectionId) -> Vec<usize> {
        self.links
            .iter()
            .enumerate()
            .filter(|&(_, target)| target.as_ref() == Some(id))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn marked(&self) -> &[usize] {
        self.marked.as_deref().unwrap_or(&[])
    }

    /// Mark the links for `active` and clear the rest. Applying the same id
    /// twice emits nothing the second time.
    pub fn apply(&mut self, active: Option<&SectionId>, out: &mut Vec<DomCommand>) {
        let next = active.map(|id| self.links_for(id)).unwrap_or_default();
        match &self.marked {
            Some(current) if *current == next => {}
            Some(current) => {
                for &i in current.iter().filter(|i| !next.contains(i)) {
                    out.push(DomCommand::remove_class(Target::NavLink(i), ACTIVE));
                }
                for &i in next.iter().filter(|i| !current.contains(i)) {
                    out.push(DomCommand::add_class(Target::NavLink(i), ACTIVE));
                }
            }
            None => {
                for i in (0..self.links.len()).filter(|i| !next.contains(i)) {
                    out.push(DomCommand::remove_class(Target::NavLink(i), ACTIVE));
                }
                for &i in &next {
                    out.push(DomCommand::add_class(Target::NavLink(i), ACTIVE));
                }
            }
        }
        self.marked = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> NavHighlighter {
        NavHighlighter::new(["#about", "#skills", "#contact", "/resume.pdf"])
    }

    #[test]
    fn first_application_clears_every_other_link() {
        let mut h = highlighter();
        let mut out = Vec::new();
        h.apply(Some(&SectionId::from("skills")), &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.contains(&DomCommand::add_class(Target::NavLink(1), "active")));
        assert!(out.contains(&DomCommand::remove_class(Target::NavLink(3), "active")));
        assert_eq!(h.marked(), &[1]);
    }

    #[test]
    fn reapplying_same_id_is_silent() {
        let mut h = highlighter();
        let mut out = Vec::new();
        let id = SectionId::from("about");
        h.apply(Some(&id), &mut out);
        out.clear();
        h.apply(Some(&id), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn switching_moves_the_mark() {
        let mut h = highlighter();
        let mut out = Vec::new();
        h.apply(Some(&SectionId::from("about")), &mut out);
        out.clear();
        h.apply(Some(&SectionId::from("contact")), &mut out);
        assert_eq!(
            out,
            vec![
                DomCommand::remove_class(Target::NavLink(0), "active"),
                DomCommand::add_class(Target::NavLink(2), "active"),
            ]
        );
        assert_eq!(h.marked(), &[2]);
    }

    #[test]
    fn unknown_section_clears_all() {
        let mut h = highlighter();
        let mut out = Vec::new();
        h.apply(Some(&SectionId::from("about")), &mut out);
        out.clear();
        h.apply(Some(&SectionId::from("blog")), &mut out);
        assert_eq!(
            out,
            vec![DomCommand::remove_class(Target::NavLink(0), "active")]
        );
        assert!(h.marked().is_empty());
    }
}
