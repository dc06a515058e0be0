use folio_protocol::{DomCommand, IntersectionEntry, ObserverKind, RevealKind, Target};

use crate::config::AnimationConfig;
use crate::outbox::Outbox;

fn entrance(kind: RevealKind) -> Option<&'static str> {
    match kind {
        RevealKind::SkillCard => Some("slideInUp 0.8s ease-out forwards"),
        RevealKind::ProjectCard => Some("slideInScale 0.8s ease-out forwards"),
        RevealKind::CertificateCard => Some("rotateIn 0.8s ease-out forwards"),
        RevealKind::Plain => None,
    }
}

/// Fade-in on scroll for cards, timeline items and stats.
#[derive(Debug, Clone)]
pub struct Reveal {
    kinds: Vec<RevealKind>,
    revealed: Vec<bool>,
    threshold: f64,
    bottom_inset: f64,
    stagger_s: f64,
}

impl Reveal {
    pub fn new(kinds: Vec<RevealKind>, config: &AnimationConfig) -> Self {
        let revealed = vec![false; kinds.len()];
        Self {
            kinds,
            revealed,
            threshold: config.reveal_threshold,
            bottom_inset: config.reveal_bottom_inset,
            stagger_s: config.reveal_stagger_s,
        }
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px {} 0px", super::px(-self.bottom_inset))
    }

    pub fn start(&self, out: &mut Outbox<'_>) {
        if self.kinds.is_empty() {
            return;
        }
        for i in 0..self.kinds.len() {
            let target = Target::Reveal(i);
            out.push(DomCommand::add_class(target, "fade-in"));
            out.push(DomCommand::style(
                target,
                "transition-delay",
                super::secs(i as f64 * self.stagger_s),
            ));
        }
        out.push(DomCommand::Observe {
            observer: ObserverKind::Reveal,
            threshold: self.threshold,
            root_margin: self.root_margin().into(),
        });
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], out: &mut Outbox<'_>) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Target::Reveal(index) = entry.target else {
                continue;
            };
            let Some(revealed) = self.revealed.get_mut(index) else {
                tracing::debug!(index, "intersection for unknown reveal element");
                continue;
            };
            if std::mem::replace(revealed, true) {
                continue;
            }
            out.push(DomCommand::add_class(entry.target, "visible"));
            if let Some(animation) = entrance(self.kinds[index]) {
                out.push(DomCommand::style(entry.target, "animation", animation));
            }
        }
    }
}
